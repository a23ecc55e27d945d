use crate::fragment::{header_flag, query_param, AuthFragment};
use crate::spec::SecurityScheme;

/// Render a Pass Through scheme: every declared header and query parameter,
/// forwarded verbatim with its placeholder type as the value.
///
/// Unlike OAuth 2.0, headers and params belong to the same usage and so share
/// a single fragment. A scheme declaring neither still yields one (empty)
/// fragment, never zero.
pub fn fragments(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    let fragment = AuthFragment {
        headers: scheme
            .headers()
            .iter()
            .map(|h| header_flag(&h.name, &h.param_type))
            .collect(),
        params: scheme
            .query_parameters()
            .iter()
            .map(|p| query_param(&p.name, &p.param_type))
            .collect(),
        options: Vec::new(),
    };
    vec![fragment]
}
