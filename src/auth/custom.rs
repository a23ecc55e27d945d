use crate::fragment::{header_flag, AuthFragment};
use crate::spec::SecurityScheme;

/// Render an `x-` prefixed custom scheme: one fragment of header flags, one
/// per declared header entry.
///
/// Custom schemes are header-only in this model; declared query parameters
/// are intentionally not emitted.
pub fn fragments(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    let headers = scheme
        .headers()
        .iter()
        .map(|h| header_flag(&h.name, &h.param_type))
        .collect();
    vec![AuthFragment::with_headers(headers)]
}
