use crate::fragment::{header_flag, query_param, AuthFragment};
use crate::spec::SecurityScheme;

/// Render an OAuth 2.0 scheme from its `describedBy` block.
///
/// Declared headers collapse into one fragment of `Bearer`-prefixed header
/// flags; declared query parameters collapse into a second fragment. The two
/// stay separate so renderers can present them as alternative usages. OAuth
/// 2.0 has no inherent credential flag of its own, so a scheme describing
/// neither yields no fragments at all.
pub fn fragments(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    let mut result = Vec::new();

    let headers: Vec<String> = scheme
        .headers()
        .iter()
        .map(|h| header_flag(&h.name, &format!("Bearer {}", h.param_type)))
        .collect();
    if !headers.is_empty() {
        result.push(AuthFragment::with_headers(headers));
    }

    let params: Vec<String> = scheme
        .query_parameters()
        .iter()
        .map(|p| query_param(&p.name, &p.param_type))
        .collect();
    if !params.is_empty() {
        result.push(AuthFragment::with_params(params));
    }

    result
}
