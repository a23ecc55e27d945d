use crate::fragment::{query_param, AuthFragment};
use crate::spec::SecurityScheme;

/// Protection-space label baked into every generated OAuth 1.0 header.
const REALM: &str = "API";

/// Signature method used when the scheme declares none.
const DEFAULT_SIGNATURE_METHOD: &str = "RSA-SHA1";

/// The seven OAuth 1.0 protocol parameters in wire order, with placeholder
/// values a reader is expected to substitute.
fn protocol_params(signature_method: &str) -> [(&'static str, &str); 7] {
    [
        ("oauth_consumer_key", "consumer_key"),
        ("oauth_token", "token"),
        ("oauth_signature_method", signature_method),
        ("oauth_signature", "computed_signature"),
        ("oauth_timestamp", "timestamp"),
        ("oauth_nonce", "nonce"),
        ("oauth_version", "1.0"),
    ]
}

/// Render an OAuth 1.0 scheme as exactly two fragments: the expanded
/// `Authorization` header, then the same parameters as query strings.
///
/// The header value is single-quoted with each `key="value"` pair on a
/// backslash-continued, tab-indented line. Documentation renderers diff
/// against this output byte-for-byte, so the layout is a compatibility
/// contract, not a formatting preference.
pub fn fragments(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    let signature_method = scheme
        .settings
        .as_ref()
        .and_then(|s| s.signatures.first())
        .map(String::as_str)
        .unwrap_or(DEFAULT_SIGNATURE_METHOD);

    let pairs = protocol_params(signature_method);

    let mut header_value = format!("Authorization: OAuth realm=\"{REALM}\"");
    for (key, value) in &pairs {
        header_value.push_str(&format!(",\\\n\t{key}=\"{value}\""));
    }
    let header = format!("-H '{header_value}'");

    let params = pairs
        .iter()
        .map(|(key, value)| query_param(key, value))
        .collect();

    vec![
        AuthFragment::with_headers(vec![header]),
        AuthFragment::with_params(params),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_signature_method_wins() {
        let scheme: SecurityScheme = serde_json::from_value(serde_json::json!({
            "name": "oauth1",
            "type": "OAuth 1.0",
            "settings": { "signatures": ["HMAC-SHA1", "RSA-SHA1"] }
        }))
        .unwrap();

        let result = fragments(&scheme);
        assert_eq!(result.len(), 2);
        assert!(result[0].headers[0].contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(result[1]
            .params
            .contains(&"oauth_signature_method=HMAC-SHA1".to_string()));
    }

    #[test]
    fn test_signature_method_defaults_to_rsa_sha1() {
        let scheme = SecurityScheme::default();
        let result = fragments(&scheme);
        assert!(result[0].headers[0].contains("oauth_signature_method=\"RSA-SHA1\""));
        assert!(result[1]
            .params
            .contains(&"oauth_signature_method=RSA-SHA1".to_string()));
    }

    #[test]
    fn test_empty_signature_list_falls_back_to_default() {
        let scheme: SecurityScheme = serde_json::from_value(serde_json::json!({
            "settings": { "signatures": [] }
        }))
        .unwrap();
        let result = fragments(&scheme);
        assert!(result[0].headers[0].contains("RSA-SHA1"));
    }

    #[test]
    fn test_header_layout_is_byte_exact() {
        let result = fragments(&SecurityScheme::default());
        assert_eq!(
            result[0].headers[0],
            "-H 'Authorization: OAuth realm=\"API\",\\\n\
             \toauth_consumer_key=\"consumer_key\",\\\n\
             \toauth_token=\"token\",\\\n\
             \toauth_signature_method=\"RSA-SHA1\",\\\n\
             \toauth_signature=\"computed_signature\",\\\n\
             \toauth_timestamp=\"timestamp\",\\\n\
             \toauth_nonce=\"nonce\",\\\n\
             \toauth_version=\"1.0\"'"
        );
    }

    #[test]
    fn test_params_keep_protocol_order() {
        let result = fragments(&SecurityScheme::default());
        assert_eq!(
            result[1].params,
            vec![
                "oauth_consumer_key=consumer_key",
                "oauth_token=token",
                "oauth_signature_method=RSA-SHA1",
                "oauth_signature=computed_signature",
                "oauth_timestamp=timestamp",
                "oauth_nonce=nonce",
                "oauth_version=1.0",
            ]
        );
    }
}
