use serde::Serialize;

/// A partial, composable unit of curl command-line text contributed by one
/// security scheme's strategy.
///
/// All three sequences are always present and default to empty; downstream
/// merge logic never has to branch on field presence. Serialization skips
/// empty sequences so rendered JSON keeps the sparse shape documentation
/// templates expect.
///
/// Contents are literal text: `headers` holds complete `-H "..."` flags,
/// `params` holds unencoded `key=value` pairs (URL-encoding and `&`-joining
/// are the final command assembler's job), and `options` holds standalone
/// flags such as `--user username:password`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthFragment {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl AuthFragment {
    /// A fragment carrying only header flags.
    pub fn with_headers(headers: Vec<String>) -> Self {
        Self {
            headers,
            ..Self::default()
        }
    }

    /// A fragment carrying only query parameters.
    pub fn with_params(params: Vec<String>) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// A fragment carrying only command-line options.
    pub fn with_options(options: Vec<String>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// True when the fragment contributes nothing to the command line.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.params.is_empty() && self.options.is_empty()
    }
}

/// Flatten per-scheme fragment lists into a single ordered aggregate,
/// preserving scheme declaration order and each list's internal order.
pub fn flatten(per_scheme: Vec<Vec<AuthFragment>>) -> Vec<AuthFragment> {
    per_scheme.into_iter().flatten().collect()
}

/// Render a curl header flag: `-H "<name>: <value>"`.
pub fn header_flag(name: &str, value: &str) -> String {
    format!("-H \"{name}: {value}\"")
}

/// Render a query parameter as `<name>=<value>`, unquoted and unencoded.
pub fn query_param(name: &str, value: &str) -> String {
    format!("{name}={value}")
}
