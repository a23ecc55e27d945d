use serde::{Deserialize, Serialize};

/// One declared header or query-parameter entry from a security scheme's
/// `describedBy` block.
///
/// The `type` field carries the placeholder literal (e.g. `"string"`) that
/// generated examples substitute for the real credential value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedParameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: String,
}

/// Request-shape hints declared by a security scheme: which headers and query
/// parameters a caller must supply.
///
/// Absent sequences deserialize to empty ones, so a scheme without
/// `describedBy` and a scheme with an empty `describedBy` behave identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribedBy {
    #[serde(default)]
    pub headers: Vec<NamedParameter>,
    #[serde(rename = "queryParameters", default)]
    pub query_parameters: Vec<NamedParameter>,
}

/// Scheme-level settings. Only OAuth 1.0 carries any today: the ordered list
/// of supported signature-method names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub signatures: Vec<String>,
}

/// A declarative description of one authentication mechanism for an API
/// method, mirroring the security-scheme structure of RAML-style API
/// description formats.
///
/// How the structure was parsed or validated is the caller's concern; this
/// crate assumes a syntactically well-formed scheme and degrades gracefully
/// when optional parts are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub scheme_type: Option<String>,
    #[serde(rename = "describedBy", default)]
    pub described_by: Option<DescribedBy>,
    #[serde(default)]
    pub settings: Option<Settings>,
}

impl SecurityScheme {
    /// Declared header entries, empty when no `describedBy` is present.
    pub fn headers(&self) -> &[NamedParameter] {
        self.described_by
            .as_ref()
            .map(|d| d.headers.as_slice())
            .unwrap_or_default()
    }

    /// Declared query-parameter entries, empty when no `describedBy` is present.
    pub fn query_parameters(&self) -> &[NamedParameter] {
        self.described_by
            .as_ref()
            .map(|d| d.query_parameters.as_slice())
            .unwrap_or_default()
    }
}

/// The method-level slice of an API description that the dispatcher consumes:
/// zero or more security schemes securing the method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    #[serde(rename = "securedBy", default)]
    pub secured_by: Vec<SecurityScheme>,
}
