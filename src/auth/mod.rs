//! # Auth Fragment Strategies
//!
//! Translates security-scheme descriptions into curl command-line fragments
//! for generated documentation examples.
//!
//! ## Overview
//!
//! Each supported auth family has one pure strategy function that maps a
//! [`SecurityScheme`] to a sequence of [`AuthFragment`]s:
//!
//! - **OAuth 1.0** — a fully expanded `Authorization: OAuth ...` header plus
//!   the equivalent query parameters, with placeholder protocol values
//! - **OAuth 2.0** — `Bearer`-prefixed header flags and/or token query
//!   parameters, driven by the scheme's `describedBy` block
//! - **Basic / Digest** — fixed `--user username:password` credential flags
//!   (`--digest` added for digest mode)
//! - **Pass Through** — declared headers and query parameters forwarded
//!   verbatim in a single fragment
//! - **Custom (`x-` prefixed)** — declared headers only
//! - **Null auth** — a single empty fragment, the aggregation identity
//!
//! ## Dispatch
//!
//! Scheme `name`/`type` strings are classified once into the closed
//! [`AuthKind`] variant set, then matched exhaustively. Unrecognized types
//! degrade to [`AuthKind::None`] rather than erroring: documentation
//! rendering should never fail because a description uses an auth family this
//! crate does not know. The degradation is logged at debug level, and
//! `AuthKind` is public so callers that need to distinguish "unsecured" from
//! "unrecognized" can classify schemes themselves before dispatching.
//!
//! ## Example
//!
//! ```rust
//! use curlgen::auth;
//! use curlgen::spec::Method;
//!
//! let method: Method = serde_json::from_value(serde_json::json!({
//!     "securedBy": [{ "name": "basicAuth", "type": "Basic Authentication" }]
//! })).unwrap();
//!
//! let fragments = auth::for_method(&method);
//! assert_eq!(fragments[0].options, vec!["--user username:password"]);
//! ```
//!
//! Every function here is a pure, total function over its arguments: no I/O,
//! no shared state, no error paths. Concurrent callers are safe by
//! construction.

use crate::fragment::{flatten, AuthFragment};
use crate::spec::{Method, SecurityScheme};

/// Closed set of auth families this crate can render.
///
/// Determined once at the dispatch boundary from a scheme's `name`/`type`
/// strings, then matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    OAuth1,
    OAuth2,
    Basic,
    Digest,
    PassThrough,
    /// `x-` prefixed custom scheme; header-only by convention.
    Custom,
    /// No authentication, or an unrecognized scheme type.
    None,
}

impl AuthKind {
    /// Classify a scheme by inspecting its `name` and `type`.
    ///
    /// Canonical scheme names (`oauth1`, `oauth2`) take priority over the
    /// `type` string; `type` matching is case-sensitive and substring-based
    /// so qualified values like `"OAuth 2.0 Bearer"` still classify.
    pub fn classify(scheme: &SecurityScheme) -> Self {
        match scheme.name.as_deref() {
            Some("oauth1") => return Self::OAuth1,
            Some("oauth2") => return Self::OAuth2,
            _ => {}
        }

        let Some(scheme_type) = scheme.scheme_type.as_deref() else {
            return Self::None;
        };

        if scheme_type.contains("OAuth 1.0") {
            Self::OAuth1
        } else if scheme_type.contains("OAuth 2.0") {
            Self::OAuth2
        } else if scheme_type.contains("Basic Authentication") {
            Self::Basic
        } else if scheme_type.contains("Digest Authentication") {
            Self::Digest
        } else if scheme_type.contains("Pass Through") {
            Self::PassThrough
        } else if scheme_type.starts_with("x-") {
            Self::Custom
        } else {
            tracing::debug!(
                scheme_type,
                "unrecognized security scheme type, falling back to null auth"
            );
            Self::None
        }
    }
}

/// Produce the auth fragments for one classified scheme.
pub fn for_scheme(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    match AuthKind::classify(scheme) {
        AuthKind::OAuth1 => oauth1::fragments(scheme),
        AuthKind::OAuth2 => oauth2::fragments(scheme),
        AuthKind::Basic => basic::fragments(scheme),
        AuthKind::Digest => digest::fragments(scheme),
        AuthKind::PassThrough => pass_through::fragments(scheme),
        AuthKind::Custom => custom::fragments(scheme),
        AuthKind::None => null::fragments(),
    }
}

/// Produce the auth fragments for every scheme securing a method.
///
/// Fragments appear in scheme declaration order, each strategy's internal
/// order preserved. Always returns at least one fragment: an unsecured
/// method, an unrecognized scheme, or a scheme contributing nothing (an
/// OAuth 2.0 scheme without `describedBy`) all yield the null-auth fragment,
/// so callers can iterate without special cases.
pub fn for_method(method: &Method) -> Vec<AuthFragment> {
    let fragments = flatten(method.secured_by.iter().map(for_scheme).collect());
    if fragments.is_empty() {
        return null::fragments();
    }
    fragments
}

pub mod basic;
pub mod custom;
pub mod digest;
pub mod null;
pub mod oauth1;
pub mod oauth2;
pub mod pass_through;
