//! # curlgen
//!
//! **curlgen** synthesizes the curl command-line fragments that demonstrate an
//! API method's authentication requirements, driven entirely by a
//! machine-readable security-scheme description.
//!
//! ## Overview
//!
//! API-documentation tools that render "try it out" examples need the exact
//! extra headers, query parameters, and flags a request must carry to satisfy
//! a method's declared security scheme. Given a scheme description (OAuth 1.0,
//! OAuth 2.0, Basic, Digest, Pass Through, a custom `x-` header scheme, or no
//! auth), curlgen produces those fragments with placeholder credentials
//! (`username`, `password`, `token`, `computed_signature`), ready for a
//! downstream assembler to splice into a full command line.
//!
//! curlgen never executes commands, never performs real authentication, and
//! never validates schemes against a schema: it is a best-effort, total
//! mapping from well-formed scheme descriptions to literal text.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - **[`spec`]** - security-scheme and method model types, plus YAML/JSON
//!   loading helpers
//! - **[`fragment`]** - the [`AuthFragment`] output type and the shared
//!   literal-format helpers (header flags, query parameters)
//! - **[`auth`]** - per-family strategy functions and the [`auth::for_method`]
//!   dispatcher that classifies schemes into [`AuthKind`] variants and
//!   aggregates their fragments
//!
//! Data flows one direction: scheme description → strategy → fragment list →
//! aggregation → caller. Everything is synchronous, pure, and free of shared
//! state.
//!
//! ## Example
//!
//! ```rust
//! use curlgen::{auth, spec::Method};
//!
//! let method: Method = serde_json::from_value(serde_json::json!({
//!     "securedBy": [{
//!         "type": "x-custom",
//!         "describedBy": { "headers": [{ "name": "X-API-Key", "type": "string" }] }
//!     }]
//! })).unwrap();
//!
//! let fragments = auth::for_method(&method);
//! assert_eq!(fragments[0].headers, vec![r#"-H "X-API-Key: string""#]);
//! ```

pub mod auth;
pub mod fragment;
pub mod spec;

pub use auth::{for_method, for_scheme, AuthKind};
pub use fragment::AuthFragment;
pub use spec::{load_method, Method, SecurityScheme};
