use crate::fragment::AuthFragment;
use crate::spec::SecurityScheme;

/// Placeholder credential flag shared with the digest strategy.
pub(crate) const CREDENTIALS_FLAG: &str = "--user username:password";

/// Render a Basic Authentication scheme: a single fragment carrying the
/// placeholder `--user` flag. Scheme content beyond family recognition is
/// irrelevant to the output.
pub fn fragments(_scheme: &SecurityScheme) -> Vec<AuthFragment> {
    vec![AuthFragment::with_options(vec![CREDENTIALS_FLAG.to_string()])]
}
