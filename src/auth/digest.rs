use super::basic;
use crate::fragment::AuthFragment;
use crate::spec::SecurityScheme;

/// Render a Digest Authentication scheme: the same placeholder credentials as
/// Basic, plus the `--digest` mode flag. The credential flag comes first.
pub fn fragments(_scheme: &SecurityScheme) -> Vec<AuthFragment> {
    vec![AuthFragment::with_options(vec![
        basic::CREDENTIALS_FLAG.to_string(),
        "--digest".to_string(),
    ])]
}
