use crate::fragment::AuthFragment;

/// Render the absence of authentication: a single empty fragment.
///
/// This is the identity element for fragment aggregation, and also the
/// fallback for unrecognized scheme types so that example generation never
/// fails.
pub fn fragments() -> Vec<AuthFragment> {
    vec![AuthFragment::default()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_empty_fragment() {
        let result = fragments();
        assert_eq!(result.len(), 1);
        assert!(result[0].is_empty());
    }
}
