//! Sources of random aliases and record ids.

use crate::utils::alias::{generate_alias, generate_id};

/// Supplies candidate tokens to the registry.
///
/// Candidates are not required to be unique; the registry checks and retries.
#[cfg_attr(test, mockall::automock)]
pub trait TokenSource: Send + Sync {
    /// A candidate alias for a link without a custom alias.
    fn next_alias(&self) -> String;

    /// A candidate record id.
    fn next_id(&self) -> String;
}

/// Random base-36 tokens from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokenSource;

impl TokenSource for RandomTokenSource {
    fn next_alias(&self) -> String {
        generate_alias()
    }

    fn next_id(&self) -> String {
        generate_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::alias::{GENERATED_ALIAS_LENGTH, ID_LENGTH};

    #[test]
    fn test_random_tokens_have_expected_lengths() {
        let tokens = RandomTokenSource;
        assert_eq!(tokens.next_alias().len(), GENERATED_ALIAS_LENGTH);
        assert_eq!(tokens.next_id().len(), ID_LENGTH);
    }
}
