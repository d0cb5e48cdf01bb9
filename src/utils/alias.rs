//! Alias and identifier generation and validation.
//!
//! Generated aliases and record ids are lowercase base-36 tokens. Custom
//! aliases accept a wider character class chosen by the user.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Length of a system-generated alias.
pub const GENERATED_ALIAS_LENGTH: usize = 6;

/// Length of a record id.
pub const ID_LENGTH: usize = 12;

/// Longest custom alias accepted.
pub const ALIAS_MAX_LENGTH: usize = 50;

/// Aliases that would shadow fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["api", "health"];

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Character class allowed in custom aliases.
pub static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is valid"));

/// Reasons a custom alias is rejected before any uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasValidationError {
    #[error("Alias must be at most {ALIAS_MAX_LENGTH} characters, got {0}")]
    TooLong(usize),

    #[error("Alias can only contain letters, digits, hyphens and underscores")]
    InvalidCharacters,

    #[error("Alias '{0}' is reserved")]
    Reserved(String),
}

fn random_base36(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Draws a random 6-character base-36 alias.
///
/// Uniqueness is not checked here; the registry retries on collision.
pub fn generate_alias() -> String {
    random_base36(GENERATED_ALIAS_LENGTH)
}

/// Draws a random record id.
pub fn generate_id() -> String {
    random_base36(ID_LENGTH)
}

/// Returns true if `alias` collides with a fixed route.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Validates a user-supplied alias.
///
/// The caller has already trimmed the input and discarded empty strings.
///
/// # Rules
///
/// - At most 50 characters
/// - Letters, digits, `-` and `_` only
/// - Not a reserved route word
///
/// # Examples
///
/// ```ignore
/// assert!(validate_custom_alias("summer-sale_2024").is_ok());
/// assert!(validate_custom_alias("with space").is_err());
/// assert!(validate_custom_alias("health").is_err());
/// ```
pub fn validate_custom_alias(alias: &str) -> Result<(), AliasValidationError> {
    let len = alias.chars().count();
    if len > ALIAS_MAX_LENGTH {
        return Err(AliasValidationError::TooLong(len));
    }

    if !CUSTOM_ALIAS_REGEX.is_match(alias) {
        return Err(AliasValidationError::InvalidCharacters);
    }

    if is_reserved(alias) {
        return Err(AliasValidationError::Reserved(alias.to_string()));
    }

    Ok(())
}

/// Extracts the alias embedded in a display short URL.
///
/// This is the text after the last `/`, which is how records created
/// without an explicit alias field are resolved.
pub fn alias_from_short_url(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap_or(short_url)
}

/// Builds the display short URL for an alias.
pub fn short_url_for(base_url: &str, alias: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_alias_length_and_charset() {
        let alias = generate_alias();
        assert_eq!(alias.len(), GENERATED_ALIAS_LENGTH);
        assert!(
            alias
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn test_generated_alias_passes_custom_validation() {
        for _ in 0..100 {
            let alias = generate_alias();
            if !is_reserved(&alias) {
                assert!(validate_custom_alias(&alias).is_ok());
            }
        }
    }

    #[test]
    fn test_generate_id_length() {
        assert_eq!(generate_id().len(), ID_LENGTH);
    }

    #[test]
    fn test_generate_id_mostly_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_validate_accepts_mixed_case_and_symbols() {
        assert!(validate_custom_alias("Summer-Sale_2024").is_ok());
        assert!(validate_custom_alias("a").is_ok());
        assert!(validate_custom_alias("_").is_ok());
    }

    #[test]
    fn test_validate_max_length() {
        assert!(validate_custom_alias(&"a".repeat(50)).is_ok());
        assert_eq!(
            validate_custom_alias(&"a".repeat(51)),
            Err(AliasValidationError::TooLong(51))
        );
    }

    #[test]
    fn test_validate_rejects_invalid_characters() {
        for alias in ["with space", "slash/inside", "dot.ted", "ünïcode", "q?x=1"] {
            assert_eq!(
                validate_custom_alias(alias),
                Err(AliasValidationError::InvalidCharacters),
                "alias {alias:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_reserved() {
        for &reserved in RESERVED_ALIASES {
            assert!(matches!(
                validate_custom_alias(reserved),
                Err(AliasValidationError::Reserved(_))
            ));
        }
    }

    #[test]
    fn test_reserved_check_is_case_sensitive() {
        assert!(validate_custom_alias("Health").is_ok());
    }

    #[test]
    fn test_alias_from_short_url() {
        assert_eq!(alias_from_short_url("https://lnk.pro/abc123"), "abc123");
        assert_eq!(alias_from_short_url("abc123"), "abc123");
        assert_eq!(alias_from_short_url("https://lnk.pro/"), "");
    }

    #[test]
    fn test_short_url_for_trims_trailing_slash() {
        assert_eq!(short_url_for("http://localhost:3000/", "x1"), "http://localhost:3000/x1");
        assert_eq!(short_url_for("http://localhost:3000", "x1"), "http://localhost:3000/x1");
    }
}
