//! Alias generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Length of a generated alias.
pub const ALIAS_LENGTH: usize = 6;

/// Longest alias a client may choose.
pub const MAX_ALIAS_LENGTH: usize = 64;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Aliases that would shadow fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["url", "product", "productGroup", "health"];

/// Generates a random alias of [`ALIAS_LENGTH`] alphanumeric characters.
///
/// Never returns one of [`RESERVED_ALIASES`].
pub fn generate_alias() -> String {
    let mut rng = rand::rng();

    loop {
        let alias: String = (0..ALIAS_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();

        if !RESERVED_ALIASES.contains(&alias.as_str()) {
            return alias;
        }
    }
}

/// Validates a client-chosen alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            "Alias must be 1-64 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_alias_has_correct_length() {
        assert_eq!(generate_alias().len(), ALIAS_LENGTH);
    }

    #[test]
    fn test_generate_alias_alphanumeric() {
        let alias = generate_alias();
        assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_alias_is_valid() {
        for _ in 0..100 {
            assert!(validate_alias(&generate_alias()).is_ok());
        }
    }

    #[test]
    fn test_generate_alias_mostly_unique() {
        let aliases: HashSet<String> = (0..1000).map(|_| generate_alias()).collect();
        assert!(aliases.len() > 990);
    }

    #[test]
    fn test_validate_accepts_mixed_case() {
        assert!(validate_alias("MyLink_2024-x").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert!(validate_alias("").is_err());
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_alias(&"a".repeat(65)).is_err());
        assert!(validate_alias(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn test_validate_special_characters() {
        let err = validate_alias("my/link").unwrap_err();
        assert!(err.to_string().contains("letters, digits"));
        assert!(validate_alias("my link").is_err());
    }

    #[test]
    fn test_validate_all_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            assert!(
                validate_alias(reserved).is_err(),
                "Reserved alias '{}' should be invalid",
                reserved
            );
        }
    }
}
