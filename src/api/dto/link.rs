//! DTOs for short link endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use std::sync::LazyLock;
use validator::Validate;

/// Characters allowed in a user-supplied alias.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").unwrap_or_else(|e| panic!("invalid alias pattern: {e}"))
});

/// Request to create a short link.
///
/// An absent or empty `alias` asks the service to generate one.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct SaveLinkRequest {
    #[validate(required, url)]
    pub url: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 64), regex(path = *ALIAS_REGEX))]
    pub alias: Option<String>,
}

/// Payload of a successful save.
#[derive(Debug, Serialize)]
pub struct SaveLinkResponse {
    pub alias: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, alias: Option<&str>) -> SaveLinkRequest {
        SaveLinkRequest {
            url: Some(url.to_string()),
            alias: alias.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("https://example.com", Some("abc")).validate().is_ok());
        assert!(request("https://example.com", None).validate().is_ok());
    }

    #[test]
    fn test_missing_url_is_invalid() {
        let req: SaveLinkRequest = serde_json::from_str(r#"{"alias": "abc"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_alias_means_generated() {
        let req: SaveLinkRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "alias": ""}"#).unwrap();
        assert!(req.alias.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_malformed_url_is_invalid() {
        assert!(request("not a url", None).validate().is_err());
    }

    #[test]
    fn test_alias_charset() {
        assert!(request("https://example.com", Some("my-link_1")).validate().is_ok());
        assert!(request("https://example.com", Some("my link")).validate().is_err());
        assert!(request("https://example.com", Some("a/b")).validate().is_err());
    }

    #[test]
    fn test_alias_too_long() {
        let alias = "a".repeat(65);
        assert!(request("https://example.com", Some(&alias)).validate().is_err());
    }
}
