//! URL validation shared by the web boundary and the terminal front-end.

use url::Url;

use crate::error_handling::types::ValidationError;

/// Checks that `raw` is a syntactically valid URL with an authority.
///
/// Only shape is verified (parseable, has a host). No network lookup happens
/// here; an unreachable URL is still a valid one. The caller keeps encoding
/// the raw string exactly as submitted, so nothing normalized by the parser
/// leaks back out of this function.
pub fn validate_url(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    let parsed = Url::parse(raw).map_err(|_| ValidationError::InvalidUrl)?;
    if !parsed.has_host() {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_urls() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://localhost:3000/path?q=1").is_ok());
        assert!(validate_url("https://sub.domain.example.com/a/b#frag").is_ok());
        assert!(validate_url("ftp://files.example.com/pub").is_ok());
    }

    #[test]
    fn test_empty_input_is_missing() {
        assert_eq!(validate_url(""), Err(ValidationError::MissingUrl));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert_eq!(validate_url("not a url"), Err(ValidationError::InvalidUrl));
        assert_eq!(validate_url("   "), Err(ValidationError::InvalidUrl));
        assert_eq!(validate_url("http//missing.colon"), Err(ValidationError::InvalidUrl));
    }

    #[test]
    fn test_url_without_authority_is_invalid() {
        // parses as a URL but carries no host
        assert_eq!(validate_url("mailto:someone@example.com"), Err(ValidationError::InvalidUrl));
        assert_eq!(validate_url("data:text/plain,hello"), Err(ValidationError::InvalidUrl));
        assert_eq!(validate_url("https://"), Err(ValidationError::InvalidUrl));
    }

    #[test]
    fn test_error_messages_match_api_contract() {
        assert_eq!(ValidationError::MissingUrl.to_string(), "URL is required");
        assert_eq!(ValidationError::InvalidUrl.to_string(), "Invalid URL format");
    }
}
