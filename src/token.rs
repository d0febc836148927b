//! Plausibility checks for the API credential

use crate::constants::token::{MIN_EXCLUSIVE_LENGTH, PLACEHOLDER_MARKERS};
use crate::error::TokenRejection;

/// Checks that a credential looks like a real personal API token.
///
/// Rejects, in order: empty or whitespace-only strings, strings containing a
/// template placeholder marker, strings with characters outside
/// `[A-Za-z0-9_-]`, and strings of length 10 or less.
pub fn check_token(token: &str) -> Result<(), TokenRejection> {
    if token.trim().is_empty() {
        return Err(TokenRejection::Empty);
    }

    if let Some(marker) = PLACEHOLDER_MARKERS
        .into_iter()
        .find(|marker| token.contains(marker))
    {
        return Err(TokenRejection::Placeholder(marker));
    }

    if !token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TokenRejection::InvalidCharacters);
    }

    if token.len() <= MIN_EXCLUSIVE_LENGTH {
        return Err(TokenRejection::TooShort);
    }

    Ok(())
}

/// Returns true when [`check_token`] accepts the credential.
pub fn is_valid_token(token: &str) -> bool {
    check_token(token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_twenty_alphanumeric_characters() {
        assert!(is_valid_token("lip0123456789abcdefg"));
    }

    #[test]
    fn test_accepts_hyphen_and_underscore() {
        assert!(is_valid_token("lip_abc-DEF_1234"));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(check_token(""), Err(TokenRejection::Empty));
        assert_eq!(check_token("   \t"), Err(TokenRejection::Empty));
    }

    #[test]
    fn test_rejects_placeholder_markers() {
        assert_eq!(
            check_token("lip_PLACEHOLDER_value"),
            Err(TokenRejection::Placeholder("PLACEHOLDER"))
        );
        assert_eq!(
            check_token("YOUR_TOKEN_GOES_HERE"),
            Err(TokenRejection::Placeholder("YOUR_TOKEN"))
        );
        assert_eq!(
            check_token("abc***defghijkl"),
            Err(TokenRejection::Placeholder("***"))
        );
    }

    #[test]
    fn test_rejects_non_token_characters() {
        assert_eq!(
            check_token("lip abcdefghijkl"),
            Err(TokenRejection::InvalidCharacters)
        );
        assert_eq!(
            check_token("lip.abcdefghijkl"),
            Err(TokenRejection::InvalidCharacters)
        );
        assert!(!is_valid_token("lipäbcdefghijkl"));
    }

    #[test]
    fn test_rejects_short_tokens() {
        for len in 1..=10 {
            let token = "a".repeat(len);
            assert_eq!(
                check_token(&token),
                Err(TokenRejection::TooShort),
                "{token}"
            );
        }
        assert!(is_valid_token(&"a".repeat(11)));
    }
}
