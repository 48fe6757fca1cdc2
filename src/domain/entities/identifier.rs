//! Artwork identifier (AW ID) value type.

use serde::Serialize;
use std::fmt;

/// A non-empty, digits-only artwork identifier.
///
/// Can only be built through [`Identifier::parse`], so every value held by the
/// pipeline satisfies the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Returns `Some` when `token` is non-empty and made only of ASCII digits.
    ///
    /// The token is taken as-is; callers are expected to trim first.
    pub fn parse(token: &str) -> Option<Self> {
        if is_identifier_token(token) {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// True for non-empty strings containing only `0-9`.
pub fn is_identifier_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        let id = Identifier::parse("00123").unwrap();
        assert_eq!(id.as_str(), "00123");
        assert_eq!(id.to_string(), "00123");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(Identifier::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_mixed() {
        assert!(Identifier::parse("12a").is_none());
        assert!(Identifier::parse(" 12").is_none());
        assert!(Identifier::parse("-12").is_none());
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digit three
        assert!(Identifier::parse("\u{0663}").is_none());
        // Fullwidth digit one
        assert!(Identifier::parse("\u{FF11}").is_none());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = Identifier::parse("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
