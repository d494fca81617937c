//! Postal Code Module
//!
//! Opaque lookup key for the geocoding service and the cache.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Postal Code ==
/// A trimmed, non-empty postal code.
///
/// Compared byte for byte; no normalization beyond trimming is applied, so
/// `"90210"` and `"90210-1234"` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Trims the input; returns `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PostalCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| "postal code must not be empty".to_string())
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let code = PostalCode::parse("  90210 ").unwrap();
        assert_eq!(code.as_str(), "90210");
        assert_eq!(code, PostalCode::parse("90210").unwrap());
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(PostalCode::parse("").is_none());
        assert!(PostalCode::parse("   ").is_none());
    }

    #[test]
    fn test_no_normalization_beyond_trim() {
        assert_ne!(
            PostalCode::parse("90210").unwrap(),
            PostalCode::parse("90210-1234").unwrap()
        );
        assert_ne!(
            PostalCode::parse("sw1a").unwrap(),
            PostalCode::parse("SW1A").unwrap()
        );
    }

    #[test]
    fn test_serde_roundtrip_rejects_empty() {
        let code: PostalCode = serde_json::from_str(r#"" 10001""#).unwrap();
        assert_eq!(code.as_str(), "10001");
        assert!(serde_json::from_str::<PostalCode>(r#""  ""#).is_err());
    }
}
