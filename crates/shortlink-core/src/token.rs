use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::borrow::Borrow;
use std::fmt::Display;

/// Symbols a token is drawn from: 26 lower, 26 upper, 10 digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated tokens unless configured otherwise.
pub const DEFAULT_TOKEN_LENGTH: usize = 6;

/// A short identifier mapped to an original value.
///
/// Tokens are 1-32 characters long and contain only symbols from
/// [`ALPHABET`]. They are stored inline, so cloning one never allocates.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(SmolStr);

impl Token {
    pub const MIN_LENGTH: usize = 1;
    pub const MAX_LENGTH: usize = 32;

    /// Creates a new `Token` after validating the input.
    pub fn new(token: impl AsRef<str>) -> std::result::Result<Self, StoreError> {
        let token = token.as_ref();
        Self::validate(token)?;
        Ok(Self(SmolStr::new(token)))
    }

    /// Creates a `Token` without validation.
    ///
    /// Use this only for tokens produced by trusted internal sources
    /// (e.g. generators that only sample from [`ALPHABET`]).
    pub fn new_unchecked(token: impl AsRef<str>) -> Self {
        Self(SmolStr::new(token))
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(token: &str) -> std::result::Result<(), StoreError> {
        if token.len() < Self::MIN_LENGTH || token.len() > Self::MAX_LENGTH {
            return Err(StoreError::InvalidToken(format!(
                "length must be between {} and {}, got {}",
                Self::MIN_LENGTH,
                Self::MAX_LENGTH,
                token.len()
            )));
        }

        if !token.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(StoreError::InvalidToken(format!(
                "must contain only ascii letters and digits: '{}'",
                token
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token").field(&self.0).finish()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the store look entries up by `&str` without building a `Token`.
impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Token::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn alphabet_has_62_distinct_symbols() {
        let mut seen = ALPHABET.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn valid_tokens() {
        assert!(Token::new("a").is_ok());
        assert!(Token::new("aB3xY9").is_ok());
        assert!(Token::new("Z".repeat(32)).is_ok());
    }

    #[test]
    fn empty_and_too_long() {
        assert!(Token::new("").is_err());
        assert!(Token::new("a".repeat(33)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(Token::new("abc-def").is_err());
        assert!(Token::new("abc_def").is_err());
        assert!(Token::new("abc/de").is_err());
        assert!(Token::new("ab cd").is_err());
        assert!(Token::new("héllo").is_err());
    }

    #[test]
    fn display_and_as_str() {
        let token = Token::new("aB3xY9").unwrap();
        assert_eq!(token.to_string(), "aB3xY9");
        assert_eq!(token.as_str(), "aB3xY9");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Token::new("abc123").unwrap(), 7);
        assert_eq!(map.get("abc123"), Some(&7));
        assert_eq!(map.get("abc124"), None);
    }

    #[test]
    fn deserialize_validates() {
        let token: Token = serde_json::from_str("\"aB3xY9\"").unwrap();
        assert_eq!(token.as_str(), "aB3xY9");
        assert!(serde_json::from_str::<Token>("\"not-valid\"").is_err());
    }

    #[test]
    fn serialize_as_plain_string() {
        let token = Token::new("aB3xY9").unwrap();
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"aB3xY9\"");
    }
}
