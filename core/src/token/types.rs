//! token/types.rs
//! `SecretToken` and its construction errors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use crate::codec::{self, CodecError};
use crate::token::compare::constant_time_eq;

/// Errors raised while constructing or parsing a `SecretToken`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Raw payload has zero length.
    #[error("secret tokens cannot be empty")]
    Empty,

    /// Payload is not valid UTF-8; `valid_up_to` is the length of the valid prefix.
    #[error("invalid UTF-8 in secret token after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },

    /// URI failed to decode (format or escape error).
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Opaque bearer credential.
///
/// Holds the raw, decoded payload. The payload is non-empty UTF-8 by construction
/// and is never mutated afterwards.
#[derive(Clone)]
pub struct SecretToken {
    payload: Zeroizing<String>,
}

impl SecretToken {
    /// Build a token from a raw string payload.
    pub fn new(token: &str) -> Result<Self, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Empty);
        }
        Ok(Self { payload: Zeroizing::new(token.to_owned()) })
    }

    /// Build a token from raw payload bytes.
    ///
    /// # Errors
    /// - `TokenError::Empty` for a zero-length payload.
    /// - `TokenError::InvalidUtf8` if the bytes are not UTF-8.
    pub fn from_bytes(token: impl Into<Vec<u8>>) -> Result<Self, TokenError> {
        let token = token.into();
        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        match String::from_utf8(token) {
            Ok(payload) => Ok(Self { payload: Zeroizing::new(payload) }),
            Err(e) => {
                let valid_up_to = e.utf8_error().valid_up_to();
                e.into_bytes().zeroize();
                Err(TokenError::InvalidUtf8 { valid_up_to })
            }
        }
    }

    /// Parse a canonical `secret-token:` URI.
    ///
    /// The decoded payload is re-validated: escapes such as `%80` pass the URI
    /// pattern but decode to invalid UTF-8.
    pub fn parse(uri: &str) -> Result<Self, TokenError> {
        let raw = codec::decode(uri)?;
        Self::from_bytes(raw)
    }

    /// Parse a canonical URI given as bytes. Non-UTF-8 input cannot be canonical.
    pub fn parse_bytes(uri: &[u8]) -> Result<Self, TokenError> {
        let uri = std::str::from_utf8(uri).map_err(|_| CodecError::InvalidFormat)?;
        Self::parse(uri)
    }

    /// Canonical URI form. Recomputed on every call.
    pub fn serialize(&self) -> String {
        codec::encode(self.payload.as_bytes())
    }

    /// Fixed-time comparison of decoded payloads.
    ///
    /// Two tokens whose URIs differ only in escaping (e.g. `%3a` vs `%3A`) are equal.
    #[must_use]
    pub fn equals(&self, other: &SecretToken) -> bool {
        constant_time_eq(self.payload.as_bytes(), other.payload.as_bytes())
    }

    /// Raw payload. Named so that every read of secret material is easy to find.
    pub fn expose_secret(&self) -> &str {
        &self.payload
    }

    /// Raw payload bytes.
    pub fn expose_secret_bytes(&self) -> &[u8] {
        self.payload.as_bytes()
    }
}

impl PartialEq for SecretToken {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for SecretToken {}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretToken")
            .field("len", &self.payload.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for SecretToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SecretToken::parse(s)
    }
}

impl TryFrom<&str> for SecretToken {
    type Error = TokenError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SecretToken::parse(value)
    }
}

impl TryFrom<String> for SecretToken {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SecretToken::parse(&value)
    }
}
