//! codec/types.rs
//! Codec errors and the shared compiled URI pattern.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::URI_PATTERN;

/// Errors raised while decoding a canonical token URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input does not match `^secret-token:[A-Za-z0-9\-._~%]+$`.
    #[error("could not parse secret token from URI: not in canonical form")]
    InvalidFormat,

    /// `%` not followed by two hex digits. `position` is the byte offset of the `%`
    /// within the URI.
    #[error("malformed percent-escape at byte {position}")]
    InvalidEscape { position: usize },
}

static URI_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(URI_PATTERN).unwrap()
});

/// True when `uri` matches the canonical token pattern.
///
/// This only checks the character set; escapes are validated by `decode`.
#[inline]
pub fn is_canonical(uri: &str) -> bool {
    URI_REGEX.is_match(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_requires_payload() {
        assert!(!is_canonical("secret-token:"));
        assert!(is_canonical("secret-token:a"));
    }

    #[test]
    fn pattern_is_anchored() {
        assert!(!is_canonical(" secret-token:abc"));
        assert!(!is_canonical("secret-token:abc "));
        assert!(!is_canonical("xsecret-token:abc"));
    }
}
