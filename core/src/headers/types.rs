//! headers/types.rs
//! Header adapter errors and the compiled header value pattern.

use http::header::InvalidHeaderValue;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::HEADER_VALUE_PREFIX;
use crate::token::TokenError;

#[derive(Debug, Error)]
pub enum HeaderError {
    /// Header absent or empty.
    #[error("no token in request: authorization header missing or empty")]
    Missing,

    /// Header present but not `Bearer: <uri>`.
    #[error("authorization header is not of the form `Bearer: <secret-token URI>`")]
    Malformed,

    /// Caller passed no request.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Wrapper matched but the URI inside did not parse.
    #[error("invalid token in authorization header: {0}")]
    Token(#[from] TokenError),

    /// Rejected by `http` when building the header value.
    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

/// `^Bearer: (.+)$`, built from [`HEADER_VALUE_PREFIX`]; group 1 is the token URI.
pub(crate) static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!("^{}(.+)$", regex::escape(HEADER_VALUE_PREFIX));
    #[allow(clippy::unwrap_used)]
    Regex::new(&pattern).unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_follows_prefix() {
        let value = format!("{HEADER_VALUE_PREFIX}secret-token:a");
        let caps = HEADER_REGEX.captures(&value).unwrap();
        assert_eq!(&caps[1], "secret-token:a");
    }

    #[test]
    fn pattern_needs_prefix_and_payload() {
        assert!(!HEADER_REGEX.is_match(HEADER_VALUE_PREFIX));
        assert!(!HEADER_REGEX.is_match("Bearer:secret-token:a"));
        assert!(!HEADER_REGEX.is_match("Bearer secret-token:a"));
        assert!(!HEADER_REGEX.is_match(" Bearer: secret-token:a"));
    }
}
