use thiserror::Error;

use crate::{codec::CodecError, headers::HeaderError, token::TokenError};

/// Unified error covering codec, token and header failures.
/// - `From<T>` impls enable `?` across layers.
/// - `kind()` maps any failure onto the flat error taxonomy.
#[derive(Debug, Error)]
pub enum SectokError {
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("token error: {0}")]
    Token(#[from] TokenError),

    #[error("header error: {0}")]
    Header(#[from] HeaderError),
}

/// Flat error kinds, independent of which layer raised them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyToken,
    InvalidUtf8,
    InvalidFormat,
    InvalidEscape,
    MissingHeader,
    MalformedHeader,
    InvalidArgument,
    /// `http` refused the header value.
    InvalidHeaderValue,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyToken => "empty_token",
            ErrorKind::InvalidUtf8 => "invalid_utf8",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::InvalidEscape => "invalid_escape",
            ErrorKind::MissingHeader => "missing_header",
            ErrorKind::MalformedHeader => "malformed_header",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::InvalidHeaderValue => "invalid_header_value",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidFormat => ErrorKind::InvalidFormat,
            CodecError::InvalidEscape { .. } => ErrorKind::InvalidEscape,
        }
    }
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::Empty => ErrorKind::EmptyToken,
            TokenError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            TokenError::Codec(e) => e.kind(),
        }
    }
}

impl HeaderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeaderError::Missing => ErrorKind::MissingHeader,
            HeaderError::Malformed => ErrorKind::MalformedHeader,
            HeaderError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            HeaderError::Token(e) => e.kind(),
            HeaderError::InvalidHeaderValue(_) => ErrorKind::InvalidHeaderValue,
        }
    }
}

impl SectokError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SectokError::Codec(e) => e.kind(),
            SectokError::Token(e) => e.kind(),
            SectokError::Header(e) => e.kind(),
        }
    }
}
