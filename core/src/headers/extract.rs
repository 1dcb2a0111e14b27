//! headers/extract.rs
//!
//! Header value -> `SecretToken`.

use http::{HeaderMap, HeaderValue, Request};

use crate::constants::HEADER_KEY;
use crate::headers::types::{HeaderError, HEADER_REGEX};
use crate::token::SecretToken;

/// Extract a token from a raw header value.
///
/// # Returns
/// - `Err(HeaderError::Missing)` if the value is absent or empty.
/// - `Err(HeaderError::Malformed)` if it is not `Bearer: <uri>` (or not visible ASCII).
/// - `Err(HeaderError::Token(_))` if the URI itself is rejected.
pub fn extract(value: Option<&HeaderValue>) -> Result<SecretToken, HeaderError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Err(HeaderError::Missing),
    };
    let value = value.to_str().map_err(|_| HeaderError::Malformed)?;
    extract_str(value)
}

/// Same as [`extract`] for a header value already read as text.
pub fn extract_str(value: &str) -> Result<SecretToken, HeaderError> {
    if value.is_empty() {
        return Err(HeaderError::Missing);
    }

    let uri = HEADER_REGEX
        .captures(value)
        .and_then(|c| c.get(1))
        .ok_or(HeaderError::Malformed)?;

    Ok(SecretToken::parse(uri.as_str())?)
}

/// Extract the token from the first `Authorization` entry of `headers`.
pub fn from_headers(headers: &HeaderMap) -> Result<SecretToken, HeaderError> {
    extract(headers.get(HEADER_KEY))
}

/// Extract the token from an inbound request.
///
/// `None` is a caller defect and yields `HeaderError::InvalidArgument`.
pub fn from_request<B>(req: Option<&Request<B>>) -> Result<SecretToken, HeaderError> {
    let req = req.ok_or(HeaderError::InvalidArgument("request was None"))?;
    from_headers(req.headers())
}
