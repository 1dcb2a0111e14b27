//! headers/inject.rs
//!
//! `SecretToken` -> header value.

use http::{HeaderMap, HeaderValue, Request};

use crate::constants::{HEADER_KEY, HEADER_VALUE_PREFIX};
use crate::headers::types::HeaderError;
use crate::token::SecretToken;

/// Header value text for `token`: `Bearer: secret-token:...`.
pub fn inject(token: &SecretToken) -> String {
    let uri = token.serialize();
    let mut out = String::with_capacity(HEADER_VALUE_PREFIX.len() + uri.len());
    out.push_str(HEADER_VALUE_PREFIX);
    out.push_str(&uri);
    out
}

/// Typed header value for `token`, marked sensitive.
///
/// The canonical alphabet is a subset of visible ASCII, so `http` accepts every
/// value produced here; the error is propagated rather than assumed away.
pub fn header_value(token: &SecretToken) -> Result<HeaderValue, HeaderError> {
    let mut value = HeaderValue::try_from(inject(token))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Set `Authorization` on `headers`, replacing any existing entries.
pub fn add_to_headers(headers: &mut HeaderMap, token: &SecretToken) -> Result<(), HeaderError> {
    headers.insert(HEADER_KEY, header_value(token)?);
    Ok(())
}

/// Set `Authorization` on an outbound request.
///
/// `None` is a caller defect and yields `HeaderError::InvalidArgument`.
pub fn add_to_request<B>(req: Option<&mut Request<B>>, token: &SecretToken) -> Result<(), HeaderError> {
    let req = req.ok_or(HeaderError::InvalidArgument("request was None"))?;
    add_to_headers(req.headers_mut(), token)
}
