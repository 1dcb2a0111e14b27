//! codec/decode.rs
//!
//! Canonical URI -> raw payload.
//!
//! Design notes:
//! - Pattern match first, then strip the prefix and unescape the remainder.
//! - `secret-token:` with nothing after it fails the pattern and never reaches the
//!   unescape step.
//! - UTF-8 validity of the result is checked by the caller; unescaping can produce
//!   any byte sequence.

use crate::codec::types::{is_canonical, CodecError};
use crate::constants::{ESCAPE_BYTE, ESCAPE_LEN, URI_PREFIX};

/// Decode a canonical URI into its raw payload bytes.
///
/// # Returns
/// - `Ok(Vec<u8>)` with the unescaped payload (never empty).
/// - `Err(CodecError::InvalidFormat)` if `uri` is not in canonical form.
/// - `Err(CodecError::InvalidEscape)` on a `%` not followed by two hex digits.
pub fn decode(uri: &str) -> Result<Vec<u8>, CodecError> {
    if !is_canonical(uri) {
        return Err(CodecError::InvalidFormat);
    }
    unescape(&uri.as_bytes()[URI_PREFIX.len()..], URI_PREFIX.len())
}

/// Strict percent-decoding. `base` is the offset of `input` within the URI, used
/// only for error positions.
fn unescape(input: &[u8], base: usize) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0usize;

    while i < input.len() {
        if input[i] != ESCAPE_BYTE {
            out.push(input[i]);
            i += 1;
            continue;
        }

        let invalid = CodecError::InvalidEscape { position: base + i };
        let digits = input.get(i + 1..i + ESCAPE_LEN).ok_or(invalid.clone())?;
        let mut byte = [0u8; 1];
        hex::decode_to_slice(digits, &mut byte).map_err(|_| invalid)?;
        out.push(byte[0]);
        i += ESCAPE_LEN;
    }

    Ok(out)
}
