//! codec/encode.rs
//!
//! Raw payload -> canonical URI.

use crate::constants::URI_PREFIX;

/// Encode a raw payload into its canonical URI.
///
/// Never fails. An empty payload yields the bare prefix `secret-token:`, which is
/// not canonical; [`SecretToken`](crate::token::SecretToken) never holds one.
///
/// # Example
/// ```
/// use sectok_core::codec::encode;
/// assert_eq!(encode("🐶".as_bytes()), "secret-token:%F0%9F%90%B6");
/// ```
#[inline]
pub fn encode(raw: &[u8]) -> String {
    let mut out = String::with_capacity(URI_PREFIX.len() + raw.len());
    encode_into(raw, &mut out);
    out
}

/// Append the canonical URI for `raw` to `out`.
pub fn encode_into(raw: &[u8], out: &mut String) {
    out.push_str(URI_PREFIX);
    // urlencoding escapes everything outside `A-Za-z0-9-._~`, upper-case hex.
    out.push_str(&urlencoding::encode_binary(raw));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::is_canonical;

    #[test]
    fn unreserved_passes_through() {
        assert_eq!(encode(b"AZaz09-._~"), "secret-token:AZaz09-._~");
    }

    #[test]
    fn percent_is_escaped() {
        assert_eq!(encode(b"%"), "secret-token:%25");
    }

    #[test]
    fn space_is_percent_escaped_not_plus() {
        assert_eq!(encode(b"a b"), "secret-token:a%20b");
    }

    #[test]
    fn encode_into_appends() {
        let mut out = String::from("x=");
        encode_into(b"t:k", &mut out);
        assert_eq!(out, "x=secret-token:t%3Ak");
    }

    #[test]
    fn output_is_canonical_for_every_single_byte() {
        for b in 0u8..=255 {
            assert!(is_canonical(&encode(&[b])), "byte 0x{b:02x}");
        }
    }
}
