//! codec/mod.rs
//! Canonical URI codec for secret tokens.
//!
//! Format notes:
//! - `secret-token:<percent-encoded-payload>`.
//! - Unreserved bytes `A-Za-z0-9-._~` pass through; everything else, `%` included,
//!   becomes `%XX` with upper-case hex.
//! - Escaping keeps `:` and whitespace out of the payload, so the URI can sit in a
//!   header value or a log line without further quoting.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
