//! sectok-core
//!
//! Canonical `secret-token:` URIs for opaque bearer credentials.
//! No I/O, no logging, no global mutable state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Layers, leaf first
pub mod codec;
pub mod token;
pub mod headers;

pub use types::{ErrorKind, SectokError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::CodecError;
    pub use crate::constants::HEADER_KEY;
    pub use crate::headers::{
        add_to_headers, add_to_request, extract, from_headers, from_request, HeaderError,
    };
    pub use crate::token::{SecretToken, TokenError};
    pub use crate::types::{ErrorKind, SectokError};
}
