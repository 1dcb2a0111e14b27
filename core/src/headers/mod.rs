//! headers/mod.rs
//! Carries a `SecretToken` in the `Authorization` header.
//!
//! Wire notes:
//! - Value format is `Bearer: <secret-token URI>`, with a colon and one space.
//!   This is its own scheme and is not RFC 6750 `Bearer <token>`.
//! - Extraction proceeds only on a positive pattern match; anything else fails.
//! - Injected values are flagged sensitive so `http`-aware tooling can skip them.

pub mod types;
pub mod extract;
pub mod inject;

pub use types::*;
pub use extract::*;
pub use inject::*;
