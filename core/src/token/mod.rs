//! token/mod.rs
//! The secret token value type.
//!
//! Security notes:
//! - Payload is stored decoded; encoding happens only when serializing.
//! - Equality is fixed-time over the decoded payload, never over the URI string.
//! - Payload memory is wiped on drop and never printed by `Debug`.

pub mod types;
pub mod compare;
mod serde_impl;

pub use types::*;
pub use compare::*;
