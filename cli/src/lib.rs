//! sectok-cli
//!
//! Command-line front end for `sectok-core`. Owns logging and argument parsing;
//! the core stays free of both.

pub mod commands;
pub mod handlers;
pub mod logging;

pub use commands::Cli;
pub use handlers::{run, Outcome};
