//! Tooling
//!
//! Command-line front end for the library.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
