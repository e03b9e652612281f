//! Presentation layer for docroom
//!
//! CLI definition and console output formatting. No business logic lives
//! here; everything renders state produced by the application layer.

pub mod cli;
pub mod output;

pub use cli::{Cli, Command};
pub use output::ConsoleFormatter;
