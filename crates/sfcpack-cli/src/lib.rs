//! sfcpack CLI - bundler configurations for single-file component projects.
//!
//! The binary wraps [`sfcpack_config`]: it loads project settings, reads the
//! build mode once, dispatches output cleanup, and prints the assembled
//! configurations as JSON for the bundling engine.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - Command implementations
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
