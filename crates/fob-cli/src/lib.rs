//! Fob CLI - target-browser checks for JavaScript/TypeScript projects.
//!
//! This crate provides the command-line interface over `fob-browserslist`:
//! it finds the browserslist configuration for a project and, when there is
//! none, offers to add the defaults to `package.json`.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - Command implementations
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Colored status output and terminal detection
//!
//! # Example
//!
//! ```rust
//! use fob_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
