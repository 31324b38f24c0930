//! Error handling for the Fob CLI.
//!
//! `CliError` wraps the library errors via `#[from]` so commands can use `?`
//! throughout. `main` turns the final error into a miette report, keeping the
//! diagnostic codes and help text of the library errors.

use std::path::PathBuf;
use thiserror::Error;

mod report;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Target-browser check failed
    #[error(transparent)]
    Browsers(#[from] fob_browserslist::BrowsersError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
