//! Error types for target-browser discovery and the browser check.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = BrowsersError> = std::result::Result<T, E>;

/// Errors surfaced by [`check_browsers`](crate::check_browsers).
#[derive(Debug, Error, Diagnostic)]
pub enum BrowsersError {
    /// No configuration exists and none was written.
    #[error("As of fob you must specify targeted browsers.")]
    #[diagnostic(
        code(fob::browsers::not_configured),
        help("Please add a `browserslist` key to your package.json.")
    )]
    NotConfigured,

    /// A configuration exists but could not be used.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Errors raised while looking for or parsing a browserslist configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum DiscoveryError {
    #[error("{} contains both {first} and {second}", .dir.display())]
    #[diagnostic(
        code(fob::browsers::ambiguous_config),
        help("Keep a single browserslist source per directory.")
    )]
    Ambiguous {
        dir: PathBuf,
        first: &'static str,
        second: &'static str,
    },

    #[error("duplicate section `{section}` in {}", .path.display())]
    #[diagnostic(code(fob::browsers::duplicate_section))]
    DuplicateSection { path: PathBuf, section: String },

    #[error("{} uses `browserlist` key instead of `browserslist`", .0.display())]
    #[diagnostic(
        code(fob::browsers::misspelt_key),
        help("Rename the key to `browserslist`.")
    )]
    MisspeltKey(PathBuf),

    #[error("browserslist config in {} should be a string or an array of strings with browser queries", .0.display())]
    #[diagnostic(code(fob::browsers::invalid_value))]
    InvalidValue(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    #[diagnostic(code(fob::browsers::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons the default writer could not persist defaults.
///
/// Never surfaced to callers of the check; carried inside
/// [`DefaultsWrite::Skipped`](crate::DefaultsWrite::Skipped) for logging and tests.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no package.json found upward from {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not a JSON object", .0.display())]
    NotAnObject(PathBuf),
}

#[derive(Debug, Error, Diagnostic)]
#[error("invalid browserslist settings: {0}")]
#[diagnostic(code(fob::browsers::settings))]
pub struct SettingsError(#[source] Box<figment::Error>);

impl From<figment::Error> for SettingsError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}
