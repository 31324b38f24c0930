//! # fob-browserslist
//!
//! Target-browser configuration for Fob projects.
//!
//! Finds the browserslist configuration that applies to a directory and, when
//! there is none, offers to write a default list into the nearest
//! `package.json`.
//!
//! # Example
//!
//! ```no_run
//! use fob_browserslist::{check_browsers, discovery, TerminalPrompter};
//! use std::path::Path;
//!
//! # async fn run() -> fob_browserslist::Result<()> {
//! let config = check_browsers(Path::new("."), true, discovery::global(), &TerminalPrompter).await?;
//! println!("{}", config.defaults().join(", "));
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod prompt;
pub mod settings;

pub use check::{check_browsers, check_browsers_with_report, CheckReport};
pub use config::{default_browsers, BrowserslistConfig, DEFAULT_BROWSERS, DEFAULT_SECTION};
pub use discovery::BrowserslistDiscovery;
pub use error::{BrowsersError, DiscoveryError, ManifestError, Result, SettingsError};
pub use manifest::{find_package_json, write_default_browsers, DefaultsWrite};
pub use prompt::{should_set_browsers, Prompter, ScriptedPrompter, TerminalPrompter};
pub use settings::BrowserslistSettings;
