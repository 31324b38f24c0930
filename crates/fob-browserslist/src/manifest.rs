//! Writing the default browser list into the nearest `package.json`.

use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream::Stderr};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{default_browsers, DEFAULT_BROWSERS};
use crate::discovery::BrowserslistDiscovery;
use crate::error::ManifestError;

const PACKAGE_FILE: &str = "package.json";
const DEFAULT_INDENT: &str = "  ";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Outcome of a best-effort attempt to persist the default browsers.
#[derive(Debug)]
pub enum DefaultsWrite {
    /// The manifest now carries [`DEFAULT_BROWSERS`].
    Written { manifest: PathBuf },
    /// Nothing was written; the reason is kept for reporting.
    Skipped(ManifestError),
}

impl DefaultsWrite {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    pub fn manifest(&self) -> Option<&Path> {
        match self {
            Self::Written { manifest } => Some(manifest),
            Self::Skipped(_) => None,
        }
    }
}

/// Find the nearest `package.json` at or above `dir`.
pub fn find_package_json(dir: &Path) -> Option<PathBuf> {
    let start = std::path::absolute(dir).ok()?;
    start
        .ancestors()
        .map(|ancestor| ancestor.join(PACKAGE_FILE))
        .find(|candidate| candidate.is_file())
}

/// Set `browserslist` to [`DEFAULT_BROWSERS`] in the nearest manifest.
///
/// Failures are returned as [`DefaultsWrite::Skipped`] instead of an error.
/// On success the discovery cache is cleared so the next lookup sees the
/// new key.
pub async fn write_default_browsers(
    dir: &Path,
    discovery: &BrowserslistDiscovery,
) -> DefaultsWrite {
    match persist_defaults(dir).await {
        Ok(manifest) => {
            discovery.clear_caches();
            info!("Wrote default browserslist to {}", manifest.display());
            announce_defaults();
            DefaultsWrite::Written { manifest }
        }
        Err(err) => {
            debug!("Default browserslist not persisted: {}", err);
            DefaultsWrite::Skipped(err)
        }
    }
}

async fn persist_defaults(dir: &Path) -> Result<PathBuf, ManifestError> {
    let path = find_package_json(dir).ok_or_else(|| ManifestError::NotFound(dir.to_path_buf()))?;

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ManifestError::Io {
            path: path.clone(),
            source,
        })?;

    let updated = with_default_browsers(&content, &path)?;

    tokio::fs::write(&path, updated)
        .await
        .map_err(|source| ManifestError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

/// Return `content` re-serialized with the default `browserslist` key.
///
/// Key order and the file's indentation are kept; the output ends with the
/// host line ending.
pub fn with_default_browsers(content: &str, path: &Path) -> Result<String, ManifestError> {
    let mut manifest: Value =
        serde_json::from_str(content).map_err(|source| ManifestError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| ManifestError::NotAnObject(path.to_path_buf()))?;
    fields.insert("browserslist".to_string(), Value::from(default_browsers()));

    let indent = detect_indent(content);
    let mut out = Vec::with_capacity(content.len() + 128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    manifest
        .serialize(&mut serializer)
        .map_err(|source| ManifestError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rendered = String::from_utf8_lossy(&out).into_owned();
    rendered.push_str(LINE_ENDING);
    Ok(rendered)
}

/// Indentation of the first indented line, or two spaces.
fn detect_indent(content: &str) -> &str {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .find(|indent| !indent.is_empty())
        .unwrap_or(DEFAULT_INDENT)
}

/// Status goes to stderr; stdout is left to the caller's output.
fn announce_defaults() {
    eprintln!();
    eprintln!(
        "{} {}",
        "Set target browsers:".if_supports_color(Stderr, |t| t.green()),
        DEFAULT_BROWSERS.join(", ").if_supports_color(Stderr, |t| t.cyan())
    );
    eprintln!();
}
