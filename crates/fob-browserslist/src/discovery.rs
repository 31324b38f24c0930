//! Upward search for a browserslist configuration.
//!
//! Each directory from the starting point up to the filesystem root is
//! checked for one of:
//! 1. a `browserslist` file
//! 2. a `.browserslistrc` file
//! 3. a `package.json` with a `browserslist` key
//!
//! More than one source in the same directory is an error. Lookups are
//! cached per directory until [`BrowserslistDiscovery::clear_caches`] is called.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::BrowserslistConfig;
use crate::error::DiscoveryError;
use crate::settings::BrowserslistSettings;

const CONFIG_FILE: &str = "browserslist";
const RC_FILE: &str = ".browserslistrc";
const PACKAGE_FILE: &str = "package.json";
const PACKAGE_SOURCE: &str = "package.json with browsers";

static GLOBAL: Lazy<BrowserslistDiscovery> = Lazy::new(|| {
    let settings = BrowserslistSettings::load().unwrap_or_else(|err| {
        warn!("Ignoring invalid browserslist settings: {}", err);
        BrowserslistSettings::default()
    });
    BrowserslistDiscovery::with_settings(settings)
});

/// Process-wide discovery instance, configured from the environment.
pub fn global() -> &'static BrowserslistDiscovery {
    &GLOBAL
}

/// Browserslist config discovery with a per-directory cache.
///
/// # Example
///
/// ```no_run
/// use fob_browserslist::BrowserslistDiscovery;
///
/// let discovery = BrowserslistDiscovery::new();
/// if let Some(config) = discovery.find_config(".").unwrap() {
///     println!("{:?}", config.defaults());
/// }
/// ```
#[derive(Debug, Default)]
pub struct BrowserslistDiscovery {
    settings: BrowserslistSettings,
    cache: Mutex<HashMap<PathBuf, Option<BrowserslistConfig>>>,
}

impl BrowserslistDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: BrowserslistSettings) -> Self {
        Self {
            settings,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> &BrowserslistSettings {
        &self.settings
    }

    /// Find the nearest configuration at or above `from`.
    ///
    /// Returns `Ok(None)` when no directory up to the root declares one.
    ///
    /// The lookup uses blocking `std::fs` calls, a few per ancestor, and runs
    /// on the caller's thread even when called from async code.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] when a directory holds conflicting sources or
    /// the configuration it holds is malformed.
    pub fn find_config(
        &self,
        from: impl AsRef<Path>,
    ) -> Result<Option<BrowserslistConfig>, DiscoveryError> {
        let from = from.as_ref();
        let start = std::path::absolute(from).map_err(|source| DiscoveryError::Io {
            path: from.to_path_buf(),
            source,
        })?;

        let mut passed = Vec::new();
        let mut resolved = None;

        for dir in start.ancestors() {
            if let Some(hit) = self.cache.lock().get(dir) {
                debug!("browserslist cache hit for {}", dir.display());
                resolved = hit.clone();
                break;
            }

            passed.push(dir.to_path_buf());
            if !dir.is_dir() {
                continue;
            }

            if let Some(config) = read_dir_config(dir)? {
                debug!("Found browserslist config at {}", config.source().display());
                resolved = Some(config);
                break;
            }
        }

        if !self.settings.disable_cache {
            let mut cache = self.cache.lock();
            for dir in passed {
                cache.insert(dir, resolved.clone());
            }
        }

        Ok(resolved)
    }

    /// Drop every cached lookup so the next search reads the filesystem.
    pub fn clear_caches(&self) {
        self.cache.lock().clear();
    }

    /// Number of directories with a cached lookup result.
    pub fn cached_dirs(&self) -> usize {
        self.cache.lock().len()
    }
}

fn read_dir_config(dir: &Path) -> Result<Option<BrowserslistConfig>, DiscoveryError> {
    let config_file = dir.join(CONFIG_FILE);
    let rc_file = dir.join(RC_FILE);
    let package_file = dir.join(PACKAGE_FILE);

    let from_package = if package_file.is_file() {
        read_package(&package_file)?
    } else {
        None
    };

    let ambiguous = |first, second| DiscoveryError::Ambiguous {
        dir: dir.to_path_buf(),
        first,
        second,
    };

    match (config_file.is_file(), rc_file.is_file(), from_package) {
        (true, _, Some(_)) => Err(ambiguous(CONFIG_FILE, PACKAGE_SOURCE)),
        (_, true, Some(_)) => Err(ambiguous(RC_FILE, PACKAGE_SOURCE)),
        (true, true, None) => Err(ambiguous(RC_FILE, CONFIG_FILE)),
        (true, false, None) => read_rc(&config_file).map(Some),
        (false, true, None) => read_rc(&rc_file).map(Some),
        (false, false, from_package) => Ok(from_package),
    }
}

fn read_rc(path: &Path) -> Result<BrowserslistConfig, DiscoveryError> {
    let content = fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    BrowserslistConfig::parse_rc(&content, path)
}

/// Read the `browserslist` key of a manifest. Unreadable or malformed
/// manifests are skipped so a broken file never blocks discovery.
fn read_package(path: &Path) -> Result<Option<BrowserslistConfig>, DiscoveryError> {
    let parsed = match fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str::<Value>(&content).map_err(|e| e.to_string()))
    {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("Could not parse {}. Ignoring it. ({})", path.display(), err);
            return Ok(None);
        }
    };

    let Some(manifest) = parsed.as_object() else {
        return Ok(None);
    };

    let browserslist = manifest.get("browserslist").filter(|v| !v.is_null());
    if browserslist.is_none() && manifest.get("browserlist").is_some_and(|v| !v.is_null()) {
        return Err(DiscoveryError::MisspeltKey(path.to_path_buf()));
    }

    browserslist
        .map(|value| BrowserslistConfig::from_package_value(value, path))
        .transpose()
}
