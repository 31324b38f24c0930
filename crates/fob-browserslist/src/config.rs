//! Browserslist configuration model and parsers.
//!
//! A configuration is a set of named sections ("environments"), each holding
//! an ordered list of browser queries. Queries are opaque strings here;
//! resolving them against browser data is left to downstream tooling.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::DiscoveryError;

/// Queries written into `package.json` when a project has no configuration.
pub const DEFAULT_BROWSERS: [&str; 4] = [">0.2%", "not dead", "not ie <= 11", "not op_mini all"];

/// Section used when a config has no explicit environment headers.
pub const DEFAULT_SECTION: &str = "defaults";

/// Returns [`DEFAULT_BROWSERS`] as owned strings.
pub fn default_browsers() -> Vec<String> {
    DEFAULT_BROWSERS.iter().map(|q| (*q).to_string()).collect()
}

/// A resolved browserslist configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserslistConfig {
    source: PathBuf,
    sections: IndexMap<String, Vec<String>>,
}

impl BrowserslistConfig {
    /// Parse the contents of a `browserslist` or `.browserslistrc` file.
    ///
    /// `#` comments run to end of line. Entries are separated by newlines or
    /// commas. A `[production staging]` header routes the following entries
    /// to every section it names.
    pub fn parse_rc(content: &str, source: impl Into<PathBuf>) -> Result<Self, DiscoveryError> {
        let source = source.into();
        let mut sections: IndexMap<String, Vec<String>> = IndexMap::new();
        sections.insert(DEFAULT_SECTION.to_string(), Vec::new());

        // Queries before any header already belong to `defaults`.
        let mut declared = HashSet::from([DEFAULT_SECTION.to_string()]);
        let mut current = vec![DEFAULT_SECTION.to_string()];

        for line in content.lines() {
            let line = line.split('#').next().unwrap_or_default();

            for entry in line.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                if let Some(names) = section_header(entry) {
                    current = names;
                    for name in &current {
                        if !declared.insert(name.clone()) {
                            return Err(DiscoveryError::DuplicateSection {
                                path: source,
                                section: name.clone(),
                            });
                        }
                        sections.entry(name.clone()).or_default();
                    }
                    continue;
                }

                for name in &current {
                    if let Some(queries) = sections.get_mut(name) {
                        queries.push(entry.to_string());
                    }
                }
            }
        }

        Ok(Self { source, sections })
    }

    /// Build a config from the value of a `browserslist` key in `package.json`.
    ///
    /// A string or array becomes the `defaults` section. An object maps each
    /// key to a section. A lone string query is kept unsplit.
    pub fn from_package_value(
        value: &Value,
        source: impl Into<PathBuf>,
    ) -> Result<Self, DiscoveryError> {
        let source = source.into();
        let mut sections = IndexMap::new();

        match value {
            Value::Object(map) => {
                for (name, queries) in map {
                    let queries = queries_from_value(queries)
                        .ok_or_else(|| DiscoveryError::InvalidValue(source.clone()))?;
                    sections.insert(name.clone(), queries);
                }
                sections.entry(DEFAULT_SECTION.to_string()).or_default();
            }
            other => {
                let queries = queries_from_value(other)
                    .ok_or_else(|| DiscoveryError::InvalidValue(source.clone()))?;
                sections.insert(DEFAULT_SECTION.to_string(), queries);
            }
        }

        Ok(Self { source, sections })
    }

    /// File the configuration was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Queries of the `defaults` section.
    pub fn defaults(&self) -> &[String] {
        self.sections
            .get(DEFAULT_SECTION)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Queries for `env`, falling back to `defaults` when the section is absent.
    pub fn env(&self, env: &str) -> &[String] {
        match self.sections.get(env) {
            Some(queries) => queries,
            None => self.defaults(),
        }
    }

    pub fn sections(&self) -> &IndexMap<String, Vec<String>> {
        &self.sections
    }

    /// Whether the `defaults` section equals [`DEFAULT_BROWSERS`].
    pub fn is_default(&self) -> bool {
        self.defaults().iter().map(String::as_str).eq(DEFAULT_BROWSERS)
    }
}

fn section_header(entry: &str) -> Option<Vec<String>> {
    let inner = entry.strip_prefix('[')?.strip_suffix(']')?.trim();
    if inner.is_empty() {
        return None;
    }
    Some(inner.split_whitespace().map(str::to_string).collect())
}

fn queries_from_value(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(query) => Some(vec![query.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => None,
    }
}
