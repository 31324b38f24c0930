//! Ambient settings for browserslist discovery.

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SettingsError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserslistSettings {
    /// Skip the per-directory lookup cache (`BROWSERSLIST_DISABLE_CACHE`).
    #[serde(default, deserialize_with = "flag")]
    pub disable_cache: bool,
}

/// Any non-empty value other than `0` or `false` counts as set.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
        Flag::Text(s) => !matches!(s.trim(), "" | "0" | "false"),
    })
}

impl BrowserslistSettings {
    /// Load settings from the environment.
    /// Priority: environment variables > defaults
    pub fn load() -> Result<Self, SettingsError> {
        Self::figment().extract().map_err(SettingsError::from)
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("BROWSERSLIST_"))
    }
}
