//! Ensure a project declares its target browsers.
//!
//! The check runs as a small state machine:
//!
//! ```text
//! Resolving(retry) --found--> done
//!        | miss, retry              | miss, no retry
//!        v                          v
//! AwaitingConsent               NotConfigured
//!        | accepted: write defaults (best effort)
//!        | declined: nothing
//!        v
//! Resolving(no retry)
//! ```
//!
//! `retry` only ever goes from `true` to `false`, so there are at most two
//! lookups, one consent decision and one write. Lookups are synchronous
//! (see [`BrowserslistDiscovery::find_config`]); only the prompt and the
//! manifest write yield.

use std::path::Path;

use tracing::{debug, info_span, Instrument};

use crate::config::BrowserslistConfig;
use crate::discovery::BrowserslistDiscovery;
use crate::error::{BrowsersError, Result};
use crate::manifest::{write_default_browsers, DefaultsWrite};
use crate::prompt::{should_set_browsers, Prompter};

#[derive(Debug, Clone, Copy)]
enum State {
    Resolving { retry: bool },
    AwaitingConsent,
}

/// What happened during a check.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of configuration lookups performed.
    pub resolutions: usize,
    /// Consent decision, if one was needed.
    pub consent: Option<bool>,
    /// Outcome of the default writer, if it ran.
    pub write: Option<DefaultsWrite>,
}

/// Return the browserslist config for `dir`, offering to write defaults
/// when there is none.
///
/// # Errors
///
/// [`BrowsersError::NotConfigured`] when no config exists after the consent
/// step, or [`BrowsersError::Discovery`] when an existing config is invalid.
pub async fn check_browsers(
    dir: &Path,
    interactive: bool,
    discovery: &BrowserslistDiscovery,
    prompter: &dyn Prompter,
) -> Result<BrowserslistConfig> {
    check_browsers_with_report(dir, interactive, discovery, prompter)
        .await
        .0
}

/// Like [`check_browsers`], also returning a [`CheckReport`].
pub async fn check_browsers_with_report(
    dir: &Path,
    interactive: bool,
    discovery: &BrowserslistDiscovery,
    prompter: &dyn Prompter,
) -> (Result<BrowserslistConfig>, CheckReport) {
    let span = info_span!("check_browsers", dir = %dir.display(), interactive);
    run(dir, interactive, discovery, prompter)
        .instrument(span)
        .await
}

async fn run(
    dir: &Path,
    interactive: bool,
    discovery: &BrowserslistDiscovery,
    prompter: &dyn Prompter,
) -> (Result<BrowserslistConfig>, CheckReport) {
    let mut report = CheckReport::default();
    let mut state = State::Resolving { retry: true };

    let result = loop {
        state = match state {
            State::Resolving { retry } => {
                report.resolutions += 1;
                match discovery.find_config(dir) {
                    Ok(Some(config)) => break Ok(config),
                    Ok(None) if retry => State::AwaitingConsent,
                    Ok(None) => break Err(BrowsersError::NotConfigured),
                    Err(err) => break Err(err.into()),
                }
            }
            State::AwaitingConsent => {
                let accepted = should_set_browsers(interactive, prompter).await;
                debug!(accepted, "Default browsers consent");
                report.consent = Some(accepted);

                if accepted {
                    report.write = Some(write_default_browsers(dir, discovery).await);
                }
                State::Resolving { retry: false }
            }
        };
    };

    (result, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn found_config_skips_consent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".browserslistrc"), "last 1 version").unwrap();
        let prompter = ScriptedPrompter::new([]);

        let (result, report) = check_browsers_with_report(
            dir.path(),
            true,
            &BrowserslistDiscovery::new(),
            &prompter,
        )
        .await;

        assert_eq!(result.unwrap().defaults(), ["last 1 version"]);
        assert_eq!(report.resolutions, 1);
        assert!(report.consent.is_none());
        assert!(prompter.asked().is_empty());
    }

    #[tokio::test]
    async fn decline_resolves_twice_then_fails() {
        let dir = TempDir::new().unwrap();
        let prompter = ScriptedPrompter::new([false]);

        let (result, report) = check_browsers_with_report(
            dir.path(),
            true,
            &BrowserslistDiscovery::new(),
            &prompter,
        )
        .await;

        assert!(matches!(result, Err(BrowsersError::NotConfigured)));
        assert_eq!(report.resolutions, 2);
        assert_eq!(report.consent, Some(false));
        assert!(report.write.is_none());
    }

    #[tokio::test]
    async fn invalid_config_is_surfaced_without_consent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("browserslist"), "> 1%").unwrap();
        fs::write(dir.path().join(".browserslistrc"), "> 1%").unwrap();
        let prompter = ScriptedPrompter::new([true]);

        let (result, report) = check_browsers_with_report(
            dir.path(),
            true,
            &BrowserslistDiscovery::new(),
            &prompter,
        )
        .await;

        assert!(matches!(result, Err(BrowsersError::Discovery(_))));
        assert_eq!(report.resolutions, 1);
        assert!(prompter.asked().is_empty());
    }
}
