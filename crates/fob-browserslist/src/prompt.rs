//! Yes/no confirmation used before writing default browsers.

use std::collections::VecDeque;

use async_trait::async_trait;
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Stream::Stderr};
use parking_lot::Mutex;
use tracing::warn;

/// A single yes/no question.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask `message` and return the answer. `default` is the answer used
    /// when the user just presses enter.
    async fn confirm(&self, message: &str, default: bool) -> std::io::Result<bool>;
}

/// Prompt on the attached terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn confirm(&self, message: &str, default: bool) -> std::io::Result<bool> {
        let message = message.to_string();
        tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(message)
                .default(default)
                .interact()
                .map_err(std::io::Error::other)
        })
        .await
        .map_err(std::io::Error::other)?
    }
}

/// Pre-recorded answers, for tests and scripted runs.
///
/// Questions are recorded with their default answer in the order they were
/// asked. Running out of answers is reported as an `UnexpectedEof` error.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<(String, bool)>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked so far, with the default answer offered.
    pub fn asked(&self) -> Vec<(String, bool)> {
        self.asked.lock().clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn confirm(&self, message: &str, default: bool) -> std::io::Result<bool> {
        self.asked.lock().push((message.to_string(), default));
        self.answers.lock().pop_front().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}

/// Question asked when no target browsers are configured.
pub fn set_browsers_question() -> String {
    format!(
        "{}\n\nWould you like to add the defaults to your {}?",
        "We're unable to detect target browsers.".if_supports_color(Stderr, |t| t.yellow()),
        "package.json".if_supports_color(Stderr, |t| t.bold())
    )
}

/// Decide whether default browsers should be written.
///
/// Non-interactive sessions always proceed without asking. A prompt that
/// cannot be answered counts as a refusal.
pub async fn should_set_browsers(interactive: bool, prompter: &dyn Prompter) -> bool {
    if !interactive {
        return true;
    }

    match prompter.confirm(&set_browsers_question(), true).await {
        Ok(answer) => answer,
        Err(err) => {
            warn!("Could not ask about target browsers: {}", err);
            false
        }
    }
}
