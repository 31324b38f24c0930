//! Terminal UI utilities for status output and terminal detection.
//!
//! # Examples
//!
//! ```no_run
//! use fob_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Target browsers configured");
//! ui::warning("Could not add default browsers");
//! ```

mod messages;

pub use messages::{success, warning};

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Whether the user can answer prompts.
///
/// Requires stdout to be a terminal and no CI environment. `--non-interactive`
/// forces `false`.
pub fn is_interactive(non_interactive: bool) -> bool {
    !non_interactive && console::user_attended() && !is_ci()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment and `--no-color`.
///
/// Should be called early in the application lifecycle (e.g., in main).
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
