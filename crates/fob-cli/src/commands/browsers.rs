//! Browsers command implementation.
//!
//! Resolves the target browsers of a project and prints them to stdout.
//! Status lines go to stderr so the output can be piped.

use std::path::{Path, PathBuf};

use fob_browserslist::{
    check_browsers_with_report, discovery, BrowserslistConfig, CheckReport, DefaultsWrite,
    TerminalPrompter, DEFAULT_BROWSERS,
};
use tracing::debug;

use crate::cli::{BrowsersArgs, OutputFormat};
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the browsers command.
///
/// # Process
///
/// 1. Resolve the project directory
/// 2. Find the browserslist config, offering to write defaults
/// 3. Print the queries for the requested environment
///
/// # Errors
///
/// Returns errors for a missing directory, for an invalid browserslist
/// configuration, or when no configuration exists after the check.
pub async fn execute(args: BrowsersArgs) -> Result<()> {
    if args.print_defaults {
        for query in DEFAULT_BROWSERS {
            println!("{query}");
        }
        return Ok(());
    }

    let dir = project_dir(args.dir.as_deref())?;
    let interactive = ui::is_interactive(args.non_interactive);
    debug!("Checking target browsers in {} (interactive: {})", dir.display(), interactive);

    let (result, report) =
        check_browsers_with_report(&dir, interactive, discovery::global(), &TerminalPrompter).await;
    if let Some(message) = skipped_write_message(&report) {
        ui::warning(&message);
    }

    let config = result?;
    ui::success(&format!(
        "Target browsers from {}",
        config.source().display()
    ));

    println!("{}", render(&config, args.env.as_deref(), args.format)?);
    Ok(())
}

/// Resolve the directory argument against the current directory.
fn project_dir(dir: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let dir = match dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    if !dir.exists() {
        return Err(CliError::FileNotFound(dir));
    }
    if !dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }
    Ok(dir)
}

/// Warning for a write that was attempted but did not happen.
fn skipped_write_message(report: &CheckReport) -> Option<String> {
    match &report.write {
        Some(DefaultsWrite::Skipped(reason)) => {
            Some(format!("Could not add default browsers: {reason}"))
        }
        _ => None,
    }
}

fn render(config: &BrowserslistConfig, env: Option<&str>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let queries = match env {
                Some(env) => config.env(env),
                None => config.defaults(),
            };
            Ok(queries.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config.sections())?),
    }
}
