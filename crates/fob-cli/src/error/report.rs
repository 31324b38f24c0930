//! Miette report conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        // Library errors are diagnostics already; keep their codes and help
        CliError::Browsers(e) => Report::new(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Pass an existing project directory",
            "Directory not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}
