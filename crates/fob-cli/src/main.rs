//! Fob CLI - target-browser checks for JavaScript projects.
//!
//! This is the main entry point for the Fob CLI. It handles command-line argument
//! parsing, logging initialization, and command dispatch.

use clap::Parser;
use fob_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Browsers(browsers_args) => commands::browsers_execute(browsers_args).await,
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
