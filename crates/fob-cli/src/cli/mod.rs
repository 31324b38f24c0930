//! Command-line interface definition for Fob.
//!
//! Defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `fob browsers [DIR]` - Resolve target browsers, offering to add defaults

mod commands;
pub mod enums;
mod tests;

use clap::Parser;

pub use commands::{BrowsersArgs, Command};
pub use enums::*;

/// Fob - JavaScript/TypeScript project tooling
#[derive(Parser, Debug)]
#[command(
    name = "fob",
    version,
    about = "JavaScript/TypeScript project tooling",
    long_about = "Fob checks that a project declares the browsers it targets.\n\
                  When no browserslist configuration is found it offers to add\n\
                  a sensible default to the nearest package.json."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Useful for CI/CD environments
    /// or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
