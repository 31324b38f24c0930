use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::OutputFormat;

/// Available Fob subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the target browsers of a project
    ///
    /// Searches the directory and its parents for a `browserslist` file,
    /// a `.browserslistrc` file, or a `browserslist` key in package.json.
    /// When none is found, offers to add the default list to the nearest
    /// package.json. Non-interactive sessions add it without asking.
    Browsers(BrowsersArgs),
}

/// Arguments for the browsers command
#[derive(Args, Debug)]
pub struct BrowsersArgs {
    /// Project directory to check
    ///
    /// Defaults to the current directory.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Never prompt; add the defaults when no configuration exists
    #[arg(long)]
    pub non_interactive: bool,

    /// Environment section to print (falls back to `defaults`)
    ///
    /// Examples:
    ///   fob browsers --env production
    #[arg(long, value_name = "NAME")]
    pub env: Option<String>,

    /// Output format for the resolved queries
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the default browser list and exit
    #[arg(long, conflicts_with_all = ["dir", "non_interactive", "env"])]
    pub print_defaults: bool,
}
