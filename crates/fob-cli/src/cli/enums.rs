use clap::ValueEnum;

/// Output format for resolved browser queries
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// One query per line
    #[value(name = "text")]
    Text,

    /// All sections as a JSON object
    #[value(name = "json")]
    Json,
}
