#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, OutputFormat};
    use clap::Parser;
    use std::path::PathBuf;

    fn browsers(argv: &[&str]) -> crate::cli::BrowsersArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Browsers(args) => args,
        }
    }

    #[test]
    fn browsers_defaults() {
        let args = browsers(&["fob", "browsers"]);
        assert!(args.dir.is_none());
        assert!(!args.non_interactive);
        assert!(args.env.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.print_defaults);
    }

    #[test]
    fn browsers_with_all_options() {
        let args = browsers(&[
            "fob",
            "browsers",
            "apps/web",
            "--non-interactive",
            "--env",
            "production",
            "--format",
            "json",
        ]);
        assert_eq!(args.dir, Some(PathBuf::from("apps/web")));
        assert!(args.non_interactive);
        assert_eq!(args.env.as_deref(), Some("production"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn print_defaults_conflicts_with_dir() {
        let result = Cli::try_parse_from(["fob", "browsers", "apps/web", "--print-defaults"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["fob", "-q", "-v", "browsers"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fob", "browsers", "--no-color", "--verbose"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn invalid_format_rejected() {
        let result = Cli::try_parse_from(["fob", "browsers", "--format", "yaml"]);
        assert!(result.is_err());
    }
}
