use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "caldiff",
    about = "caldiff — structural diff for calendar objects",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the changes that turn RIGHT into LEFT
    Diff(DiffArgs),
    /// Show the effective skip set
    Skips(SkipsArgs),
}

/// Skip-set options shared by every command.
#[derive(Args)]
pub struct SkipArgs {
    /// TOML file with skip settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Extra name to skip, in Clark notation (`{namespace}local`)
    #[arg(long = "skip")]
    pub skip: Vec<String>,
    /// Start from an empty skip set instead of the iCalendar defaults
    #[arg(long)]
    pub no_default_skips: bool,
}

#[derive(Args)]
pub struct DiffArgs {
    /// Local (authoritative) document, JSON
    pub left: PathBuf,
    /// Stored counterpart, JSON
    pub right: PathBuf,
    #[command(flatten)]
    pub skips: SkipArgs,
}

#[derive(Args)]
pub struct SkipsArgs {
    #[command(flatten)]
    pub skips: SkipArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["caldiff", "diff", "a.json", "b.json"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.left, PathBuf::from("a.json"));
            assert_eq!(args.right, PathBuf::from("b.json"));
            assert!(args.skips.config.is_none());
            assert!(args.skips.skip.is_empty());
            assert!(!args.skips.no_default_skips);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_requires_both_documents() {
        assert!(Cli::try_parse_from(["caldiff", "diff", "a.json"]).is_err());
    }

    #[test]
    fn parse_repeated_skips() {
        let cli = Cli::try_parse_from([
            "caldiff", "diff", "a.json", "b.json",
            "--skip", "x-foo",
            "--skip", "{urn:ietf:params:xml:ns:icalendar-2.0}sequence",
            "--no-default-skips",
        ])
        .unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.skips.skip.len(), 2);
            assert!(args.skips.no_default_skips);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_skips_with_config() {
        let cli = Cli::try_parse_from(["caldiff", "skips", "-c", "caldiff.toml"]).unwrap();
        if let Command::Skips(args) = cli.command {
            assert_eq!(args.skips.config, Some(PathBuf::from("caldiff.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["caldiff", "--verbose", "skips"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["caldiff", "--format", "json", "skips"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
