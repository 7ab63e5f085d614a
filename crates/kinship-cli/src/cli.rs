//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kinship CLI - Name the relationship between people in a family tree.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINSHIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (labels only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Label one person relative to a root
    Classify(ClassifyArgs),

    /// Label everyone in the tree relative to a root
    Tree(TreeArgs),

    /// Check whether two people are blood relatives
    Blood(BloodArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Snapshot location shared by the data commands.
#[derive(Debug, Parser)]
pub struct DataArgs {
    /// JSON snapshot with `people` and `relationships`
    #[arg(short, long, env = "KINSHIP_DATA")]
    pub data: PathBuf,

    /// Ignore birth and death dates
    #[arg(long)]
    pub lenient: bool,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Person to describe
    pub person: String,

    /// Person the label is relative to
    pub root: String,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Arguments for the tree command.
#[derive(Debug, Parser)]
pub struct TreeArgs {
    /// Person every label is relative to
    pub root: String,

    #[command(flatten)]
    pub data: DataArgs,

    /// Hide people with no relationship to the root
    #[arg(short, long)]
    pub related: bool,
}

/// Arguments for the blood command.
#[derive(Debug, Parser)]
pub struct BloodArgs {
    /// First person
    pub a: String,

    /// Second person
    pub b: String,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_command() {
        let cli = Cli::parse_from(["kinship", "classify", "michael", "alice", "--data", "tree.json"]);
        match cli.command {
            Command::Classify(args) => {
                assert_eq!(args.person, "michael");
                assert_eq!(args.root, "alice");
                assert_eq!(args.data.data, PathBuf::from("tree.json"));
                assert!(!args.data.lenient);
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "kinship", "tree", "alice", "-d", "tree.json", "--format", "json", "--no-color", "-vv",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Tree(_)));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["kinship", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_missing_data_is_rejected() {
        let result = Cli::try_parse_from(["kinship", "blood", "a", "b"]);
        if std::env::var_os("KINSHIP_DATA").is_none() {
            assert!(result.is_err());
        }
    }
}
