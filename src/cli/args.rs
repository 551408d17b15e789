//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translatable strings and their translator comments
//! - `docs`: Extract documentation records from doc comments
//! - `init`: Initialize glean configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Docs(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cargo-style listing
    #[default]
    Text,
    /// Pretty-printed JSON array of records
    Json,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides current directory)
    #[arg(long, env = "GLEAN_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DocsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings with their translator comments
    Extract(ExtractCommand),
    /// Extract documentation for declarations from doc comments
    Docs(DocsCommand),
    /// Initialize a new .gleanrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract_with_flags() {
        let args = Arguments::try_parse_from([
            "glean",
            "extract",
            "--source-root",
            "src",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        let Some(Command::Extract(cmd)) = &args.command else {
            panic!("expected extract command");
        };
        assert_eq!(cmd.common.source_root, Some(PathBuf::from("src")));
        assert_eq!(cmd.common.format, OutputFormat::Json);
        assert!(args.verbose());
    }

    #[test]
    fn test_format_defaults_to_text() {
        let args = Arguments::try_parse_from(["glean", "docs"]).unwrap();
        let Some(Command::Docs(cmd)) = &args.command else {
            panic!("expected docs command");
        };
        assert_eq!(cmd.common.format, OutputFormat::Text);
        assert!(!args.verbose());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Arguments::try_parse_from(["glean", "extract", "--format", "xml"]).is_err());
    }

    #[test]
    fn verify_cli() {
        Arguments::command().debug_assert();
    }
}
