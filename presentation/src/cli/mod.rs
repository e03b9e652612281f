//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// docroom - collaboration session tools
#[derive(Parser, Debug)]
#[command(name = "docroom", version, about = "Session bootstrap and health tools for collaborative rooms")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ignore config files and environment overrides, use built-in defaults
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate into a room and report the session state
    Join {
        /// Room to join (maps 1:1 to a document)
        room: String,
    },

    /// Probe all backend dependencies and print the health report
    Health,

    /// List mention candidates for a query against the participant directory
    Mentions {
        /// Case-insensitive substring of a display name; omit to list everyone
        query: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_join() {
        let cli = Cli::parse_from(["docroom", "join", "doc_123"]);
        match cli.command {
            Command::Join { room } => assert_eq!(room, "doc_123"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_health_with_verbosity() {
        let cli = Cli::parse_from(["docroom", "-vv", "health"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Health));
    }

    #[test]
    fn test_parse_no_config_flag() {
        let cli = Cli::parse_from(["docroom", "--no-config", "health"]);
        assert!(cli.no_config);

        // Mutually exclusive with an explicit config path
        assert!(Cli::try_parse_from(["docroom", "--no-config", "-c", "x.toml", "health"]).is_err());
    }

    #[test]
    fn test_parse_mentions_query_is_optional() {
        let cli = Cli::parse_from(["docroom", "mentions"]);
        match cli.command {
            Command::Mentions { query } => assert!(query.is_none()),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
