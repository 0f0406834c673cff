//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Track learning progress: points, badges, paths, nodes and mentors.
#[derive(Parser, Debug)]
#[command(name = "academy", version, about)]
pub struct Cli {
    /// Path to the YAML config (default: `academy-config.yaml` if present)
    #[arg(long, global = true, value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Directory holding persisted progress (overrides `storage.data_dir`)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the current progress summary
    Status,

    /// List paths, badges, nodes and mentors
    Catalog,

    /// Select a learning path
    SelectPath {
        /// Path identifier (e.g. `explorer`)
        id: String,
    },

    /// Check that a learning node is unlocked
    Start {
        /// Node identifier
        node: String,
    },

    /// Complete a learning node and collect its rewards
    Complete {
        /// Node identifier
        node: String,
    },

    /// Grant a badge explicitly
    Award {
        /// Badge identifier
        badge: String,
    },

    /// Add bonus points (negative amounts are rejected)
    Points {
        /// Amount to add
        #[arg(allow_hyphen_values = true)]
        amount: i64,
    },

    /// Request or end a mentorship
    #[command(subcommand)]
    Mentor(MentorCommand),
}

/// Mentor subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum MentorCommand {
    /// Request an available mentor
    Request {
        /// Mentor identifier
        id: String,
    },

    /// End the active mentorship
    End,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Cli> {
        Cli::try_parse_from(args).ok()
    }

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli =
            parse(&["academy", "status", "--data-dir", "/tmp/a", "--config", "c.yaml"]).unwrap();
        assert_eq!(cli.command, Command::Status);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/a")));
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
        assert!(!cli.log_json);
    }

    #[test]
    fn parses_negative_point_amount() {
        let cli = parse(&["academy", "points", "-5"]);
        assert_eq!(cli.map(|c| c.command), Some(Command::Points { amount: -5 }));
    }

    #[test]
    fn parses_mentor_subcommands() {
        let request = parse(&["academy", "mentor", "request", "alex-chen"]);
        assert_eq!(
            request.map(|c| c.command),
            Some(Command::Mentor(MentorCommand::Request {
                id: "alex-chen".to_owned()
            }))
        );
        let end = parse(&["academy", "mentor", "end"]);
        assert_eq!(end.map(|c| c.command), Some(Command::Mentor(MentorCommand::End)));
    }

    #[test]
    fn select_path_uses_kebab_case_name() {
        let cli = parse(&["academy", "select-path", "guardian"]);
        assert_eq!(
            cli.map(|c| c.command),
            Some(Command::SelectPath {
                id: "guardian".to_owned()
            })
        );
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(parse(&["academy"]).is_none());
        assert!(parse(&["academy", "points", "ten"]).is_none());
    }
}
