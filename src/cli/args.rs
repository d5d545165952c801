//! CLI argument definitions using clap
//!
//! Commands:
//! - lkpostal districts --data <path>
//! - lkpostal query --data <path> [--search s] [--district d] [--type t] [--page n]
//! - lkpostal session --data <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::query::TypeFilter;

/// lkpostal - Sri Lankan postal code lookup
#[derive(Parser, Debug)]
#[command(name = "lkpostal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the sorted district list
    Districts {
        /// Path to the dataset JSON file
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Run one filtered, paginated lookup and exit
    Query {
        /// Path to the dataset JSON file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Free-text search over office name, postal code and district
        #[arg(long, default_value = "")]
        search: String,

        /// District name, or "all"
        #[arg(long, default_value = "all")]
        district: String,

        /// Office type: all, main or sub
        #[arg(long = "type", default_value = "all")]
        office_type: TypeFilter,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Read one JSON event per stdin line and print the view after each
    Session {
        /// Path to the dataset JSON file
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_query() {
        let cli = Cli::try_parse_from([
            "lkpostal", "query", "--data", "data.json", "--search", "kandy", "--type", "sub",
            "--page", "2",
        ])
        .unwrap();

        match cli.command {
            Command::Query {
                search,
                district,
                office_type,
                page,
                ..
            } => {
                assert_eq!(search, "kandy");
                assert_eq!(district, "all");
                assert_eq!(office_type, TypeFilter::Sub);
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["lkpostal", "query", "--type", "branch"]).is_err());
    }
}
