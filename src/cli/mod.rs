//! CLI module for lkpostal
//!
//! Provides a command-line front end over the query engine:
//! - districts: print the district index
//! - query: one-shot filtered lookup
//! - session: line-oriented event loop over stdin

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{districts, query, run, run_command, run_query, run_session, QueryRequest};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_requests, write_error, write_rejected, write_response};
