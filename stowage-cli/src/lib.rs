//! Command-line interface for the Stowage matching engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod search;

pub use error::CliError;
use search::SearchArgs;

pub(crate) const ARG_SEARCH_REQUEST: &str = "request-path";
pub(crate) const ARG_SEARCH_CATALOG: &str = "catalog";
pub(crate) const ARG_MAX_LISTINGS_PER_LOCATION: &str = "max-listings-per-location";
pub(crate) const ARG_TIME_LIMIT_SECS: &str = "time-limit-secs";
pub(crate) const ARG_SEQUENTIAL: &str = "sequential";
pub(crate) const ENV_SEARCH_REQUEST: &str = "STOWAGE_CMDS_SEARCH_REQUEST_PATH";
pub(crate) const ENV_SEARCH_CATALOG: &str = "STOWAGE_CMDS_SEARCH_CATALOG";

/// Run the Stowage CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Search(args) => search::run_search(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "stowage",
    about = "Find the cheapest storage listings for a set of vehicles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Quote the cheapest listings per location for a vehicle request.
    Search(SearchArgs),
}

#[cfg(test)]
mod tests;
