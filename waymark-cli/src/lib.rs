//! Command-line interface for the Waymark walking-route planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod output;
mod route;
mod service;
mod session;

pub use error::CliError;

use route::RouteArgs;
use session::SessionArgs;

pub(crate) const ARG_GEOCODER_URL: &str = "geocoder-url";
pub(crate) const ARG_DIRECTIONS_URL: &str = "directions-url";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ARG_USER_AGENT: &str = "user-agent";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_OUTPUT: &str = "output";

/// Run the Waymark CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration layering, or
/// the dispatched command fails.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => route::run_route(args).await,
        Command::Session(args) => session::run_session(args).await,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waymark",
    about = "Plan walking routes between street addresses",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Geocode the given addresses and plan a walking route through them.
    Route(RouteArgs),
    /// Start an interactive planning session.
    Session(SessionArgs),
}

#[cfg(test)]
mod tests;
