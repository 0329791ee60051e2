//! Session command implementation: an interactive planning prompt.
//!
//! Lookup and planning failures are reported at the prompt and the session
//! continues; IO failures on the streams end it.

use std::io::{BufRead, Write};

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::{DirectionsProvider, Geocoder, MIN_WAYPOINTS_FOR_ROUTE, RouteController};

use crate::output::{TerminalSink, waypoint_line};
use crate::service::{ServiceConfig, default_directions_url, default_geocoder_url};
use crate::{ARG_DIRECTIONS_URL, ARG_GEOCODER_URL, ARG_TIMEOUT_SECS, ARG_USER_AGENT, CliError};

/// CLI arguments for the `session` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Start an interactive prompt for building a walking route: \
                 add addresses one by one, then plan or clear the route once \
                 enough stops exist.",
    about = "Plan routes interactively at a prompt"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct SessionArgs {
    /// Base URL of the Nominatim-compatible geocoding service.
    #[arg(long = ARG_GEOCODER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) geocoder_url: Option<String>,
    /// Base URL of the OSRM-compatible routing service.
    #[arg(long = ARG_DIRECTIONS_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) directions_url: Option<String>,
    /// Request timeout in seconds for both services.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// User agent header sent to both services.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
}

impl SessionArgs {
    fn into_config(self) -> Result<SessionConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(SessionConfig::from(merged))
    }
}

/// Resolved `session` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionConfig {
    /// Resolved service endpoints used for lookups during the session.
    pub(crate) service: ServiceConfig,
}

impl From<SessionArgs> for SessionConfig {
    fn from(args: SessionArgs) -> Self {
        Self {
            service: ServiceConfig {
                geocoder_url: args.geocoder_url.unwrap_or_else(default_geocoder_url),
                directions_url: args.directions_url.unwrap_or_else(default_directions_url),
                timeout_secs: args.timeout_secs,
                user_agent: args.user_agent,
            },
        }
    }
}

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionCommand<'a> {
    Add(&'a str),
    Route,
    Clear,
    List,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

pub(crate) fn parse_command(line: &str) -> SessionCommand<'_> {
    let trimmed = line.trim();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };
    match keyword {
        "" => SessionCommand::Empty,
        "add" => SessionCommand::Add(rest),
        "route" => SessionCommand::Route,
        "clear" => SessionCommand::Clear,
        "list" => SessionCommand::List,
        "help" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => SessionCommand::Unknown(other),
    }
}

pub(super) async fn run_session(args: SessionArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let geocoder = config.service.build_geocoder()?;
    let directions = config.service.build_directions()?;
    let input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    run_session_with(geocoder, directions, input, &mut output).await
}

/// Drive an interactive session over the given input and output streams.
pub(crate) async fn run_session_with<G, D, R>(
    geocoder: G,
    directions: D,
    input: R,
    writer: &mut dyn Write,
) -> Result<(), CliError>
where
    G: Geocoder,
    D: DirectionsProvider,
    R: BufRead,
{
    let mut controller = RouteController::new(geocoder, directions);
    let mut lines = input.lines();
    loop {
        write!(writer, "waymark> ").map_err(CliError::WriteOutput)?;
        writer.flush().map_err(CliError::WriteOutput)?;
        let Some(next_line) = lines.next() else { break };
        let line = next_line.map_err(CliError::ReadInput)?;
        match parse_command(&line) {
            SessionCommand::Add(address) => add_stop(&mut controller, address, writer).await?,
            SessionCommand::Route => plan_route(&mut controller, writer).await?,
            SessionCommand::Clear => clear_route(&mut controller, writer)?,
            SessionCommand::List => list_stops(&controller, writer)?,
            SessionCommand::Help => print_help(writer)?,
            SessionCommand::Quit => break,
            SessionCommand::Empty => {}
            SessionCommand::Unknown(command) => {
                writeln!(writer, "unknown command {command:?} (try help)")
                    .map_err(CliError::WriteOutput)?;
            }
        }
    }
    Ok(())
}

async fn add_stop<G: Geocoder, D: DirectionsProvider>(
    controller: &mut RouteController<G, D>,
    address: &str,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut sink = TerminalSink::new(&mut *writer);
    match controller.add_address(address, &mut sink).await {
        Ok(_) => Ok(()),
        Err(error) => writeln!(writer, "error: {error}").map_err(CliError::WriteOutput),
    }
}

async fn plan_route<G: Geocoder, D: DirectionsProvider>(
    controller: &mut RouteController<G, D>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    if !controller.route_available() {
        return report_locked(controller.waypoints().len(), writer);
    }
    let mut sink = TerminalSink::new(&mut *writer);
    let outcome = controller.build_route(&mut sink).await;
    let total = sink.total_metres();
    match outcome {
        Ok(drawn) => writeln!(writer, "route complete: {drawn} segments, {total:.1} m"),
        Err(error) => writeln!(writer, "error: {error}"),
    }
    .map_err(CliError::WriteOutput)
}

fn clear_route<G: Geocoder, D: DirectionsProvider>(
    controller: &mut RouteController<G, D>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    if !controller.route_available() {
        return report_locked(controller.waypoints().len(), writer);
    }
    let mut sink = TerminalSink::new(&mut *writer);
    controller.clear(&mut sink);
    Ok(())
}

fn list_stops<G: Geocoder, D: DirectionsProvider>(
    controller: &RouteController<G, D>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    if controller.waypoints().is_empty() {
        return writeln!(writer, "no stops yet (try add <address>)").map_err(CliError::WriteOutput);
    }
    for (index, waypoint) in controller.waypoints().iter().enumerate() {
        writeln!(writer, "{}", waypoint_line(index + 1, waypoint)).map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn report_locked(count: usize, writer: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        writer,
        "need at least {MIN_WAYPOINTS_FOR_ROUTE} stops (have {count})"
    )
    .map_err(CliError::WriteOutput)
}

fn print_help(writer: &mut dyn Write) -> Result<(), CliError> {
    writer
        .write_all(
            concat!(
                "commands:\n",
                "  add <address>  geocode an address and append it to the route\n",
                "  route          plan walking segments between stops (needs 3+)\n",
                "  clear          remove every stop and drawn segment (needs 3+)\n",
                "  list           show the stops added so far\n",
                "  help           show this summary\n",
                "  quit           end the session\n",
            )
            .as_bytes(),
        )
        .map_err(CliError::WriteOutput)
}
