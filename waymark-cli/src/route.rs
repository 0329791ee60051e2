//! Route command implementation: geocode addresses, then plan in one shot.

use std::fs::File;
use std::io::{BufWriter, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::{
    DirectionsProvider, Geocoder, MIN_WAYPOINTS_FOR_ROUTE, RouteController, RouteSink,
};

use crate::output::{GeoJsonSink, OutputFormat, TerminalSink};
use crate::service::{ServiceConfig, default_directions_url, default_geocoder_url};
use crate::{
    ARG_DIRECTIONS_URL, ARG_FORMAT, ARG_GEOCODER_URL, ARG_OUTPUT, ARG_TIMEOUT_SECS,
    ARG_USER_AGENT, CliError,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Geocode each address in order, then plan walking segments \
                 between consecutive stops, keeping the shortest alternative \
                 per segment. Service endpoints can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Plan a walking route through the given addresses"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct RouteArgs {
    /// Street addresses to visit, in order.
    #[arg(value_name = "address")]
    #[serde(default)]
    pub(crate) addresses: Vec<String>,
    /// Output encoding for the planned route.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Write output to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
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

impl RouteArgs {
    fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    /// Addresses to visit, in the order given.
    pub(crate) addresses: Vec<String>,
    /// Output encoding.
    pub(crate) format: OutputFormat,
    /// Output file, or `None` for standard output.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Resolved service endpoints.
    pub(crate) service: ServiceConfig,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        if args.addresses.len() < MIN_WAYPOINTS_FOR_ROUTE {
            return Err(CliError::NotEnoughAddresses {
                minimum: MIN_WAYPOINTS_FOR_ROUTE,
                count: args.addresses.len(),
            });
        }
        let service = ServiceConfig {
            geocoder_url: args.geocoder_url.unwrap_or_else(default_geocoder_url),
            directions_url: args.directions_url.unwrap_or_else(default_directions_url),
            timeout_secs: args.timeout_secs,
            user_agent: args.user_agent,
        };
        Ok(Self {
            addresses: args.addresses,
            format: args.format.unwrap_or_default(),
            output: args.output,
            service,
        })
    }
}

pub(super) async fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let geocoder = config.service.build_geocoder()?;
    let directions = config.service.build_directions()?;
    match config.output.clone() {
        Some(path) => {
            let file = File::create(path.as_std_path()).map_err(|source| {
                CliError::CreateOutputFile {
                    path: path.clone(),
                    source,
                }
            })?;
            let mut writer = BufWriter::new(file);
            run_route_with(config, geocoder, directions, &mut writer).await?;
            writer.flush().map_err(CliError::WriteOutput)
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            run_route_with(config, geocoder, directions, &mut stdout).await
        }
    }
}

/// Drive the one-shot route flow with the given adapters.
pub(crate) async fn run_route_with<G, D>(
    config: RouteConfig,
    geocoder: G,
    directions: D,
    writer: &mut dyn Write,
) -> Result<(), CliError>
where
    G: Geocoder,
    D: DirectionsProvider,
{
    let mut controller = RouteController::new(geocoder, directions);
    match config.format {
        OutputFormat::Text => {
            let mut sink = TerminalSink::new(&mut *writer);
            let drawn = execute_route(&mut controller, &config.addresses, &mut sink).await?;
            let total = sink.total_metres();
            writeln!(writer, "route complete: {drawn} segments, {total:.1} m")
                .map_err(CliError::WriteOutput)
        }
        OutputFormat::Geojson => {
            let mut sink = GeoJsonSink::new();
            execute_route(&mut controller, &config.addresses, &mut sink).await?;
            let document = sink.to_feature_collection();
            let payload =
                serde_json::to_string_pretty(&document).map_err(CliError::SerialiseOutput)?;
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteOutput)?;
            writer.write_all(b"\n").map_err(CliError::WriteOutput)
        }
    }
}

async fn execute_route<G, D, S>(
    controller: &mut RouteController<G, D>,
    addresses: &[String],
    sink: &mut S,
) -> Result<usize, CliError>
where
    G: Geocoder,
    D: DirectionsProvider,
    S: RouteSink,
{
    for address in addresses {
        controller
            .add_address(address, sink)
            .await
            .map_err(|source| CliError::Geocode {
                address: address.clone(),
                source,
            })?;
    }
    controller.build_route(sink).await.map_err(CliError::from)
}
