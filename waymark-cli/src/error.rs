//! Error types emitted by the Waymark CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use waymark_core::{GeocodeError, PlanError};
use waymark_data::ProviderBuildError;

/// Errors emitted by the Waymark CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The route command received fewer addresses than a route needs.
    #[error("route needs at least {minimum} addresses, received {count}")]
    NotEnoughAddresses {
        /// Smallest address count that unlocks planning.
        minimum: usize,
        /// Number of addresses actually supplied.
        count: usize,
    },
    /// Constructing the geocoding client failed.
    #[error("failed to build geocoder for {base_url:?}: {source}")]
    BuildGeocoder {
        /// Base URL the client was configured with.
        base_url: String,
        /// Underlying build failure.
        #[source]
        source: ProviderBuildError,
    },
    /// Constructing the directions client failed.
    #[error("failed to build directions provider for {base_url:?}: {source}")]
    BuildDirectionsProvider {
        /// Base URL the client was configured with.
        base_url: String,
        /// Underlying build failure.
        #[source]
        source: ProviderBuildError,
    },
    /// An address could not be resolved to a coordinate.
    #[error("failed to geocode {address:?}: {source}")]
    Geocode {
        /// Address text as the user supplied it.
        address: String,
        /// Underlying geocoding failure.
        #[source]
        source: GeocodeError,
    },
    /// Planning a route segment failed.
    #[error(transparent)]
    Planning(#[from] PlanError),
    /// Creating the requested output file failed.
    #[error("failed to create output file {path}: {source}")]
    CreateOutputFile {
        /// Path passed via `--output`.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the GeoJSON document failed.
    #[error("failed to serialise route output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Reading interactive input failed.
    #[error("failed to read session input: {0}")]
    ReadInput(#[source] std::io::Error),
}
