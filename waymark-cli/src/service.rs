//! Service endpoint configuration shared by the CLI commands.

use std::time::Duration;

use waymark_data::geocoding::{HttpGeocoder, HttpGeocoderConfig};
use waymark_data::routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig};

use crate::CliError;

/// Resolved service endpoints for the `route` and `session` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceConfig {
    /// Base URL of the Nominatim-compatible geocoding service.
    pub(crate) geocoder_url: String,
    /// Base URL of the OSRM-compatible routing service.
    pub(crate) directions_url: String,
    /// Request timeout override in seconds, applied to both services.
    pub(crate) timeout_secs: Option<u64>,
    /// User agent override, applied to both services.
    pub(crate) user_agent: Option<String>,
}

pub(crate) fn default_geocoder_url() -> String {
    HttpGeocoderConfig::default().base_url
}

pub(crate) fn default_directions_url() -> String {
    HttpDirectionsProviderConfig::default().base_url
}

impl ServiceConfig {
    pub(crate) fn build_geocoder(&self) -> Result<HttpGeocoder, CliError> {
        let mut config = HttpGeocoderConfig::new(self.geocoder_url.clone());
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &self.user_agent {
            config = config.with_user_agent(agent.clone());
        }
        HttpGeocoder::with_config(config).map_err(|source| CliError::BuildGeocoder {
            base_url: self.geocoder_url.clone(),
            source,
        })
    }

    pub(crate) fn build_directions(&self) -> Result<HttpDirectionsProvider, CliError> {
        let mut config = HttpDirectionsProviderConfig::new(self.directions_url.clone());
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &self.user_agent {
            config = config.with_user_agent(agent.clone());
        }
        HttpDirectionsProvider::with_config(config).map_err(|source| {
            CliError::BuildDirectionsProvider {
                base_url: self.directions_url.clone(),
                source,
            }
        })
    }
}
