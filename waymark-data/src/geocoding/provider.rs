//! HTTP geocoder backed by the Nominatim search API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;
use waymark_core::{GeocodeError, Geocoder, Waypoint};

use super::nominatim::SearchResult;
use crate::ProviderBuildError;

/// Default user agent for Nominatim requests.
///
/// Nominatim's usage policy requires an identifying user agent, so the
/// default names this crate rather than leaving reqwest's generic value.
pub const DEFAULT_USER_AGENT: &str = "waymark-geocoding/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpGeocoder`].
#[derive(Debug, Clone)]
pub struct HttpGeocoderConfig {
    /// Base URL for the Nominatim service.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpGeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpGeocoderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based [`Geocoder`] using the Nominatim search API.
///
/// Each resolve call issues a single search request limited to one result
/// and labels the returned waypoint with the caller's address text, not the
/// service's display name, so markers echo what the user typed.
#[derive(Debug)]
pub struct HttpGeocoder {
    client: Client,
    config: HttpGeocoderConfig,
}

impl HttpGeocoder {
    /// Create a new geocoder with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpGeocoderConfig::new(base_url))
    }

    /// Create a new geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: HttpGeocoderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Build the search URL for the given query.
    ///
    /// The URL format is `{base_url}/search?q={query}&format=jsonv2&limit=1`
    /// with the query form-encoded.
    fn build_search_url(&self, query: &str) -> Result<Url, url::ParseError> {
        let base = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        Url::parse_with_params(&base, [("q", query), ("format", "jsonv2"), ("limit", "1")])
    }

    /// Convert a reqwest error to a `GeocodeError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> GeocodeError {
        if error.is_timeout() {
            return GeocodeError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return GeocodeError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        GeocodeError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Convert the search results into the waypoint for `query`.
    fn convert_results(
        &self,
        query: &str,
        results: Vec<SearchResult>,
    ) -> Result<Waypoint, GeocodeError> {
        let first = results.into_iter().next().ok_or_else(|| GeocodeError::NoMatch {
            query: query.to_owned(),
        })?;
        let coordinate = first.coordinate().map_err(|err| GeocodeError::ParseError {
            message: format!("invalid coordinate in search result: {err}"),
        })?;

        log::debug!(
            "geocoded \"{query}\" to ({}, {}) via {:?}",
            coordinate.x,
            coordinate.y,
            first.display_name.as_deref().unwrap_or("<unnamed>")
        );

        Ok(Waypoint::new(query, coordinate))
    }
}

#[async_trait(?Send)]
impl Geocoder for HttpGeocoder {
    async fn resolve(&self, address: &str) -> Result<Waypoint, GeocodeError> {
        let query = address.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        let url = self
            .build_search_url(query)
            .map_err(|err| GeocodeError::NetworkError {
                url: self.config.base_url.clone(),
                message: format!("invalid request URL: {err}"),
            })?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url.as_str()))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url.as_str()))?;

        let results: Vec<SearchResult> =
            response
                .json()
                .await
                .map_err(|err| GeocodeError::ParseError {
                    message: err.to_string(),
                })?;

        self.convert_results(query, results)
    }
}
