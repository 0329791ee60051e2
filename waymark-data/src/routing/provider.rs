//! HTTP directions provider backed by the OSRM Route API.

use std::time::Duration;

use async_trait::async_trait;
use geo::Coord;
use reqwest::Client;
use waymark_core::{DirectionsError, DirectionsProvider, RoutePath};

use super::osrm::RouteResponse;
use crate::ProviderBuildError;

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "waymark-routing/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpDirectionsProvider`].
#[derive(Debug, Clone)]
pub struct HttpDirectionsProviderConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpDirectionsProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpDirectionsProviderConfig {
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

/// HTTP-based [`DirectionsProvider`] using the OSRM Route API.
///
/// Requests walking directions with alternatives enabled so the planner has
/// more than one candidate to choose from where the network allows it.
#[derive(Debug)]
pub struct HttpDirectionsProvider {
    client: Client,
    config: HttpDirectionsProviderConfig,
}

impl HttpDirectionsProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsProviderConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: HttpDirectionsProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Build the OSRM Route API URL for one segment.
    ///
    /// The URL format is
    /// `{base_url}/route/v1/walking/{lon},{lat};{lon},{lat}` with
    /// alternatives enabled and full GeoJSON geometry requested.
    fn build_route_url(&self, origin: Coord<f64>, destination: Coord<f64>) -> String {
        format!(
            "{}/route/v1/walking/{},{};{},{}?alternatives=true&overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            origin.x,
            origin.y,
            destination.x,
            destination.y
        )
    }

    /// Convert a reqwest error to a `DirectionsError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> DirectionsError {
        if error.is_timeout() {
            return DirectionsError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return DirectionsError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        DirectionsError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Convert an OSRM response into candidate paths.
    ///
    /// An `Ok` response with no routes converts to an empty candidate list;
    /// deciding what that means is left to the planner.
    fn convert_response(&self, response: RouteResponse) -> Result<Vec<RoutePath>, DirectionsError> {
        if !response.is_ok() {
            return Err(DirectionsError::ServiceError {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }

        response
            .routes
            .into_iter()
            .map(|route| {
                let points = route
                    .geometry
                    .coordinates
                    .iter()
                    .map(|&[x, y]| Coord { x, y })
                    .collect();
                RoutePath::new(points, route.distance).map_err(|err| {
                    DirectionsError::ParseError {
                        message: format!("invalid route in directions response: {err}"),
                    }
                })
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl DirectionsProvider for HttpDirectionsProvider {
    async fn candidate_paths(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
    ) -> Result<Vec<RoutePath>, DirectionsError> {
        let url = self.build_route_url(origin, destination);
        log::debug!("requesting walking directions: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let route_response: RouteResponse =
            response
                .json()
                .await
                .map_err(|err| DirectionsError::ParseError {
                    message: err.to_string(),
                })?;

        self.convert_response(route_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::osrm::{Geometry, OsrmRoute};
    use rstest::rstest;

    fn osrm_route(distance: f64, coordinates: Vec<[f64; 2]>) -> OsrmRoute {
        OsrmRoute {
            distance,
            geometry: Geometry { coordinates },
        }
    }

    fn two_point_route(distance: f64) -> OsrmRoute {
        osrm_route(distance, vec![[-0.1586, 51.5237], [-0.1570, 51.5221]])
    }

    #[rstest]
    fn build_route_url_formats_coordinates() {
        let provider =
            HttpDirectionsProvider::new("http://osrm.example.com").expect("provider should build");

        let url = provider.build_route_url(
            Coord { x: -0.1, y: 51.5 },
            Coord { x: -0.2, y: 51.6 },
        );

        assert_eq!(
            url,
            "http://osrm.example.com/route/v1/walking/-0.1,51.5;-0.2,51.6?alternatives=true&overview=full&geometries=geojson"
        );
    }

    #[rstest]
    fn build_route_url_strips_trailing_slash() {
        let provider =
            HttpDirectionsProvider::new("http://osrm.example.com/").expect("provider should build");

        let url = provider.build_route_url(
            Coord { x: -0.1, y: 51.5 },
            Coord { x: -0.2, y: 51.6 },
        );

        assert!(url.starts_with("http://osrm.example.com/route/"));
        assert!(!url.contains("//route"));
    }

    #[rstest]
    fn convert_response_keeps_alternatives_in_service_order() {
        let provider =
            HttpDirectionsProvider::new("http://localhost:5000").expect("provider should build");
        let response = RouteResponse {
            code: "Ok".to_string(),
            message: None,
            routes: vec![two_point_route(1523.4), two_point_route(1401.9)],
        };

        let candidates = provider.convert_response(response).expect("should parse");

        let distances: Vec<f64> = candidates.iter().map(RoutePath::distance).collect();
        assert_eq!(distances, vec![1523.4, 1401.9]);
        assert_eq!(candidates[0].points()[0], Coord { x: -0.1586, y: 51.5237 });
    }

    #[rstest]
    fn convert_response_handles_service_error() {
        let provider =
            HttpDirectionsProvider::new("http://localhost:5000").expect("provider should build");
        let response = RouteResponse {
            code: "NoRoute".to_string(),
            message: Some("Impossible route between points".to_string()),
            routes: Vec::new(),
        };

        let err = provider
            .convert_response(response)
            .expect_err("should fail");

        match err {
            DirectionsError::ServiceError { code, message } => {
                assert_eq!(code, "NoRoute");
                assert_eq!(message, "Impossible route between points");
            }
            other => panic!("expected ServiceError, got {other:?}"),
        }
    }

    #[rstest]
    fn convert_response_passes_empty_route_lists_through() {
        let provider =
            HttpDirectionsProvider::new("http://localhost:5000").expect("provider should build");
        let response = RouteResponse {
            code: "Ok".to_string(),
            message: None,
            routes: Vec::new(),
        };

        let candidates = provider.convert_response(response).expect("should parse");

        assert!(candidates.is_empty());
    }

    #[rstest]
    fn convert_response_rejects_degenerate_geometry() {
        let provider =
            HttpDirectionsProvider::new("http://localhost:5000").expect("provider should build");
        let response = RouteResponse {
            code: "Ok".to_string(),
            message: None,
            routes: vec![osrm_route(10.0, vec![[-0.1586, 51.5237]])],
        };

        let err = provider
            .convert_response(response)
            .expect_err("should fail");

        assert!(matches!(err, DirectionsError::ParseError { .. }));
    }
}
