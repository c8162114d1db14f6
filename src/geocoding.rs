//! Geocoding client for the Open-Meteo search API
//!
//! Resolves a free-text city name to a single best-match location. The
//! endpoint is queried for exactly one candidate and the first result wins;
//! there is no ranking or disambiguation beyond that.

use reqwest::Client;
use tracing::{debug, info};

use crate::ClimaplotError;
use crate::config::ClimaplotConfig;
use crate::models::Location;

/// Client for resolving place names to coordinates
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    language: String,
}

impl GeocodingClient {
    /// Create a client against the configured search endpoint
    #[must_use]
    pub fn new(client: Client, config: &ClimaplotConfig) -> Self {
        Self {
            client,
            base_url: config.geocoding_url.clone(),
            language: config.language.clone(),
        }
    }

    /// Resolve a place name to the best-ranked candidate.
    ///
    /// The query must already be trimmed and non-empty; the orchestrator
    /// guards empty input before any request is made. Fails with `NotFound`
    /// when the result set is empty or absent.
    pub async fn resolve(&self, query: &str) -> crate::Result<Location> {
        debug!("Geocoding location name: {}", query);

        let url = format!(
            "{}?name={}&count=1&language={}&format=json",
            self.base_url,
            urlencoding::encode(query),
            self.language
        );

        let response: api::GeocodingResponse =
            self.client.get(&url).send().await?.json().await?;

        let candidate = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(ClimaplotError::NotFound)?;

        let location = Location::from(candidate);
        info!(
            "Resolved {} to ({:.4}, {:.4})",
            location.name, location.latitude, location.longitude
        );
        Ok(location)
    }
}

/// Open-Meteo geocoding response structures
mod api {
    use serde::Deserialize;

    use crate::models::Location;

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<Candidate>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Candidate {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
    }

    impl From<Candidate> for Location {
        fn from(candidate: Candidate) -> Self {
            Location {
                latitude: candidate.latitude,
                longitude: candidate.longitude,
                name: candidate.name,
                country: candidate.country.unwrap_or_else(|| "Unknown".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> GeocodingClient {
        let config = ClimaplotConfig {
            geocoding_url: format!("{}/v1/search", server.uri()),
            ..ClimaplotConfig::default()
        };
        GeocodingClient::new(Client::new(), &config)
    }

    #[tokio::test]
    async fn test_resolve_first_candidate_wins() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("name", "Madrid"))
            .and(query_param("count", "1"))
            .and(query_param("language", "es"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {"name": "Madrid", "latitude": 40.4168, "longitude": -3.7038, "country": "España"},
                    {"name": "Madrid", "latitude": 4.73, "longitude": -73.98, "country": "Colombia"}
                ]
            })))
            .mount(&server)
            .await;

        let location = client_for(&server).resolve("Madrid").await.unwrap();
        assert_eq!(location.name, "Madrid");
        assert_eq!(location.country, "España");
        assert_eq!(location.latitude, 40.4168);
        assert_eq!(location.longitude, -3.7038);
    }

    #[tokio::test]
    async fn test_resolve_empty_results_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let err = client_for(&server).resolve("Qwzxy123").await.unwrap_err();
        assert!(matches!(err, ClimaplotError::NotFound));
    }

    #[tokio::test]
    async fn test_resolve_absent_results_field_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"generationtime_ms": 0.5})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).resolve("Qwzxy123").await.unwrap_err();
        assert!(matches!(err, ClimaplotError::NotFound));
    }

    #[tokio::test]
    async fn test_resolve_missing_country_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"name": "Somewhere", "latitude": 1.0, "longitude": 2.0}]
            })))
            .mount(&server)
            .await;

        let location = client_for(&server).resolve("Somewhere").await.unwrap();
        assert_eq!(location.country, "Unknown");
    }

    #[tokio::test]
    async fn test_resolve_garbage_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).resolve("Madrid").await.unwrap_err();
        assert!(matches!(err, ClimaplotError::Transport { .. }));
    }
}
