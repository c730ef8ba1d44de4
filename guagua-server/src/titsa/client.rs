//! TITSA HTTP client.
//!
//! Provides async access to the `xGetInfoParada` endpoint that backs
//! the arrival boards on titsa.com. One [`StopQuery`] is built per
//! inbound chat message and memoizes its single fetch; the underlying
//! [`TitsaApi`] is cheap to clone and can be shared across requests.

use std::time::Instant;

use tokio::sync::OnceCell;

use crate::domain::StopId;

use super::error::TitsaError;
use super::types::StopInfoResponse;

/// Default endpoint for stop arrival info.
const DEFAULT_BASE_URL: &str = "https://titsa.com/ajax/xGetInfoParada.php";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the TITSA client.
#[derive(Debug, Clone)]
pub struct TitsaConfig {
    /// Endpoint URL (defaults to the production TITSA endpoint)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TitsaConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TitsaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// TITSA API client.
///
/// Wraps a `reqwest::Client` with the configured timeout. Holds no
/// per-stop state; see [`StopQuery`] for that.
#[derive(Debug, Clone)]
pub struct TitsaApi {
    http: reqwest::Client,
    base_url: String,
}

impl TitsaApi {
    /// Create a new client with the given configuration.
    pub fn new(config: TitsaConfig) -> Result<Self, TitsaError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch arrival info for a stop, bypassing any memoization.
    pub async fn get_stop_info(&self, stop_id: &StopId) -> Result<StopInfoResponse, TitsaError> {
        let started = Instant::now();

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("id_parada", stop_id.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TitsaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let info: StopInfoResponse =
            serde_json::from_str(&body).map_err(|e| TitsaError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        tracing::info!(
            stop_id = %stop_id,
            elapsed_secs = started.elapsed().as_secs_f64(),
            "fetched stop info"
        );

        Ok(info)
    }
}

/// A single stop lookup with one-shot memoization.
///
/// Built once per inbound message; the first successful fetch is kept
/// for the lifetime of the query and reused by later calls. Failures
/// are not memoized, so a retry on the same instance fetches again.
/// Instances must not be shared across chat requests.
#[derive(Debug)]
pub struct StopQuery {
    api: TitsaApi,
    stop_id: StopId,
    info: OnceCell<StopInfoResponse>,
}

impl StopQuery {
    /// Create a query for one stop.
    pub fn new(api: TitsaApi, stop_id: StopId) -> Self {
        Self {
            api,
            stop_id,
            info: OnceCell::new(),
        }
    }

    /// The stop this query is about.
    pub fn stop_id(&self) -> &StopId {
        &self.stop_id
    }

    /// Fetch arrival info, reusing the memoized response if present.
    pub async fn fetch_info(&self) -> Result<&StopInfoResponse, TitsaError> {
        self.info
            .get_or_try_init(|| self.api.get_stop_info(&self.stop_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn api_for(server: &MockServer) -> TitsaApi {
        let config = TitsaConfig::new()
            .with_base_url(format!("{}/ajax/xGetInfoParada.php", server.uri()))
            .with_timeout(1);
        TitsaApi::new(config).unwrap()
    }

    #[test]
    fn config_builder() {
        let config = TitsaConfig::new()
            .with_base_url("http://localhost:9999/info")
            .with_timeout(2);

        assert_eq!(config.base_url, "http://localhost:9999/info");
        assert_eq!(config.timeout_secs, 2);
    }

    #[test]
    fn config_defaults() {
        let config = TitsaConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[tokio::test]
    async fn fetches_and_parses_stop_info() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ajax/xGetInfoParada.php"))
            .and(query_param("id_parada", "123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "parada": {"descripcion": "Plaza"},
                "lineas": [{"id": "014", "tiempo": "3", "destino": "La Laguna"}]
            })))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let info = api.get_stop_info(&stop("123")).await.unwrap();

        assert_eq!(
            info.parada.unwrap().descripcion.as_deref(),
            Some("Plaza")
        );
        assert_eq!(info.lineas.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn second_fetch_on_same_query_hits_memo() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ajax/xGetInfoParada.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"parada": {"descripcion": "Plaza"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let query = StopQuery::new(api_for(&server), stop("123"));
        let first = query.fetch_info().await.unwrap().clone();
        let second = query.fetch_info().await.unwrap();

        assert_eq!(
            first.parada.as_ref().unwrap().descripcion.as_deref(),
            second.parada.as_ref().unwrap().descripcion.as_deref()
        );
        // wiremock verifies expect(1) on drop: upstream was hit once.
    }

    #[tokio::test]
    async fn failure_is_not_memoized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"parada": {"descripcion": "Plaza"}})),
            )
            .mount(&server)
            .await;

        let query = StopQuery::new(api_for(&server), stop("123"));

        let first = query.fetch_info().await;
        assert!(matches!(first, Err(TitsaError::Api { status: 500, .. })));

        let second = query.fetch_info().await.unwrap();
        assert_eq!(
            second.parada.as_ref().unwrap().descripcion.as_deref(),
            Some("Plaza")
        );
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let api = api_for(&server); // 1 second timeout
        let err = api.get_stop_info(&stop("123")).await.unwrap_err();
        assert!(matches!(err, TitsaError::Timeout));
    }

    #[tokio::test]
    async fn non_json_body_is_a_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>mantenimiento</html>"))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let err = api.get_stop_info(&stop("123")).await.unwrap_err();
        assert!(matches!(err, TitsaError::Json { .. }));
    }
}
