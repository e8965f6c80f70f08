//! AWDB REST client.
//!
//! Provides async methods for querying station readings and metadata,
//! and converts responses to domain types.

use tracing::debug;

use crate::domain::{StationMetadata, StationSeries, StationTriplet};
use crate::snow::{SeriesRequest, StationDataProvider};

use super::convert::{convert_metadata, convert_series};
use super::error::AwdbError;
use super::types::{StationData, StationMetadataDto};

/// Default base URL for the AWDB REST API.
const DEFAULT_BASE_URL: &str = "https://wcc.nrcs.usda.gov/awdbRestApi/services/v1";

/// Default reporting duration requested from `/data`.
const DEFAULT_DURATION: &str = "HOURLY";

/// Date sent in place of an open-ended upper bound.
const OPEN_END_DATE: &str = "9999-12-31";

/// How much of an unparseable body to keep in errors.
const ERROR_BODY_CHARS: usize = 500;

/// Configuration for the AWDB client.
#[derive(Debug, Clone)]
pub struct AwdbConfig {
    /// Base URL for the API (defaults to production AWDB)
    pub base_url: String,
    /// Reporting duration for readings
    pub duration: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AwdbConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            duration: DEFAULT_DURATION.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the reporting duration.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for AwdbConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// AWDB REST API client.
///
/// TLS certificates are verified with the platform defaults.
#[derive(Debug, Clone)]
pub struct AwdbClient {
    http: reqwest::Client,
    base_url: String,
    duration: String,
}

impl AwdbClient {
    /// Create a new AWDB client with the given configuration.
    pub fn new(config: AwdbConfig) -> Result<Self, AwdbError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            duration: config.duration,
        })
    }

    /// Query parameters for a `/data` request.
    fn data_query(&self, request: &SeriesRequest) -> Vec<(&'static str, String)> {
        let end = request
            .window
            .end
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| OPEN_END_DATE.to_string());

        vec![
            ("stationTriplets", join_triplets(&request.stations)),
            ("elements", request.element.as_param()),
            ("duration", self.duration.clone()),
            ("beginDate", request.window.begin.format("%Y-%m-%d").to_string()),
            ("endDate", end),
            ("unitSystem", request.unit_system.as_param().to_string()),
            ("periodRef", "END".to_string()),
            // Flags are needed to drop suspect readings client-side
            ("returnFlags", "true".to_string()),
        ]
    }

    /// Fetch readings for the requested stations.
    ///
    /// Returns one series per requested station, in request order.
    /// Suspect readings are included.
    pub async fn get_series(
        &self,
        request: &SeriesRequest,
    ) -> Result<Vec<StationSeries>, AwdbError> {
        if request.stations.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/data", self.base_url);
        debug!(
            stations = %join_triplets(&request.stations),
            element = %request.element.as_param(),
            begin = %request.window.begin,
            "fetching AWDB readings"
        );

        let response = self
            .http
            .get(&url)
            .query(&self.data_query(request))
            .send()
            .await?;
        let body = check_status(response).await?;

        let stations: Vec<StationData> = parse_body(&body)?;

        convert_series(&stations, &request.stations, request.element).map_err(|e| {
            AwdbError::Json {
                message: e.to_string(),
                body: None,
            }
        })
    }

    /// Fetch metadata for one or more stations in a single call.
    pub async fn get_metadata(
        &self,
        stations: &[StationTriplet],
    ) -> Result<Vec<StationMetadata>, AwdbError> {
        if stations.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/stations", self.base_url);
        debug!(stations = %join_triplets(stations), "fetching AWDB station metadata");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("stationTriplets", join_triplets(stations)),
                ("returnStationElements", "false".to_string()),
            ])
            .send()
            .await?;
        let body = check_status(response).await?;

        let dtos: Vec<StationMetadataDto> = parse_body(&body)?;
        Ok(convert_metadata(&dtos))
    }
}

impl StationDataProvider for AwdbClient {
    async fn fetch_series(&self, request: &SeriesRequest) -> Result<Vec<StationSeries>, AwdbError> {
        self.get_series(request).await
    }
}

fn join_triplets(stations: &[StationTriplet]) -> String {
    stations
        .iter()
        .map(StationTriplet::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Map error statuses to [`AwdbError`], returning the body on success.
async fn check_status(response: reqwest::Response) -> Result<String, AwdbError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(AwdbError::Unauthorized);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AwdbError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AwdbError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, AwdbError> {
    serde_json::from_str(body).map_err(|e| AwdbError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(ERROR_BODY_CHARS).collect()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snow::{FetchWindow, SNOW_DEPTH, UnitSystem};
    use chrono::NaiveDate;

    fn request(stations: &[&str]) -> SeriesRequest {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        SeriesRequest {
            stations: stations.iter().map(|s| StationTriplet::new(*s)).collect(),
            element: SNOW_DEPTH,
            window: FetchWindow::trailing_days(today, 2),
            unit_system: UnitSystem::English,
        }
    }

    #[test]
    fn config_builder() {
        let config = AwdbConfig::new()
            .with_base_url("http://localhost:8080")
            .with_duration("DAILY")
            .with_timeout(60);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.duration, "DAILY");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = AwdbConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.duration, DEFAULT_DURATION);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation_strips_trailing_slash() {
        let client = AwdbClient::new(AwdbConfig::new().with_base_url("http://localhost/")).unwrap();
        assert_eq!(client.base_url, "http://localhost");
    }

    #[test]
    fn data_query_parameters() {
        let client = AwdbClient::new(AwdbConfig::new()).unwrap();
        let query = client.data_query(&request(&["322:CO:SNTL", "335:CO:SNTL"]));

        let get = |key: &str| {
            query
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("stationTriplets"), Some("322:CO:SNTL,335:CO:SNTL"));
        assert_eq!(get("elements"), Some("SNWD::1"));
        assert_eq!(get("duration"), Some("HOURLY"));
        assert_eq!(get("beginDate"), Some("2024-01-08"));
        assert_eq!(get("endDate"), Some(OPEN_END_DATE));
        assert_eq!(get("unitSystem"), Some("ENGLISH"));
        assert_eq!(get("returnFlags"), Some("true"));
    }

    #[tokio::test]
    async fn empty_request_skips_network() {
        // Unroutable base URL: any request would fail
        let client = AwdbClient::new(AwdbConfig::new().with_base_url("http://0.0.0.0:1")).unwrap();

        let series = client.get_series(&request(&[])).await.unwrap();
        assert!(series.is_empty());

        let metadata = client.get_metadata(&[]).await.unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn parse_body_truncates_bad_input() {
        let body = "x".repeat(2000);
        let err = parse_body::<Vec<StationData>>(&body).unwrap_err();
        match err {
            AwdbError::Json { body: Some(b), .. } => assert_eq!(b.len(), ERROR_BODY_CHARS),
            other => panic!("unexpected error: {other}"),
        }
    }
}
