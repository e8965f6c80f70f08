//! Mock AWDB client for running without network access.
//!
//! Loads AWDB responses from JSON files and serves them as if they were
//! live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{StationMetadata, StationSeries, StationTriplet};
use crate::snow::{SeriesRequest, StationDataProvider};

use super::convert::{convert_metadata, convert_series};
use super::error::AwdbError;
use super::types::{StationData, StationMetadataDto};

/// File holding a `/stations` response. Every other `*.json` file is
/// read as a `/data` response.
const METADATA_FILE: &str = "stations.json";

/// Mock AWDB client that serves data from JSON files.
///
/// Time windows and unit systems are ignored: fixture data is static.
#[derive(Debug, Clone)]
pub struct MockAwdbClient {
    data: Arc<Vec<StationData>>,
    metadata: Arc<HashMap<String, StationMetadataDto>>,
}

impl MockAwdbClient {
    /// Create a new mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, AwdbError> {
        let data_dir = data_dir.as_ref();
        let mut data = Vec::new();
        let mut metadata = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            AwdbError::Fixture(format!("failed to read {}: {e}", data_dir.display()))
        })?;

        for entry in entries {
            let entry =
                entry.map_err(|e| AwdbError::Fixture(format!("failed to read entry: {e}")))?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path)
                .map_err(|e| AwdbError::Fixture(format!("failed to read {}: {e}", path.display())))?;

            if path.file_name().and_then(|s| s.to_str()) == Some(METADATA_FILE) {
                let stations: Vec<StationMetadataDto> = serde_json::from_str(&json).map_err(|e| {
                    AwdbError::Fixture(format!("failed to parse {}: {e}", path.display()))
                })?;
                for station in stations {
                    metadata.insert(station.station_triplet.clone(), station);
                }
            } else {
                let stations: Vec<StationData> = serde_json::from_str(&json).map_err(|e| {
                    AwdbError::Fixture(format!("failed to parse {}: {e}", path.display()))
                })?;
                data.extend(stations);
            }
        }

        if data.is_empty() {
            return Err(AwdbError::Fixture(format!(
                "no station data files found in {}",
                data_dir.display()
            )));
        }

        debug!(
            stations = data.len(),
            with_metadata = metadata.len(),
            "loaded mock AWDB fixtures"
        );

        Ok(Self {
            data: Arc::new(data),
            metadata: Arc::new(metadata),
        })
    }

    /// Mimics [`AwdbClient::get_series`](super::AwdbClient::get_series).
    pub async fn get_series(
        &self,
        request: &SeriesRequest,
    ) -> Result<Vec<StationSeries>, AwdbError> {
        convert_series(&self.data, &request.stations, request.element).map_err(|e| {
            AwdbError::Json {
                message: e.to_string(),
                body: None,
            }
        })
    }

    /// Mimics [`AwdbClient::get_metadata`](super::AwdbClient::get_metadata).
    ///
    /// Stations without fixture metadata are omitted, as AWDB omits
    /// unknown triplets.
    pub async fn get_metadata(
        &self,
        stations: &[StationTriplet],
    ) -> Result<Vec<StationMetadata>, AwdbError> {
        let dtos: Vec<StationMetadataDto> = stations
            .iter()
            .filter_map(|t| self.metadata.get(t.as_str()).cloned())
            .collect();
        Ok(convert_metadata(&dtos))
    }
}

impl StationDataProvider for MockAwdbClient {
    async fn fetch_series(&self, request: &SeriesRequest) -> Result<Vec<StationSeries>, AwdbError> {
        self.get_series(request).await
    }
}
