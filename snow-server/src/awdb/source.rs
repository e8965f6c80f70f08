//! Runtime selection between the live and mock AWDB clients.

use crate::domain::{StationMetadata, StationSeries, StationTriplet};
use crate::snow::{SeriesRequest, StationDataProvider};

use super::client::AwdbClient;
use super::error::AwdbError;
use super::mock::MockAwdbClient;

/// Either a live or a mock AWDB client, chosen at startup.
#[derive(Debug, Clone)]
pub enum AwdbSource {
    Live(AwdbClient),
    Mock(MockAwdbClient),
}

impl AwdbSource {
    pub async fn get_metadata(
        &self,
        stations: &[StationTriplet],
    ) -> Result<Vec<StationMetadata>, AwdbError> {
        match self {
            AwdbSource::Live(client) => client.get_metadata(stations).await,
            AwdbSource::Mock(client) => client.get_metadata(stations).await,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AwdbSource::Live(_) => "live",
            AwdbSource::Mock(_) => "mock",
        }
    }
}

impl StationDataProvider for AwdbSource {
    async fn fetch_series(&self, request: &SeriesRequest) -> Result<Vec<StationSeries>, AwdbError> {
        match self {
            AwdbSource::Live(client) => client.get_series(request).await,
            AwdbSource::Mock(client) => client.get_series(request).await,
        }
    }
}
