//! Depth range estimation over configured stations.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::StationTriplet;

use super::error::EstimateError;
use super::estimate::likely_depth;
use super::filter::filter_suspect;
use super::provider::{FetchWindow, SNOW_DEPTH, SeriesRequest, StationDataProvider, UnitSystem};
use super::range::{DepthRange, reduce_range};

/// Default number of days of readings to fetch.
const DEFAULT_LOOKBACK_DAYS: u32 = 2;

/// Configuration for [`SnowDepthEstimator`].
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Stations to report on.
    pub stations: Vec<StationTriplet>,

    /// How many days back to fetch readings from.
    pub lookback_days: u32,

    /// Unit system to request from the provider.
    pub unit_system: UnitSystem,
}

impl EstimatorConfig {
    pub fn new(stations: Vec<StationTriplet>) -> Self {
        Self {
            stations,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            unit_system: UnitSystem::English,
        }
    }

    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }
}

/// Likely depth at one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationEstimate {
    pub station: StationTriplet,
    /// Likely depth in inches.
    pub depth: f64,
    /// Trustworthy readings the estimate was drawn from.
    pub readings: usize,
}

/// Result of one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthReport {
    pub range: DepthRange,
    /// One entry per configured station, in configured order.
    pub stations: Vec<StationEstimate>,
}

/// Estimates current snow depth across a fixed set of stations.
#[derive(Debug, Clone)]
pub struct SnowDepthEstimator<P> {
    provider: P,
    config: EstimatorConfig,
}

impl<P: StationDataProvider> SnowDepthEstimator<P> {
    pub fn new(provider: P, config: EstimatorConfig) -> Self {
        Self { provider, config }
    }

    /// The configured stations.
    pub fn stations(&self) -> &[StationTriplet] {
        &self.config.stations
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The provider request for a run on `today`.
    pub fn series_request(&self, today: NaiveDate) -> SeriesRequest {
        SeriesRequest {
            stations: self.config.stations.clone(),
            element: SNOW_DEPTH,
            window: FetchWindow::trailing_days(today, self.config.lookback_days),
            unit_system: self.config.unit_system,
        }
    }

    /// Estimate depths using today's local date for the fetch window.
    pub async fn report(&self) -> Result<DepthReport, EstimateError> {
        self.report_on(Local::now().date_naive()).await
    }

    /// Estimate depths with the fetch window anchored at `today`.
    ///
    /// Fails fast: the first offline station aborts the run.
    pub async fn report_on(&self, today: NaiveDate) -> Result<DepthReport, EstimateError> {
        let request = self.series_request(today);
        let series = self.provider.fetch_series(&request).await?;

        let stations = series
            .into_iter()
            .map(|s| -> Result<StationEstimate, EstimateError> {
                let filtered = filter_suspect(s);
                let depth = likely_depth(&filtered)?;
                debug!(
                    station = %filtered.station,
                    readings = filtered.len(),
                    depth,
                    "estimated station depth"
                );
                Ok(StationEstimate {
                    readings: filtered.len(),
                    station: filtered.station,
                    depth,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let range = reduce_range(stations.iter().map(|s| s.depth))?;
        info!(range = %range, stations = stations.len(), "computed snow depth range");

        Ok(DepthReport { range, stations })
    }

    /// The current depth range as display text, e.g. `12" - 18"`.
    pub async fn range_text(&self) -> Result<String, EstimateError> {
        Ok(self.report().await?.range.to_string())
    }
}
