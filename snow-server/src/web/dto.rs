//! Data transfer objects for JSON responses.

use serde::Serialize;

use crate::domain::StationMetadata;
use crate::snow::{DepthReport, StationEstimate};
use crate::stations::StationDirectory;

/// Response for `/api/depth`.
#[derive(Debug, Serialize)]
pub struct DepthResponse {
    /// Display text, e.g. `12" - 18"`
    pub range: String,

    /// Lowest station estimate in inches
    pub min: f64,

    /// Highest station estimate in inches
    pub max: f64,

    /// Per-station estimates, in configured order
    pub stations: Vec<StationDepthResult>,
}

/// One station's estimate.
#[derive(Debug, Serialize)]
pub struct StationDepthResult {
    pub triplet: String,
    pub name: String,
    pub depth: f64,
    /// Trustworthy readings in the window
    pub readings: usize,
}

/// Response for `/api/stations`.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationMetadata>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl StationDepthResult {
    pub fn from_estimate(estimate: &StationEstimate, directory: &StationDirectory) -> Self {
        Self {
            triplet: estimate.station.to_string(),
            name: directory.name(&estimate.station),
            depth: estimate.depth,
            readings: estimate.readings,
        }
    }
}

impl DepthResponse {
    pub fn from_report(report: &DepthReport, directory: &StationDirectory) -> Self {
        Self {
            range: report.range.to_string(),
            min: report.range.min,
            max: report.range.max,
            stations: report
                .stations
                .iter()
                .map(|s| StationDepthResult::from_estimate(s, directory))
                .collect(),
        }
    }
}
