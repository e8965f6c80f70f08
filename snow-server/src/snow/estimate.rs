//! Per-station likely depth.

use crate::domain::StationSeries;

use super::error::EstimateError;

/// Number of most recent readings considered by [`likely_depth`].
pub const TRAILING_WINDOW: usize = 3;

/// Likely current depth for one filtered, oldest-first series.
///
/// Depth sensors transiently under-report, so the estimate is the
/// maximum of the last [`TRAILING_WINDOW`] readings. With fewer readings
/// than that, the latest reading is used as-is. The result is always one
/// of the series' own values.
pub fn likely_depth(series: &StationSeries) -> Result<f64, EstimateError> {
    let readings = &series.measurements;

    let Some(latest) = readings.last() else {
        return Err(EstimateError::StationOffline(series.station.clone()));
    };

    if readings.len() < TRAILING_WINDOW {
        return Ok(latest.value);
    }

    let window = &readings[readings.len() - TRAILING_WINDOW..];
    Ok(window
        .iter()
        .map(|m| m.value)
        .fold(f64::NEG_INFINITY, f64::max))
}
