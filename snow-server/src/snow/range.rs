//! Reduction of station estimates to a display range.

use std::fmt;

use serde::Serialize;

use super::error::EstimateError;

/// Lowest and highest likely depth across stations, in inches.
///
/// Displays as `12"` when both ends agree, otherwise `12" - 18"`.
/// Values are printed with `f64`'s default formatting, so whatever
/// precision the provider reported is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthRange {
    pub min: f64,
    pub max: f64,
}

impl DepthRange {
    /// Whether every station agreed on the depth.
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }
}

impl fmt::Display for DepthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}\"", self.min)
        } else {
            write!(f, "{}\" - {}\"", self.min, self.max)
        }
    }
}

/// Reduce per-station estimates to their min and max.
pub fn reduce_range(depths: impl IntoIterator<Item = f64>) -> Result<DepthRange, EstimateError> {
    let mut depths = depths.into_iter();
    let first = depths.next().ok_or(EstimateError::EmptyStationSet)?;

    Ok(depths.fold(
        DepthRange {
            min: first,
            max: first,
        },
        |range, d| DepthRange {
            min: range.min.min(d),
            max: range.max.max(d),
        },
    ))
}
