//! Snow depth estimation errors.

use crate::awdb::AwdbError;
use crate::domain::StationTriplet;

/// Errors that abort a depth range computation.
///
/// Nothing is recovered locally: one offline station fails the whole
/// range, and provider failures pass through untranslated.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// The station reported no trustworthy readings in the window
    #[error("station {0} is offline or out of order")]
    StationOffline(StationTriplet),

    /// There were no station estimates to reduce
    #[error("no stations to estimate")]
    EmptyStationSet,

    /// The station data provider failed
    #[error(transparent)]
    Provider(#[from] AwdbError),
}
