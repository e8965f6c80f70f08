//! Likely snow depth across a set of SNOTEL stations.
//!
//! SNOTEL depth sensors wobble: wind scour and sensor jitter make single
//! readings under-report depth for an hour or two. The estimator smooths
//! this out per station and reduces the result to a display range:
//!
//! 1. drop readings the network flagged as suspect
//! 2. take the maximum of each station's three most recent readings
//! 3. report the lowest and highest station estimates

mod error;
mod estimate;
mod estimator;
mod filter;
mod provider;
mod range;


pub use error::EstimateError;
pub use estimate::{TRAILING_WINDOW, likely_depth};
pub use estimator::{DepthReport, EstimatorConfig, SnowDepthEstimator, StationEstimate};
pub use filter::filter_suspect;
pub use provider::{
    ElementCode, FetchWindow, SNOW_DEPTH, SeriesRequest, StationDataProvider, UnitSystem,
};
pub use range::{DepthRange, reduce_range};
