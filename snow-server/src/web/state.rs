//! Application state for the web layer.

use std::sync::Arc;

use crate::awdb::AwdbSource;
use crate::snow::SnowDepthEstimator;
use crate::stations::StationDirectory;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Depth estimator over the configured stations
    pub estimator: Arc<SnowDepthEstimator<AwdbSource>>,

    /// Station names and locations
    pub directory: StationDirectory,
}

impl AppState {
    pub fn new(estimator: SnowDepthEstimator<AwdbSource>, directory: StationDirectory) -> Self {
        Self {
            estimator: Arc::new(estimator),
            directory,
        }
    }
}
