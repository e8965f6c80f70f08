//! Askama templates for the web frontend.

use askama::Template;

use crate::snow::{DepthReport, StationEstimate};
use crate::stations::StationDirectory;

/// Home page showing the current depth range.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub snow_depth: String,
    pub stations: Vec<StationView>,
}

impl IndexTemplate {
    pub fn from_report(report: &DepthReport, directory: &StationDirectory) -> Self {
        Self {
            snow_depth: report.range.to_string(),
            stations: report
                .stations
                .iter()
                .map(|s| StationView::from_estimate(s, directory))
                .collect(),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

/// Station row on the index page.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub triplet: String,
    /// Formatted estimate, e.g. `14"`
    pub depth: String,
    /// Formatted elevation, e.g. `9520 ft`
    pub elevation: Option<String>,
}

impl StationView {
    pub fn from_estimate(estimate: &StationEstimate, directory: &StationDirectory) -> Self {
        let elevation = directory
            .get(&estimate.station)
            .and_then(|m| m.elevation)
            .map(|e| format!("{e:.0} ft"));

        Self {
            name: directory.name(&estimate.station),
            triplet: estimate.station.to_string(),
            depth: format!("{}\"", estimate.depth),
            elevation,
        }
    }
}
