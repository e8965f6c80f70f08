//! Station identifier and metadata types.

use std::fmt;

use serde::Serialize;

/// A SNOTEL station identifier, e.g. `322:CO:SNTL`.
///
/// The triplet is `<station id>:<state code>:<network code>`, but it is
/// treated as an opaque key everywhere in this crate. It is passed to the
/// AWDB service verbatim and compared byte-for-byte.
///
/// # Examples
///
/// ```
/// use snow_server::domain::StationTriplet;
///
/// let bear_lake = StationTriplet::new("322:CO:SNTL");
/// assert_eq!(bear_lake.as_str(), "322:CO:SNTL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationTriplet(String);

impl StationTriplet {
    /// Wrap a station triplet string.
    pub fn new(triplet: impl Into<String>) -> Self {
        StationTriplet(triplet.into())
    }

    /// Returns the triplet as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationTriplet {
    fn from(s: &str) -> Self {
        StationTriplet::new(s)
    }
}

/// Descriptive information about a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMetadata {
    pub triplet: StationTriplet,
    /// Human-readable station name, e.g. "Bear Lake".
    pub name: String,
    /// Elevation in feet.
    pub elevation: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
