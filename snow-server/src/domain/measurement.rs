//! Measurement and station series types.

use std::fmt;

use chrono::NaiveDateTime;

use super::StationTriplet;

/// Quality-control flag attached to a reading by the SNOTEL network.
///
/// The network keeps reporting readings it considers erroneous, marking
/// them [`QualityFlag::Suspect`]. Consumers must filter them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityFlag {
    /// `V`: passed automated checks.
    Valid,
    /// `E`: edited by a hydrologist.
    Edited,
    /// `S`: flagged as likely erroneous.
    Suspect,
    /// No flag was reported.
    Unflagged,
    /// Any other code the network may send.
    Other(String),
}

impl QualityFlag {
    /// Parse an AWDB flag code. `None` or an empty code means unflagged.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            None | Some("") => QualityFlag::Unflagged,
            Some("V") => QualityFlag::Valid,
            Some("E") => QualityFlag::Edited,
            Some("S") => QualityFlag::Suspect,
            Some(other) => QualityFlag::Other(other.to_string()),
        }
    }

    pub fn is_suspect(&self) -> bool {
        matches!(self, QualityFlag::Suspect)
    }
}

impl fmt::Display for QualityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityFlag::Valid => f.write_str("V"),
            QualityFlag::Edited => f.write_str("E"),
            QualityFlag::Suspect => f.write_str("S"),
            QualityFlag::Unflagged => f.write_str("-"),
            QualityFlag::Other(code) => f.write_str(code),
        }
    }
}

/// A single sensor reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// When the reading was collected (station local time).
    pub collected_at: NaiveDateTime,
    /// Reading in the requested unit system (inches for snow depth).
    pub value: f64,
    pub flag: QualityFlag,
}

impl Measurement {
    pub fn new(collected_at: NaiveDateTime, value: f64, flag: QualityFlag) -> Self {
        Self {
            collected_at,
            value,
            flag,
        }
    }
}

/// Readings for one station, ordered oldest to newest.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSeries {
    pub station: StationTriplet,
    pub measurements: Vec<Measurement>,
}

impl StationSeries {
    pub fn new(station: StationTriplet, measurements: Vec<Measurement>) -> Self {
        Self {
            station,
            measurements,
        }
    }

    /// The reading values, in collection order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.measurements.iter().map(|m| m.value)
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}
