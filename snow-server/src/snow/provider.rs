//! The station data provider seam.

use chrono::{Days, NaiveDate};

use crate::awdb::AwdbError;
use crate::domain::{StationSeries, StationTriplet};

/// An AWDB element code naming a sensor type, pinned to one sensor.
///
/// Stations may carry several sensors of the same type; `ordinal`
/// selects which one (1 is the primary sensor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementCode {
    code: &'static str,
    ordinal: u32,
}

impl ElementCode {
    pub const fn new(code: &'static str, ordinal: u32) -> Self {
        Self { code, ordinal }
    }

    pub fn as_str(&self) -> &'static str {
        self.code
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Element query value, `<code>:<height/depth>:<ordinal>`.
    pub fn as_param(&self) -> String {
        format!("{}::{}", self.code, self.ordinal)
    }
}

/// Snow depth, primary sensor.
pub const SNOW_DEPTH: ElementCode = ElementCode::new("SNWD", 1);

/// Unit system values are reported in.
///
/// Depth ranges are displayed in inches, so only English units are
/// requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Inches, feet, degrees Fahrenheit.
    #[default]
    English,
}

impl UnitSystem {
    /// Query parameter value understood by AWDB.
    pub fn as_param(&self) -> &'static str {
        match self {
            UnitSystem::English => "ENGLISH",
        }
    }
}

/// Date range to fetch readings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub begin: NaiveDate,
    /// `None` means "through the latest available reading".
    pub end: Option<NaiveDate>,
}

impl FetchWindow {
    /// From `days` before `today`, open-ended.
    pub fn trailing_days(today: NaiveDate, days: u32) -> Self {
        let begin = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { begin, end: None }
    }
}

/// A request for recent readings of one element at several stations.
///
/// Providers return every reading regardless of quality flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    pub stations: Vec<StationTriplet>,
    pub element: ElementCode,
    pub window: FetchWindow,
    pub unit_system: UnitSystem,
}

/// Source of station readings.
///
/// Implementations must return exactly one series per requested station,
/// in request order, with readings ordered oldest to newest.
pub trait StationDataProvider {
    fn fetch_series(
        &self,
        request: &SeriesRequest,
    ) -> impl Future<Output = Result<Vec<StationSeries>, AwdbError>> + Send;
}
