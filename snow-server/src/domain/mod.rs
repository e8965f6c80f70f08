//! Core domain types for snow-depth telemetry.
//!
//! These types are independent of the AWDB wire format. Conversion from
//! the API's DTOs happens in [`crate::awdb`].

mod measurement;
mod station;

pub use measurement::{Measurement, QualityFlag, StationSeries};
pub use station::{StationMetadata, StationTriplet};
