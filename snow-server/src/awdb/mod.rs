//! NRCS Air-Water Database (AWDB) client.
//!
//! The AWDB service publishes SNOTEL telemetry. This module talks to its
//! REST interface and converts responses into [`crate::domain`] types.
//!
//! Things worth knowing about AWDB:
//! - Stations are addressed by triplets (`322:CO:SNTL`)
//! - Readings carry a quality-control flag; suspect (`S`) readings are
//!   still returned and must be filtered by the caller
//! - Timestamps are station local time, `YYYY-MM-DD HH:MM`
//! - A reading may be reported with no value while the sensor is down

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{AwdbClient, AwdbConfig};
pub use convert::{ConversionError, convert_metadata, convert_series};
pub use error::AwdbError;
pub use mock::MockAwdbClient;
pub use source::AwdbSource;
pub use types::{DataValue, ElementData, StationData, StationElement, StationMetadataDto};
