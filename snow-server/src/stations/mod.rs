//! SNOTEL station metadata.
//!
//! Maps station triplets to names and locations, fetched from AWDB at
//! startup.

mod directory;

pub use directory::StationDirectory;
