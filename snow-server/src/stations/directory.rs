//! Station metadata lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::awdb::{AwdbError, AwdbSource};
use crate::domain::{StationMetadata, StationTriplet};

/// Read-only triplet → metadata lookup, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    inner: Arc<HashMap<StationTriplet, StationMetadata>>,
}

impl StationDirectory {
    /// Build a directory by fetching metadata for `stations`.
    pub async fn fetch(
        source: &AwdbSource,
        stations: &[StationTriplet],
    ) -> Result<Self, AwdbError> {
        let metadata = source.get_metadata(stations).await?;
        Ok(Self::from_metadata(metadata))
    }

    pub fn from_metadata(metadata: Vec<StationMetadata>) -> Self {
        let map = metadata
            .into_iter()
            .map(|m| (m.triplet.clone(), m))
            .collect();
        Self {
            inner: Arc::new(map),
        }
    }

    /// An empty directory; every name falls back to the triplet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, triplet: &StationTriplet) -> Option<&StationMetadata> {
        self.inner.get(triplet)
    }

    /// Display name for a station, or its triplet if unknown.
    pub fn name(&self, triplet: &StationTriplet) -> String {
        self.get(triplet)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| triplet.to_string())
    }

    /// Metadata for `stations` in the given order, skipping unknowns.
    pub fn lookup_all(&self, stations: &[StationTriplet]) -> Vec<StationMetadata> {
        stations
            .iter()
            .filter_map(|t| self.get(t).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bear_lake() -> StationMetadata {
        StationMetadata {
            triplet: StationTriplet::new("322:CO:SNTL"),
            name: "Bear Lake".to_string(),
            elevation: Some(9520.0),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn name_lookup_with_fallback() {
        let dir = StationDirectory::from_metadata(vec![bear_lake()]);

        assert_eq!(dir.len(), 1);
        assert_eq!(dir.name(&StationTriplet::new("322:CO:SNTL")), "Bear Lake");
        assert_eq!(dir.name(&StationTriplet::new("1:XX:SNTL")), "1:XX:SNTL");
    }

    #[test]
    fn empty_directory() {
        let dir = StationDirectory::empty();
        assert!(dir.is_empty());
        assert_eq!(dir.name(&StationTriplet::new("322:CO:SNTL")), "322:CO:SNTL");
    }

    #[test]
    fn lookup_all_preserves_order_and_skips_unknown() {
        let mut other = bear_lake();
        other.triplet = StationTriplet::new("335:CO:SNTL");
        other.name = "Berthoud Summit".to_string();
        let dir = StationDirectory::from_metadata(vec![bear_lake(), other]);

        let found = dir.lookup_all(&[
            StationTriplet::new("335:CO:SNTL"),
            StationTriplet::new("1:XX:SNTL"),
            StationTriplet::new("322:CO:SNTL"),
        ]);

        let names: Vec<_> = found.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Berthoud Summit", "Bear Lake"]);
    }
}
