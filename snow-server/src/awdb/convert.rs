//! Conversion from AWDB DTOs to domain types.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::domain::{Measurement, QualityFlag, StationMetadata, StationSeries, StationTriplet};
use crate::snow::ElementCode;

use super::types::{ElementData, StationData, StationMetadataDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// A reading's timestamp could not be parsed
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Parse an AWDB timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM`, with optional seconds, or a bare date
/// (taken as midnight).
fn parse_collected_at(s: &str) -> Result<NaiveDateTime, ConversionError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
        .map_err(|_| ConversionError::InvalidTimestamp(s.to_string()))
}

/// Whether a data block carries the element and sensor we asked for.
///
/// Blocks without an element descriptor are accepted, since a request
/// only ever names one element. A block without an ordinal is taken to
/// be the primary sensor.
fn is_element(block: &ElementData, element: ElementCode) -> bool {
    block.station_element.as_ref().is_none_or(|e| {
        e.element_code == element.as_str() && e.ordinal.unwrap_or(1) == element.ordinal()
    })
}

fn convert_block(block: &ElementData) -> Result<Vec<Measurement>, ConversionError> {
    let mut measurements = Vec::with_capacity(block.values.len());
    for v in &block.values {
        // No reading for this slot
        let Some(value) = v.value else {
            continue;
        };
        let collected_at = parse_collected_at(&v.date)?;
        measurements.push(Measurement::new(
            collected_at,
            value,
            QualityFlag::from_code(v.qc_flag.as_deref()),
        ));
    }
    Ok(measurements)
}

/// Convert a `/data` response into one series per requested station.
///
/// The result has exactly one entry per element of `requested`, in the
/// same order. A station missing from the response gets an empty series.
/// Measurements are sorted oldest to newest.
pub fn convert_series(
    response: &[StationData],
    requested: &[StationTriplet],
    element: ElementCode,
) -> Result<Vec<StationSeries>, ConversionError> {
    let mut by_station: HashMap<&str, Vec<Measurement>> = HashMap::new();

    for station in response {
        let entry = by_station
            .entry(station.station_triplet.as_str())
            .or_default();
        for block in station.data.iter().filter(|b| is_element(b, element)) {
            entry.extend(convert_block(block)?);
        }
    }

    let series = requested
        .iter()
        .map(|triplet| {
            let mut measurements = by_station.get(triplet.as_str()).cloned().unwrap_or_else(|| {
                debug!(station = %triplet, "station missing from AWDB response");
                Vec::new()
            });
            measurements.sort_by_key(|m| m.collected_at);
            StationSeries::new(triplet.clone(), measurements)
        })
        .collect();

    Ok(series)
}

/// Convert a `/stations` response into domain metadata.
pub fn convert_metadata(response: &[StationMetadataDto]) -> Vec<StationMetadata> {
    response
        .iter()
        .map(|dto| StationMetadata {
            triplet: StationTriplet::new(dto.station_triplet.clone()),
            name: dto.name.trim().to_string(),
            elevation: dto.elevation,
            latitude: dto.latitude,
            longitude: dto.longitude,
        })
        .collect()
}
