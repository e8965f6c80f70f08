//! AWDB API response DTOs.
//!
//! These types map directly to the AWDB REST JSON responses. Fields the
//! service may omit are `Option` or defaulted.

use serde::Deserialize;

/// One station's entry in a `/data` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationData {
    /// Station triplet, e.g. `322:CO:SNTL`.
    pub station_triplet: String,

    /// One entry per requested element.
    #[serde(default)]
    pub data: Vec<ElementData>,
}

/// Readings for one element at one station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    /// Which element these values belong to.
    pub station_element: Option<StationElement>,

    #[serde(default)]
    pub values: Vec<DataValue>,
}

/// Element descriptor attached to a data block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationElement {
    /// Element code, e.g. `SNWD` for snow depth.
    pub element_code: String,

    /// Sensor ordinal (1 for the primary sensor).
    pub ordinal: Option<u32>,

    /// Reporting duration, e.g. `HOURLY`.
    pub duration_name: Option<String>,

    /// Unit code of the stored values, e.g. `in`.
    pub stored_unit_code: Option<String>,
}

/// A single reading.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataValue {
    /// Collection time, `YYYY-MM-DD HH:MM` in station local time.
    pub date: String,

    /// The reading. Absent when the sensor reported nothing.
    pub value: Option<f64>,

    /// Quality-control flag (`V`, `E`, `S`, ...).
    pub qc_flag: Option<String>,

    /// Quality-assurance flag.
    pub qa_flag: Option<String>,
}

/// One entry in a `/stations` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMetadataDto {
    pub station_triplet: String,
    pub name: String,
    pub state_code: Option<String>,
    pub network_code: Option<String>,
    pub elevation: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_data_response() {
        let json = r#"[
            {
                "stationTriplet": "322:CO:SNTL",
                "data": [
                    {
                        "stationElement": {
                            "elementCode": "SNWD",
                            "ordinal": 1,
                            "durationName": "HOURLY",
                            "storedUnitCode": "in"
                        },
                        "values": [
                            {"date": "2024-01-10 06:00", "value": 31, "qcFlag": "V", "qaFlag": "P"},
                            {"date": "2024-01-10 07:00", "qcFlag": "S"}
                        ]
                    }
                ]
            }
        ]"#;

        let stations: Vec<StationData> = serde_json::from_str(json).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].station_triplet, "322:CO:SNTL");

        let element = &stations[0].data[0];
        assert_eq!(
            element.station_element.as_ref().unwrap().element_code,
            "SNWD"
        );
        assert_eq!(element.values.len(), 2);
        assert_eq!(element.values[0].value, Some(31.0));
        assert_eq!(element.values[1].value, None);
        assert_eq!(element.values[1].qc_flag.as_deref(), Some("S"));
    }

    #[test]
    fn missing_data_defaults_to_empty() {
        let json = r#"[{"stationTriplet": "322:CO:SNTL"}]"#;
        let stations: Vec<StationData> = serde_json::from_str(json).unwrap();
        assert!(stations[0].data.is_empty());
    }

    #[test]
    fn deserialize_metadata_response() {
        let json = r#"[
            {
                "stationTriplet": "322:CO:SNTL",
                "stationId": "322",
                "stateCode": "CO",
                "networkCode": "SNTL",
                "name": "Bear Lake",
                "elevation": 9520,
                "latitude": 40.31,
                "longitude": -105.65
            }
        ]"#;

        let stations: Vec<StationMetadataDto> = serde_json::from_str(json).unwrap();
        assert_eq!(stations[0].name, "Bear Lake");
        assert_eq!(stations[0].elevation, Some(9520.0));
        assert_eq!(stations[0].state_code.as_deref(), Some("CO"));
    }
}
