//! Defines the data structure representing one entry of the NOAA station
//! history inventory (`isd-history.csv`), which maps station identifiers
//! to names, coordinates and recording periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata for a single weather station, as published in the NOAA
/// station history inventory.
///
/// A station is identified by the pair of its Air Force (`usaf`) and
/// NCDC WBAN (`wban`) numbers; yearly archive files are keyed on both.
/// Coordinates and recording periods are optional because many inventory
/// rows leave them blank.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Station {
    /// Air Force station identifier (e.g. "724940").
    #[serde(rename = "USAF")]
    pub usaf: String,
    /// NCDC WBAN number (e.g. "23234").
    #[serde(rename = "WBAN")]
    pub wban: String,
    /// Human-readable station name.
    #[serde(rename = "STATION NAME")]
    pub name: String,
    /// FIPS country code.
    #[serde(rename = "CTRY")]
    pub country: String,
    /// State, for US stations.
    #[serde(rename = "STATE")]
    pub state: String,
    /// ICAO airport code, if the station sits at an airport.
    #[serde(rename = "ICAO")]
    pub icao: String,
    /// Latitude in decimal degrees (positive for North).
    #[serde(rename = "LAT")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees (positive for East).
    #[serde(rename = "LON")]
    pub longitude: Option<f64>,
    /// Elevation above sea level in meters.
    #[serde(rename = "ELEV(M)")]
    pub elevation: Option<f64>,
    /// First day of the station's period of record.
    #[serde(rename = "BEGIN", with = "compact_date")]
    pub record_start: Option<NaiveDate>,
    /// Last day of the station's period of record.
    #[serde(rename = "END", with = "compact_date")]
    pub record_end: Option<NaiveDate>,
}

impl Station {
    /// The combined identifier used to name yearly archive files.
    pub fn id(&self) -> String {
        format!("{}-{}", self.usaf, self.wban)
    }

    /// Whether the inventory row carries coordinates, which spatial
    /// queries require.
    pub(crate) fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Serde adapter for the inventory's compact `YYYYMMDD` date columns,
/// where an empty field means "unknown".
pub(crate) mod compact_date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y%m%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(Error::custom),
        }
    }
}
