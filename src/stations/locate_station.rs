use crate::stations::error::LocateStationError;
use crate::types::station::Station;
use haversine::{distance, Location as HaversineLocation, Units};
use log::info;
use reqwest::Client;
use tokio::task;

const INVENTORY_URL: &str = "https://www1.ncdc.noaa.gov/pub/data/noaa/isd-history.csv";

/// The NOAA station history inventory, loaded into memory for the
/// duration of a run.
///
/// Supports resolving a bare USAF identifier to a full station entry
/// (the archive needs the WBAN number too) and finding the stations
/// closest to a coordinate.
#[derive(Debug, Clone)]
pub struct StationLocator {
    stations: Vec<Station>,
}

impl StationLocator {
    /// Downloads and parses the station inventory.
    pub async fn new() -> Result<Self, LocateStationError> {
        let client = Client::new();
        Self::with_client(&client).await
    }

    pub(crate) async fn with_client(client: &Client) -> Result<Self, LocateStationError> {
        let bytes = Self::fetch_inventory(client).await?;
        let stations = task::spawn_blocking(move || Self::parse_inventory(&bytes)).await??;
        info!("Loaded {} stations from the NOAA inventory", stations.len());
        Ok(StationLocator { stations })
    }

    async fn fetch_inventory(client: &Client) -> Result<Vec<u8>, LocateStationError> {
        info!("Downloading station inventory from {}", INVENTORY_URL);
        let response = client
            .get(INVENTORY_URL)
            .send()
            .await
            .map_err(|e| LocateStationError::NetworkRequest(INVENTORY_URL.to_string(), e))?;
        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                if let Some(status) = e.status() {
                    return Err(LocateStationError::HttpStatus {
                        url: INVENTORY_URL.to_string(),
                        status,
                        source: e,
                    });
                }
                return Err(LocateStationError::NetworkRequest(
                    INVENTORY_URL.to_string(),
                    e,
                ));
            }
        };
        let bytes = response
            .bytes()
            .await
            .map_err(|e| LocateStationError::NetworkRequest(INVENTORY_URL.to_string(), e))?;
        Ok(bytes.to_vec())
    }

    /// Rows without both identifiers are unusable for addressing archive
    /// files and are dropped.
    pub(crate) fn parse_inventory(bytes: &[u8]) -> Result<Vec<Station>, LocateStationError> {
        let mut reader = csv::Reader::from_reader(bytes);
        let mut stations = Vec::new();
        for row in reader.deserialize() {
            let station: Station = row?;
            if station.usaf.is_empty() || station.wban.is_empty() {
                continue;
            }
            stations.push(station);
        }
        Ok(stations)
    }

    /// Looks up a station by its USAF identifier.
    ///
    /// Some stations appear under several WBAN numbers as their
    /// instrumentation changed; the entry with the most recent period of
    /// record wins.
    pub fn find(&self, usaf: &str) -> Option<&Station> {
        self.stations
            .iter()
            .filter(|s| s.usaf == usaf)
            .max_by_key(|s| s.record_end)
    }

    /// Returns up to `limit` stations within `max_distance_km` of the
    /// given coordinate, closest first, with their distance in
    /// kilometers.
    pub fn query(
        &self,
        latitude: f64,
        longitude: f64,
        limit: usize,
        max_distance_km: f64,
    ) -> Vec<(&Station, f64)> {
        let mut candidates: Vec<(&Station, f64)> = self
            .stations
            .iter()
            .filter(|s| s.has_location())
            .filter_map(|station| {
                let origin = HaversineLocation {
                    latitude,
                    longitude,
                };
                let here = HaversineLocation {
                    latitude: station.latitude?,
                    longitude: station.longitude?,
                };
                let km = distance(origin, here, Units::Kilometers);
                (km <= max_distance_km).then_some((station, km))
            })
            .collect();
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
        candidates.truncate(limit);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const INVENTORY: &str = r#""USAF","WBAN","STATION NAME","CTRY","STATE","ICAO","LAT","LON","ELEV(M)","BEGIN","END"
"724940","23234","SAN FRANCISCO INTERNATIONAL A","US","CA","KSFO","+37.620","-122.365","+0002.4","19730101","20200315"
"724940","99999","SAN FRANCISCO INTL","US","CA","KSFO","+37.620","-122.365","+0002.4","19450812","19721231"
"745039","23239","MOFFETT FEDERAL AIRFIELD","US","CA","KNUQ","+37.405","-122.048","+0010.4","19970701","20200315"
"999999","","BOGUS NO WBAN","US","","","","","","",""
"724943","99999","SAN FRANCISCO DWTN","US","CA","","","","","20060801","20200315"
"#;

    fn locator() -> StationLocator {
        StationLocator {
            stations: StationLocator::parse_inventory(INVENTORY.as_bytes()).unwrap(),
        }
    }

    #[test]
    fn parses_inventory_rows() {
        let stations = StationLocator::parse_inventory(INVENTORY.as_bytes()).unwrap();
        // The row without a WBAN number is dropped.
        assert_eq!(stations.len(), 4);

        let sfo = &stations[0];
        assert_eq!(sfo.id(), "724940-23234");
        assert_eq!(sfo.latitude, Some(37.620));
        assert_eq!(sfo.longitude, Some(-122.365));
        assert_eq!(
            sfo.record_start,
            Some(NaiveDate::from_ymd_opt(1973, 1, 1).unwrap())
        );

        // Blank coordinates and dates come through as missing.
        let downtown = &stations[3];
        assert_eq!(downtown.latitude, None);
        assert!(!downtown.has_location());
    }

    #[test]
    fn find_prefers_the_latest_record_period() {
        let locator = locator();
        let station = locator.find("724940").unwrap();
        assert_eq!(station.wban, "23234");
    }

    #[test]
    fn find_misses_unknown_identifiers() {
        assert!(locator().find("000000").is_none());
    }

    #[test]
    fn query_sorts_by_distance_and_honors_the_radius() {
        let locator = locator();
        // Near SFO; Moffett is ~30 km away, so a 50 km radius catches both.
        let results = locator.query(37.62, -122.37, 10, 50.0);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0.usaf, "724940");
        assert_eq!(results[2].0.usaf, "745039");
        assert!(results[0].1 <= results[1].1 && results[1].1 <= results[2].1);
        assert!(results.iter().all(|(_, km)| *km <= 50.0));

        // A tight radius keeps only the airport pair.
        let close = locator.query(37.62, -122.37, 10, 5.0);
        assert_eq!(close.len(), 2);

        let limited = locator.query(37.62, -122.37, 1, 50.0);
        assert_eq!(limited.len(), 1);
    }
}
