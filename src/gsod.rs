//! The main entry point for pulling GSOD data: resolves a station
//! selector against the NOAA inventory, walks the requested period one
//! archive year at a time, and returns the parsed daily summaries.

use crate::error::GsodError;
use crate::observations::fetcher::ObservationFetcher;
use crate::observations::parser::parse_observations;
use crate::stations::locate_station::StationLocator;
use crate::types::daily_summary::DailySummary;
use chrono::{Datelike, NaiveDate};
use log::info;

/// Client for the NOAA GSOD archive.
///
/// Construction downloads the station inventory; the inventory lives in
/// memory for the lifetime of the client.
pub struct Gsod {
    fetcher: ObservationFetcher,
    station_locator: StationLocator,
}

impl Gsod {
    pub async fn new() -> Result<Self, GsodError> {
        let station_locator = StationLocator::new().await?;
        Ok(Self {
            fetcher: ObservationFetcher::new(),
            station_locator,
        })
    }

    /// Access to the station inventory, e.g. for nearest-station
    /// queries.
    pub fn stations(&self) -> &StationLocator {
        &self.station_locator
    }

    /// Fetches every observation for `station` dated within
    /// `start..=end`, in archive order.
    ///
    /// `station` is either a bare USAF identifier, resolved through the
    /// inventory, or an explicit `USAF-WBAN` pair. Archive files cover
    /// one calendar year each; years are fetched one after another and
    /// any fetch or parse failure aborts the whole run.
    pub async fn daily_summaries(
        &self,
        station: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailySummary>, GsodError> {
        if start > end {
            return Err(GsodError::EmptyPeriod { start, end });
        }
        let (usaf, wban) = self.resolve_station(station)?;

        let mut summaries = Vec::new();
        for year in start.year()..=end.year() {
            info!("Collecting data for station {}-{} in {}", usaf, wban, year);
            let raw = self.fetcher.fetch_year(&usaf, &wban, year).await?;
            let parsed = parse_observations(&raw)?;
            summaries.extend(
                parsed
                    .into_iter()
                    .filter(|summary| summary.date >= start && summary.date <= end),
            );
        }
        Ok(summaries)
    }

    fn resolve_station(&self, selector: &str) -> Result<(String, String), GsodError> {
        match split_selector(selector) {
            Some((usaf, wban)) => Ok((usaf.to_string(), wban.to_string())),
            None => {
                let station = self
                    .station_locator
                    .find(selector)
                    .ok_or_else(|| GsodError::UnknownStation(selector.to_string()))?;
                Ok((station.usaf.clone(), station.wban.clone()))
            }
        }
    }
}

/// Splits an explicit `USAF-WBAN` selector. A bare USAF identifier
/// returns `None` and gets resolved against the inventory instead.
fn split_selector(selector: &str) -> Option<(&str, &str)> {
    selector.split_once('-')
}

#[cfg(test)]
mod tests {
    use super::split_selector;

    #[test]
    fn splits_explicit_station_pairs() {
        assert_eq!(split_selector("724940-23234"), Some(("724940", "23234")));
    }

    #[test]
    fn bare_identifiers_need_the_inventory() {
        assert_eq!(split_selector("724940"), None);
    }
}
