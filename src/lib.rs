mod error;
mod export;
mod gsod;
mod observations;
mod stations;
mod types;

pub use error::GsodError;
pub use gsod::Gsod;

pub use export::error::FormatError;
pub use export::reader::read_csv;
pub use export::writer::write_csv;

pub use observations::error::{FetchError, ParseError};
pub use observations::fetcher::ObservationFetcher;
pub use observations::parser::parse_observations;

pub use stations::error::LocateStationError;
pub use stations::locate_station::StationLocator;

pub use types::daily_summary::DailySummary;
pub use types::station::Station;
