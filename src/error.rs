use crate::export::error::FormatError;
use crate::observations::error::{FetchError, ParseError};
use crate::stations::error::LocateStationError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GsodError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    LocateStation(#[from] LocateStationError),

    #[error("Station '{0}' is not in the NOAA inventory")]
    UnknownStation(String),

    #[error("Period start {start} is after its end {end}")]
    EmptyPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date '{value}', expected YYYYMMDD")]
    InvalidDateArgument {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
