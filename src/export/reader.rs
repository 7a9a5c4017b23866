use crate::export::error::FormatError;
use crate::export::{DATE_FORMAT, HEADER, MISSING_TOKEN};
use crate::types::daily_summary::DailySummary;
use chrono::NaiveDate;
use csv::StringRecord;
use log::info;
use std::path::Path;

/// Reads a file previously produced by [`crate::write_csv`] back into
/// daily summaries, inverse of its encoding.
///
/// The header row must name exactly the expected columns, in order;
/// anything else is a [`FormatError::HeaderMismatch`].
pub fn read_csv(path: &Path) -> Result<Vec<DailySummary>, FormatError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?;
    if headers.iter().ne(HEADER) {
        return Err(FormatError::HeaderMismatch {
            expected: HEADER.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut summaries = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // Row 1 is the header.
        summaries.push(parse_row(&row, index + 2)?);
    }
    info!(
        "Read {} records from {}",
        summaries.len(),
        path.display()
    );
    Ok(summaries)
}

fn parse_row(row: &StringRecord, line: usize) -> Result<DailySummary, FormatError> {
    let date_text = column(row, line, 1)?;
    let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
        FormatError::InvalidValue {
            line,
            column: HEADER[1],
            value: date_text.to_string(),
        }
    })?;

    Ok(DailySummary {
        station: column(row, line, 0)?.to_string(),
        date,
        temp_mean: measurement(row, line, 2)?,
        temp_max: measurement(row, line, 3)?,
        temp_min: measurement(row, line, 4)?,
        dew_point: measurement(row, line, 5)?,
        sea_level_pressure: measurement(row, line, 6)?,
        station_pressure: measurement(row, line, 7)?,
        visibility: measurement(row, line, 8)?,
        wind_speed_mean: measurement(row, line, 9)?,
        wind_speed_max: measurement(row, line, 10)?,
        precipitation: measurement(row, line, 11)?,
        snow_depth: measurement(row, line, 12)?,
        fog: flag(row, line, 13)?,
        rain: flag(row, line, 14)?,
        snow: flag(row, line, 15)?,
        hail: flag(row, line, 16)?,
        thunder: flag(row, line, 17)?,
        tornado: flag(row, line, 18)?,
    })
}

fn column<'a>(row: &'a StringRecord, line: usize, index: usize) -> Result<&'a str, FormatError> {
    row.get(index).ok_or(FormatError::MissingColumn {
        line,
        column: HEADER[index],
    })
}

fn measurement(row: &StringRecord, line: usize, index: usize) -> Result<Option<f64>, FormatError> {
    let text = column(row, line, index)?;
    if text == MISSING_TOKEN {
        return Ok(None);
    }
    text.parse().map(Some).map_err(|_| FormatError::InvalidValue {
        line,
        column: HEADER[index],
        value: text.to_string(),
    })
}

fn flag(row: &StringRecord, line: usize, index: usize) -> Result<bool, FormatError> {
    match column(row, line, index)? {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(FormatError::InvalidValue {
            line,
            column: HEADER[index],
            value: other.to_string(),
        }),
    }
}
