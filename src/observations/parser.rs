//! Decodes the fixed-width `.op` daily-summary format of the NOAA GSOD
//! archive. Fields sit at fixed byte positions rather than behind
//! separators, so each one is sliced out of the line individually.
//!
//! The archive writes numeric placeholders where no value was observed;
//! those are converted to `None` here, once, so nothing downstream ever
//! sees a sentinel.

use crate::observations::error::ParseError;
use crate::types::daily_summary::DailySummary;
use chrono::NaiveDate;
use std::ops::Range;

// Byte ranges within one observation line, per the archive's format
// description (GSOD_DESC.txt).
const STATION: Range<usize> = 0..6;
const DATE: Range<usize> = 14..22;
const TEMP: Range<usize> = 24..30;
const DEWP: Range<usize> = 35..41;
const SLP: Range<usize> = 46..52;
const STP: Range<usize> = 57..63;
const VISIB: Range<usize> = 68..73;
const WDSP: Range<usize> = 78..83;
const MXSPD: Range<usize> = 88..93;
const MAX: Range<usize> = 102..108;
const MIN: Range<usize> = 110..116;
const PRCP: Range<usize> = 118..123;
const PRCP_FLAG: usize = 123;
const SNDP: Range<usize> = 125..130;
const INDICATORS: usize = 132; // FRSHTT block, six digits
const LINE_LEN: usize = 138;

const DATE_FORMAT: &str = "%Y%m%d";

// Missing-value placeholders used by the archive.
const MISSING_9999_9: f64 = 9999.9;
const MISSING_999_9: f64 = 999.9;
const MISSING_99_99: f64 = 99.99;

/// Parses the raw text of one yearly archive file into daily summaries,
/// in file order.
///
/// The column-label header line and blank lines are skipped. The first
/// malformed line fails the whole parse; there is no partial result.
pub fn parse_observations(raw: &str) -> Result<Vec<DailySummary>, ParseError> {
    let mut summaries = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        if line.is_empty() || line.starts_with("STN---") {
            continue;
        }
        summaries.push(parse_line(line, index + 1)?);
    }
    Ok(summaries)
}

fn parse_line(line: &str, line_number: usize) -> Result<DailySummary, ParseError> {
    if line.len() < LINE_LEN || !line.is_ascii() {
        return Err(ParseError::MalformedLine {
            line: line_number,
            length: line.len(),
            expected: LINE_LEN,
        });
    }

    let date_text = &line[DATE];
    let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|source| {
        ParseError::InvalidDate {
            line: line_number,
            value: date_text.to_string(),
            source,
        }
    })?;

    let mut summary = DailySummary {
        station: line[STATION].trim().to_string(),
        date,
        temp_mean: measurement(line, line_number, "TEMP", TEMP, MISSING_9999_9)?,
        temp_max: measurement(line, line_number, "MAX", MAX, MISSING_9999_9)?,
        temp_min: measurement(line, line_number, "MIN", MIN, MISSING_9999_9)?,
        dew_point: measurement(line, line_number, "DEWP", DEWP, MISSING_9999_9)?,
        sea_level_pressure: measurement(line, line_number, "SLP", SLP, MISSING_9999_9)?,
        station_pressure: measurement(line, line_number, "STP", STP, MISSING_9999_9)?,
        visibility: measurement(line, line_number, "VISIB", VISIB, MISSING_999_9)?,
        wind_speed_mean: measurement(line, line_number, "WDSP", WDSP, MISSING_999_9)?,
        wind_speed_max: measurement(line, line_number, "MXSPD", MXSPD, MISSING_999_9)?,
        precipitation: measurement(line, line_number, "PRCP", PRCP, MISSING_99_99)?,
        snow_depth: measurement(line, line_number, "SNDP", SNDP, MISSING_999_9)?,
        fog: indicator(line, line_number, "fog", INDICATORS)?,
        rain: indicator(line, line_number, "rain", INDICATORS + 1)?,
        snow: indicator(line, line_number, "snow", INDICATORS + 2)?,
        hail: indicator(line, line_number, "hail", INDICATORS + 3)?,
        thunder: indicator(line, line_number, "thunder", INDICATORS + 4)?,
        tornado: indicator(line, line_number, "tornado", INDICATORS + 5)?,
    };

    // PRCP carries a report flag in the column right after the value;
    // `I` means no precipitation amount was reported at all.
    if line.as_bytes()[PRCP_FLAG] == b'I' {
        summary.precipitation = None;
    }
    // A day without the rain (or snow) indicator and no measured amount
    // is a dry day, not a gap in the record.
    if !summary.rain && summary.precipitation.is_none() {
        summary.precipitation = Some(0.0);
    }
    if !summary.snow && summary.snow_depth.is_none() {
        summary.snow_depth = Some(0.0);
    }

    Ok(summary)
}

fn measurement(
    line: &str,
    line_number: usize,
    field: &'static str,
    range: Range<usize>,
    missing: f64,
) -> Result<Option<f64>, ParseError> {
    let text = line[range].trim();
    let value: f64 = text.parse().map_err(|source| ParseError::InvalidNumber {
        line: line_number,
        field,
        value: text.to_string(),
        source,
    })?;
    Ok(if value == missing { None } else { Some(value) })
}

fn indicator(
    line: &str,
    line_number: usize,
    field: &'static str,
    position: usize,
) -> Result<bool, ParseError> {
    match line.as_bytes()[position] {
        b'0' => Ok(false),
        b'1' => Ok(true),
        other => Err(ParseError::InvalidIndicator {
            line: line_number,
            field,
            value: char::from(other),
        }),
    }
}
