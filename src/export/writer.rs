use crate::export::error::FormatError;
use crate::export::{DATE_FORMAT, HEADER, MISSING_TOKEN};
use crate::types::daily_summary::DailySummary;
use log::info;
use std::path::Path;

/// Writes the summaries to a CSV file at `path`, overwriting it if it
/// already exists.
///
/// Missing measurements are written as the `NA` token and indicator
/// flags as `1`/`0`. Numbers use their shortest round-trip formatting,
/// so a read-back reproduces them exactly.
pub fn write_csv(summaries: &[DailySummary], path: &Path) -> Result<(), FormatError> {
    info!("Writing {} records to {}", summaries.len(), path.display());

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for summary in summaries {
        writer.write_record([
            summary.station.clone(),
            summary.date.format(DATE_FORMAT).to_string(),
            measurement(summary.temp_mean),
            measurement(summary.temp_max),
            measurement(summary.temp_min),
            measurement(summary.dew_point),
            measurement(summary.sea_level_pressure),
            measurement(summary.station_pressure),
            measurement(summary.visibility),
            measurement(summary.wind_speed_mean),
            measurement(summary.wind_speed_max),
            measurement(summary.precipitation),
            measurement(summary.snow_depth),
            flag(summary.fog),
            flag(summary.rain),
            flag(summary.snow),
            flag(summary.hail),
            flag(summary.thunder),
            flag(summary.tornado),
        ])?;
    }
    writer.flush()?;

    info!("Successfully written {}", path.display());
    Ok(())
}

fn measurement(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_TOKEN.to_string(), |v| v.to_string())
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}
