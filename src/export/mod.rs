//! CSV export of daily summaries and the symmetric read-back path.
//!
//! The two directions share the column set and the `NA` missing-value
//! token, so `read_csv(write_csv(records))` reproduces the records
//! exactly, including which fields were missing.

pub mod error;
pub mod reader;
pub mod writer;

/// Column names of the output file, in writing order.
pub(crate) const HEADER: [&str; 19] = [
    "station",
    "date",
    "temp_mean",
    "temp_max",
    "temp_min",
    "dew_point",
    "sea_level_pressure",
    "station_pressure",
    "visibility",
    "wind_speed_mean",
    "wind_speed_max",
    "precipitation",
    "snow_depth",
    "fog",
    "rain",
    "snow",
    "hail",
    "thunder",
    "tornado",
];

/// Token written where a measurement is missing.
pub(crate) const MISSING_TOKEN: &str = "NA";

pub(crate) const DATE_FORMAT: &str = "%Y%m%d";

#[cfg(test)]
mod tests {
    use crate::export::error::FormatError;
    use crate::export::reader::read_csv;
    use crate::export::writer::write_csv;
    use crate::types::daily_summary::DailySummary;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn summary(day: u32) -> DailySummary {
        DailySummary {
            station: "724940".to_string(),
            date: NaiveDate::from_ymd_opt(2020, 1, day).unwrap(),
            temp_mean: Some(55.5),
            temp_max: Some(63.0),
            temp_min: Some(46.9),
            dew_point: Some(48.2),
            sea_level_pressure: Some(1021.0),
            station_pressure: Some(1017.3),
            visibility: Some(9.9),
            wind_speed_mean: Some(4.4),
            wind_speed_max: Some(9.9),
            precipitation: Some(0.0),
            snow_depth: None,
            fog: false,
            rain: false,
            snow: true,
            hail: false,
            thunder: true,
            tornado: false,
        }
    }

    #[test]
    fn round_trips_records_exactly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_data.csv");

        let records = vec![
            summary(1),
            DailySummary {
                temp_mean: None,
                dew_point: None,
                sea_level_pressure: None,
                visibility: Some(0.125),
                snow_depth: Some(0.0),
                snow: false,
                ..summary(2)
            },
        ];

        write_csv(&records, &path).unwrap();
        let restored = read_csv(&path).unwrap();
        assert_eq!(restored, records);
    }

    #[test]
    fn preserves_missing_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gaps.csv");

        let record = DailySummary {
            temp_mean: None,
            snow_depth: None,
            precipitation: None,
            ..summary(1)
        };
        write_csv(std::slice::from_ref(&record), &path).unwrap();

        let restored = read_csv(&path).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].temp_mean, None);
        assert_eq!(restored[0].snow_depth, None);
        assert_eq!(restored[0].precipitation, None);
        // Present fields stay numeric.
        assert_eq!(restored[0].temp_max, Some(63.0));
    }

    #[test]
    fn writes_the_documented_header_and_tokens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.csv");
        write_csv(&[summary(1)], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), super::HEADER.join(","));
        let row = lines.next().unwrap();
        assert!(row.starts_with("724940,20200101,"));
        assert!(row.contains(",NA,")); // snow_depth
        assert!(row.ends_with(",0,0,1,0,1,0"));
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&[summary(1), summary(2)], &path).unwrap();
        write_csv(&[summary(3)], &path).unwrap();
        assert_eq!(read_csv(&path).unwrap().len(), 1);
    }

    #[test]
    fn rejects_a_header_with_a_missing_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad_header.csv");
        let header: Vec<&str> = super::HEADER
            .iter()
            .copied()
            .filter(|name| *name != "snow_depth")
            .collect();
        fs::write(&path, format!("{}\n", header.join(","))).unwrap();

        let err = read_csv(&path).unwrap_err();
        assert!(matches!(err, FormatError::HeaderMismatch { .. }));
    }

    #[test]
    fn rejects_corrupt_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.csv");
        let mut row = vec!["724940", "20200101"];
        row.extend(["x"; 11]);
        row.extend(["0"; 6]);
        fs::write(
            &path,
            format!("{}\n{}\n", super::HEADER.join(","), row.join(",")),
        )
        .unwrap();

        let err = read_csv(&path).unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidValue {
                line: 2,
                column: "temp_mean",
                ..
            }
        ));
    }
}
