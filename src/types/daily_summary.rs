use chrono::NaiveDate;

/// One station-day from the NOAA GSOD archive.
///
/// Every measured field is optional: the archive marks unobserved values
/// with numeric placeholders (9999.9, 999.9, 99.99), and those are turned
/// into `None` once, when the raw line is parsed. Units are the archive's
/// own (Fahrenheit, knots, inches, millibars, miles).
#[derive(Debug, PartialEq, Clone)]
pub struct DailySummary {
    pub station: String,                  // USAF station number
    pub date: NaiveDate,
    pub temp_mean: Option<f64>,           // TEMP (F)
    pub temp_max: Option<f64>,            // MAX (F)
    pub temp_min: Option<f64>,            // MIN (F)
    pub dew_point: Option<f64>,           // DEWP (F)
    pub sea_level_pressure: Option<f64>,  // SLP (mb)
    pub station_pressure: Option<f64>,    // STP (mb)
    pub visibility: Option<f64>,          // VISIB (miles)
    pub wind_speed_mean: Option<f64>,     // WDSP (knots)
    pub wind_speed_max: Option<f64>,      // MXSPD, max sustained (knots)
    pub precipitation: Option<f64>,       // PRCP, total (inches)
    pub snow_depth: Option<f64>,          // SNDP (inches)
    pub fog: bool,
    pub rain: bool,
    pub snow: bool,
    pub hail: bool,
    pub thunder: bool,
    pub tornado: bool,
}
