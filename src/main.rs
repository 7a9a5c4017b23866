use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use gsod::{write_csv, Gsod, GsodError};
use log::debug;
use std::path::PathBuf;

const DATE_FORMAT: &str = "%Y%m%d";

/// Download historic NOAA GSOD weather observations for one station and
/// export them as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Station selector: a USAF identifier ("724940"), or "USAF-WBAN"
    /// ("724940-23234") to skip the inventory lookup
    #[arg(short, long)]
    station: String,

    /// First day of the record period (YYYYMMDD)
    #[arg(long)]
    start: String,

    /// Last day of the record period (YYYYMMDD); defaults to yesterday
    #[arg(long)]
    end: Option<String>,

    /// Output CSV path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_date(value: &str) -> Result<NaiveDate, GsodError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| {
        GsodError::InvalidDateArgument {
            value: value.to_string(),
            source,
        }
    })
}

#[tokio::main]
async fn main() -> Result<(), GsodError> {
    env_logger::init();
    let args = Args::parse();

    let start = parse_date(&args.start)?;
    let end = match &args.end {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive() - Days::new(1),
    };
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("weather_data_{}.csv", args.station)));

    println!(
        "Gathering data from station {} from {} to {}",
        args.station, start, end
    );
    let client = Gsod::new().await?;
    let summaries = client.daily_summaries(&args.station, start, end).await?;
    debug!("Collected {} records", summaries.len());

    write_csv(&summaries, &output)?;
    println!(
        "Successfully written {} ({} records)",
        output.display(),
        summaries.len()
    );
    Ok(())
}
