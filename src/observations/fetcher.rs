use crate::observations::error::FetchError;
use async_compression::tokio::bufread::GzipDecoder;
use futures_util::TryStreamExt;
use log::{info, warn};
use reqwest::Client;
use tokio::io::AsyncReadExt;
use tokio_util::io::StreamReader;

const ARCHIVE_URL: &str = "https://www1.ncdc.noaa.gov/pub/data/gsod";

/// Retrieves yearly observation files from the NOAA GSOD archive.
///
/// The archive stores one gzipped fixed-width text file per station and
/// year, keyed on the station's USAF and WBAN numbers. A fetch is a
/// single request; a missing station/year surfaces as an HTTP 404 and is
/// not retried.
pub struct ObservationFetcher {
    client: Client,
}

impl ObservationFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Downloads and decompresses the archive file for one station and
    /// year, returning its raw text.
    pub async fn fetch_year(
        &self,
        usaf: &str,
        wban: &str,
        year: i32,
    ) -> Result<String, FetchError> {
        let url = format!("{}/{}/{}-{}-{}.op.gz", ARCHIVE_URL, year, usaf, wban, year);
        info!("Downloading observations from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
        let stream_reader = StreamReader::new(stream);
        let mut decoder = GzipDecoder::new(stream_reader);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).await?;
        info!(
            "Downloaded and decompressed {} bytes for station {}-{}",
            decompressed.len(),
            usaf,
            wban
        );

        String::from_utf8(decompressed).map_err(|source| FetchError::Encoding {
            station: format!("{}-{}", usaf, wban),
            year,
            source,
        })
    }
}

impl Default for ObservationFetcher {
    fn default() -> Self {
        Self::new()
    }
}
