use thiserror::Error;

/// Errors raised while retrieving a yearly archive file.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    // Covers errors during download stream processing and decompression
    #[error("Data download or decompression failed")]
    DownloadIo(#[from] std::io::Error),

    #[error("Archive file for station {station} in {year} is not valid UTF-8")]
    Encoding {
        station: String,
        year: i32,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Errors raised while decoding the fixed-width observation format.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Line {line} has {length} characters, expected at least {expected}")]
    MalformedLine {
        line: usize,
        length: usize,
        expected: usize,
    },

    #[error("Invalid date '{value}' on line {line}")]
    InvalidDate {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid value '{value}' in field {field} on line {line}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Invalid weather indicator '{value}' for {field} on line {line}")]
    InvalidIndicator {
        line: usize,
        field: &'static str,
        value: char,
    },
}
