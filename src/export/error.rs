use thiserror::Error;

/// Errors raised while writing the delimited output file or reading one
/// back.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("CSV processing failed")]
    Csv(#[from] csv::Error),

    #[error("File I/O failed")]
    Io(#[from] std::io::Error),

    #[error("Header mismatch: expected [{expected}], found [{found}]")]
    HeaderMismatch { expected: String, found: String },

    #[error("Row {line} is missing column '{column}'")]
    MissingColumn { line: usize, column: &'static str },

    #[error("Invalid value '{value}' in column '{column}' on row {line}")]
    InvalidValue {
        line: usize,
        column: &'static str,
        value: String,
    },
}
