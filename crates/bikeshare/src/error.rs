//! Error types for the bikeshare library.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Failure while loading one of the rental datasets.
///
/// Load errors are fatal: the dashboard cannot start without both files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error in '{file}': {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// File has no header row.
    #[error("Empty data in '{file}': {message}")]
    EmptyData { file: String, message: String },

    /// A required column is absent from the header row.
    #[error("Missing required column '{column}' in '{file}'")]
    MissingColumn { file: String, column: String },

    /// A cell could not be parsed or is outside its domain.
    #[error("Invalid value in '{file}' at row {row}, column '{column}': {message}")]
    InvalidValue {
        file: String,
        row: usize,
        column: String,
        message: String,
    },

    /// Daily total does not equal casual plus registered.
    #[error(
        "Count mismatch in '{file}' at row {row}: cnt {total} != casual {casual} + registered {registered}"
    )]
    CountMismatch {
        file: String,
        row: usize,
        total: u64,
        casual: u64,
        registered: u64,
    },

    /// A date (or date/hour pair) appears more than once.
    #[error("Duplicate key {key} in '{file}' at row {row}")]
    DuplicateKey {
        file: String,
        row: usize,
        key: String,
    },
}

/// Main error type for bikeshare operations.
#[derive(Debug, Error)]
pub enum BikeshareError {
    /// Dataset could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Range start falls after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A date selection that cannot form a range (wrong arity or bad text).
    #[error("Invalid date selection: {0}")]
    InvalidSelection(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error writing CSV output.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BikeshareError {
    /// Returns true if this error should abort startup.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BikeshareError::Load(_) | BikeshareError::Config(_))
    }
}

/// Result type alias for bikeshare operations.
pub type Result<T> = std::result::Result<T, BikeshareError>;
