//! Data source locations, file metadata and raw tables.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Default file name of the daily dataset.
pub const DEFAULT_DAILY_FILE: &str = "day.csv";
/// Default file name of the hourly dataset.
pub const DEFAULT_HOURLY_FILE: &str = "hour.csv";

/// Locations of the two dataset files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub daily: PathBuf,
    pub hourly: PathBuf,
}

impl DataSource {
    /// Create a source from explicit file paths.
    pub fn new(daily: impl Into<PathBuf>, hourly: impl Into<PathBuf>) -> Self {
        Self {
            daily: daily.into(),
            hourly: hourly.into(),
        }
    }

    /// Use the default file names inside a data directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_DAILY_FILE), dir.join(DEFAULT_HOURLY_FILE))
    }
}

/// Metadata about a loaded data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been read.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = file_label(&path);

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// File name used in error messages and metadata.
pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parsed tabular data, still as text.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column positions keyed by header name, in file order.
    pub columns: IndexMap<String, usize>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_string(), i))
            .collect();

        Self {
            columns,
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column, or a `MissingColumn` error naming the file.
    pub fn require_column(&self, file: &str, name: &str) -> Result<usize, LoadError> {
        self.columns
            .get(name)
            .copied()
            .ok_or_else(|| LoadError::MissingColumn {
                file: file.to_string(),
                column: name.to_string(),
            })
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_uses_default_names() {
        let source = DataSource::from_dir("data");
        assert_eq!(source.daily, Path::new("data").join("day.csv"));
        assert_eq!(source.hourly, Path::new("data").join("hour.csv"));
    }

    #[test]
    fn test_require_column() {
        let table = DataTable::new(
            vec!["dteday".to_string(), " cnt ".to_string()],
            vec![vec!["2011-01-01".to_string(), "985".to_string()]],
            b',',
        );

        assert_eq!(table.require_column("day.csv", "cnt").unwrap(), 1);
        assert_eq!(table.get(0, 1), Some("985"));

        let err = table.require_column("day.csv", "hum").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "hum"));
    }
}
