//! Delimited-text reader with delimiter detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{file_label, DataTable, SourceMetadata};
use crate::error::LoadError;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b',', b'\t', b';', b'|'];

/// Date-only formats accepted in the date column.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Timestamp formats whose time part is dropped.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a calendar date from any of the accepted formats.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
        }
    }
}

/// Reads delimited files into [`DataTable`]s.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(DataTable, SourceMetadata), LoadError> {
        let path = path.as_ref();
        let io_err = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let size_bytes = file.metadata().map_err(io_err)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let hash = format!("sha256:{:x}", Sha256::digest(&contents));
        let name = file_label(path);

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents).ok_or_else(|| LoadError::EmptyData {
                file: name.clone(),
                message: "no lines to read".to_string(),
            })?,
        };

        let table = self.parse_bytes(&name, &contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            file = %name,
            rows = table.row_count(),
            columns = table.column_count(),
            format = %format,
            "Parsed data file"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse bytes directly.
    pub(crate) fn parse_bytes(
        &self,
        file: &str,
        bytes: &[u8],
        delimiter: u8,
    ) -> Result<DataTable, LoadError> {
        let csv_err = |source| LoadError::Csv {
            file: file.to_string(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(|s| s.to_string())
            .collect();

        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(LoadError::EmptyData {
                file: file.to_string(),
                message: "no columns found".to_string(),
            });
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(csv_err)?;
            rows.push(record.iter().map(|s| s.trim().to_string()).collect());
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

/// Pick the delimiter that splits the first lines into the most, equally sized, fields.
fn detect_delimiter(bytes: &[u8]) -> Option<u8> {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    if lines.is_empty() {
        return None;
    }

    let score = |delim: u8| -> usize {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_unquoted(line, delim as char))
            .collect();
        let first = counts[0];
        if first == 0 {
            0
        } else if counts.iter().all(|&c| c == first) {
            first * 1000
        } else {
            first
        }
    };

    let mut best = (b',', 0);
    for &delim in DELIMITERS {
        let s = score(delim);
        if s > best.1 {
            best = (delim, s);
        }
    }

    Some(best.0)
}

/// Count delimiter occurrences in a line, skipping quoted sections.
fn count_unquoted(line: &str, delimiter: char) -> usize {
    let mut in_quotes = false;
    line.chars()
        .filter(|&ch| {
            if ch == '"' {
                in_quotes = !in_quotes;
            }
            ch == delimiter && !in_quotes
        })
        .count()
}
