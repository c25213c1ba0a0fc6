//! The record store: both datasets, loaded once and read-only afterwards.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::info;

use super::parser::{parse_date, Parser};
use super::source::{DataSource, DataTable, SourceMetadata};
use crate::error::LoadError;
use crate::filter::DateRange;
use crate::schema::{DailyRecord, HourlyRecord, Season};

/// Label used for errors on records built in memory.
const DAILY_LABEL: &str = "daily";
const HOURLY_LABEL: &str = "hourly";

/// A resolved column: header name plus position.
#[derive(Debug, Clone, Copy)]
struct Column {
    name: &'static str,
    index: usize,
}

impl Column {
    fn resolve(table: &DataTable, file: &str, name: &'static str) -> Result<Self, LoadError> {
        let index = table.require_column(file, name)?;
        Ok(Self { name, index })
    }
}

/// One data row being decoded, with its 1-based row number for errors.
struct Row<'a> {
    file: &'a str,
    number: usize,
    cells: &'a [String],
}

impl<'a> Row<'a> {
    fn cell(&self, column: Column) -> &'a str {
        self.cells.get(column.index).map(String::as_str).unwrap_or("")
    }

    fn invalid(&self, column: Column, message: impl Into<String>) -> LoadError {
        LoadError::InvalidValue {
            file: self.file.to_string(),
            row: self.number,
            column: column.name.to_string(),
            message: message.into(),
        }
    }

    fn date(&self, column: Column) -> Result<NaiveDate, LoadError> {
        let value = self.cell(column);
        parse_date(value)
            .ok_or_else(|| self.invalid(column, format!("unparseable date '{}'", value)))
    }

    fn number<T: FromStr>(&self, column: Column, kind: &str) -> Result<T, LoadError> {
        let value = self.cell(column);
        value
            .parse()
            .map_err(|_| self.invalid(column, format!("expected {}, found '{}'", kind, value)))
    }

    fn measure(&self, column: Column) -> Result<f64, LoadError> {
        let value: f64 = self.number(column, "a number")?;
        if !value.is_finite() {
            return Err(self.invalid(column, "value must be finite"));
        }
        Ok(value)
    }
}

/// Holds the daily and hourly datasets.
///
/// Records are never added or removed after construction; every view is
/// computed from borrowed slices.
#[derive(Debug, Clone)]
pub struct RecordStore {
    daily: Vec<DailyRecord>,
    hourly: Vec<HourlyRecord>,
    daily_source: Option<SourceMetadata>,
    hourly_source: Option<SourceMetadata>,
}

impl RecordStore {
    /// Load both datasets from disk.
    pub fn load(source: &DataSource, parser: &Parser) -> Result<Self, LoadError> {
        let (daily_table, daily_meta) = parser.parse_file(&source.daily)?;
        let daily = decode_daily(&daily_table, &daily_meta.file)?;
        check_daily(&daily, &daily_meta.file)?;

        let (hourly_table, hourly_meta) = parser.parse_file(&source.hourly)?;
        let hourly = decode_hourly(&hourly_table, &hourly_meta.file)?;
        check_hourly(&hourly, &hourly_meta.file)?;

        info!(
            daily_rows = daily.len(),
            hourly_rows = hourly.len(),
            daily_file = %daily_meta.path.display(),
            hourly_file = %hourly_meta.path.display(),
            "Loaded rental datasets"
        );

        Ok(Self {
            daily,
            hourly,
            daily_source: Some(daily_meta),
            hourly_source: Some(hourly_meta),
        })
    }

    /// Build a store from in-memory records, applying the same key checks as `load`.
    pub fn from_records(
        daily: Vec<DailyRecord>,
        hourly: Vec<HourlyRecord>,
    ) -> Result<Self, LoadError> {
        for (i, record) in daily.iter().enumerate() {
            check_counts(
                DAILY_LABEL,
                i + 1,
                record.total_count,
                record.casual_count,
                record.registered_count,
            )?;
        }
        check_daily(&daily, DAILY_LABEL)?;

        for (i, record) in hourly.iter().enumerate() {
            if record.hour > 23 {
                return Err(LoadError::InvalidValue {
                    file: HOURLY_LABEL.to_string(),
                    row: i + 1,
                    column: "hr".to_string(),
                    message: format!("hour {} outside 0..=23", record.hour),
                });
            }
        }
        check_hourly(&hourly, HOURLY_LABEL)?;

        Ok(Self {
            daily,
            hourly,
            daily_source: None,
            hourly_source: None,
        })
    }

    /// The daily dataset, in file order.
    pub fn daily(&self) -> &[DailyRecord] {
        &self.daily
    }

    /// The hourly dataset, in file order.
    pub fn hourly(&self) -> &[HourlyRecord] {
        &self.hourly
    }

    /// Metadata for the daily file, if loaded from disk.
    pub fn daily_source(&self) -> Option<&SourceMetadata> {
        self.daily_source.as_ref()
    }

    /// Metadata for the hourly file, if loaded from disk.
    pub fn hourly_source(&self) -> Option<&SourceMetadata> {
        self.hourly_source.as_ref()
    }

    /// The span from the earliest to the latest daily date.
    pub fn coverage(&self) -> Option<DateRange> {
        let min = self.daily.iter().map(|r| r.date).min()?;
        let max = self.daily.iter().map(|r| r.date).max()?;
        DateRange::new(min, max).ok()
    }
}

fn decode_daily(table: &DataTable, file: &str) -> Result<Vec<DailyRecord>, LoadError> {
    let date = Column::resolve(table, file, "dteday")?;
    let season = Column::resolve(table, file, "season")?;
    let temp = Column::resolve(table, file, "temp")?;
    let hum = Column::resolve(table, file, "hum")?;
    let casual = Column::resolve(table, file, "casual")?;
    let registered = Column::resolve(table, file, "registered")?;
    let cnt = Column::resolve(table, file, "cnt")?;

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            let row = Row {
                file,
                number: i + 1,
                cells,
            };

            let code: u8 = row.number(season, "a season code")?;
            let season_value = Season::from_code(code)
                .ok_or_else(|| row.invalid(season, format!("season code {} outside 1..=4", code)))?;

            let record = DailyRecord {
                date: row.date(date)?,
                season: season_value,
                total_count: row.number(cnt, "a non-negative count")?,
                casual_count: row.number(casual, "a non-negative count")?,
                registered_count: row.number(registered, "a non-negative count")?,
                temperature: row.measure(temp)?,
                humidity: row.measure(hum)?,
            };

            check_counts(
                file,
                row.number,
                record.total_count,
                record.casual_count,
                record.registered_count,
            )?;

            Ok(record)
        })
        .collect()
}

fn decode_hourly(table: &DataTable, file: &str) -> Result<Vec<HourlyRecord>, LoadError> {
    let date = Column::resolve(table, file, "dteday")?;
    let hr = Column::resolve(table, file, "hr")?;
    let temp = Column::resolve(table, file, "temp")?;
    let cnt = Column::resolve(table, file, "cnt")?;

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            let row = Row {
                file,
                number: i + 1,
                cells,
            };

            let hour: u8 = row.number(hr, "an hour of day")?;
            if hour > 23 {
                return Err(row.invalid(hr, format!("hour {} outside 0..=23", hour)));
            }

            Ok(HourlyRecord {
                date: row.date(date)?,
                hour,
                total_count: row.number(cnt, "a non-negative count")?,
                temperature: row.measure(temp)?,
            })
        })
        .collect()
}

fn check_counts(
    file: &str,
    row: usize,
    total: u32,
    casual: u32,
    registered: u32,
) -> Result<(), LoadError> {
    if u64::from(total) != u64::from(casual) + u64::from(registered) {
        return Err(LoadError::CountMismatch {
            file: file.to_string(),
            row,
            total: total.into(),
            casual: casual.into(),
            registered: registered.into(),
        });
    }
    Ok(())
}

fn check_daily(records: &[DailyRecord], file: &str) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        if !seen.insert(record.date) {
            return Err(LoadError::DuplicateKey {
                file: file.to_string(),
                row: i + 1,
                key: record.date.to_string(),
            });
        }
    }
    Ok(())
}

fn check_hourly(records: &[HourlyRecord], file: &str) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        if !seen.insert((record.date, record.hour)) {
            return Err(LoadError::DuplicateKey {
                file: file.to_string(),
                row: i + 1,
                key: format!("{} hour {}", record.date, record.hour),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_HEADER: &str = "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";
    const HOUR_HEADER: &str = "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

    fn table(text: &str) -> DataTable {
        Parser::new().parse_bytes("test.csv", text.as_bytes(), b',').unwrap()
    }

    #[test]
    fn test_decode_daily() {
        let text = format!(
            "{}\n1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985\n",
            DAY_HEADER
        );
        let records = decode_daily(&table(&text), "day.csv").unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(r.season, Season::Winter);
        assert_eq!((r.total_count, r.casual_count, r.registered_count), (985, 331, 654));
        assert!((r.temperature - 0.344167).abs() < 1e-12);
        assert!((r.humidity - 0.805833).abs() < 1e-12);
    }

    #[test]
    fn test_decode_hourly() {
        let text = format!(
            "{}\n1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16\n2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40\n",
            HOUR_HEADER
        );
        let records = decode_hourly(&table(&text), "hour.csv").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].hour, 1);
        assert_eq!(records[1].total_count, 40);
    }

    #[test]
    fn test_missing_column() {
        let text = "dteday,season,temp,casual,registered,cnt\n2011-01-01,1,0.3,1,2,3\n";
        let err = decode_daily(&table(text), "day.csv").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "hum"));
    }

    #[test]
    fn test_unparseable_date() {
        let text = "dteday,hr,temp,cnt\n2011-01-01,0,0.2,5\nsoon,1,0.2,5\n";
        let err = decode_hourly(&table(text), "hour.csv").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidValue { row: 2, ref column, .. } if column == "dteday"
        ));
    }

    #[test]
    fn test_out_of_domain_values() {
        let text = "dteday,hr,temp,cnt\n2011-01-01,24,0.2,5\n";
        let err = decode_hourly(&table(text), "hour.csv").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref column, .. } if column == "hr"));

        let text = "dteday,hr,temp,cnt\n2011-01-01,3,NaN,5\n";
        let err = decode_hourly(&table(text), "hour.csv").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref column, .. } if column == "temp"));

        let text = "dteday,hr,temp,cnt\n2011-01-01,3,0.2,-5\n";
        let err = decode_hourly(&table(text), "hour.csv").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref column, .. } if column == "cnt"));

        let err = decode_daily(
            &table("dteday,season,temp,hum,casual,registered,cnt\n2011-01-01,7,0.3,0.5,1,2,3\n"),
            "day.csv",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref column, .. } if column == "season"));
    }

    #[test]
    fn test_count_mismatch() {
        let err = decode_daily(
            &table("dteday,season,temp,hum,casual,registered,cnt\n2011-01-01,1,0.3,0.5,1,2,4\n"),
            "day.csv",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::CountMismatch { total: 4, casual: 1, registered: 2, .. }));
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        let day = DailyRecord {
            date,
            season: Season::Winter,
            total_count: 3,
            casual_count: 1,
            registered_count: 2,
            temperature: 0.3,
            humidity: 0.5,
        };
        let err = RecordStore::from_records(vec![day, day], vec![]).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateKey { row: 2, .. }));

        let hour = HourlyRecord {
            date,
            hour: 5,
            total_count: 3,
            temperature: 0.3,
        };
        let err = RecordStore::from_records(vec![day], vec![hour, hour]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::DuplicateKey { ref key, .. } if key == "2011-01-01 hour 5"
        ));
    }

    #[test]
    fn test_coverage() {
        let make = |d: u32| DailyRecord {
            date: NaiveDate::from_ymd_opt(2011, 1, d).unwrap(),
            season: Season::Winter,
            total_count: 0,
            casual_count: 0,
            registered_count: 0,
            temperature: 0.3,
            humidity: 0.5,
        };
        let store = RecordStore::from_records(vec![make(5), make(2), make(9)], vec![]).unwrap();
        let coverage = store.coverage().unwrap();
        assert_eq!(coverage.start(), NaiveDate::from_ymd_opt(2011, 1, 2).unwrap());
        assert_eq!(coverage.end(), NaiveDate::from_ymd_opt(2011, 1, 9).unwrap());

        let empty = RecordStore::from_records(vec![], vec![]).unwrap();
        assert!(empty.coverage().is_none());
        assert!(empty.daily_source().is_none());
    }
}
