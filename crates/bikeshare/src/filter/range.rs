//! Inclusive date ranges and range filtering.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::{BikeshareError, Result};
use crate::input::parse_date;
use crate::schema::Dated;

/// An inclusive `[start, end]` span of calendar dates.
///
/// Construction guarantees `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting a start that falls after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(BikeshareError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one date.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Build a range from a user's date selection of one or two dates.
    pub fn from_selection(dates: &[NaiveDate]) -> Result<Self> {
        match dates {
            [date] => Ok(Self::single(*date)),
            [start, end] => Self::new(*start, *end),
            _ => Err(BikeshareError::InvalidSelection(format!(
                "expected one or two dates, got {}",
                dates.len()
            ))),
        }
    }

    /// Parse a range from text; a missing end gives a single-day range.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self> {
        let start = parse_selection_date(start)?;
        match end {
            Some(end) => Self::new(start, parse_selection_date(end)?),
            None => Ok(Self::single(start)),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check whether a date lies within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether the range covers a single date.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_day() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}

fn parse_selection_date(value: &str) -> Result<NaiveDate> {
    parse_date(value)
        .ok_or_else(|| BikeshareError::InvalidSelection(format!("unrecognized date '{}'", value)))
}

/// Return the records whose date falls within `range`, in their original order.
///
/// The source slice is left untouched.
pub fn filter<R: Dated + Clone>(records: &[R], range: &DateRange) -> Vec<R> {
    let selected: Vec<R> = records
        .iter()
        .filter(|record| range.contains(record.date()))
        .cloned()
        .collect();

    debug!(
        range = %range,
        total = records.len(),
        selected = selected.len(),
        "Filtered records by date range"
    );

    selected
}
