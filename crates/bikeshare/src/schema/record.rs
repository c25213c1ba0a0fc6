//! Row types for the daily and hourly datasets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Season, Segment};

/// Anything that belongs to a calendar date and can be range-filtered.
pub trait Dated {
    /// The calendar date of the record.
    fn date(&self) -> NaiveDate;
}

/// One row of the daily dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: Season,
    /// Total rentals; always `casual_count + registered_count`.
    pub total_count: u32,
    pub casual_count: u32,
    pub registered_count: u32,
    /// Normalized temperature.
    pub temperature: f64,
    /// Normalized humidity.
    pub humidity: f64,
}

impl DailyRecord {
    /// Rentals attributed to a rider segment.
    pub fn segment_count(&self, segment: Segment) -> u32 {
        match segment {
            Segment::Casual => self.casual_count,
            Segment::Registered => self.registered_count,
        }
    }
}

impl Dated for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// One row of the hourly dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    /// Hour of day, 0..=23.
    pub hour: u8,
    pub total_count: u32,
    /// Normalized temperature.
    pub temperature: f64,
}

impl Dated for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
