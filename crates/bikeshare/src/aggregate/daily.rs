//! Daily summary view.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::stats::mean;
use crate::schema::DailyRecord;

/// Aggregates for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummaryRow {
    pub date: NaiveDate,
    pub total_count: u64,
    pub mean_temperature: f64,
    pub mean_humidity: f64,
}

/// Per-day totals and means over a range, plus the range total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySummary {
    /// One row per date, sorted ascending.
    pub rows: Vec<DailySummaryRow>,
    /// Sum of `total_count` over all rows.
    pub total_count: u64,
}

impl DailySummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Temperature and count series, aligned by date.
    pub fn temperature_series(&self) -> (Vec<f64>, Vec<f64>) {
        self.rows
            .iter()
            .map(|r| (r.mean_temperature, r.total_count as f64))
            .unzip()
    }
}

#[derive(Default)]
struct DayGroup {
    count: u64,
    temperatures: Vec<f64>,
    humidities: Vec<f64>,
}

/// Group filtered daily rows by date.
pub fn daily_summary(rows: &[DailyRecord]) -> DailySummary {
    let mut groups: BTreeMap<NaiveDate, DayGroup> = BTreeMap::new();
    for record in rows {
        let group = groups.entry(record.date).or_default();
        group.count += u64::from(record.total_count);
        group.temperatures.push(record.temperature);
        group.humidities.push(record.humidity);
    }

    let rows: Vec<DailySummaryRow> = groups
        .into_iter()
        .map(|(date, group)| DailySummaryRow {
            date,
            total_count: group.count,
            // groups are never empty
            mean_temperature: mean(&group.temperatures).unwrap_or_default(),
            mean_humidity: mean(&group.humidities).unwrap_or_default(),
        })
        .collect();

    let total_count = rows.iter().map(|r| r.total_count).sum();

    DailySummary { rows, total_count }
}
