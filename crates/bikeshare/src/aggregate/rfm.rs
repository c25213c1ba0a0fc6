//! Recency/frequency/monetary ranking of days for a rider segment.
//!
//! Each calendar date in the range is scored for one segment:
//!
//! - **monetary**: the segment's rentals that day
//! - **frequency**: the same value; daily aggregates carry no per-rental
//!   events, so frequency cannot be derived independently
//! - **recency**: days between that date and the latest date in the range
//!
//! Recency is measured against the filtered rows, never the full dataset,
//! so the latest selected day always has recency 0.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::schema::{DailyRecord, Segment};

/// Number of days in each ranking unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 5;

/// RFM scores for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RfmRow {
    pub date: NaiveDate,
    /// Days before the range's latest date; never negative.
    pub recency: i64,
    pub frequency: u64,
    pub monetary: u64,
}

/// RFM table and rankings for one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfmReport {
    pub segment: Segment,
    /// Latest date in the range; `None` when the range holds no rows.
    pub reference_date: Option<NaiveDate>,
    /// One row per date, ascending.
    pub rows: Vec<RfmRow>,
    /// Most recent days first.
    pub by_recency: Vec<RfmRow>,
    /// Highest frequency first.
    pub by_frequency: Vec<RfmRow>,
    /// Highest monetary value first.
    pub by_monetary: Vec<RfmRow>,
}

impl RfmReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The day with the highest monetary value, if any.
    pub fn best_day(&self) -> Option<&RfmRow> {
        self.by_monetary.first()
    }
}

/// Build the RFM table for `segment` over filtered daily rows.
///
/// Rankings hold at most `top_n` rows. Sorting is stable, so ties keep
/// date order.
pub fn rfm_report(rows: &[DailyRecord], segment: Segment, top_n: usize) -> RfmReport {
    let mut per_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in rows {
        *per_date.entry(record.date).or_insert(0) += u64::from(record.segment_count(segment));
    }

    let reference_date = per_date.keys().next_back().copied();

    let table: Vec<RfmRow> = match reference_date {
        Some(latest) => per_date
            .into_iter()
            .map(|(date, monetary)| RfmRow {
                date,
                recency: (latest - date).num_days(),
                frequency: monetary,
                monetary,
            })
            .collect(),
        None => Vec::new(),
    };

    let by_recency = ranked(&table, top_n, |a, b| a.recency.cmp(&b.recency));
    let by_frequency = ranked(&table, top_n, |a, b| b.frequency.cmp(&a.frequency));
    let by_monetary = ranked(&table, top_n, |a, b| b.monetary.cmp(&a.monetary));

    RfmReport {
        segment,
        reference_date,
        rows: table,
        by_recency,
        by_frequency,
        by_monetary,
    }
}

fn ranked<F>(rows: &[RfmRow], top_n: usize, compare: F) -> Vec<RfmRow>
where
    F: FnMut(&RfmRow, &RfmRow) -> std::cmp::Ordering,
{
    let mut sorted = rows.to_vec();
    sorted.sort_by(compare);
    sorted.truncate(top_n);
    sorted
}
