//! Hour-of-day totals.

use serde::Serialize;

use crate::schema::HourlyRecord;

/// Hours in a day; the view always has this many entries.
pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourTotal {
    pub hour: u8,
    pub total_count: u64,
}

/// Rentals summed by hour of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyTotals {
    /// Exactly 24 entries, hour 0 first.
    pub hours: Vec<HourTotal>,
}

impl HourlyTotals {
    /// Sum across all hours.
    pub fn total_count(&self) -> u64 {
        self.hours.iter().map(|h| h.total_count).sum()
    }

    /// The busiest hour; the earliest wins a tie. `None` when nothing was rented.
    pub fn peak(&self) -> Option<HourTotal> {
        self.hours
            .iter()
            .copied()
            .filter(|h| h.total_count > 0)
            .fold(None, |best: Option<HourTotal>, h| match best {
                Some(b) if b.total_count >= h.total_count => Some(b),
                _ => Some(h),
            })
    }
}

/// Sum filtered hourly rows by hour of day.
pub fn hourly_totals(rows: &[HourlyRecord]) -> HourlyTotals {
    let mut sums = [0u64; HOURS_PER_DAY];
    for record in rows {
        // hours are validated to 0..=23 on load
        if let Some(sum) = sums.get_mut(usize::from(record.hour)) {
            *sum += u64::from(record.total_count);
        }
    }

    let hours = (0u8..)
        .zip(sums)
        .map(|(hour, total_count)| HourTotal { hour, total_count })
        .collect();

    HourlyTotals { hours }
}
