//! Season totals.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::schema::{DailyRecord, Season};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonTotal {
    pub season: Season,
    pub label: &'static str,
    pub total_count: u64,
}

/// Rentals summed by season, for seasons present in the range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonalTotals {
    /// Seasons in calendar order (Winter first).
    pub seasons: Vec<SeasonTotal>,
}

impl SeasonalTotals {
    /// Total for one season, if it occurs in the range.
    pub fn get(&self, season: Season) -> Option<u64> {
        self.seasons
            .iter()
            .find(|s| s.season == season)
            .map(|s| s.total_count)
    }

    /// The season with the most rentals; the earlier season wins a tie.
    pub fn busiest(&self) -> Option<SeasonTotal> {
        self.seasons
            .iter()
            .copied()
            .fold(None, |best: Option<SeasonTotal>, s| match best {
                Some(b) if b.total_count >= s.total_count => Some(b),
                _ => Some(s),
            })
    }
}

/// Sum filtered daily rows by season.
pub fn seasonal_totals(rows: &[DailyRecord]) -> SeasonalTotals {
    let mut sums: BTreeMap<Season, u64> = BTreeMap::new();
    for record in rows {
        *sums.entry(record.season).or_insert(0) += u64::from(record.total_count);
    }

    SeasonalTotals {
        seasons: sums
            .into_iter()
            .map(|(season, total_count)| SeasonTotal {
                season,
                label: season.label(),
                total_count,
            })
            .collect(),
    }
}
