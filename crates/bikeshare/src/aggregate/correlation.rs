//! Temperature/rental correlation view.

use serde::Serialize;

use super::daily::DailySummary;
use super::stats::{pearson, InsufficientData};

/// Pearson correlation between daily mean temperature and daily rentals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Correlation {
    /// Coefficient in `[-1, 1]` over `points` days.
    Computed { coefficient: f64, points: usize },
    /// Undefined for this range.
    NotComputable { reason: InsufficientData },
}

impl Correlation {
    /// The coefficient, if it could be computed.
    pub fn coefficient(&self) -> Option<f64> {
        match self {
            Correlation::Computed { coefficient, .. } => Some(*coefficient),
            Correlation::NotComputable { .. } => None,
        }
    }

    pub fn is_computable(&self) -> bool {
        self.coefficient().is_some()
    }
}

/// Correlate mean temperature with total rentals across the summary's days.
pub fn temperature_correlation(summary: &DailySummary) -> Correlation {
    if summary.is_empty() {
        return Correlation::NotComputable {
            reason: InsufficientData::NoRows,
        };
    }

    let (temperatures, counts) = summary.temperature_series();
    match pearson(&temperatures, &counts, ("temperature", "rental count")) {
        Ok(coefficient) => Correlation::Computed {
            coefficient,
            points: temperatures.len(),
        },
        Err(reason) => Correlation::NotComputable { reason },
    }
}
