//! View builders over filtered record sets.
//!
//! Every builder is a pure function of the rows it is handed; none of them
//! fail. Where a statistic is undefined for the rows given, the view says so
//! with [`InsufficientData`].

mod correlation;
mod daily;
mod hourly;
mod rfm;
mod seasonal;
mod stats;
mod temperature;

pub use correlation::{temperature_correlation, Correlation};
pub use daily::{daily_summary, DailySummary, DailySummaryRow};
pub use hourly::{hourly_totals, HourTotal, HourlyTotals, HOURS_PER_DAY};
pub use rfm::{rfm_report, RfmReport, RfmRow, DEFAULT_TOP_N};
pub use seasonal::{seasonal_totals, SeasonTotal, SeasonalTotals};
pub use stats::{mean, pearson, InsufficientData};
pub use temperature::{temperature_buckets, BucketCount, TemperatureBucketCounts};
