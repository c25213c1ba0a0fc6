//! Bikeshare: aggregation pipeline behind the bike-sharing rental dashboard.
//!
//! Two datasets are loaded once into an immutable record store: one row per
//! day and one row per (day, hour). Every dashboard view is a pure function
//! of the rows falling inside a user-selected date range.
//!
//! # Views
//!
//! - **Daily summary**: rentals and mean weather per day
//! - **Correlation**: temperature against daily rentals
//! - **Temperature buckets**: hourly rows per temperature band
//! - **Hourly totals**: rentals per hour of day
//! - **Seasonal totals**: rentals per season
//! - **RFM**: recency, frequency and monetary ranking of days per rider segment
//!
//! # Example
//!
//! ```no_run
//! use bikeshare::{Dashboard, DashboardConfig, DateRange};
//!
//! let dashboard = Dashboard::load(DashboardConfig::from_dir("data")).unwrap();
//! let range = DateRange::parse("2011-01-01", Some("2011-03-31")).unwrap();
//! let views = dashboard.views(&range);
//!
//! println!("Rentals: {}", views.daily_summary.total_count);
//! for insight in &views.insights {
//!     println!("{}", insight.text);
//! }
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod input;
pub mod insights;
pub mod schema;

mod dashboard;

pub use crate::dashboard::{Dashboard, DashboardConfig, DashboardViews, Notice};
pub use aggregate::{Correlation, InsufficientData, RfmReport};
pub use error::{BikeshareError, LoadError, Result};
pub use filter::DateRange;
pub use input::{DataSource, RecordStore, SourceMetadata};
pub use insights::Insight;
pub use schema::{DailyRecord, HourlyRecord, Season, Segment, TemperatureBucket};
