//! Record and category types for the rental datasets.

mod record;
mod types;

pub use record::{DailyRecord, Dated, HourlyRecord};
pub use types::{Season, Segment, TemperatureBucket, TEMPERATURE_BOUNDARIES};
