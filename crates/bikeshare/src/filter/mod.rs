//! Date-range selection over the rental datasets.

mod range;

pub use range::{filter, DateRange};
