//! Temperature bucket counts over hourly rows.

use serde::Serialize;
use tracing::debug;

use crate::schema::{HourlyRecord, TemperatureBucket};

/// Number of hourly rows in one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketCount {
    pub bucket: TemperatureBucket,
    pub label: &'static str,
    pub count: usize,
}

/// Row counts for every temperature bucket, coldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureBucketCounts {
    /// Always one entry per bucket, in `TemperatureBucket::ALL` order.
    pub buckets: Vec<BucketCount>,
    /// Number of hourly rows classified; equals the sum of bucket counts.
    pub total_rows: usize,
    /// Rows whose temperature lies outside the nominal boundary span and
    /// were assigned to the nearest outer bucket.
    pub outside_nominal: usize,
}

impl TemperatureBucketCounts {
    /// Count for a single bucket.
    pub fn count(&self, bucket: TemperatureBucket) -> usize {
        self.buckets
            .iter()
            .find(|b| b.bucket == bucket)
            .map(|b| b.count)
            .unwrap_or(0)
    }
}

/// Classify each hourly row into a temperature bucket and count rows per bucket.
pub fn temperature_buckets(rows: &[HourlyRecord]) -> TemperatureBucketCounts {
    let mut counts = [0usize; TemperatureBucket::ALL.len()];
    let mut outside_nominal = 0;

    for record in rows {
        let bucket = TemperatureBucket::classify(record.temperature);
        if let Some(i) = TemperatureBucket::ALL.iter().position(|b| *b == bucket) {
            counts[i] += 1;
        }
        if !TemperatureBucket::is_nominal(record.temperature) {
            outside_nominal += 1;
        }
    }

    if outside_nominal > 0 {
        debug!(
            outside_nominal,
            total = rows.len(),
            "Temperatures outside nominal bucket span assigned to outer buckets"
        );
    }

    let buckets = TemperatureBucket::ALL
        .iter()
        .zip(counts)
        .map(|(bucket, count)| BucketCount {
            bucket: *bucket,
            label: bucket.label(),
            count,
        })
        .collect();

    TemperatureBucketCounts {
        buckets,
        total_rows: rows.len(),
        outside_nominal,
    }
}
