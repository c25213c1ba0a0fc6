//! Main Dashboard struct and public API.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{
    daily_summary, hourly_totals, rfm_report, seasonal_totals, temperature_buckets,
    temperature_correlation, Correlation, DailySummary, HourlyTotals, InsufficientData, RfmReport,
    SeasonalTotals, TemperatureBucketCounts, DEFAULT_TOP_N,
};
use crate::error::{BikeshareError, Result};
use crate::filter::{filter, DateRange};
use crate::input::{DataSource, Parser, ParserConfig, RecordStore};
use crate::insights::{derive_insights, Insight};
use crate::schema::Segment;

/// Configuration for loading and ranking.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Where the daily and hourly files live.
    pub source: DataSource,
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Rows per RFM ranking.
    pub top_n: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DataSource::from_dir("data"),
            parser: ParserConfig::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl DashboardConfig {
    /// Default configuration reading `day.csv` and `hour.csv` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            source: DataSource::from_dir(dir),
            ..Self::default()
        }
    }

    /// Set the number of rows per RFM ranking.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(BikeshareError::Config(
                "top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A view that could not be fully computed for the selected range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub view: &'static str,
    pub reason: InsufficientData,
}

/// Every view for one date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub range: DateRange,
    pub daily_summary: DailySummary,
    pub correlation: Correlation,
    pub temperature_buckets: TemperatureBucketCounts,
    pub hourly_totals: HourlyTotals,
    pub seasonal_totals: SeasonalTotals,
    pub rfm_casual: RfmReport,
    pub rfm_registered: RfmReport,
    /// Views limited by insufficient data.
    pub notices: Vec<Notice>,
    /// Derived sentences.
    pub insights: Vec<Insight>,
}

impl DashboardViews {
    /// The RFM report for a segment.
    pub fn rfm(&self, segment: Segment) -> &RfmReport {
        match segment {
            Segment::Casual => &self.rfm_casual,
            Segment::Registered => &self.rfm_registered,
        }
    }

    fn collect_notices(&self) -> Vec<Notice> {
        let mut notices = Vec::new();
        let mut note = |view: &'static str, reason: InsufficientData| {
            notices.push(Notice { view, reason });
        };

        if self.daily_summary.is_empty() {
            note("daily_summary", InsufficientData::NoRows);
        }
        if let Correlation::NotComputable { reason } = self.correlation {
            note("correlation", reason);
        }
        if self.temperature_buckets.total_rows == 0 {
            note("temperature_buckets", InsufficientData::NoRows);
            note("hourly_totals", InsufficientData::NoRows);
        }
        if self.seasonal_totals.seasons.is_empty() {
            note("seasonal_totals", InsufficientData::NoRows);
        }
        if self.rfm_casual.is_empty() {
            note("rfm_casual", InsufficientData::NoRows);
        }
        if self.rfm_registered.is_empty() {
            note("rfm_registered", InsufficientData::NoRows);
        }

        notices
    }
}

/// The dashboard engine: an immutable record store plus configuration.
///
/// Every accessor takes the date range explicitly and recomputes from the
/// store; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: RecordStore,
    config: DashboardConfig,
}

impl Dashboard {
    /// Load both datasets described by `config`.
    pub fn load(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let parser = Parser::with_config(config.parser.clone());
        let store = RecordStore::load(&config.source, &parser)?;
        Ok(Self { store, config })
    }

    /// Wrap an already populated store.
    pub fn from_store(store: RecordStore, config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Date span of the daily dataset, the default selection.
    pub fn coverage(&self) -> Option<DateRange> {
        self.store.coverage()
    }

    /// Resolve optional user-supplied bounds into a range.
    ///
    /// Missing bounds fall back to the dataset coverage, except that a start
    /// without an end selects that single day.
    pub fn resolve_range(&self, start: Option<&str>, end: Option<&str>) -> Result<DateRange> {
        match (start, end) {
            (Some(start), end) => DateRange::parse(start, end),
            (None, Some(end)) => {
                let end = DateRange::parse(end, None)?.end();
                match self.coverage() {
                    Some(coverage) => DateRange::new(coverage.start().min(end), end),
                    None => Ok(DateRange::single(end)),
                }
            }
            (None, None) => self.coverage().ok_or_else(|| {
                BikeshareError::InvalidSelection(
                    "no dates given and the daily dataset is empty".to_string(),
                )
            }),
        }
    }

    /// Per-day totals and means.
    pub fn daily_summary(&self, range: &DateRange) -> DailySummary {
        daily_summary(&filter(self.store.daily(), range))
    }

    /// Temperature/rental correlation.
    pub fn correlation(&self, range: &DateRange) -> Correlation {
        temperature_correlation(&self.daily_summary(range))
    }

    /// Hourly row counts per temperature bucket.
    pub fn temperature_buckets(&self, range: &DateRange) -> TemperatureBucketCounts {
        temperature_buckets(&filter(self.store.hourly(), range))
    }

    /// Rentals per hour of day.
    pub fn hourly_totals(&self, range: &DateRange) -> HourlyTotals {
        hourly_totals(&filter(self.store.hourly(), range))
    }

    /// Rentals per season.
    pub fn seasonal_totals(&self, range: &DateRange) -> SeasonalTotals {
        seasonal_totals(&filter(self.store.daily(), range))
    }

    /// RFM table and rankings for a segment.
    pub fn rfm(&self, range: &DateRange, segment: Segment) -> RfmReport {
        rfm_report(&filter(self.store.daily(), range), segment, self.config.top_n)
    }

    /// Compute every view for a range.
    pub fn views(&self, range: &DateRange) -> DashboardViews {
        let daily = filter(self.store.daily(), range);
        let hourly = filter(self.store.hourly(), range);

        let summary = daily_summary(&daily);
        let correlation = temperature_correlation(&summary);

        let mut views = DashboardViews {
            range: *range,
            correlation,
            daily_summary: summary,
            temperature_buckets: temperature_buckets(&hourly),
            hourly_totals: hourly_totals(&hourly),
            seasonal_totals: seasonal_totals(&daily),
            rfm_casual: rfm_report(&daily, Segment::Casual, self.config.top_n),
            rfm_registered: rfm_report(&daily, Segment::Registered, self.config.top_n),
            notices: Vec::new(),
            insights: Vec::new(),
        };

        views.notices = views.collect_notices();
        views.insights = derive_insights(&views);

        debug!(
            range = %range,
            daily_rows = daily.len(),
            hourly_rows = hourly.len(),
            notices = views.notices.len(),
            "Computed dashboard views"
        );

        views
    }
}
