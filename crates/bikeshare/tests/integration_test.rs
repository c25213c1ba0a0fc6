//! Integration tests for the bikeshare dashboard pipeline.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use bikeshare::{
    BikeshareError, Correlation, Dashboard, DashboardConfig, DateRange, InsufficientData,
    LoadError, Segment, TemperatureBucket,
};

const DAY_HEADER: &str =
    "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";
const HOUR_HEADER: &str =
    "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

/// Helper to write a data directory with the given file bodies.
fn create_data_dir(day: &str, hour: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("day.csv"), day).expect("Failed to write day.csv");
    fs::write(dir.path().join("hour.csv"), hour).expect("Failed to write hour.csv");
    dir
}

fn day_csv(rows: &[&str]) -> String {
    let mut content = String::from(DAY_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    content
}

fn hour_csv(rows: &[&str]) -> String {
    let mut content = String::from(HOUR_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    content
}

/// Three January days: 100, 150 and 120 rentals.
fn january_dir() -> TempDir {
    let day = day_csv(&[
        "1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,31,69,100",
        "2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,50,100,150",
        "3,2011-01-03,1,0,1,0,1,1,1,0.196364,0.189405,0.437273,0.248309,20,100,120",
    ]);
    let hour = hour_csv(&[
        "1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16",
        "2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40",
        "3,2011-01-02,1,0,1,8,0,0,0,1,0.10,0.2727,0.8,0,5,27,32",
        "4,2011-01-03,1,0,1,17,0,1,1,1,0.30,0.2576,0.75,0,2,50,52",
        "5,2011-01-03,1,0,1,18,0,1,1,1,0.40,0.2576,0.75,0,1,9,10",
    ]);
    create_data_dir(&day, &hour)
}

fn load(dir: &Path) -> Dashboard {
    Dashboard::load(DashboardConfig::from_dir(dir)).expect("Load failed")
}

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_dataset_directory() {
    let dir = january_dir();
    let dashboard = load(dir.path());
    let store = dashboard.store();

    assert_eq!(store.daily().len(), 3);
    assert_eq!(store.hourly().len(), 5);

    let daily_source = store.daily_source().expect("daily metadata");
    assert_eq!(daily_source.file, "day.csv");
    assert_eq!(daily_source.format, "csv");
    assert_eq!(daily_source.row_count, 3);
    assert_eq!(daily_source.column_count, 16);
    assert!(daily_source.hash.starts_with("sha256:"));

    let coverage = dashboard.coverage().expect("coverage");
    assert_eq!(coverage.start(), date(2011, 1, 1));
    assert_eq!(coverage.end(), date(2011, 1, 3));
}

#[test]
fn test_load_tab_separated() {
    let day = day_csv(&["1,2011-01-01,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,31,69,100"]).replace(',', "\t");
    let hour =
        hour_csv(&["1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.28,0.81,0,3,13,16"]).replace(',', "\t");
    let dir = create_data_dir(&day, &hour);

    let dashboard = load(dir.path());
    assert_eq!(dashboard.store().daily_source().map(|s| s.format.as_str()), Some("tsv"));
    assert_eq!(dashboard.store().daily()[0].total_count, 100);
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let err = Dashboard::load(DashboardConfig::from_dir(dir.path())).unwrap_err();

    assert!(err.is_fatal());
    assert!(matches!(err, BikeshareError::Load(LoadError::Io { .. })));
}

#[test]
fn test_missing_column_is_load_error() {
    let day = "dteday,season,temp,hum,casual,registered\n2011-01-01,1,0.3,0.8,31,69\n";
    let dir = create_data_dir(day, &hour_csv(&[]));

    match Dashboard::load(DashboardConfig::from_dir(dir.path())) {
        Err(BikeshareError::Load(LoadError::MissingColumn { file, column })) => {
            assert_eq!(file, "day.csv");
            assert_eq!(column, "cnt");
        }
        other => panic!("expected missing column, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_unparseable_date_is_load_error() {
    let day = day_csv(&["1,not-a-date,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,31,69,100"]);
    let hour = hour_csv(&["1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.28,0.81,0,3,13,16"]);
    let dir = create_data_dir(&day, &hour);

    match Dashboard::load(DashboardConfig::from_dir(dir.path())) {
        Err(BikeshareError::Load(LoadError::InvalidValue { row, column, .. })) => {
            assert_eq!(row, 1);
            assert_eq!(column, "dteday");
        }
        other => panic!("expected invalid value, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_count_mismatch_is_load_error() {
    let day = day_csv(&["1,2011-01-01,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,31,69,101"]);
    let hour = hour_csv(&["1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.28,0.81,0,3,13,16"]);
    let dir = create_data_dir(&day, &hour);

    let err = Dashboard::load(DashboardConfig::from_dir(dir.path())).unwrap_err();
    assert!(matches!(
        err,
        BikeshareError::Load(LoadError::CountMismatch { total: 101, .. })
    ));
}

#[test]
fn test_header_only_hourly_file_loads_empty() {
    let day = day_csv(&["1,2011-01-01,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,31,69,100"]);
    let dir = create_data_dir(&day, "dteday,hr,temp,cnt\n");

    let dashboard = load(dir.path());
    assert!(dashboard.store().hourly().is_empty());
    assert_eq!(dashboard.store().hourly_source().map(|s| s.row_count), Some(0));

    let views = dashboard.views(&dashboard.coverage().unwrap());
    assert_eq!(views.daily_summary.total_count, 100);
    assert_eq!(views.hourly_totals.total_count(), 0);
    assert_eq!(views.temperature_buckets.total_rows, 0);
}

#[test]
fn test_file_without_header_is_load_error() {
    let dir = create_data_dir("", &hour_csv(&[]));

    let err = Dashboard::load(DashboardConfig::from_dir(dir.path())).unwrap_err();
    assert!(matches!(
        err,
        BikeshareError::Load(LoadError::EmptyData { .. })
    ));
}

#[test]
fn test_duplicate_hour_is_load_error() {
    let hour = hour_csv(&[
        "1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.28,0.81,0,3,13,16",
        "2,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.28,0.81,0,3,13,16",
    ]);
    let day = day_csv(&["1,2011-01-01,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,31,69,100"]);
    let dir = create_data_dir(&day, &hour);

    let err = Dashboard::load(DashboardConfig::from_dir(dir.path())).unwrap_err();
    assert!(matches!(
        err,
        BikeshareError::Load(LoadError::DuplicateKey { row: 2, .. })
    ));
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn test_daily_summary_over_three_days() {
    let dir = january_dir();
    let dashboard = load(dir.path());
    let range = DateRange::new(date(2011, 1, 1), date(2011, 1, 3)).unwrap();

    let summary = dashboard.daily_summary(&range);
    let counts: Vec<u64> = summary.rows.iter().map(|r| r.total_count).collect();
    assert_eq!(counts, vec![100, 150, 120]);
    assert_eq!(summary.total_count, 370);
}

#[test]
fn test_single_day_selection() {
    let dir = january_dir();
    let dashboard = load(dir.path());
    let range = DateRange::from_selection(&[date(2011, 1, 2)]).unwrap();

    let summary = dashboard.daily_summary(&range);
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.total_count, 150);

    assert_eq!(
        dashboard.correlation(&range),
        Correlation::NotComputable {
            reason: InsufficientData::TooFewPoints { found: 1, required: 2 }
        }
    );
}

#[test]
fn test_hourly_totals_outside_range_are_zero() {
    let dir = january_dir();
    let dashboard = load(dir.path());
    let range = DateRange::new(date(2012, 6, 1), date(2012, 6, 30)).unwrap();

    let totals = dashboard.hourly_totals(&range);
    assert_eq!(totals.hours.len(), 24);
    assert!(totals.hours.iter().all(|h| h.total_count == 0));
    assert_eq!(totals.peak(), None);
}

#[test]
fn test_temperature_buckets_cover_every_hourly_row() {
    let dir = january_dir();
    let dashboard = load(dir.path());
    let range = dashboard.coverage().unwrap();

    let buckets = dashboard.temperature_buckets(&range);
    assert_eq!(buckets.total_rows, 5);
    assert_eq!(buckets.buckets.iter().map(|b| b.count).sum::<usize>(), 5);
    assert_eq!(buckets.count(TemperatureBucket::VeryCold), 0);
    assert_eq!(buckets.count(TemperatureBucket::Cool), 1);
    assert_eq!(buckets.count(TemperatureBucket::Mild), 2);
    // 0.40 lies above the top boundary
    assert_eq!(buckets.count(TemperatureBucket::Warm), 2);
    assert_eq!(buckets.outside_nominal, 1);
}

#[test]
fn test_hourly_peak() {
    let dir = january_dir();
    let dashboard = load(dir.path());
    let totals = dashboard.hourly_totals(&dashboard.coverage().unwrap());

    assert_eq!(totals.total_count(), 150);
    let peak = totals.peak().unwrap();
    assert_eq!(peak.hour, 17);
    assert_eq!(peak.total_count, 52);
}

#[test]
fn test_rfm_recency_uses_filtered_max() {
    let dir = january_dir();
    let dashboard = load(dir.path());
    let range = DateRange::new(date(2011, 1, 1), date(2011, 1, 2)).unwrap();

    let report = dashboard.rfm(&range, Segment::Casual);
    assert_eq!(report.reference_date, Some(date(2011, 1, 2)));
    let recency: Vec<i64> = report.rows.iter().map(|r| r.recency).collect();
    assert_eq!(recency, vec![1, 0]);
    assert_eq!(report.best_day().map(|r| r.monetary), Some(50));
}

#[test]
fn test_full_bundle_serializes() {
    let dir = january_dir();
    let dashboard = load(dir.path());
    let views = dashboard.views(&dashboard.coverage().unwrap());

    let json = serde_json::to_value(&views).unwrap();
    assert_eq!(json["range"]["start"], "2011-01-01");
    assert_eq!(json["daily_summary"]["total_count"], 370);
    assert_eq!(json["seasonal_totals"]["seasons"][0]["label"], "Winter");
    assert_eq!(json["rfm_registered"]["segment"], "registered");
    assert!(!views.insights.is_empty());
}

#[test]
fn test_invalid_range_rejected() {
    let err = DateRange::parse("2011-01-03", Some("2011-01-01")).unwrap_err();
    assert!(!err.is_fatal());
    assert!(matches!(err, BikeshareError::InvalidRange { .. }));
}
