//! Fuzz target for the dataset loader.
//!
//! The fuzzed bytes become `day.csv`; a fixed valid `hour.csv` sits beside it.
//! Loading must never panic, and any store that loads must produce views.

#![no_main]

use bikeshare::{Dashboard, DashboardConfig};
use libfuzzer_sys::fuzz_target;

const HOUR: &str = "dteday,hr,temp,cnt\n2011-01-01,0,0.24,16\n2011-01-01,1,0.22,40\n";

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(dir) = tempfile::TempDir::new() else {
        return;
    };
    if std::fs::write(dir.path().join("day.csv"), data).is_err()
        || std::fs::write(dir.path().join("hour.csv"), HOUR).is_err()
    {
        return;
    }

    if let Ok(dashboard) = Dashboard::load(DashboardConfig::from_dir(dir.path())) {
        if let Some(range) = dashboard.coverage() {
            let _ = dashboard.views(&range);
        }
    }
});
