//! Dataset coverage handler.

use axum::{extract::State, Json};
use bikeshare::{DateRange, SourceMetadata};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the coverage endpoint.
#[derive(Serialize)]
pub struct CoverageResponse {
    /// Date span of the daily dataset; the default selection.
    pub coverage: Option<DateRange>,
    pub daily_rows: usize,
    pub hourly_rows: usize,
    pub daily_source: Option<SourceMetadata>,
    pub hourly_source: Option<SourceMetadata>,
}

/// Get the dataset date span.
pub async fn get_coverage(State(state): State<AppState>) -> Json<CoverageResponse> {
    let store = state.dashboard.store();

    Json(CoverageResponse {
        coverage: state.dashboard.coverage(),
        daily_rows: store.daily().len(),
        hourly_rows: store.hourly().len(),
        daily_source: store.daily_source().cloned(),
        hourly_source: store.hourly_source().cloned(),
    })
}
