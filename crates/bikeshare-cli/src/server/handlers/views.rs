//! View handlers. Every request recomputes from the immutable store.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bikeshare::aggregate::{DailySummary, HourlyTotals, SeasonalTotals, TemperatureBucketCounts};
use bikeshare::{Correlation, DashboardViews, DateRange, RfmReport, Segment};
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Optional range bounds from the query string.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RangeQuery {
    fn resolve(&self, state: &AppState) -> Result<DateRange, ApiError> {
        let start = self.start.as_deref().filter(|s| !s.is_empty());
        let end = self.end.as_deref().filter(|s| !s.is_empty());
        Ok(state.dashboard.resolve_range(start, end)?)
    }
}

/// Every view for the selected range.
pub async fn get_views(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<DashboardViews>, ApiError> {
    let range = query.resolve(&state)?;
    Ok(Json(state.dashboard.views(&range)))
}

pub async fn get_daily(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<DailySummary>, ApiError> {
    let range = query.resolve(&state)?;
    Ok(Json(state.dashboard.daily_summary(&range)))
}

pub async fn get_correlation(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Correlation>, ApiError> {
    let range = query.resolve(&state)?;
    Ok(Json(state.dashboard.correlation(&range)))
}

pub async fn get_temperature(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<TemperatureBucketCounts>, ApiError> {
    let range = query.resolve(&state)?;
    Ok(Json(state.dashboard.temperature_buckets(&range)))
}

pub async fn get_hourly(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<HourlyTotals>, ApiError> {
    let range = query.resolve(&state)?;
    Ok(Json(state.dashboard.hourly_totals(&range)))
}

pub async fn get_seasons(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<SeasonalTotals>, ApiError> {
    let range = query.resolve(&state)?;
    Ok(Json(state.dashboard.seasonal_totals(&range)))
}

/// RFM report for `casual` or `registered` riders.
pub async fn get_rfm(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RfmReport>, ApiError> {
    let segment: Segment = segment.parse().map_err(ApiError::NotFound)?;
    let range = query.resolve(&state)?;
    Ok(Json(state.dashboard.rfm(&range, segment)))
}
