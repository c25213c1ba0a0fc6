//! Axum application setup.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/coverage", get(handlers::get_coverage))
        .route("/views", get(handlers::get_views))
        .route("/views/daily", get(handlers::get_daily))
        .route("/views/correlation", get(handlers::get_correlation))
        .route("/views/temperature", get(handlers::get_temperature))
        .route("/views/hourly", get(handlers::get_hourly))
        .route("/views/seasons", get(handlers::get_seasons))
        .route("/views/rfm/:segment", get(handlers::get_rfm));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use bikeshare::{Dashboard, DashboardConfig, DailyRecord, HourlyRecord, RecordStore, Season};
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::ServiceExt;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    fn router() -> Router {
        let daily = [(1, 100, 0.2), (2, 150, 0.3), (3, 120, 0.25)]
            .into_iter()
            .map(|(d, total, temperature)| DailyRecord {
                date: date(d),
                season: Season::Winter,
                total_count: total,
                casual_count: 20,
                registered_count: total - 20,
                temperature,
                humidity: 0.5,
            })
            .collect();
        let hourly = (1..=3)
            .map(|d| HourlyRecord {
                date: date(d),
                hour: 8,
                total_count: 40,
                temperature: 0.2,
            })
            .collect();

        let store = RecordStore::from_records(daily, hourly).unwrap();
        let dashboard = Dashboard::from_store(store, DashboardConfig::default()).unwrap();
        create_router(AppState::new(dashboard))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_views_default_to_coverage() {
        let (status, body) = get("/api/views").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["daily_summary"]["total_count"], 370);
        assert_eq!(body["hourly_totals"]["hours"].as_array().unwrap().len(), 24);
        assert_eq!(body["correlation"]["status"], "computed");
    }

    #[tokio::test]
    async fn test_single_day_selection() {
        let (status, body) = get("/api/views/daily?start=2011-01-02").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_count"], 150);

        let (_, body) = get("/api/views/correlation?start=2011-01-02").await;
        assert_eq!(body["status"], "not_computable");
    }

    #[tokio::test]
    async fn test_invalid_range_is_bad_request() {
        let (status, body) = get("/api/views?start=2011-01-03&end=2011-01-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_range");

        let (status, body) = get("/api/views/hourly?start=yesterday").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_selection");
    }

    #[tokio::test]
    async fn test_rfm_segments() {
        let (status, body) = get("/api/views/rfm/registered").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["segment"], "registered");
        assert_eq!(body["by_monetary"][0]["monetary"], 130);

        let (status, body) = get("/api/views/rfm/tourists").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_coverage() {
        let (status, body) = get("/api/coverage").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["coverage"]["start"], "2011-01-01");
        assert_eq!(body["coverage"]["end"], "2011-01-03");
        assert_eq!(body["hourly_rows"], 3);
    }
}
