//! Happydash HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - The dashboard page (embedded, rendered client-side)
//!
//! ## Charts
//! - `POST /api/v1/charts/scatter` - Scatter plot for a year/indicator selection
//! - `POST /api/v1/charts/bar` - Bar chart for a scatter-clicked country
//! - `POST /api/v1/charts/map` - Geo scatter with the clicked country highlighted
//! - `POST /api/v1/charts/line` - Line chart for a map-clicked country
//!
//! Chart endpoints answer `200` with `{figure, debug}` when the handler
//! produced a figure, or `204 No Content` when it suppressed its output.
//!
//! ## Metadata
//! - `GET /api/v1/dataset/meta` - Years, indicators and default selections
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use happydash::api::{serve, ApiConfig, AppState};
//! use happydash::dataset::Dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::load(
//!         Path::new("world-happiness-report.csv"),
//!         Path::new("code.csv"),
//!     )?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Chart update routes, one per handler of the update graph
        .route("/charts/scatter", post(routes::charts::update_scatter))
        .route("/charts/bar", post(routes::charts::update_bar))
        .route("/charts/map", post(routes::charts::update_map))
        .route("/charts/line", post(routes::charts::update_line))
        // Dataset metadata for the UI controls
        .route("/dataset/meta", get(routes::meta::dataset_meta));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Happydash listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Happydash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    const HAPPINESS_CSV: &str = "\
Country name,Code,year,Life Ladder,Log GDP per capita,Social support,Healthy life expectancy at birth,Freedom to make life choices,Generosity
Denmark,DNK,2008,7.971,10.827,0.954,68.3,0.971,0.245
United States,USA,2008,7.28,11.022,0.953,68.4,0.872,0.246
United States,USA,2009,7.158,10.985,0.93,68.6,0.826,0.202
";

    const CODES_CSV: &str = "\
Code3,Country
DNK,Denmark
USA,United States
";

    fn create_test_app() -> Router {
        let dataset = Arc::new(Dataset::from_csv_str(HAPPINESS_CSV, CODES_CSV).unwrap());
        let state = AppState::new(dataset, ApiConfig::default());
        build_router(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_page_served() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dataset_meta() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/dataset/meta")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["years"], serde_json::json!([2008, 2009]));
        assert_eq!(json["defaults"]["year"], 2008);
        assert_eq!(json["defaults"]["x_field"], "Life Ladder");
        assert_eq!(json["indicators"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_scatter_chart() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/api/v1/charts/scatter",
                r#"{"year": 2008, "x_field": "Life Ladder", "y_field": "Generosity", "x_scale": "Linear", "y_scale": "Linear"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["figure"]["layout"]["title"],
            "Life Ladder vs Generosity of Countries"
        );
        assert_eq!(
            json["debug"],
            "Input: 2008, Life Ladder, Generosity, Linear, Linear"
        );
    }

    #[tokio::test]
    async fn test_bar_without_click_is_no_content() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/api/v1/charts/bar",
                r#"{"x_field": "Social support", "x_scale": "Linear"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_bar_with_click() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/api/v1/charts/bar",
                r#"{"click": {"points": [{"customdata": {"country_code": "USA"}}]}, "x_field": "Social support", "x_scale": "Linear"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["figure"]["layout"]["title"],
            "Social support of United States in different year"
        );
        assert_eq!(json["figure"]["data"][0]["type"], "bar");
        assert_eq!(json["figure"]["data"][0]["x"], serde_json::json!([2008, 2009]));
    }

    #[tokio::test]
    async fn test_line_without_click_is_no_content() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/api/v1/charts/line",
                r#"{"x_field": "Generosity"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_map_with_click() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/api/v1/charts/map",
                r#"{"year": 2008, "click": {"points": [{"customdata": {"country_code": "DNK"}}]}, "x_field": "Life Ladder"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["figure"]["layout"]["title"], "Global happiness in 2008");
        assert_eq!(json["figure"]["layout"]["geo"]["resolution"], 50);
        assert_eq!(json["figure"]["data"][0]["name"], "Selected Country");
    }

    #[tokio::test]
    async fn test_unknown_indicator_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/api/v1/charts/scatter",
                r#"{"year": 2008, "x_field": "Happiness", "y_field": "Generosity"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_json_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json("/api/v1/charts/scatter", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
