//! # Happydash
//!
//! World Happiness Dashboard - an interactive data-visualization service
//! over the world happiness dataset.
//!
//! Two CSV files (country-year happiness indicators and an ISO-3 country
//! code lookup) are loaded into immutable in-memory tables at start-up. A
//! small reactive update graph of four handlers turns UI inputs - a year
//! slider, indicator dropdowns, linear/log radios and chart click events -
//! into declarative chart specifications that the browser renders.
//!
//! ## Modules
//!
//! - [`dataset`]: The in-memory dataset store and country-code lookup
//! - [`chart`]: Declarative chart specifications (plotly-shaped JSON)
//! - [`dashboard`]: The four reactive update handlers
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use happydash::api::{serve, ApiConfig, AppState};
//! use happydash::dataset::Dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the source tables; a failure here is fatal
//!     let dataset = Arc::new(Dataset::load(
//!         Path::new("world-happiness-report.csv"),
//!         Path::new("code.csv"),
//!     )?);
//!
//!     // Serve the dashboard
//!     let config = ApiConfig::default();
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{
    CodeTable, CountryCodeEntry, Dataset, DatasetError, DatasetResult, HappinessRecord,
    HappinessTable, Indicator,
};

pub use chart::{Axis, AxisType, FigureSpec, Geo, Layout, Marker, PointPayload, Trace, TraceKind};

pub use dashboard::{
    bar_figure, line_figure, map_figure, scatter_figure, BarInputs, ClickEvent, ClickPoint,
    LineInputs, MapInputs, ScatterInputs, Update,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
