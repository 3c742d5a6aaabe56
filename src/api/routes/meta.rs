//! Dataset Meta Route
//!
//! Serves the metadata the frontend needs to build its controls: the slider
//! mark set, the dropdown options and the initial selections.
//!
//! - GET /api/v1/dataset/meta

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{MetaDefaults, MetaResponse};
use crate::api::state::AppState;
use crate::dataset::Indicator;

/// GET /api/v1/dataset/meta
pub async fn dataset_meta(State(state): State<Arc<AppState>>) -> Json<MetaResponse> {
    let years = state.dataset.happiness.distinct_years();
    // The slider starts at the earliest year present
    let default_year = years.first().copied();

    Json(MetaResponse {
        years,
        indicators: Indicator::ALL
            .iter()
            .map(|i| i.column_name().to_string())
            .collect(),
        defaults: MetaDefaults {
            year: default_year,
            x_field: Indicator::LifeLadder.column_name().to_string(),
            y_field: Indicator::Generosity.column_name().to_string(),
            scale: "Linear".to_string(),
        },
    })
}
