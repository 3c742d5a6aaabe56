//! Chart Routes
//!
//! One endpoint per update handler. Each decodes the UI inputs, runs the
//! matching handler against the resident dataset and returns either the new
//! figure or 204 No Content when the handler suppressed its output.
//!
//! - POST /api/v1/charts/scatter - year/indicator selections
//! - POST /api/v1/charts/bar     - scatter click -> country history bars
//! - POST /api/v1/charts/map     - scatter click -> highlighted geo scatter
//! - POST /api/v1/charts/line    - map click -> country history line

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    parse_indicator, BarRequest, ChartUpdateResponse, LineRequest, MapRequest, ScatterRequest,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{
    bar_figure, line_figure, map_figure, scatter_figure, BarInputs, LineInputs, MapInputs,
    ScatterInputs, Update,
};

/// POST /api/v1/charts/scatter
pub async fn update_scatter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScatterRequest>,
) -> ApiResult<Response> {
    let inputs = ScatterInputs {
        year: req.year,
        x_field: parse_indicator(&req.x_field)?,
        y_field: parse_indicator(&req.y_field)?,
        x_scale: req.x_scale,
        y_scale: req.y_scale,
    };

    Ok(update_response(scatter_figure(&state.dataset, &inputs)))
}

/// POST /api/v1/charts/bar
pub async fn update_bar(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BarRequest>,
) -> ApiResult<Response> {
    let inputs = BarInputs {
        scatter_click: req.click,
        x_field: parse_indicator(&req.x_field)?,
        x_scale: req.x_scale,
    };

    Ok(update_response(bar_figure(&state.dataset, &inputs)))
}

/// POST /api/v1/charts/map
pub async fn update_map(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MapRequest>,
) -> ApiResult<Response> {
    let inputs = MapInputs {
        year: req.year,
        scatter_click: req.click,
        x_field: parse_indicator(&req.x_field)?,
    };

    Ok(update_response(map_figure(&state.dataset, &inputs)))
}

/// POST /api/v1/charts/line
pub async fn update_line(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LineRequest>,
) -> ApiResult<Response> {
    let inputs = LineInputs {
        map_click: req.click,
        x_field: parse_indicator(&req.x_field)?,
        x_scale: req.x_scale,
    };

    Ok(update_response(line_figure(&state.dataset, &inputs)))
}

/// Map a handler result onto the wire: a fresh figure is 200 with a body,
/// a suppressed update is 204 so the frontend leaves the chart untouched
fn update_response(update: Update) -> Response {
    match update {
        Update::Figure { figure, debug } => {
            (StatusCode::OK, Json(ChartUpdateResponse { figure, debug })).into_response()
        }
        Update::NoChange => StatusCode::NO_CONTENT.into_response(),
    }
}
