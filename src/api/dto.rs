//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::chart::FigureSpec;
use crate::dashboard::ClickEvent;
use crate::dataset::Indicator;

use super::error::{ApiError, ApiResult};

// ============================================
// CHART DTOs
// ============================================

/// Scatter chart request: year slider plus both indicator/scale selections
#[derive(Debug, Deserialize)]
pub struct ScatterRequest {
    /// Selected year from the slider
    pub year: i32,
    /// x-axis indicator label (one of the six indicators)
    pub x_field: String,
    /// y-axis indicator label
    pub y_field: String,
    /// x-axis scale label; "Log" is logarithmic, anything else linear
    #[serde(default = "default_scale")]
    pub x_scale: String,
    /// y-axis scale label
    #[serde(default = "default_scale")]
    pub y_scale: String,
}

/// Bar chart request: last scatter click plus x selections
#[derive(Debug, Deserialize)]
pub struct BarRequest {
    /// Most recent scatter-plot click, absent until the first click
    #[serde(default)]
    pub click: Option<ClickEvent>,
    /// Indicator label
    pub x_field: String,
    /// Scale label
    #[serde(default = "default_scale")]
    pub x_scale: String,
}

/// Map request: year, last scatter click and the x indicator
#[derive(Debug, Deserialize)]
pub struct MapRequest {
    pub year: i32,
    #[serde(default)]
    pub click: Option<ClickEvent>,
    pub x_field: String,
}

/// Line chart request: last map click plus x selections
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    #[serde(default)]
    pub click: Option<ClickEvent>,
    pub x_field: String,
    #[serde(default = "default_scale")]
    pub x_scale: String,
}

fn default_scale() -> String {
    "Linear".to_string()
}

/// A handler's refreshed output: the new figure plus the debug echo line
#[derive(Debug, Serialize)]
pub struct ChartUpdateResponse {
    pub figure: FigureSpec,
    pub debug: String,
}

/// Parse an indicator label from a request, rejecting anything outside the
/// six known indicators
pub fn parse_indicator(label: &str) -> ApiResult<Indicator> {
    Indicator::from_column_name(label).ok_or_else(|| {
        ApiError::Validation(format!(
            "Unknown indicator: {}. Use one of: {}",
            label,
            Indicator::ALL
                .iter()
                .map(|i| i.column_name())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

// ============================================
// META DTOs
// ============================================

/// Dataset metadata for building the UI controls
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    /// Sorted distinct years (the slider mark set)
    pub years: Vec<i32>,
    /// Indicator labels for the dropdowns
    pub indicators: Vec<String>,
    /// Initial control selections
    pub defaults: MetaDefaults,
}

/// Default control selections
#[derive(Debug, Serialize)]
pub struct MetaDefaults {
    pub year: Option<i32>,
    pub x_field: String,
    pub y_field: String,
    pub scale: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub dataset: String,
    pub uptime_seconds: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indicator() {
        assert_eq!(
            parse_indicator("Life Ladder").unwrap(),
            Indicator::LifeLadder
        );
        assert_eq!(
            parse_indicator("Healthy life expectancy at birth").unwrap(),
            Indicator::HealthyLifeExpectancy
        );
        assert!(parse_indicator("life ladder").is_err());
        assert!(parse_indicator("").is_err());
    }

    #[test]
    fn test_scatter_request_scale_defaults() {
        let req: ScatterRequest = serde_json::from_str(
            r#"{"year": 2008, "x_field": "Life Ladder", "y_field": "Generosity"}"#,
        )
        .unwrap();
        assert_eq!(req.x_scale, "Linear");
        assert_eq!(req.y_scale, "Linear");
    }

    #[test]
    fn test_bar_request_click_optional() {
        let req: BarRequest =
            serde_json::from_str(r#"{"x_field": "Social support"}"#).unwrap();
        assert!(req.click.is_none());
    }
}
