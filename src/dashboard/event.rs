//! Click Events
//!
//! Typed click events flowing from the rendered charts back into the update
//! graph, plus the tagged handler result. A handler that has nothing to show
//! yet returns [`Update::NoChange`], which is distinct from returning an
//! empty figure.

use serde::{Deserialize, Serialize};

use crate::chart::{FigureSpec, PointPayload};

/// A click on a rendered chart, as reported by the frontend.
///
/// Mirrors the renderer's click payload: a list of points, each optionally
/// carrying the typed `customdata` payload (cartesian charts) or a location
/// code (geo charts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub points: Vec<ClickPoint>,
}

/// One clicked point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickPoint {
    /// Typed payload attached when the trace was built
    #[serde(default, rename = "customdata", skip_serializing_if = "Option::is_none")]
    pub payload: Option<PointPayload>,

    /// Location key of the point on a geo trace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ClickEvent {
    /// Country code carried in the first point's payload, if any
    pub fn payload_country_code(&self) -> Option<&str> {
        self.points
            .first()
            .and_then(|p| p.payload.as_ref())
            .map(|payload| payload.country_code.as_str())
    }

    /// Location code of the first point, if any (map clicks)
    pub fn location_country_code(&self) -> Option<&str> {
        self.points.first().and_then(|p| p.location.as_deref())
    }

    /// Build a click carrying a point payload (used by tests)
    pub fn from_payload(country_code: impl Into<String>) -> Self {
        Self {
            points: vec![ClickPoint {
                payload: Some(PointPayload::new(country_code)),
                location: None,
            }],
        }
    }

    /// Build a click carrying a geo location (used by tests)
    pub fn from_location(country_code: impl Into<String>) -> Self {
        Self {
            points: vec![ClickPoint {
                payload: None,
                location: Some(country_code.into()),
            }],
        }
    }
}

/// Result of one handler invocation
#[derive(Debug, Clone)]
pub enum Update {
    /// Replace the chart with a new figure and refresh the debug line
    Figure { figure: FigureSpec, debug: String },
    /// Leave the currently displayed chart and debug text untouched
    NoChange,
}

impl Update {
    pub fn is_no_change(&self) -> bool {
        matches!(self, Update::NoChange)
    }
}
