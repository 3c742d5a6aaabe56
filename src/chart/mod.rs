//! Chart Specifications
//!
//! Declarative figure descriptions produced by the dashboard handlers and
//! consumed by the browser-side charting library. The serialized JSON is
//! shaped like a plotly figure (`data` + `layout`) so the frontend can hand
//! it to the renderer unchanged.
//!
//! Nothing in here computes pixels; a spec is a chart type, the data subset
//! to show, the encodings (axis fields, color, size) and a title.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Axis scale resolved from a UI radio label.
///
/// The literal label `"Log"` selects a logarithmic axis; any other label
/// falls back to linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Log,
}

impl AxisType {
    /// Map a radio-button label to an axis type
    pub fn from_scale_label(label: &str) -> AxisType {
        if label == "Log" {
            AxisType::Log
        } else {
            AxisType::Linear
        }
    }
}

/// One axis of a cartesian chart
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(rename = "type")]
    pub axis_type: AxisType,
}

impl Axis {
    pub fn new(title: impl Into<String>, axis_type: AxisType) -> Self {
        Self {
            title: title.into(),
            axis_type,
        }
    }
}

/// Map styling for geo-scatter figures.
///
/// Fixed presentation: country borders, landmasses, oceans, lakes and rivers
/// are all shown with set colors, at medium (1:50m) geographic resolution.
#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub resolution: u32,
    pub showcountries: bool,
    pub countrycolor: String,
    pub showland: bool,
    pub landcolor: String,
    pub showocean: bool,
    pub oceancolor: String,
    pub showlakes: bool,
    pub lakecolor: String,
    pub showrivers: bool,
    pub rivercolor: String,
}

impl Default for Geo {
    fn default() -> Self {
        Self {
            resolution: 50,
            showcountries: true,
            countrycolor: "RebeccaPurple".to_string(),
            showland: true,
            landcolor: "White".to_string(),
            showocean: true,
            oceancolor: "LightBlue".to_string(),
            showlakes: true,
            lakecolor: "Blue".to_string(),
            showrivers: true,
            rivercolor: "Blue".to_string(),
        }
    }
}

/// Animated transition between successive figures
#[derive(Debug, Clone, Serialize)]
pub struct Transition {
    pub duration: u64,
}

/// Figure layout: title, axes and optional map styling
#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

impl Layout {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn xaxis(mut self, axis: Axis) -> Self {
        self.xaxis = Some(axis);
        self
    }

    pub fn yaxis(mut self, axis: Axis) -> Self {
        self.yaxis = Some(axis);
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn transition_ms(mut self, duration: u64) -> Self {
        self.transition = Some(Transition { duration });
        self
    }

    pub fn geo(mut self, geo: Geo) -> Self {
        self.geo = Some(geo);
        self
    }
}

/// Typed per-point payload carried through click events.
///
/// Serialized as the point's `customdata`, so a downstream click handler can
/// decode the clicked country explicitly instead of poking at positional
/// arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPayload {
    pub country_code: String,
}

impl PointPayload {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
        }
    }
}

/// Marker styling, used for size-encoded bubbles
#[derive(Debug, Clone, Default, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
}

impl Marker {
    /// Area-scaled bubble sizes capped at `max_px` pixels.
    ///
    /// Missing values render as zero-size points rather than being dropped,
    /// keeping point indices aligned with the trace's x/y arrays.
    pub fn bubble(values: Vec<Option<f64>>, max_px: f64) -> Self {
        let sizes: Vec<f64> = values.into_iter().map(|v| v.unwrap_or(0.0)).collect();
        let max_value = sizes.iter().cloned().fold(0.0_f64, f64::max);
        let sizeref = if max_value > 0.0 {
            2.0 * max_value / (max_px * max_px)
        } else {
            1.0
        };

        Self {
            size: Some(sizes),
            sizemode: Some("area".to_string()),
            sizeref: Some(sizeref),
        }
    }
}

/// Chart type of a single trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Bar,
    Scattergeo,
}

/// One data series of a figure
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Value>>,

    /// Country codes keying points to map locations (geo traces only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<PointPayload>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    pub fn new(kind: TraceKind) -> Self {
        Self {
            kind,
            name: None,
            mode: None,
            x: None,
            y: None,
            locations: None,
            text: None,
            customdata: None,
            marker: None,
        }
    }

    pub fn scatter() -> Self {
        Self::new(TraceKind::Scatter).mode("markers")
    }

    pub fn line() -> Self {
        Self::new(TraceKind::Scatter).mode("lines")
    }

    pub fn bar() -> Self {
        Self::new(TraceKind::Bar)
    }

    pub fn scatter_geo() -> Self {
        Self::new(TraceKind::Scattergeo)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn x(mut self, values: Vec<Value>) -> Self {
        self.x = Some(values);
        self
    }

    pub fn y(mut self, values: Vec<Value>) -> Self {
        self.y = Some(values);
        self
    }

    pub fn locations(mut self, codes: Vec<String>) -> Self {
        self.locations = Some(codes);
        self
    }

    pub fn text(mut self, labels: Vec<String>) -> Self {
        self.text = Some(labels);
        self
    }

    pub fn customdata(mut self, payloads: Vec<PointPayload>) -> Self {
        self.customdata = Some(payloads);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }
}

/// A complete figure: traces plus layout, serialized in plotly's shape
#[derive(Debug, Clone, Serialize)]
pub struct FigureSpec {
    #[serde(rename = "data")]
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl FigureSpec {
    pub fn new(traces: Vec<Trace>, layout: Layout) -> Self {
        Self { traces, layout }
    }
}

/// JSON number for a present value, JSON null for a missing one
pub fn num_or_null(value: Option<f64>) -> Value {
    match value {
        Some(v) => Value::from(v),
        None => Value::Null,
    }
}
