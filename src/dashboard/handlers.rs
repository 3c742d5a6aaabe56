//! Reactive Update Handlers
//!
//! The four update rules of the dashboard. Each is a pure, synchronous
//! function of its declared inputs plus the read-only [`Dataset`]; there is
//! no hidden state and no I/O, so a handler always runs to completion
//! without blocking.
//!
//! - [`scatter_figure`]: year + indicator selections -> scatter plot
//! - [`bar_figure`]: scatter click -> per-year bar chart for that country
//! - [`map_figure`]: year + scatter click -> geo scatter highlighting the
//!   clicked country
//! - [`line_figure`]: map click -> per-year line chart for that country
//!
//! The click-driven handlers suppress their output ([`Update::NoChange`])
//! until a usable click event exists; a filter that matches zero rows still
//! produces a valid, empty figure.

use serde_json::Value;
use std::collections::HashMap;

use crate::chart::{
    Axis, AxisType, FigureSpec, Geo, Layout, Marker, PointPayload, Trace,
};
use crate::dataset::{Dataset, HappinessRecord, Indicator};

use super::event::{ClickEvent, Update};

/// Bubble size cap, in pixels, for size-encoded traces
const SIZE_MAX_PX: f64 = 35.0;

/// Map figure dimensions
const MAP_WIDTH: u32 = 1100;
const MAP_HEIGHT: u32 = 600;

/// Inputs to the scatter handler
#[derive(Debug, Clone)]
pub struct ScatterInputs {
    pub year: i32,
    pub x_field: Indicator,
    pub y_field: Indicator,
    pub x_scale: String,
    pub y_scale: String,
}

/// Inputs to the bar handler
#[derive(Debug, Clone)]
pub struct BarInputs {
    pub scatter_click: Option<ClickEvent>,
    pub x_field: Indicator,
    pub x_scale: String,
}

/// Inputs to the map handler
#[derive(Debug, Clone)]
pub struct MapInputs {
    pub year: i32,
    pub scatter_click: Option<ClickEvent>,
    pub x_field: Indicator,
}

/// Inputs to the line handler
#[derive(Debug, Clone)]
pub struct LineInputs {
    pub map_click: Option<ClickEvent>,
    pub x_field: Indicator,
    pub x_scale: String,
}

/// Scatter plot of all countries for the selected year.
///
/// One trace per country (color by country), point size encoding Life
/// Ladder, each point carrying its country code for downstream click
/// handling. Always produces a figure.
pub fn scatter_figure(dataset: &Dataset, inputs: &ScatterInputs) -> Update {
    let debug = format!(
        "Input: {}, {}, {}, {}, {}",
        inputs.year, inputs.x_field, inputs.y_field, inputs.x_scale, inputs.y_scale
    );

    let rows = dataset.happiness.filter_by_year(inputs.year);
    let traces = group_by_country(&rows)
        .into_iter()
        .map(|(country, country_rows)| {
            let x: Vec<Value> = country_rows
                .iter()
                .map(|r| crate::chart::num_or_null(r.indicator(inputs.x_field)))
                .collect();
            let y: Vec<Value> = country_rows
                .iter()
                .map(|r| crate::chart::num_or_null(r.indicator(inputs.y_field)))
                .collect();
            let payloads: Vec<PointPayload> = country_rows
                .iter()
                .map(|r| PointPayload::new(r.code.clone()))
                .collect();
            let sizes: Vec<Option<f64>> =
                country_rows.iter().map(|r| r.life_ladder).collect();

            Trace::scatter()
                .name(country)
                .x(x)
                .y(y)
                .customdata(payloads)
                .marker(Marker::bubble(sizes, SIZE_MAX_PX))
        })
        .collect();

    let layout = Layout::titled(format!(
        "{} vs {} of Countries",
        inputs.x_field, inputs.y_field
    ))
    .xaxis(Axis::new(
        inputs.x_field.column_name(),
        AxisType::from_scale_label(&inputs.x_scale),
    ))
    .yaxis(Axis::new(
        inputs.y_field.column_name(),
        AxisType::from_scale_label(&inputs.y_scale),
    ))
    .transition_ms(500);

    Update::Figure {
        figure: FigureSpec::new(traces, layout),
        debug,
    }
}

/// Bar chart of the clicked country's indicator across all years.
///
/// Suppressed until the scatter plot has reported a click whose point
/// carries a country-code payload.
pub fn bar_figure(dataset: &Dataset, inputs: &BarInputs) -> Update {
    let Some(click) = &inputs.scatter_click else {
        return Update::NoChange;
    };
    let Some(code) = click.payload_country_code() else {
        return Update::NoChange;
    };

    let debug = format!(
        "Input: {:?}, {}, {}",
        click.points, inputs.x_field, inputs.x_scale
    );

    let figure = country_history_figure(
        dataset,
        code,
        inputs.x_field,
        &inputs.x_scale,
        Trace::bar(),
    );

    Update::Figure { figure, debug }
}

/// Geo scatter of all countries for the selected year, with the clicked
/// country partitioned out for highlighting.
///
/// Suppressed until the scatter plot has reported a usable click.
pub fn map_figure(dataset: &Dataset, inputs: &MapInputs) -> Update {
    let Some(click) = &inputs.scatter_click else {
        return Update::NoChange;
    };
    let Some(code) = click.payload_country_code() else {
        return Update::NoChange;
    };

    let debug = format!(
        "Input: {} {:?} {}",
        inputs.year, click.points, inputs.x_field
    );

    let rows = dataset.happiness.filter_by_year(inputs.year);
    let (selected, others): (Vec<&HappinessRecord>, Vec<&HappinessRecord>) =
        rows.into_iter().partition(|r| r.code == code);

    let traces = vec![
        geo_trace("Selected Country", &selected, inputs.x_field),
        geo_trace("Other Countries", &others, inputs.x_field),
    ];

    let layout = Layout::titled(format!("Global happiness in {}", inputs.year))
        .size(MAP_WIDTH, MAP_HEIGHT)
        .geo(Geo::default());

    Update::Figure {
        figure: FigureSpec::new(traces, layout),
        debug,
    }
}

/// Line chart of the clicked country's indicator across all years.
///
/// Same shape as the bar handler but triggered by map clicks, where the
/// country code arrives as the point's location key.
pub fn line_figure(dataset: &Dataset, inputs: &LineInputs) -> Update {
    let Some(click) = &inputs.map_click else {
        return Update::NoChange;
    };
    let Some(code) = click.location_country_code() else {
        return Update::NoChange;
    };

    let debug = format!(
        "Input: {:?}, {}, {}",
        click.points, inputs.x_field, inputs.x_scale
    );

    let figure = country_history_figure(
        dataset,
        code,
        inputs.x_field,
        &inputs.x_scale,
        Trace::line(),
    );

    Update::Figure { figure, debug }
}

/// x=year, y=indicator figure for a single country, shared by the bar and
/// line handlers
fn country_history_figure(
    dataset: &Dataset,
    code: &str,
    field: Indicator,
    scale: &str,
    base_trace: Trace,
) -> FigureSpec {
    let rows = dataset.happiness.filter_by_code(code);

    let x: Vec<Value> = rows.iter().map(|r| Value::from(r.year)).collect();
    let y: Vec<Value> = rows
        .iter()
        .map(|r| crate::chart::num_or_null(r.indicator(field)))
        .collect();

    let trace = base_trace.x(x).y(y);

    let country_name = dataset.codes.country_name_for_code(code);
    let layout = Layout::titled(format!("{} of {} in different year", field, country_name))
        .xaxis(Axis::new("year", AxisType::Linear))
        .yaxis(Axis::new(
            field.column_name(),
            AxisType::from_scale_label(scale),
        ));

    FigureSpec::new(vec![trace], layout)
}

/// Build one geo trace for a partition of the year's rows
fn geo_trace(name: &str, rows: &[&HappinessRecord], field: Indicator) -> Trace {
    let locations: Vec<String> = rows.iter().map(|r| r.code.clone()).collect();
    let labels: Vec<String> = rows.iter().map(|r| r.country_name.clone()).collect();
    let sizes: Vec<Option<f64>> = rows.iter().map(|r| r.indicator(field)).collect();

    Trace::scatter_geo()
        .name(name)
        .locations(locations)
        .text(labels)
        .marker(Marker::bubble(sizes, SIZE_MAX_PX))
}

/// Group year-filtered rows by country name, preserving first-appearance
/// order so trace colors stay stable across years
fn group_by_country<'a>(
    rows: &[&'a HappinessRecord],
) -> Vec<(String, Vec<&'a HappinessRecord>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<&HappinessRecord>> = HashMap::new();

    for row in rows {
        let entry = groups.entry(row.country_name.clone()).or_insert_with(|| {
            order.push(row.country_name.clone());
            Vec::new()
        });
        entry.push(row);
    }

    order
        .into_iter()
        .map(|name| {
            let rows = groups.remove(&name).unwrap_or_default();
            (name, rows)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAPPINESS_CSV: &str = "\
Country name,Code,year,Life Ladder,Log GDP per capita,Social support,Healthy life expectancy at birth,Freedom to make life choices,Generosity
Denmark,DNK,2008,7.971,10.827,0.954,68.3,0.971,0.245
Denmark,DNK,2009,7.683,10.781,0.938,68.44,0.94,0.229
United States,USA,2008,7.28,11.022,0.953,68.4,0.872,0.246
United States,USA,2009,7.158,10.985,0.93,68.6,0.826,0.202
United States,USA,2010,7.164,11.0,0.927,68.8,0.828,0.216
";

    const CODES_CSV: &str = "\
Code3,Country
DNK,Denmark
USA,United States
";

    fn test_dataset() -> Dataset {
        Dataset::from_csv_str(HAPPINESS_CSV, CODES_CSV).unwrap()
    }

    fn expect_figure(update: Update) -> (FigureSpec, String) {
        match update {
            Update::Figure { figure, debug } => (figure, debug),
            Update::NoChange => panic!("expected a figure, got NoChange"),
        }
    }

    #[test]
    fn test_scatter_title_and_rows() {
        let dataset = test_dataset();
        let update = scatter_figure(
            &dataset,
            &ScatterInputs {
                year: 2008,
                x_field: Indicator::LifeLadder,
                y_field: Indicator::Generosity,
                x_scale: "Linear".to_string(),
                y_scale: "Linear".to_string(),
            },
        );

        let (figure, debug) = expect_figure(update);
        assert_eq!(
            figure.layout.title,
            "Life Ladder vs Generosity of Countries"
        );
        // One trace per country present in 2008, one point each
        assert_eq!(figure.traces.len(), 2);
        for trace in &figure.traces {
            assert_eq!(trace.x.as_ref().unwrap().len(), 1);
            assert_eq!(trace.customdata.as_ref().unwrap().len(), 1);
        }
        assert_eq!(
            debug,
            "Input: 2008, Life Ladder, Generosity, Linear, Linear"
        );
    }

    #[test]
    fn test_scatter_axis_scales_independent() {
        let dataset = test_dataset();
        let inputs = |x_scale: &str, y_scale: &str| ScatterInputs {
            year: 2008,
            x_field: Indicator::LifeLadder,
            y_field: Indicator::Generosity,
            x_scale: x_scale.to_string(),
            y_scale: y_scale.to_string(),
        };

        let (figure, _) = expect_figure(scatter_figure(&dataset, &inputs("Log", "Linear")));
        assert_eq!(figure.layout.xaxis.unwrap().axis_type, AxisType::Log);
        assert_eq!(figure.layout.yaxis.unwrap().axis_type, AxisType::Linear);

        let (figure, _) = expect_figure(scatter_figure(&dataset, &inputs("Linear", "Log")));
        assert_eq!(figure.layout.xaxis.unwrap().axis_type, AxisType::Linear);
        assert_eq!(figure.layout.yaxis.unwrap().axis_type, AxisType::Log);

        // Any label other than exactly "Log" is linear
        let (figure, _) = expect_figure(scatter_figure(&dataset, &inputs("log", "LOG")));
        assert_eq!(figure.layout.xaxis.unwrap().axis_type, AxisType::Linear);
        assert_eq!(figure.layout.yaxis.unwrap().axis_type, AxisType::Linear);
    }

    #[test]
    fn test_scatter_empty_year_still_a_figure() {
        let dataset = test_dataset();
        let update = scatter_figure(
            &dataset,
            &ScatterInputs {
                year: 1990,
                x_field: Indicator::LifeLadder,
                y_field: Indicator::Generosity,
                x_scale: "Linear".to_string(),
                y_scale: "Linear".to_string(),
            },
        );

        let (figure, _) = expect_figure(update);
        assert!(figure.traces.is_empty());
    }

    #[test]
    fn test_bar_suppressed_without_click() {
        let dataset = test_dataset();
        let update = bar_figure(
            &dataset,
            &BarInputs {
                scatter_click: None,
                x_field: Indicator::SocialSupport,
                x_scale: "Linear".to_string(),
            },
        );
        assert!(update.is_no_change());
    }

    #[test]
    fn test_bar_suppressed_on_payload_less_click() {
        let dataset = test_dataset();
        let update = bar_figure(
            &dataset,
            &BarInputs {
                scatter_click: Some(ClickEvent { points: vec![] }),
                x_field: Indicator::SocialSupport,
                x_scale: "Linear".to_string(),
            },
        );
        assert!(update.is_no_change());
    }

    #[test]
    fn test_bar_for_clicked_country() {
        let dataset = test_dataset();
        let update = bar_figure(
            &dataset,
            &BarInputs {
                scatter_click: Some(ClickEvent::from_payload("USA")),
                x_field: Indicator::SocialSupport,
                x_scale: "Linear".to_string(),
            },
        );

        let (figure, _) = expect_figure(update);
        assert_eq!(
            figure.layout.title,
            "Social support of United States in different year"
        );
        // One bar per year present for USA
        let trace = &figure.traces[0];
        assert_eq!(trace.kind, crate::chart::TraceKind::Bar);
        assert_eq!(trace.x.as_ref().unwrap().len(), 3);
        assert_eq!(trace.x.as_ref().unwrap()[0], Value::from(2008));
    }

    #[test]
    fn test_bar_unknown_code_gives_empty_name_and_chart() {
        let dataset = test_dataset();
        let update = bar_figure(
            &dataset,
            &BarInputs {
                scatter_click: Some(ClickEvent::from_payload("XYZ")),
                x_field: Indicator::Generosity,
                x_scale: "Linear".to_string(),
            },
        );

        // A lookup miss is not an error: empty name, empty-but-valid chart
        let (figure, _) = expect_figure(update);
        assert_eq!(figure.layout.title, "Generosity of  in different year");
        assert!(figure.traces[0].x.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_map_suppressed_without_click() {
        let dataset = test_dataset();
        let update = map_figure(
            &dataset,
            &MapInputs {
                year: 2008,
                scatter_click: None,
                x_field: Indicator::LifeLadder,
            },
        );
        assert!(update.is_no_change());
    }

    #[test]
    fn test_map_partitions_selected_country() {
        let dataset = test_dataset();
        let update = map_figure(
            &dataset,
            &MapInputs {
                year: 2008,
                scatter_click: Some(ClickEvent::from_payload("DNK")),
                x_field: Indicator::LifeLadder,
            },
        );

        let (figure, _) = expect_figure(update);
        assert_eq!(figure.layout.title, "Global happiness in 2008");
        assert_eq!(figure.traces.len(), 2);

        let selected = &figure.traces[0];
        assert_eq!(selected.name.as_deref(), Some("Selected Country"));
        assert_eq!(selected.locations.as_ref().unwrap(), &vec!["DNK".to_string()]);

        let others = &figure.traces[1];
        assert_eq!(others.name.as_deref(), Some("Other Countries"));
        assert_eq!(others.locations.as_ref().unwrap(), &vec!["USA".to_string()]);

        let geo = figure.layout.geo.unwrap();
        assert_eq!(geo.resolution, 50);
        assert_eq!(figure.layout.width, Some(1100));
        assert_eq!(figure.layout.height, Some(600));
    }

    #[test]
    fn test_line_suppressed_without_location() {
        let dataset = test_dataset();

        let update = line_figure(
            &dataset,
            &LineInputs {
                map_click: None,
                x_field: Indicator::Generosity,
                x_scale: "Linear".to_string(),
            },
        );
        assert!(update.is_no_change());

        // A payload-only click (no location) does not satisfy the map guard
        let update = line_figure(
            &dataset,
            &LineInputs {
                map_click: Some(ClickEvent::from_payload("USA")),
                x_field: Indicator::Generosity,
                x_scale: "Linear".to_string(),
            },
        );
        assert!(update.is_no_change());
    }

    #[test]
    fn test_line_from_map_click() {
        let dataset = test_dataset();
        let update = line_figure(
            &dataset,
            &LineInputs {
                map_click: Some(ClickEvent::from_location("DNK")),
                x_field: Indicator::Generosity,
                x_scale: "Log".to_string(),
            },
        );

        let (figure, _) = expect_figure(update);
        assert_eq!(
            figure.layout.title,
            "Generosity of Denmark in different year"
        );
        let trace = &figure.traces[0];
        assert_eq!(trace.kind, crate::chart::TraceKind::Scatter);
        assert_eq!(trace.mode.as_deref(), Some("lines"));
        assert_eq!(trace.x.as_ref().unwrap().len(), 2);
        assert_eq!(figure.layout.yaxis.unwrap().axis_type, AxisType::Log);
    }

    #[test]
    fn test_duplicate_rows_flow_through() {
        let csv = "\
Country name,Code,year,Life Ladder,Log GDP per capita,Social support,Healthy life expectancy at birth,Freedom to make life choices,Generosity
Denmark,DNK,2008,7.9,,,,,
Denmark,DNK,2008,8.0,,,,,
";
        let dataset = Dataset::from_csv_str(csv, CODES_CSV).unwrap();

        let (figure, _) = expect_figure(bar_figure(
            &dataset,
            &BarInputs {
                scatter_click: Some(ClickEvent::from_payload("DNK")),
                x_field: Indicator::LifeLadder,
                x_scale: "Linear".to_string(),
            },
        ));
        // Both duplicate (code, year) rows are kept
        assert_eq!(figure.traces[0].x.as_ref().unwrap().len(), 2);
    }
}
