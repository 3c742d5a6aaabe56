//! Dashboard Page Route
//!
//! Serves the single-page dashboard. The page is a thin declarative layout:
//! control widgets, four chart placeholders and a debug panel, with the
//! charting library doing all rendering client-side. It is embedded in the
//! binary so the server has no runtime file dependencies beyond the two
//! CSV sources.
//!
//! - GET / - the dashboard page

use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}
