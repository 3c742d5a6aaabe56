//! Reactive Update Graph
//!
//! The dashboard's update logic: four independent handlers wired to the UI
//! controls and to click events on the rendered charts.
//!
//! The dependency graph is fixed and acyclic:
//!
//! ```text
//! year slider, dropdowns, radios -> scatter
//! scatter click, x dropdown      -> bar, map
//! map click, x dropdown          -> line
//! ```
//!
//! Handlers never mutate anything; they read the shared [`Dataset`] and
//! return either a fresh figure or an explicit no-change.
//!
//! [`Dataset`]: crate::dataset::Dataset

pub mod event;
pub mod handlers;

pub use event::{ClickEvent, ClickPoint, Update};
pub use handlers::{
    bar_figure, line_figure, map_figure, scatter_figure, BarInputs, LineInputs, MapInputs,
    ScatterInputs,
};
