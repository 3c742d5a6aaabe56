//! Dataset Store
//!
//! In-memory store for the two source tables: the world-happiness report
//! (one row per country-year) and the country-code lookup table. Both are
//! loaded once at start-up, shared via `Arc`, and read-only thereafter, so
//! handlers can borrow rows concurrently without locking.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::Dataset;
pub use types::{
    CodeTable, CountryCodeEntry, HappinessRecord, HappinessTable, Indicator,
};
