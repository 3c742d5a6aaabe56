//! API Route Handlers
//!
//! Each submodule contains handlers for a group of related endpoints.

pub mod charts;
pub mod health;
pub mod meta;
pub mod page;
