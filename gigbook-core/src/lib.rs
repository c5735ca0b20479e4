//! Derived-view engines for the gigbook dashboard.
//!
//! The host owns the record collections and the current filter / calendar
//! state, and calls in here to recompute what should be shown:
//! - `query` narrows a list page's records by free text and facets
//! - `calendar` lays out month grids and buckets events into time windows
//!
//! Both are synchronous and side-effect free; results borrow from the
//! caller's snapshot.

pub mod calendar;
pub mod config;
pub mod date_range;
pub mod dates;
pub mod entity;
pub mod error;
pub mod event;
pub mod query;

pub use error::{GigbookError, GigbookResult};
