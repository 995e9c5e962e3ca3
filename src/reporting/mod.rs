//! Result aggregation and logging
//!
//! This module holds the summary counters shared by concurrent checks
//! and the structured logging helpers.

pub mod logging;
pub mod summary;

// Re-export commonly used items
pub use summary::{Summary, SummaryView};
