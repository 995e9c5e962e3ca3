//! statusof checks the HTTP status of a list of URLs concurrently and
//! prints a per-URL result plus an aggregate summary.

pub mod config;
pub mod core;
pub mod dispatch;
pub mod reporting;
pub mod ui;
pub mod validation;

pub use crate::core::{CheckOutcome, NormalizedUrl, Result, StatusOfError, UrlParts};
pub use dispatch::{Dispatcher, run};
pub use reporting::{Summary, SummaryView};
pub use validation::{CheckUrl, HttpChecker, validate_and_normalize};
