//! Batch dispatching
//!
//! This module validates the whole batch up front, runs every status
//! check concurrently and prints results followed by the summary.

pub mod runner;

pub use runner::Dispatcher;

use std::io::Write;

use crate::config::Config;
use crate::core::error::Result;
use crate::reporting::SummaryView;
use crate::ui::color::Painter;
use crate::validation::HttpChecker;

/// Check `urls` over HTTP with styling picked from `config`.
pub async fn run<S: AsRef<str>, W: Write>(
    urls: &[S],
    config: &Config,
    out: &mut W,
) -> Result<SummaryView> {
    Dispatcher::new(HttpChecker::default(), Painter::from_setting(config.color))
        .run(urls, config, out)
        .await
}
