//! Output formatting for result lines and the summary

use crate::core::constants::messages;
use crate::core::types::{CheckOutcome, NormalizedUrl};
use crate::reporting::SummaryView;
use crate::ui::color::{Painter, Styles};
use crate::validation::parse_url_parts;

/// Render a URL with its protocol, host and suffix styled separately.
///
/// Text outside the matched region is kept as-is.
pub fn format_url(painter: &Painter, url: &str) -> String {
    match parse_url_parts(url) {
        Some(parts) => format!(
            "{}{}{}{}{}",
            parts.before,
            painter.paint(parts.protocol, Styles::URL_PREFIX),
            painter.paint(parts.host, Styles::URL_CONTENT),
            painter.paint(parts.suffix, Styles::URL_SUFFIX),
            parts.after
        ),
        None => url.to_string(),
    }
}

/// Render the status part of a result line
pub fn format_outcome(painter: &Painter, outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Success(code) => painter.paint(&code.to_string(), Styles::URL_SUCCESS),
        CheckOutcome::ClientError(code) => painter.paint(&code.to_string(), Styles::URL_FAILURE),
        CheckOutcome::ServerError(code) => {
            painter.paint(&code.to_string(), Styles::URL_SERVER_FAILURE)
        }
        CheckOutcome::Unclassified(code) => code.to_string(),
        CheckOutcome::ConnectionFailure(description) => description.clone(),
        CheckOutcome::Timeout => painter.paint(messages::TIMEOUT, Styles::TIMEOUT),
    }
}

/// `<status-or-outcome>: <formatted-url>`
pub fn format_result_line(painter: &Painter, url: &NormalizedUrl, outcome: &CheckOutcome) -> String {
    format!(
        "{}: {}",
        format_outcome(painter, outcome),
        format_url(painter, url.as_str())
    )
}

/// Single-line aggregate of every check
pub fn format_summary(painter: &Painter, view: &SummaryView) -> String {
    format!(
        "{} urls {} success: {} failed: {} server failure: {} timeout: {}",
        painter.paint(&format!("{}:", messages::SUMMARY), Styles::SUMMARY),
        painter.paint(&view.total.to_string(), Styles::SUMMARY_TOTAL_URLS),
        painter.paint(&view.success.to_string(), Styles::SUMMARY_SUCCESS),
        painter.paint(&view.failure.to_string(), Styles::SUMMARY_FAILURE),
        painter.paint(&view.server_failure.to_string(), Styles::SUMMARY_SERVER),
        painter.paint(&view.timeout.to_string(), Styles::SUMMARY_TIMEOUT),
    )
}
