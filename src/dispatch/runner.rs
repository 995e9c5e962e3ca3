use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::io::Write;
use tokio::time::{Duration, Instant};

use crate::config::Config;
use crate::core::constants::messages;
use crate::core::error::{Result, StatusOfError};
use crate::core::types::NormalizedUrl;
use crate::reporting::logging;
use crate::reporting::{Summary, SummaryView};
use crate::ui::color::Painter;
use crate::ui::output::{format_result_line, format_summary};
use crate::validation::{CheckUrl, validate_batch};

/// Validates a batch, fans out one check per URL and reports as they finish.
pub struct Dispatcher<C> {
    checker: C,
    painter: Painter,
}

impl<C: CheckUrl> Dispatcher<C> {
    pub fn new(checker: C, painter: Painter) -> Self {
        Self { checker, painter }
    }

    /// Run every check and write result lines followed by the summary to `out`.
    ///
    /// Nothing is dispatched if any entry fails validation; the invalid
    /// entries are listed and `StatusOfError::Cancelled` is returned.
    pub async fn run<S: AsRef<str>, W: Write>(
        &self,
        raw_urls: &[S],
        config: &Config,
        out: &mut W,
    ) -> Result<SummaryView> {
        let urls = match validate_batch(raw_urls, config.is_secure()) {
            Ok(urls) => urls,
            Err(invalid) => {
                for err in &invalid {
                    writeln!(out, "{err}")?;
                }
                writeln!(out, "{}", messages::EXECUTION_CANCELLED)?;
                logging::log_error(messages::EXECUTION_CANCELLED, None);
                return Err(StatusOfError::Cancelled {
                    invalid: invalid.len(),
                });
            }
        };

        let summary = Summary::new();
        self.dispatch(&urls, config.timeout_duration(), &summary, out)
            .await?;

        let view = summary.report();
        writeln!(out)?;
        writeln!(out, "{}", format_summary(&self.painter, &view))?;
        Ok(view)
    }

    async fn dispatch<W: Write>(
        &self,
        urls: &[NormalizedUrl],
        timeout: Duration,
        summary: &Summary,
        out: &mut W,
    ) -> Result<()> {
        logging::log_dispatch_start(urls);
        let start_time = Instant::now();

        // All checks start together; results arrive in completion order.
        let mut pending: FuturesUnordered<_> = urls
            .iter()
            .map(|url| async move { (url, self.checker.check(url, timeout).await) })
            .collect();

        while let Some((url, outcome)) = pending.next().await {
            summary.record(&outcome);
            logging::log_check_result(url, &outcome);
            writeln!(out, "{}", format_result_line(&self.painter, url, &outcome))?;
        }

        let view = summary.report();
        logging::log_dispatch_complete(view.total, view.success, start_time.elapsed().as_millis());
        Ok(())
    }
}
