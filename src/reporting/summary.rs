use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::types::CheckOutcome;

/// Counters shared by every in-flight check. Only ever incremented.
#[derive(Debug, Default)]
pub struct Summary {
    total: AtomicUsize,
    success: AtomicUsize,
    failure: AtomicUsize,
    server_failure: AtomicUsize,
    timeout: AtomicUsize,
}

/// Read-only snapshot of a [`Summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryView {
    pub total: usize,
    pub success: usize,
    pub failure: usize,
    pub server_failure: usize,
    pub timeout: usize,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished check.
    ///
    /// Client errors and connection failures both land in `failure`;
    /// unclassified statuses only bump `total`.
    pub fn record(&self, outcome: &CheckOutcome) {
        self.total.fetch_add(1, Ordering::Relaxed);

        let bucket = match outcome {
            CheckOutcome::Success(_) => Some(&self.success),
            CheckOutcome::ClientError(_) | CheckOutcome::ConnectionFailure(_) => {
                Some(&self.failure)
            }
            CheckOutcome::ServerError(_) => Some(&self.server_failure),
            CheckOutcome::Timeout => Some(&self.timeout),
            CheckOutcome::Unclassified(_) => None,
        };

        if let Some(counter) = bucket {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn report(&self) -> SummaryView {
        SummaryView {
            total: self.total.load(Ordering::Relaxed),
            success: self.success.load(Ordering::Relaxed),
            failure: self.failure.load(Ordering::Relaxed),
            server_failure: self.server_failure.load(Ordering::Relaxed),
            timeout: self.timeout.load(Ordering::Relaxed),
        }
    }
}
