use async_trait::async_trait;
use reqwest::redirect::Policy;
use tokio::time::Duration;

use crate::core::constants::http;
use crate::core::types::{CheckOutcome, NormalizedUrl};

/// Performs one status check against a normalized URL.
#[async_trait]
pub trait CheckUrl: Send + Sync {
    async fn check(&self, url: &NormalizedUrl, timeout: Duration) -> CheckOutcome;
}

/// Issues a single GET per check through a client scoped to that request.
#[derive(Default, Debug)]
pub struct HttpChecker {}

#[async_trait]
impl CheckUrl for HttpChecker {
    async fn check(&self, url: &NormalizedUrl, timeout: Duration) -> CheckOutcome {
        // The client lives only for this request; its connections close when it drops.
        let client = match reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(http::MAX_REDIRECTS))
            .user_agent(http::USER_AGENT)
            .build()
        {
            Ok(client) => client,
            Err(err) => return CheckOutcome::ConnectionFailure(describe_error(&err)),
        };

        match client.get(url.as_str()).send().await {
            Ok(res) => CheckOutcome::from_status(res.status().as_u16()),
            Err(err) if err.is_timeout() => CheckOutcome::Timeout,
            Err(err) => CheckOutcome::ConnectionFailure(describe_error(&err)),
        }
    }
}

/// Prefer the underlying cause (dns, refused, tls) over reqwest's wrapper text.
fn describe_error(err: &reqwest::Error) -> String {
    std::error::Error::source(err)
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string())
}
