use crate::config::Config;
use crate::core::types::{CheckOutcome, NormalizedUrl};
use log::{debug, error, info, warn};

/// Initialize the logger. Structured logs only show up in verbose mode and
/// go to stderr, leaving stdout to the report.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: timeout={}s, secure={}",
        config.timeout_duration().as_secs(),
        config.is_secure()
    );
}

/// Log the URL list about to be dispatched
pub fn log_dispatch_start(urls: &[NormalizedUrl]) {
    info!("Dispatching {} check(s)", urls.len());
    for (i, url) in urls.iter().enumerate() {
        debug!("  {}. {}", i + 1, url);
    }
}

/// Log individual check results for debugging
pub fn log_check_result(url: &NormalizedUrl, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Success(status) => debug!("✓ {url} -> {status}"),
        CheckOutcome::ClientError(status) | CheckOutcome::ServerError(status) => {
            debug!("✗ {url} -> {status}")
        }
        CheckOutcome::Unclassified(status) => debug!("? {url} -> {status}"),
        CheckOutcome::ConnectionFailure(desc) => debug!("✗ {url} -> {desc}"),
        CheckOutcome::Timeout => debug!("✗ {url} -> timeout"),
    }
}

/// Log completion of all checks
pub fn log_dispatch_complete(total: usize, success: usize, duration_ms: u128) {
    if success == total {
        info!("✅ All checks complete: {success}/{total} succeeded ({duration_ms}ms)");
    } else {
        warn!("❌ All checks complete: {success}/{total} succeeded ({duration_ms}ms)");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
