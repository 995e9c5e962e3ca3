//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! Defaults, exit codes, the URL pattern fragments and user-facing messages
//! all live here so the CLI, the dispatcher and the tests agree on them.

/// Timeout and duration constants
pub mod timeouts {
    /// Default total request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// HTTP client settings
pub mod http {
    /// Maximum number of redirects followed before the last response is reported
    pub const MAX_REDIRECTS: usize = 10;
    /// User-Agent sent with every request
    pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
}

/// Process exit codes
pub mod exit_codes {
    /// Every check ran (regardless of individual outcomes)
    pub const SUCCESS: i32 = 0;
    /// Invalid argument or a batch containing an invalid URL
    pub const INVALID_INPUT: i32 = 1;
    /// Malformed command line usage
    pub const USAGE: i32 = 2;
}

/// Pieces of the URL pattern: protocol, content (host) and suffix groups
pub mod url_pattern {
    /// Optional scheme, start of input or a whitespace character
    pub const PROTOCOL: &str = r"([a-z]{3,6}://|^|\s)";
    /// Dotted host with a 2-13 letter top-level label
    pub const CONTENT: &str = r"([a-zA-Z0-9\-]+\.+[a-z]{2,13})";
    /// Path and query characters, never an `@`
    pub const SUFFIX: &str = r"([.?=&%/\w\-]*\b([^@]|$))";

    pub const HTTP_SCHEME: &str = "http://";
    pub const HTTPS_SCHEME: &str = "https://";
}

/// User-facing messages
pub mod messages {
    pub const INVALID_ARGUMENTS: &str = "Invalid arguments, use --help for help";
    pub const EXECUTION_CANCELLED: &str = "Execution cancelled because of invalid url(s)";
    pub const TIMEOUT: &str = "Timeout";
    pub const SUMMARY: &str = "Summary";
}
