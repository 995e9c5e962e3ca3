use std::fmt;

use crate::core::error::StatusOfError;

/// A URL that passed validation and carries an explicit scheme.
///
/// Only the normalizer constructs these, so anything holding a
/// `NormalizedUrl` is safe to dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Input rejected by the URL pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUrl {
    pub url: String,
}

impl InvalidUrl {
    /// Attach the 1-based position of the entry in the input list.
    pub fn at(self, position: usize) -> StatusOfError {
        StatusOfError::InvalidUrl {
            position,
            url: self.url,
        }
    }
}

impl fmt::Display for InvalidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid url: {:?}", self.url)
    }
}

impl std::error::Error for InvalidUrl {}

/// The pieces of a URL captured by the pattern, borrowed from the source.
///
/// `before` and `after` hold whatever surrounds the match; `protocol` is
/// empty when the input had no scheme and may be a single whitespace
/// character when the match started after one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub before: &'a str,
    pub protocol: &'a str,
    pub host: &'a str,
    pub suffix: &'a str,
    pub after: &'a str,
}

impl UrlParts<'_> {
    pub fn has_protocol(&self) -> bool {
        !self.protocol.is_empty()
    }
}

/// Result of a single status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// 2xx response
    Success(u16),
    /// 4xx response
    ClientError(u16),
    /// 5xx (or higher) response
    ServerError(u16),
    /// Any other status (1xx, 3xx): displayed, only counted in the total
    Unclassified(u16),
    /// The request never produced a response
    ConnectionFailure(String),
    /// No response within the configured timeout
    Timeout,
}

impl CheckOutcome {
    /// Categorize an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => CheckOutcome::Success(status),
            400..=499 => CheckOutcome::ClientError(status),
            500.. => CheckOutcome::ServerError(status),
            _ => CheckOutcome::Unclassified(status),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            CheckOutcome::Success(code)
            | CheckOutcome::ClientError(code)
            | CheckOutcome::ServerError(code)
            | CheckOutcome::Unclassified(code) => Some(*code),
            CheckOutcome::ConnectionFailure(_) | CheckOutcome::Timeout => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutcome::Success(_))
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_from_status__success_range() {
        assert_eq!(CheckOutcome::from_status(200), CheckOutcome::Success(200));
        assert_eq!(CheckOutcome::from_status(204), CheckOutcome::Success(204));
        assert_eq!(CheckOutcome::from_status(299), CheckOutcome::Success(299));
    }

    #[test]
    fn test_from_status__client_error_range() {
        assert_eq!(
            CheckOutcome::from_status(400),
            CheckOutcome::ClientError(400)
        );
        assert_eq!(
            CheckOutcome::from_status(404),
            CheckOutcome::ClientError(404)
        );
        assert_eq!(
            CheckOutcome::from_status(499),
            CheckOutcome::ClientError(499)
        );
    }

    #[test]
    fn test_from_status__server_error_has_no_upper_bound() {
        assert_eq!(
            CheckOutcome::from_status(500),
            CheckOutcome::ServerError(500)
        );
        assert_eq!(
            CheckOutcome::from_status(599),
            CheckOutcome::ServerError(599)
        );
        assert_eq!(
            CheckOutcome::from_status(999),
            CheckOutcome::ServerError(999)
        );
    }

    #[test]
    fn test_from_status__redirects_and_informational_are_unclassified() {
        assert_eq!(
            CheckOutcome::from_status(101),
            CheckOutcome::Unclassified(101)
        );
        assert_eq!(
            CheckOutcome::from_status(301),
            CheckOutcome::Unclassified(301)
        );
        assert_eq!(
            CheckOutcome::from_status(304),
            CheckOutcome::Unclassified(304)
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(CheckOutcome::Success(200).status_code(), Some(200));
        assert_eq!(CheckOutcome::Timeout.status_code(), None);
        assert_eq!(
            CheckOutcome::ConnectionFailure("refused".to_string()).status_code(),
            None
        );
    }

    #[test]
    fn test_invalid_url__at_attaches_position() {
        let error = InvalidUrl {
            url: "@@@".to_string(),
        }
        .at(3);

        assert_eq!(error.to_string(), "Invalid url at position 3: \"@@@\"");
    }

    #[test]
    fn test_url_parts__has_protocol() {
        let parts = UrlParts {
            before: "",
            protocol: "",
            host: "example.com",
            suffix: "",
            after: "",
        };
        assert!(!parts.has_protocol());

        let parts = UrlParts {
            protocol: "https://",
            ..parts
        };
        assert!(parts.has_protocol());
    }
}
