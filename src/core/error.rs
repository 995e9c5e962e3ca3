use std::fmt;

use crate::core::constants::exit_codes;

/// Error types for statusof operations
///
/// Per-URL network problems are not errors: they are reported as
/// [`CheckOutcome`](crate::core::types::CheckOutcome) values. Everything
/// here aborts the run before or instead of dispatching checks.
#[derive(Debug)]
pub enum StatusOfError {
    /// IO error (reading URL files, writing output)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),

    /// A single URL that does not look like a URL, with its 1-based position
    InvalidUrl { position: usize, url: String },

    /// The batch contained invalid URLs, nothing was dispatched
    Cancelled { invalid: usize },
}

impl StatusOfError {
    /// Process exit code for this error. Usage errors (code 2) are raised by clap.
    pub fn exit_code(&self) -> i32 {
        match self {
            StatusOfError::Io(_)
            | StatusOfError::Config(_)
            | StatusOfError::TomlParsing(_)
            | StatusOfError::InvalidArgument(_)
            | StatusOfError::InvalidUrl { .. }
            | StatusOfError::Cancelled { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

impl fmt::Display for StatusOfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusOfError::Io(err) => write!(f, "IO error: {err}"),
            StatusOfError::Config(msg) => write!(f, "Configuration error: {msg}"),
            StatusOfError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            StatusOfError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            StatusOfError::InvalidUrl { position, url } => {
                write!(f, "Invalid url at position {position}: {url:?}")
            }
            StatusOfError::Cancelled { invalid } => {
                write!(f, "Execution cancelled: {invalid} invalid url(s)")
            }
        }
    }
}

impl std::error::Error for StatusOfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatusOfError::Io(err) => Some(err),
            StatusOfError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StatusOfError {
    fn from(err: std::io::Error) -> Self {
        StatusOfError::Io(err)
    }
}

impl From<toml::de::Error> for StatusOfError {
    fn from(err: toml::de::Error) -> Self {
        StatusOfError::TomlParsing(err)
    }
}

/// Type alias for Results using StatusOfError
pub type Result<T> = std::result::Result<T, StatusOfError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = StatusOfError::Config("Invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid timeout"
        );

        let invalid = StatusOfError::InvalidUrl {
            position: 2,
            url: "bad url".to_string(),
        };
        assert_eq!(
            format!("{invalid}"),
            "Invalid url at position 2: \"bad url\""
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let statusof_error = StatusOfError::from(io_error);

        assert!(matches!(statusof_error, StatusOfError::Io(_)));
        assert!(statusof_error.source().is_some());
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Table>("invalid toml [").unwrap_err();
        let statusof_error = StatusOfError::from(toml_error);

        assert!(matches!(statusof_error, StatusOfError::TomlParsing(_)));
        assert!(format!("{statusof_error}").contains("TOML parsing error:"));
    }

    #[test]
    fn test_error_no_source_variants() {
        let errors_without_source = vec![
            StatusOfError::Config("test".to_string()),
            StatusOfError::InvalidArgument("test".to_string()),
            StatusOfError::Cancelled { invalid: 1 },
        ];

        for error in errors_without_source {
            assert!(error.source().is_none());
        }
    }

    #[test]
    fn test_exit_code__is_invalid_input_for_all_variants() {
        let errors = vec![
            StatusOfError::Config("test".to_string()),
            StatusOfError::InvalidArgument("test".to_string()),
            StatusOfError::Cancelled { invalid: 3 },
            StatusOfError::InvalidUrl {
                position: 1,
                url: String::new(),
            },
        ];

        for error in errors {
            assert_eq!(error.exit_code(), exit_codes::INVALID_INPUT);
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatusOfError>();
    }
}
