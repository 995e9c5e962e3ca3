//! Color palette and terminal capability detection

use std::io::IsTerminal;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
}

/// Styles used for result lines and the summary: an intensity code
/// (bold, dim or normal) followed by a foreground color
pub struct Styles;

impl Styles {
    pub const TIMEOUT: &'static str = "\x1b[1m\x1b[91m";
    pub const URL_PREFIX: &'static str = "\x1b[22m\x1b[90m";
    pub const URL_CONTENT: &'static str = "\x1b[1m\x1b[94m";
    pub const URL_SUFFIX: &'static str = "\x1b[2m\x1b[94m";
    pub const URL_SUCCESS: &'static str = "\x1b[1m\x1b[92m";
    pub const URL_FAILURE: &'static str = "\x1b[1m\x1b[31m";
    pub const URL_SERVER_FAILURE: &'static str = "\x1b[1m\x1b[95m";

    pub const SUMMARY: &'static str = "\x1b[1m\x1b[93m";
    pub const SUMMARY_TOTAL_URLS: &'static str = "\x1b[1m\x1b[36m";
    pub const SUMMARY_SUCCESS: &'static str = "\x1b[1m\x1b[32m";
    pub const SUMMARY_FAILURE: &'static str = "\x1b[1m\x1b[31m";
    pub const SUMMARY_TIMEOUT: &'static str = "\x1b[1m\x1b[91m";
    pub const SUMMARY_SERVER: &'static str = "\x1b[1m\x1b[95m";
}

/// Applies styles when enabled, passes text through otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Honor an explicit setting, otherwise detect from the environment.
    pub fn from_setting(color: Option<bool>) -> Self {
        Self::new(color.unwrap_or_else(supports_formatting))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, style: &str) -> String {
        if self.enabled && !text.is_empty() {
            format!("{}{}{}", style, text, Colors::RESET)
        } else {
            text.to_string()
        }
    }
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;

    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    if cfg!(test) {
        return false;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("dumb") | Ok(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_paint_enabled() {
        let painter = Painter::new(true);
        assert_eq!(
            painter.paint("200", Styles::URL_SUCCESS),
            "\x1b[1m\x1b[92m200\x1b[0m"
        );
    }

    #[test]
    fn test_paint_disabled() {
        let painter = Painter::plain();
        assert_eq!(painter.paint("200", Styles::URL_SUCCESS), "200");
    }

    #[test]
    fn test_paint_skips_empty_text() {
        let painter = Painter::new(true);
        assert_eq!(painter.paint("", Styles::URL_SUFFIX), "");
    }

    #[test]
    fn test_from_setting_explicit() {
        assert!(Painter::from_setting(Some(true)).is_enabled());
        assert!(!Painter::from_setting(Some(false)).is_enabled());
    }

    #[test]
    #[serial]
    fn test_supports_formatting_with_no_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
        assert!(!supports_formatting());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_supports_formatting_with_force_color() {
        let original_no_color = std::env::var("NO_COLOR").ok();
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(supports_formatting());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
            if let Some(val) = original_no_color {
                std::env::set_var("NO_COLOR", val);
            }
        }
    }

    #[test]
    #[serial]
    fn test_supports_formatting_disabled_under_test() {
        let original_no_color = std::env::var("NO_COLOR").ok();
        let original_force = std::env::var("FORCE_COLOR").ok();
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(!supports_formatting());
        unsafe {
            if let Some(val) = original_no_color {
                std::env::set_var("NO_COLOR", val);
            }
            if let Some(val) = original_force {
                std::env::set_var("FORCE_COLOR", val);
            }
        }
    }
}
