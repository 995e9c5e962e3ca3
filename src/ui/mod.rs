//! User interface
//!
//! This module contains CLI parsing, terminal styling and
//! the formatting of result and summary lines.

pub mod cli;
pub mod color;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, UrlSource, cli_to_config, collect_sources, load_urls};
pub use color::Painter;
