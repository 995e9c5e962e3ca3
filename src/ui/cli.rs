// Command-line interface definitions and parsing for statusof

use clap::{ArgMatches, Parser};
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::core::error::{Result, StatusOfError};

const USAGE_EXAMPLES: &str = "\
Examples:
  # Single url
  statusof -u example.com
  statusof -u example.com -t 10

  # Multiple urls
  statusof -f urls.txt
  statusof -u example.com -u example2.com";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true, after_help = USAGE_EXAMPLES)]
pub struct Cli {
    /// URL to check (repeatable)
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// File containing newline-delimited URLs (repeatable)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Timeout in seconds for each request (default: 10)
    #[arg(short = 't', long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Try to use HTTPS instead of HTTP for URLs without a scheme
    #[arg(short = 's', long)]
    pub secure: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,
}

/// Where a URL entry comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    Inline(String),
    File(PathBuf),
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        secure: cli.secure,
        verbose: cli.verbose,
        no_color: cli.no_color,
        config_file: cli.config.clone(),
    }
}

/// Interleave `--url` and `--file` values in the order they were given.
pub fn collect_sources(cli: &Cli, matches: &ArgMatches) -> Vec<UrlSource> {
    let mut indexed: Vec<(usize, UrlSource)> = Vec::with_capacity(cli.urls.len() + cli.files.len());

    if let Some(indices) = matches.indices_of("urls") {
        indexed.extend(indices.zip(cli.urls.iter().cloned().map(UrlSource::Inline)));
    }
    if let Some(indices) = matches.indices_of("files") {
        indexed.extend(indices.zip(cli.files.iter().cloned().map(UrlSource::File)));
    }

    indexed.sort_by_key(|(idx, _)| *idx);
    indexed.into_iter().map(|(_, source)| source).collect()
}

/// Expand sources into raw URL entries, one per file line.
///
/// Lines are not trimmed here and blank lines are kept, so they surface as
/// invalid entries with their position.
pub fn load_urls(sources: &[UrlSource]) -> Result<Vec<String>> {
    let mut urls = Vec::new();

    for source in sources {
        match source {
            UrlSource::Inline(url) => urls.push(url.clone()),
            UrlSource::File(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    StatusOfError::InvalidArgument(format!(
                        "Could not read URL file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                urls.extend(content.lines().map(str::to_string));
            }
        }
    }

    Ok(urls)
}
