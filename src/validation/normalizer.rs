use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::url_pattern;
use crate::core::error::StatusOfError;
use crate::core::types::{InvalidUrl, NormalizedUrl, UrlParts};

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        "{}{}{}",
        url_pattern::PROTOCOL,
        url_pattern::CONTENT,
        url_pattern::SUFFIX
    );
    Regex::new(&pattern).expect("Failed to compile URL regex pattern")
});

/// Split `raw` into the protocol, host and suffix groups of the first match.
///
/// Returns `None` when nothing in `raw` looks like a host.
pub fn parse_url_parts(raw: &str) -> Option<UrlParts<'_>> {
    let caps = URL_REGEX.captures(raw)?;
    let whole = caps.get(0)?;
    let group = |idx: usize| caps.get(idx).map_or("", |m| m.as_str());

    Some(UrlParts {
        before: &raw[..whole.start()],
        protocol: group(1),
        host: caps.get(2)?.as_str(),
        suffix: group(3),
        after: &raw[whole.end()..],
    })
}

/// Validate a single trimmed entry and give it a scheme if it has none.
///
/// Entries that already carry a protocol are returned unchanged; otherwise
/// `http://` (or `https://` when `secure`) is prepended to the original text.
pub fn validate_and_normalize(raw: &str, secure: bool) -> Result<NormalizedUrl, InvalidUrl> {
    let parts = parse_url_parts(raw).ok_or_else(|| InvalidUrl {
        url: raw.to_string(),
    })?;

    if parts.has_protocol() {
        return Ok(NormalizedUrl::new(raw.to_string()));
    }

    let scheme = if secure {
        url_pattern::HTTPS_SCHEME
    } else {
        url_pattern::HTTP_SCHEME
    };
    Ok(NormalizedUrl::new(format!("{scheme}{raw}")))
}

/// Trim and validate every entry. Either all of them normalize, or every
/// invalid one is returned with its 1-based position.
pub fn validate_batch<S: AsRef<str>>(
    raw_urls: &[S],
    secure: bool,
) -> Result<Vec<NormalizedUrl>, Vec<StatusOfError>> {
    let mut normalized = Vec::with_capacity(raw_urls.len());
    let mut invalid = Vec::new();

    for (idx, raw) in raw_urls.iter().enumerate() {
        match validate_and_normalize(raw.as_ref().trim(), secure) {
            Ok(url) => normalized.push(url),
            Err(err) => invalid.push(err.at(idx + 1)),
        }
    }

    if invalid.is_empty() {
        Ok(normalized)
    } else {
        Err(invalid)
    }
}
