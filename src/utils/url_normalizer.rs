//! Submitted URL validation and normalization.
//!
//! Normalization is whitespace trimming only. The scheme, host, port, path and
//! fragment are stored exactly as submitted; parsing is used for validation.

use std::fmt;
use url::Url;

/// Reasons a submitted string is not an acceptable web URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUrl {
    #[error("URL is empty")]
    Empty,

    #[error("URL contains whitespace")]
    ContainsWhitespace,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have the form scheme://host")]
    MissingAuthority,

    #[error("URL has no host")]
    MissingHost,
}

/// A trimmed, syntactically valid absolute `http`/`https` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trims `raw` and checks that it is a web URI.
///
/// # Rules
///
/// 1. Leading and trailing whitespace is removed
/// 2. Interior whitespace is rejected
/// 3. The scheme must be `http` or `https` (any case) and be followed by `://`
/// 4. The host must be present and syntactically valid
///
/// No network access is performed.
///
/// # Errors
///
/// Returns the matching [`InvalidUrl`] variant for the first rule violated.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_normalizer::normalize_and_validate;
///
/// let url = normalize_and_validate("  https://example.com/page ").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
///
/// assert!(normalize_and_validate("not-a-url").is_err());
/// ```
pub fn normalize_and_validate(raw: &str) -> Result<NormalizedUrl, InvalidUrl> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(InvalidUrl::Empty);
    }

    if trimmed.chars().any(char::is_whitespace) {
        return Err(InvalidUrl::ContainsWhitespace);
    }

    let url = Url::parse(trimmed).map_err(|e| InvalidUrl::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(InvalidUrl::UnsupportedProtocol),
    }

    // `http:example.com` parses, but is not a web URI as written.
    let after_scheme = trimmed.get(url.scheme().len()..).unwrap_or_default();
    if !after_scheme.starts_with("://") {
        return Err(InvalidUrl::MissingAuthority);
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(InvalidUrl::MissingHost);
    }

    Ok(NormalizedUrl(trimmed.to_string()))
}
