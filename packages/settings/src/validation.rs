// ABOUTME: Field-level validation and normalization for blogroll settings
// ABOUTME: URL checks, line ending canonicalization and lenient integer parsing

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme: {0}. Must be http or https")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("URL must not embed credentials")]
    EmbeddedCredentials,
}

/// Any single line break: CRLF as a unit, or one of LF, VT, FF, CR, NEL, LS, PS.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\x0B\x0C\r\x{85}\x{2028}\x{2029}]").expect("line break pattern is valid")
});

/// Leading numeric prefix of a category id: optional whitespace and sign,
/// digits with an optional fraction, then an optional exponent.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Characters stripped from both ends of a denylist block.
///
/// Only ASCII whitespace and NUL; other Unicode spaces such as NBSP are kept.
pub const DENYLIST_TRIM_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Validate an absolute http(s) URL and return its normalized form.
///
/// Credentials in the authority are rejected, matching the host platform's
/// check for URLs it is willing to fetch.
pub fn validate_url(value: &str) -> Result<String, ValidationError> {
    let parsed = Url::parse(value).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(ValidationError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::MissingHost(value.to_string()));
    }

    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(ValidationError::EmbeddedCredentials);
    }

    Ok(parsed.into())
}

/// Replace every line break with CRLF.
pub fn normalize_line_endings(value: &str) -> String {
    LINE_BREAK.replace_all(value, "\r\n").into_owned()
}

/// Canonical denylist: CRLF line endings, no surrounding whitespace.
pub fn normalize_denylist(value: &str) -> String {
    normalize_line_endings(value)
        .trim_matches(DENYLIST_TRIM_CHARS.as_slice())
        .to_string()
}

/// Non-empty entries of a canonical denylist
pub fn denylist_entries(denylist: &str) -> impl Iterator<Item = &str> {
    denylist
        .split("\r\n")
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

/// Parse a category id the lenient way form input is treated.
///
/// The longest numeric prefix is used and trailing garbage is ignored, so
/// `"12abc"` is 12. A fraction or exponent makes the prefix a float that is
/// truncated toward zero (`"1e3"` is 1000, `"2.9"` is 2). No number at all
/// yields 0, and out-of-range values saturate.
pub fn parse_category_id(value: &str) -> i64 {
    let Some(number) = NUMERIC_PREFIX.captures(value).and_then(|c| c.get(1)) else {
        return 0;
    };
    let number = number.as_str();

    if number.contains(['.', 'e', 'E']) {
        // Float to int casts saturate
        return number.parse::<f64>().map_or(0, |parsed| parsed as i64);
    }

    match number.parse::<i64>() {
        Ok(parsed) => parsed,
        Err(_) if number.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}
