//! Configuration constants and validation functions for the parser.

use regex::Regex;
use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::error::{ParserError, Result};

/// Marker line separating the declared contents (조문목록) from the body (전문).
pub const DEFAULT_MARKER: &str = "{전문}";

/// Number/label given to synthesized chapter and section containers.
pub const DEFAULT_CONTAINER: &str = "default";

/// Symbol of the paragraph every article opens with.
///
/// Used both as the explicit first-paragraph glyph and as the synthetic
/// symbol when an article has no paragraph marker at all.
pub const FIRST_PARAGRAPH_SYMBOL: &str = "①";

/// File extensions picked up when parsing a directory.
pub const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Environment variable overriding the marker literal.
pub const MARKER_ENV: &str = "REGDOC_MARKER";

/// Environment variable enabling the body line filter.
pub const FILTER_BODY_ENV: &str = "REGDOC_FILTER_BODY";

/// Enforcement date pattern: YYYYMMDD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENFORCEMENT_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}$").expect("valid regex"));

/// Settings for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Exact (trimmed) line value that starts the body.
    pub marker: String,

    /// Also drop non-structural lines from the body before building.
    ///
    /// When set, continuation lines never reach the builder.
    pub filter_body: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            filter_body: false,
        }
    }
}

impl ParserConfig {
    /// Build a config from `REGDOC_MARKER` and `REGDOC_FILTER_BODY`,
    /// falling back to the defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let marker = std::env::var(MARKER_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MARKER.to_string());

        let filter_body = std::env::var(FILTER_BODY_ENV)
            .ok()
            .is_some_and(|v| parse_flag(&v));

        Self {
            marker,
            filter_body,
        }
    }

    /// Set the marker literal.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Enable or disable body filtering.
    #[must_use]
    pub fn with_filter_body(mut self, filter_body: bool) -> Self {
        self.filter_body = filter_body;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Validate and parse an enforcement date (YYYYMMDD).
///
/// # Examples
/// ```
/// use regdoc_parser::config::validate_enforcement_date;
///
/// assert!(validate_enforcement_date("20240101").is_ok());
/// assert!(validate_enforcement_date("2024-01-01").is_err());
/// assert!(validate_enforcement_date("20241301").is_err()); // Invalid month
/// ```
pub fn validate_enforcement_date(date_str: &str) -> Result<NaiveDate> {
    if !ENFORCEMENT_DATE_PATTERN.is_match(date_str) {
        return Err(ParserError::InvalidEnforcementDate(date_str.to_string()));
    }

    NaiveDate::parse_from_str(date_str, "%Y%m%d")
        .map_err(|_| ParserError::InvalidEnforcementDate(date_str.to_string()))
}
