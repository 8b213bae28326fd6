//! Splitting raw text into declared contents and body, and filtering noise
//! out of the declared contents.
//!
//! Regulation exports list their articles (조문목록) before a marker line
//! such as `{전문}`; the full text (전문) follows the marker.

use crate::classify::is_structural_line;

/// The two regions of a document, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions<'a> {
    /// Lines before the marker, without the newline preceding it.
    pub declared: &'a str,

    /// Lines after the marker. The full input when there is no marker.
    pub body: &'a str,

    /// Whether the marker line was present.
    pub marker_found: bool,
}

/// Split text at the first line equal to `marker` after trimming.
///
/// The marker line itself belongs to neither region. A missing marker is
/// not an error: the whole input becomes the body. An empty marker never
/// matches.
///
/// # Examples
/// ```
/// use regdoc_parser::boundary::split_regions;
///
/// let regions = split_regions("제1조(목적)\n{전문}\n제1조(목적) 본문", "{전문}");
/// assert_eq!(regions.declared, "제1조(목적)");
/// assert_eq!(regions.body, "제1조(목적) 본문");
///
/// let regions = split_regions("제1조(목적) 본문", "{전문}");
/// assert_eq!(regions.declared, "");
/// assert_eq!(regions.body, "제1조(목적) 본문");
/// ```
#[must_use]
pub fn split_regions<'a>(text: &'a str, marker: &str) -> Regions<'a> {
    let marker = marker.trim();
    if !marker.is_empty() {
        let mut offset = 0;
        for line in text.split('\n') {
            let end = offset + line.len();
            if line.trim() == marker {
                let before = &text[..offset];
                return Regions {
                    declared: before.strip_suffix('\n').unwrap_or(before),
                    body: text.get(end + 1..).unwrap_or_default(),
                    marker_found: true,
                };
            }
            offset = end + 1;
        }
    }

    tracing::debug!(marker = %marker, "Marker line not found, treating all text as body");
    Regions {
        declared: "",
        body: text,
        marker_found: false,
    }
}

/// Keep only trimmed lines that start with a structural marker.
///
/// Accepts 장/절/조 headings, `①`, `1.` and `가.`; commentary, amendment
/// notes and blank lines are dropped.
#[must_use]
pub fn extract_valid_lines(region: &str) -> Vec<&str> {
    region
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && is_structural_line(line))
        .collect()
}
