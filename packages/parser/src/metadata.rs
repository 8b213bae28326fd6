//! Document metadata from filenames.
//!
//! Regulation exports are named `<title>(<type>)(<number>)(<YYYYMMDD>).<ext>`,
//! e.g. `방위사업관리규정(방위사업청훈령)(제864호)(20240711).hwp`.

use std::path::Path;

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::config::validate_enforcement_date;
use crate::types::DocumentMetadata;

/// Captures: (1) title, (2) type, (3) promulgation number, (4) enforcement date.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\((.*?)\)\((.*?)\)\((\d{8})\)$").expect("valid regex")
});

/// Extract metadata from a filename.
///
/// Leading directories and the extension are ignored. Names that do not
/// follow the pattern get the bare name as title and empty other fields;
/// this never fails.
///
/// # Examples
/// ```
/// use regdoc_parser::metadata::parse_filename;
///
/// let metadata = parse_filename("규정(훈령)(제1호)(20240101).hwp");
/// assert_eq!(metadata.title, "규정");
/// assert_eq!(metadata.doc_type, "훈령");
/// assert_eq!(metadata.promulgation_number, "제1호");
/// assert_eq!(metadata.enforcement_date, "20240101");
///
/// let fallback = parse_filename("규정.hwp");
/// assert_eq!(fallback.title, "규정");
/// assert!(fallback.doc_type.is_empty());
/// ```
#[must_use]
pub fn parse_filename(file_name: &str) -> DocumentMetadata {
    // Filenames from macOS arrive decomposed (NFD)
    let normalized: String = file_name.nfc().collect();
    let base_name = strip_extension(final_component(&normalized));

    let Some(caps) = FILENAME_PATTERN.captures(base_name) else {
        tracing::debug!(file = %file_name, "Filename does not match the expected pattern");
        return DocumentMetadata::titled(base_name);
    };

    let field = |i: usize| caps.get(i).map_or(String::new(), |m| m.as_str().trim().to_string());
    let metadata = DocumentMetadata {
        title: field(1),
        doc_type: field(2),
        promulgation_number: field(3),
        enforcement_date: field(4),
    };

    if validate_enforcement_date(&metadata.enforcement_date).is_err() {
        tracing::warn!(
            file = %file_name,
            date = %metadata.enforcement_date,
            "Enforcement date in filename is not a calendar date"
        );
    }

    metadata
}

fn final_component(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Remove the last extension, keeping dot-files intact.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => &name[..idx],
        _ => name,
    }
}
