//! Table-of-contents (조문목록) extraction.

use std::collections::BTreeSet;

use regex::Regex;
use std::sync::LazyLock;

/// Article entry in a contents listing: number and optional bracketed title.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_ENTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^제\s*(\d+조(?:의\d+)?)(?:\(([^)]*)\))?").expect("valid regex"));

/// An article listed in the declared contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Article number without 제 (e.g., "67조의2").
    pub number: String,

    /// Bracketed title, empty when the listing has none.
    pub title: String,
}

/// Extract article entries, in listing order, from filtered contents lines.
///
/// Chapter, section and enumerator lines are skipped.
#[must_use]
pub fn extract_toc_entries<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<TocEntry> {
    lines
        .into_iter()
        .filter_map(|line| {
            let caps = ARTICLE_ENTRY_PATTERN.captures(line.trim())?;
            Some(TocEntry {
                number: caps.get(1)?.as_str().to_string(),
                title: caps.get(2).map_or(String::new(), |m| m.as_str().trim().to_string()),
            })
        })
        .collect()
}

/// The set of declared article numbers.
///
/// # Examples
/// ```
/// use regdoc_parser::toc::{declared_numbers, extract_toc_entries};
///
/// let entries = extract_toc_entries(["제1장 총칙", "제1조(목적)", "제3조의2(특례)"]);
/// let numbers = declared_numbers(&entries);
/// assert_eq!(numbers.into_iter().collect::<Vec<_>>(), vec!["1조", "3조의2"]);
/// ```
#[must_use]
pub fn declared_numbers(entries: &[TocEntry]) -> BTreeSet<String> {
    entries.iter().map(|entry| entry.number.clone()).collect()
}

/// Label an article number with its declared title, e.g. "5조(벌칙)".
///
/// Falls back to the bare number when the listing gives no title.
#[must_use]
pub fn describe_article(entries: &[TocEntry], number: &str) -> String {
    match entries
        .iter()
        .find(|entry| entry.number == number && !entry.title.is_empty())
    {
        Some(entry) => format!("{}({})", entry.number, entry.title),
        None => number.to_string(),
    }
}
