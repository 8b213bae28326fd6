//! Enumerator alphabets and heading patterns.
//!
//! Paragraph and subitem markers come from closed alphabets, so they are
//! matched against these tables rather than character ranges: the Unicode
//! block around ①–㉟ also holds parenthesized and full-width forms that are
//! not paragraph markers.

use regex::Regex;
use std::sync::LazyLock;

/// 항 markers: circled numbers 1 through 35, in order.
pub static PARAGRAPH_SYMBOLS: [&str; 35] = [
    "①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨", "⑩", //
    "⑪", "⑫", "⑬", "⑭", "⑮", "⑯", "⑰", "⑱", "⑲", "⑳", //
    "㉑", "㉒", "㉓", "㉔", "㉕", "㉖", "㉗", "㉘", "㉙", "㉚", //
    "㉛", "㉜", "㉝", "㉞", "㉟",
];

/// 목 markers, each followed by a period in the source text.
pub static SUBITEM_SYMBOLS: [&str; 14] = [
    "가", "나", "다", "라", "마", "바", "사", "아", "자", "차", "카", "타", "파", "하",
];

/// Chapter/section/article heading.
///
/// Captures: (1) number with level word, e.g. "3조의2", (2) level word,
/// (3) bare title after whitespace, (4) bracketed title, (5) trailing text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^제\s*(\d+(장|절|조(?:의\d+)?))(?:\s+([^(①]*))?(?:\((.*?)\))?\s*(.*)$")
        .expect("valid regex")
});

/// 호 marker: digits terminated by a period.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static ITEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.*)$").expect("valid regex"));

/// 하위목 marker: digits terminated by a closing parenthesis.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static SUBSUBITEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\)\s*(.*)$").expect("valid regex"));

/// Return the paragraph symbol the line starts with, if any.
#[must_use]
pub fn paragraph_prefix(line: &str) -> Option<&'static str> {
    PARAGRAPH_SYMBOLS
        .iter()
        .copied()
        .find(|symbol| line.starts_with(symbol))
}

/// Return the subitem symbol the line starts with, if it is followed by a period.
#[must_use]
pub fn subitem_prefix(line: &str) -> Option<&'static str> {
    SUBITEM_SYMBOLS.iter().copied().find(|symbol| {
        line.strip_prefix(symbol)
            .is_some_and(|rest| rest.starts_with('.'))
    })
}
