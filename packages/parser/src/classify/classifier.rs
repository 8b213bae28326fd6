//! Priority-ordered line classification.

use super::tables::{
    paragraph_prefix, subitem_prefix, HEADING_PATTERN, ITEM_PATTERN, SUBSUBITEM_PATTERN,
};
use super::types::{Heading, Line, Marked};

/// Classify a single line.
///
/// Patterns are tried in a fixed order and the first match wins:
/// heading (장/절/조), paragraph (①), item (`1.`), subitem (`가.`),
/// sub-subitem (`1)`), otherwise continuation. The classification is
/// context-free; whether the line can attach anywhere is decided by the
/// builder.
///
/// # Examples
/// ```
/// use regdoc_parser::classify::{classify, LineKind};
///
/// assert_eq!(classify("제1조(목적) 이 규정은").kind(), LineKind::Article);
/// assert_eq!(classify("1. 항목").kind(), LineKind::Item);
/// assert_eq!(classify("1) 하위목").kind(), LineKind::Subsubitem);
/// assert_eq!(classify("그 밖의 사항").kind(), LineKind::Continuation);
/// ```
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim();

    if let Some(line) = classify_heading(line) {
        return line;
    }

    if let Some(symbol) = paragraph_prefix(line) {
        return Line::Paragraph(Marked {
            symbol,
            text: line[symbol.len()..].trim(),
        });
    }

    if let Some(caps) = ITEM_PATTERN.captures(line) {
        if let (Some(symbol), Some(text)) = (caps.get(1), caps.get(2)) {
            return Line::Item(Marked {
                symbol: symbol.as_str(),
                text: text.as_str().trim(),
            });
        }
    }

    if let Some(symbol) = subitem_prefix(line) {
        // Symbol plus the period that follows it
        return Line::Subitem(Marked {
            symbol,
            text: line[symbol.len() + 1..].trim(),
        });
    }

    if let Some(caps) = SUBSUBITEM_PATTERN.captures(line) {
        if let (Some(symbol), Some(text)) = (caps.get(1), caps.get(2)) {
            return Line::Subsubitem(Marked {
                symbol: symbol.as_str(),
                text: text.as_str().trim(),
            });
        }
    }

    Line::Continuation(line)
}

/// Whether a line starts with a structural marker other than `1)`.
///
/// This is the noise filter applied to declared-contents listings.
#[must_use]
pub fn is_structural_line(line: &str) -> bool {
    classify(line).kind().is_structural()
}

fn classify_heading(line: &str) -> Option<Line<'_>> {
    let caps = HEADING_PATTERN.captures(line)?;
    let number = caps.get(1)?.as_str();
    let level = caps.get(2)?.as_str();

    let heading = Heading {
        number,
        bare_title: caps.get(3).map_or("", |m| m.as_str().trim()),
        bracket_title: caps.get(4).map(|m| m.as_str().trim()),
        text: caps.get(5).map_or("", |m| m.as_str().trim()),
    };

    Some(if level.starts_with('장') {
        Line::Chapter(heading)
    } else if level.starts_with('절') {
        Line::Section(heading)
    } else {
        Line::Article(heading)
    })
}
