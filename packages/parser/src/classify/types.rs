//! Types produced by the line classifier.

use std::fmt;

/// The closed set of line kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Chapter,
    Section,
    Article,
    Paragraph,
    Item,
    Subitem,
    Subsubitem,
    Continuation,
}

impl LineKind {
    /// Short lowercase name, used in logs and diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Section => "section",
            Self::Article => "article",
            Self::Paragraph => "paragraph",
            Self::Item => "item",
            Self::Subitem => "subitem",
            Self::Subsubitem => "subsubitem",
            Self::Continuation => "continuation",
        }
    }

    /// Whether lines of this kind survive the declared-contents filter.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Subsubitem | Self::Continuation)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields captured from a 장/절/조 heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number including the level word, without 제 (e.g., "1장", "3조의2").
    pub number: &'a str,

    /// Unbracketed text following the number, trimmed.
    pub bare_title: &'a str,

    /// Text inside the first pair of parentheses.
    pub bracket_title: Option<&'a str>,

    /// Everything after the titles, trimmed.
    pub text: &'a str,
}

impl<'a> Heading<'a> {
    /// Title for a chapter or section heading.
    ///
    /// These headings carry their title unbracketed ("제1장 총칙"). When the
    /// number runs straight into the title ("제1장총칙"), the title ends up
    /// in the trailing text instead.
    #[must_use]
    pub fn label_title(&self) -> &'a str {
        if self.bare_title.is_empty() {
            self.text
        } else {
            self.bare_title
        }
    }

    /// Title of an article heading: the bracketed part only.
    #[must_use]
    pub fn article_title(&self) -> &'a str {
        self.bracket_title.unwrap_or_default()
    }

    /// Lead-in text of an article heading.
    ///
    /// Without a bracketed title the unbracketed run is body text, not a
    /// title, and is kept in front of the trailing text.
    #[must_use]
    pub fn article_lead_in(&self) -> String {
        if self.bracket_title.is_some() || self.bare_title.is_empty() {
            return self.text.to_string();
        }
        if self.text.is_empty() {
            return self.bare_title.to_string();
        }
        format!("{} {}", self.bare_title, self.text)
    }
}

/// A marker symbol and the text that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marked<'a> {
    /// Marker without its terminating punctuation (e.g., "①", "1", "가").
    pub symbol: &'a str,

    /// Text after the marker, trimmed.
    pub text: &'a str,
}

/// A classified body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Chapter(Heading<'a>),
    Section(Heading<'a>),
    Article(Heading<'a>),
    Paragraph(Marked<'a>),
    Item(Marked<'a>),
    Subitem(Marked<'a>),
    Subsubitem(Marked<'a>),
    Continuation(&'a str),
}

impl Line<'_> {
    #[must_use]
    pub fn kind(&self) -> LineKind {
        match self {
            Self::Chapter(_) => LineKind::Chapter,
            Self::Section(_) => LineKind::Section,
            Self::Article(_) => LineKind::Article,
            Self::Paragraph(_) => LineKind::Paragraph,
            Self::Item(_) => LineKind::Item,
            Self::Subitem(_) => LineKind::Subitem,
            Self::Subsubitem(_) => LineKind::Subsubitem,
            Self::Continuation(_) => LineKind::Continuation,
        }
    }
}
