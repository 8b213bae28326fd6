//! Core data types for parsed regulations.
//!
//! The tree mirrors the Korean statute hierarchy:
//!
//! ```text
//! Document
//! └── Chapter (장)
//!     └── Section (절)
//!         └── Article (조)
//!             └── Paragraph (항, ①)
//!                 └── Item (호, 1.)
//!                     └── Subitem (목, 가.)
//!                         └── Subsubitem (하위목, 1))
//! ```
//!
//! Serialized field names follow the established `chapter_number`,
//! `article_text`, ... record layout so downstream consumers can read the
//! output without a schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{validate_enforcement_date, DEFAULT_CONTAINER, FIRST_PARAGRAPH_SYMBOL};

/// Document-level fields derived from the source filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Regulation title (e.g., "방위사업관리규정").
    #[serde(rename = "document_title")]
    pub title: String,

    /// Issuing instrument type (e.g., "방위사업청훈령").
    #[serde(rename = "document_type")]
    pub doc_type: String,

    /// Promulgation number (e.g., "제864호").
    pub promulgation_number: String,

    /// Enforcement date as written in the filename, YYYYMMDD.
    pub enforcement_date: String,
}

impl DocumentMetadata {
    /// Metadata with only a title, all other fields empty.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parse the enforcement date, if it is a real calendar date.
    #[must_use]
    pub fn enforcement_date_parsed(&self) -> Option<NaiveDate> {
        validate_enforcement_date(&self.enforcement_date).ok()
    }
}

/// A fully parsed regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "document_id")]
    pub id: String,

    #[serde(rename = "document_title")]
    pub title: String,

    #[serde(rename = "document_type")]
    pub doc_type: String,

    pub promulgation_number: String,

    pub enforcement_date: String,

    pub chapters: Vec<Chapter>,
}

impl Document {
    /// Create an empty document carrying the given metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            id: id.into(),
            title: metadata.title,
            doc_type: metadata.doc_type,
            promulgation_number: metadata.promulgation_number,
            enforcement_date: metadata.enforcement_date,
            chapters: Vec::new(),
        }
    }

    /// All articles in reading order.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.chapters
            .iter()
            .flat_map(|c| c.sections.iter())
            .flat_map(|s| s.articles.iter())
    }

    /// Article numbers in reading order.
    #[must_use]
    pub fn article_numbers(&self) -> Vec<&str> {
        self.articles().map(|a| a.number.as_str()).collect()
    }
}

/// 장 (chapter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter label (e.g., "1장") or `"default"`.
    #[serde(rename = "chapter_number")]
    pub number: String,

    #[serde(rename = "chapter_title")]
    pub title: String,

    pub sections: Vec<Section>,
}

impl Chapter {
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Placeholder chapter for articles without an enclosing 장 header.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(DEFAULT_CONTAINER, "")
    }

    /// Whether this is a synthesized placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.number == DEFAULT_CONTAINER
    }

    /// Whether any section holds at least one article.
    #[must_use]
    pub fn has_articles(&self) -> bool {
        self.sections.iter().any(|s| !s.articles.is_empty())
    }
}

/// 절 (section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section label (e.g., "2절") or `"default"`.
    #[serde(rename = "section_number")]
    pub number: String,

    #[serde(rename = "section_title")]
    pub title: String,

    pub articles: Vec<Article>,
}

impl Section {
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            articles: Vec::new(),
        }
    }

    /// Placeholder section for articles without an enclosing 절 header.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(DEFAULT_CONTAINER, "")
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.number == DEFAULT_CONTAINER
    }
}

/// 조 (article).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article number without the leading 제 (e.g., "3조", "3조의2").
    #[serde(rename = "article_number")]
    pub number: String,

    /// Bracketed title (e.g., "목적").
    #[serde(rename = "article_title")]
    pub title: String,

    /// Free text attached to the article itself rather than a paragraph.
    #[serde(rename = "article_text")]
    pub text: String,

    pub paragraphs: Vec<Paragraph>,
}

impl Article {
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            text: String::new(),
            paragraphs: Vec::new(),
        }
    }

    /// Render the article skeleton back into a body header line.
    ///
    /// Uses the first paragraph's text as the lead-in, which is where the
    /// builder puts the text following an article header. Without a title
    /// the lead-in goes behind `①`, so parentheses in it cannot be read
    /// back as a bracketed title.
    ///
    /// # Examples
    /// ```
    /// use regdoc_parser::types::{Article, Paragraph};
    ///
    /// let mut article = Article::new("3조의2", "정의");
    /// article.paragraphs.push(Paragraph::new("①", "이 규정에서 사용하는 용어"));
    /// assert_eq!(article.header_line(), "제3조의2(정의) 이 규정에서 사용하는 용어");
    ///
    /// let mut untitled = Article::new("5조", "");
    /// untitled.paragraphs.push(Paragraph::new("①", "법(이하 \"법\"이라 한다)에 따른다."));
    /// assert_eq!(untitled.header_line(), "제5조 ① 법(이하 \"법\"이라 한다)에 따른다.");
    /// ```
    #[must_use]
    pub fn header_line(&self) -> String {
        let mut line = format!("제{}", self.number);
        if !self.title.is_empty() {
            line.push('(');
            line.push_str(&self.title);
            line.push(')');
        }
        let lead_in = self
            .paragraphs
            .first()
            .map(|p| p.text.as_str())
            .unwrap_or_default();
        if !lead_in.is_empty() {
            line.push(' ');
            if self.title.is_empty() {
                line.push_str(FIRST_PARAGRAPH_SYMBOL);
                line.push(' ');
            }
            line.push_str(lead_in);
        }
        line
    }
}

/// 항 (paragraph), marked with a circled numeral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(rename = "paragraph_symbol")]
    pub symbol: String,

    #[serde(rename = "paragraph_text")]
    pub text: String,

    pub items: Vec<Item>,
}

impl Paragraph {
    #[must_use]
    pub fn new(symbol: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            text: text.into(),
            items: Vec::new(),
        }
    }
}

/// 호 (item), marked `1.`; the symbol is stored without the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "item_symbol")]
    pub symbol: String,

    #[serde(rename = "item_text")]
    pub text: String,

    pub subitems: Vec<Subitem>,
}

impl Item {
    #[must_use]
    pub fn new(symbol: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            text: text.into(),
            subitems: Vec::new(),
        }
    }
}

/// 목 (subitem), marked `가.`; the symbol is stored without the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subitem {
    #[serde(rename = "subitem_symbol")]
    pub symbol: String,

    #[serde(rename = "subitem_text")]
    pub text: String,

    pub subsubitems: Vec<Subsubitem>,
}

impl Subitem {
    #[must_use]
    pub fn new(symbol: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            text: text.into(),
            subsubitems: Vec::new(),
        }
    }
}

/// 하위목 (sub-subitem), marked `1)`; the symbol is stored without the parenthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsubitem {
    #[serde(rename = "subsubitem_symbol")]
    pub symbol: String,

    #[serde(rename = "subsubitem_text")]
    pub text: String,
}

impl Subsubitem {
    #[must_use]
    pub fn new(symbol: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            text: text.into(),
        }
    }
}

/// Collection wrapper used when writing one or more documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCollection {
    pub documents: Vec<Document>,
}
