//! regdoc-parser - Parse Korean regulation text into a structured hierarchy.
//!
//! Regulation exports carry a table of contents, a marker line, and the
//! body. This crate splits the two regions, classifies each body line
//! (장, 절, 조, ①, 1., 가., 1)), assembles the nested document tree, and
//! reconciles the articles found in the body against the declared contents.
//!
//! # Example
//!
//! ```
//! use regdoc_parser::{parse_document, DocumentMetadata, ParserConfig};
//!
//! let text = "제1조(목적)\n{전문}\n제1장 총칙\n제1조(목적) ① 이 규정은 목적을 정한다.\n1. 첫째";
//! let parsed = parse_document(text, "1", DocumentMetadata::titled("규정"), &ParserConfig::default());
//!
//! let article = &parsed.document.chapters[0].sections[0].articles[0];
//! assert_eq!(article.title, "목적");
//! assert_eq!(article.paragraphs[0].items[0].text, "첫째");
//! assert!(parsed.report.is_clean());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, parser configuration and date validation
//! - [`types`]: Document tree (Document, Chapter, Section, Article, ...)
//! - [`error`]: Error types and Result alias
//! - [`classify`]: Line classification and symbol tables
//! - [`boundary`]: Splitting declared contents from the body
//! - [`hierarchy`]: Assembling classified lines into the tree
//! - [`toc`]: Article numbers from the declared contents
//! - [`validate`]: Declared vs. recognized article comparison
//! - [`metadata`]: Metadata from filenames
//! - [`parser`]: Parser service tying the pieces together
//! - [`batch`]: Parallel parsing of a directory
//! - [`output`]: JSON and YAML output
//! - [`cli`]: Command-line interface

pub mod batch;
pub mod boundary;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod metadata;
pub mod output;
pub mod parser;
pub mod toc;
pub mod types;
pub mod validate;

// Re-export main functions
pub use parser::{parse_document, parse_file, ParsedDocument};

// Re-export commonly used items
pub use config::ParserConfig;
pub use error::{ParserError, Result};
pub use metadata::parse_filename;
pub use types::{Article, Chapter, Document, DocumentCollection, DocumentMetadata, Section};
pub use validate::ValidationReport;
