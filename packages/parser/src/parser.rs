//! Parser service that ties all components together.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::boundary::{extract_valid_lines, split_regions};
use crate::config::ParserConfig;
use crate::error::{ParserError, Result};
use crate::hierarchy::{DroppedLine, HierarchyBuilder};
use crate::metadata::parse_filename;
use crate::toc::{declared_numbers, describe_article, extract_toc_entries, TocEntry};
use crate::types::{Document, DocumentMetadata};
use crate::validate::{validate, ValidationReport};

/// A parsed document together with its diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// The built tree with metadata applied.
    pub document: Document,

    /// Articles listed in the declared contents, in listing order.
    pub toc: Vec<TocEntry>,

    /// Article numbers listed in the declared contents.
    pub declared: BTreeSet<String>,

    /// Declared contents vs. body comparison.
    pub report: ValidationReport,

    /// Body lines that could not be attached.
    pub dropped: Vec<DroppedLine>,

    /// Whether the marker line separating contents from body was found.
    pub marker_found: bool,
}

impl ParsedDocument {
    /// Missing article numbers labelled with their declared titles.
    #[must_use]
    pub fn missing_articles(&self) -> Vec<String> {
        self.report
            .missing
            .iter()
            .map(|number| describe_article(&self.toc, number))
            .collect()
    }
}

/// Parse already-decoded document text.
///
/// Never fails: anomalies degrade to the documented fallbacks and show up
/// in `report` and `dropped`.
///
/// # Examples
/// ```
/// use regdoc_parser::config::ParserConfig;
/// use regdoc_parser::parser::parse_document;
/// use regdoc_parser::types::DocumentMetadata;
///
/// let text = "제1조(목적)\n{전문}\n제1조(목적) 이 규정은 목적을 정한다.";
/// let parsed = parse_document(text, "1", DocumentMetadata::titled("규정"), &ParserConfig::default());
/// assert_eq!(parsed.document.article_numbers(), vec!["1조"]);
/// assert!(parsed.report.is_clean());
/// ```
#[must_use]
pub fn parse_document(
    text: &str,
    document_id: &str,
    metadata: DocumentMetadata,
    config: &ParserConfig,
) -> ParsedDocument {
    let text: String = text.nfc().collect();
    let regions = split_regions(&text, &config.marker);

    let toc = extract_toc_entries(extract_valid_lines(regions.declared));
    let declared = declared_numbers(&toc);

    let metadata = if metadata.title.trim().is_empty() {
        DocumentMetadata {
            title: format!("문서 {document_id}"),
            ..metadata
        }
    } else {
        metadata
    };
    let document = Document::new(document_id, metadata);

    let mut builder = HierarchyBuilder::new(document).structural_only(config.filter_body);
    builder.push_lines(regions.body.split('\n'));
    let outcome = builder.finish();

    let report = validate(&declared, &outcome.document);

    tracing::info!(
        document = %outcome.document.id,
        title = %outcome.document.title,
        chapters = outcome.document.chapters.len(),
        articles = outcome.document.articles().count(),
        dropped = outcome.dropped.len(),
        "Parsed document"
    );

    ParsedDocument {
        document: outcome.document,
        toc,
        declared,
        report,
        dropped: outcome.dropped,
        marker_found: regions.marker_found,
    }
}

/// Read a text file and parse it, taking metadata from its filename.
pub fn parse_file(path: &Path, document_id: &str, config: &ParserConfig) -> Result<ParsedDocument> {
    let text = read_input(path)?;
    Ok(parse_named(path, &text, document_id, config))
}

/// Read and decode an input file.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ParserError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_text(&bytes, path))
}

/// Parse text that was read from `path`, taking metadata from its filename.
#[must_use]
pub fn parse_named(
    path: &Path,
    text: &str,
    document_id: &str,
    config: &ParserConfig,
) -> ParsedDocument {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let metadata = parse_filename(&file_name);

    parse_document(text, document_id, metadata, config)
}

/// Decode UTF-8 text, replacing invalid sequences and dropping a leading BOM.
fn decode_text(bytes: &[u8], path: &Path) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    if decoded.contains('\u{FFFD}') {
        tracing::warn!(
            file = %path.display(),
            "Input is not valid UTF-8, invalid bytes were replaced"
        );
    }
    decoded
        .strip_prefix('\u{FEFF}')
        .unwrap_or(&decoded[..])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_document_reports_missing_article() {
        let text = "제1조(목적)\n제5조(벌칙)\n{전문}\n제1조(목적) 본문";
        let parsed = parse_document(
            text,
            "1",
            DocumentMetadata::titled("규정"),
            &ParserConfig::default(),
        );
        assert!(parsed.marker_found);
        assert_eq!(parsed.report.missing, BTreeSet::from(["5조".to_string()]));
        assert!(parsed.report.extra.is_empty());
        assert_eq!(parsed.missing_articles(), vec!["5조(벌칙)"]);
    }

    #[test]
    fn test_parse_document_without_marker_uses_whole_text() {
        let text = "제1조(목적) 본문\n제2조(정의) 본문";
        let parsed = parse_document(
            text,
            "1",
            DocumentMetadata::titled("규정"),
            &ParserConfig::default(),
        );
        assert!(!parsed.marker_found);
        assert!(parsed.declared.is_empty());
        assert_eq!(parsed.document.article_numbers(), vec!["1조", "2조"]);
        assert_eq!(parsed.report.extra.len(), 2);
    }

    #[test]
    fn test_parse_document_title_fallback() {
        let parsed = parse_document("", "7", DocumentMetadata::default(), &ParserConfig::default());
        assert_eq!(parsed.document.title, "문서 7");
    }

    #[test]
    fn test_parse_document_declared_contents_noise_is_ignored() {
        let text = "조문목록\n<개정 2024.1.1>\n제1조(목적)\n{전문}\n제1조(목적) 본문";
        let parsed = parse_document(
            text,
            "1",
            DocumentMetadata::titled("규정"),
            &ParserConfig::default(),
        );
        assert_eq!(parsed.declared, BTreeSet::from(["1조".to_string()]));
        assert!(parsed.report.is_clean());
    }

    #[test]
    fn test_parse_document_filter_body_drops_continuations() {
        let text = "제1조(목적) 본문\n이어지는 문장\n1. 호";
        let metadata = DocumentMetadata::titled("규정");

        let unfiltered = parse_document(text, "1", metadata.clone(), &ParserConfig::default());
        let paragraph = &unfiltered.document.chapters[0].sections[0].articles[0].paragraphs[0];
        assert_eq!(paragraph.text, "본문 이어지는 문장");

        let config = ParserConfig::default().with_filter_body(true);
        let filtered = parse_document(text, "1", metadata, &config);
        let paragraph = &filtered.document.chapters[0].sections[0].articles[0].paragraphs[0];
        assert_eq!(paragraph.text, "본문");
        assert_eq!(paragraph.items.len(), 1);
    }

    #[test]
    fn test_parse_document_filter_body_reports_body_line_numbers() {
        let text = "제1조(목적)\n{전문}\n설명 문단\n① 고아 항\n제1조(목적) 본문";
        let config = ParserConfig::default().with_filter_body(true);
        let parsed = parse_document(text, "1", DocumentMetadata::titled("규정"), &config);

        let dropped: Vec<_> = parsed.dropped.iter().map(|d| d.line_number).collect();
        assert_eq!(dropped, vec![2]);
    }

    #[test]
    fn test_parse_document_normalizes_decomposed_text() {
        let text: String = "제1조(목적) 본문\n1. 호\n가. 목".nfd().collect();
        let parsed = parse_document(
            &text,
            "1",
            DocumentMetadata::titled("규정"),
            &ParserConfig::default(),
        );
        let item = &parsed.document.chapters[0].sections[0].articles[0].paragraphs[0].items[0];
        assert_eq!(item.subitems[0].symbol, "가");
        assert_eq!(parsed.document.chapters[0].sections[0].articles[0].title, "목적");
    }

    #[test]
    fn test_parse_file_uses_filename_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("규정(훈령)(제1호)(20240101).txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all("\u{FEFF}제1조(목적) 본문".as_bytes()).unwrap();

        let parsed = parse_file(&path, "3", &ParserConfig::default()).unwrap();
        assert_eq!(parsed.document.id, "3");
        assert_eq!(parsed.document.title, "규정");
        assert_eq!(parsed.document.doc_type, "훈령");
        assert_eq!(parsed.document.promulgation_number, "제1호");
        assert_eq!(parsed.document.enforcement_date, "20240101");
        assert_eq!(parsed.document.article_numbers(), vec!["1조"]);
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&dir.path().join("없음.txt"), "1", &ParserConfig::default())
            .unwrap_err();
        assert!(matches!(err, ParserError::ReadInput { .. }));
    }

    #[test]
    fn test_decode_text_replaces_invalid_bytes() {
        let text = decode_text(&[0xEC, 0xA0, 0x9C, 0xFF], Path::new("x.txt"));
        assert_eq!(text, "제\u{FFFD}");
    }
}
