//! End-to-end tests for the parser pipeline.
//!
//! Runs the complete pipeline from raw text to the serialized tree using a
//! fixture regulation with chapters, sections and every nesting level.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use regdoc_parser::batch::parse_directory;
use regdoc_parser::classify::{classify, Line};
use regdoc_parser::output::{render, OutputFormat};
use regdoc_parser::types::{Item, Paragraph, Subitem, Subsubitem};
use regdoc_parser::{
    parse_document, parse_file, Document, DocumentCollection, DocumentMetadata, ParsedDocument,
    ParserConfig,
};

const FIXTURE: &str = "군수품관리규정(훈령)(제12호)(20240701).txt";

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Run the parser on the fixture regulation.
fn run_pipeline() -> ParsedDocument {
    parse_file(&fixture_dir().join(FIXTURE), "1", &ParserConfig::default())
        .unwrap_or_else(|e| panic!("Failed to parse fixture: {e}"))
}

fn parse(text: &str) -> ParsedDocument {
    parse_document(
        text,
        "1",
        DocumentMetadata::titled("규정"),
        &ParserConfig::default(),
    )
}

// =============================================================================
// Fixture pipeline
// =============================================================================

#[test]
fn test_fixture_metadata() {
    let document = run_pipeline().document;
    assert_eq!(document.id, "1");
    assert_eq!(document.title, "군수품관리규정");
    assert_eq!(document.doc_type, "훈령");
    assert_eq!(document.promulgation_number, "제12호");
    assert_eq!(document.enforcement_date, "20240701");
}

#[test]
fn test_fixture_structure() {
    let document = run_pipeline().document;

    let chapters: Vec<_> = document
        .chapters
        .iter()
        .map(|c| (c.number.as_str(), c.title.as_str()))
        .collect();
    assert_eq!(chapters, vec![("1장", "총칙"), ("2장", "관리")]);

    // 1장 has no 절 header, so its articles sit in the default section
    assert_eq!(document.chapters[0].sections.len(), 1);
    assert!(document.chapters[0].sections[0].is_placeholder());

    let sections: Vec<_> = document.chapters[1]
        .sections
        .iter()
        .map(|s| (s.number.as_str(), s.title.as_str()))
        .collect();
    assert_eq!(sections, vec![("1절", "통칙"), ("2절", "보고")]);

    assert_eq!(
        document.article_numbers(),
        vec!["1조", "2조", "3조", "3조의2", "4조"]
    );
}

#[test]
fn test_fixture_nested_levels() {
    let document = run_pipeline().document;
    let definitions = &document.chapters[0].sections[0].articles[1];
    assert_eq!(definitions.title, "정의");

    let paragraph = &definitions.paragraphs[0];
    assert_eq!(paragraph.symbol, "①");
    assert_eq!(paragraph.text, "이 규정에서 사용하는 용어의 뜻은 다음과 같다.");
    assert_eq!(paragraph.items.len(), 2);

    let management = &paragraph.items[1];
    assert_eq!(management.symbol, "2");
    let subitems: Vec<_> = management
        .subitems
        .iter()
        .map(|s| s.symbol.as_str())
        .collect();
    assert_eq!(subitems, vec!["가", "나", "다"]);
    assert_eq!(
        management.subitems[1].subsubitems,
        vec![
            Subsubitem::new("1", "창고 보관"),
            Subsubitem::new("2", "야외 보관"),
        ]
    );
}

#[test]
fn test_fixture_inline_paragraph_and_continuation() {
    let document = run_pipeline().document;
    let article = &document.chapters[1].sections[0].articles[0];
    assert_eq!(article.number, "3조");
    assert_eq!(article.title, "관리책임");
    assert_eq!(article.text, "");

    let symbols: Vec<_> = article.paragraphs.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["①", "②"]);
    assert_eq!(article.paragraphs[0].text, "각 부대의 장은 군수품을 관리한다.");

    // Free text after an item extends that item
    assert_eq!(
        article.paragraphs[1].items[1].text,
        "상태 점검 점검 결과는 기록하여야 한다."
    );
}

#[test]
fn test_fixture_contents_match_body() {
    let parsed = run_pipeline();
    assert!(parsed.marker_found);
    assert_eq!(parsed.declared.len(), 5);
    assert!(parsed.report.is_clean());
    assert!(parsed.dropped.is_empty());
}

#[test]
fn test_fixture_json_output() {
    let collection = DocumentCollection {
        documents: vec![run_pipeline().document],
    };
    let json = render(&collection, OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let document = &value["documents"][0];
    assert_eq!(document["document_title"], "군수품관리규정");
    assert_eq!(document["chapters"][0]["chapter_number"], "1장");
    assert_eq!(
        document["chapters"][0]["sections"][0]["articles"][0]["article_title"],
        "목적"
    );
    assert_eq!(
        document["chapters"][0]["sections"][0]["articles"][1]["paragraphs"][0]["items"][1]
            ["subitems"][1]["subsubitems"][0]["subsubitem_symbol"],
        "1"
    );

    let parsed: DocumentCollection = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, collection);
}

#[test]
fn test_fixture_yaml_output() {
    let collection = DocumentCollection {
        documents: vec![run_pipeline().document],
    };
    let yaml = render(&collection, OutputFormat::Yaml).unwrap();
    let parsed: DocumentCollection = serde_yaml_ng::from_str(&yaml).unwrap();
    assert_eq!(parsed, collection);
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[test]
fn test_article_with_paragraph_and_item() {
    let document = parse("제1조(목적) 이 법은 ...\n① 내용1\n1. 항목1").document;

    assert_eq!(document.chapters.len(), 1);
    assert!(document.chapters[0].is_placeholder());
    assert_eq!(document.chapters[0].sections.len(), 1);
    assert!(document.chapters[0].sections[0].is_placeholder());

    let article = &document.chapters[0].sections[0].articles[0];
    assert_eq!(article.number, "1조");
    assert_eq!(article.title, "목적");

    let mut expected = Paragraph::new("①", "내용1");
    expected.items.push(Item::new("1", "항목1"));
    // The header lead-in opens ① first; the explicit ① line follows it
    assert_eq!(article.paragraphs.last(), Some(&expected));
}

#[test]
fn test_declared_article_missing_from_body() {
    let parsed = parse_file(&fixture_dir().join("누락규정.txt"), "1", &ParserConfig::default())
        .unwrap();
    assert_eq!(parsed.report.missing, BTreeSet::from(["5조".to_string()]));
    assert!(parsed.report.extra.is_empty());
    // No bracket triplet in the filename
    assert_eq!(parsed.document.title, "누락규정");
    assert_eq!(parsed.document.doc_type, "");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_without_marker_whole_text_is_body() {
    for text in [
        "",
        "제1조(목적) 본문",
        "서문\n제1장 총칙\n제1조(목적) 본문\n제2조 본문",
        "{전문 }\n제1조(목적) 본문",
    ] {
        let parsed = parse(text);
        assert!(!parsed.marker_found, "{text}");
        assert!(parsed.declared.is_empty(), "{text}");

        let expected = regdoc_parser::hierarchy::build_document(
            Document::new("1", DocumentMetadata::titled("규정")),
            text.split('\n'),
        );
        assert_eq!(parsed.document, expected.document, "{text}");
    }
}

#[test]
fn test_well_formed_article_headers() {
    for (number, title) in [("1조", "목적"), ("12조", "위원회의 구성"), ("3조의2", "특례")] {
        let document = parse(&format!("제{number}({title}) 본문")).document;
        let article = &document.chapters[0].sections[0].articles[0];
        assert_eq!(article.number, number);
        assert_eq!(article.title, title);
    }
}

#[test]
fn test_article_header_round_trip() {
    let fixture = run_pipeline().document;
    let edge_cases = parse(
        "제5조 ① 법(이하 \"법\"이라 한다)에 따른다.\n\
         제6조\n\
         제7조(목적) (이하 \"청\"이라 한다) 본문\n\
         제8조 ① (적용 범위) 이 규정은 모든 부대에 적용한다.",
    )
    .document;
    assert_eq!(edge_cases.article_numbers(), vec!["5조", "6조", "7조", "8조"]);

    for article in fixture.articles().chain(edge_cases.articles()) {
        let line = article.header_line();
        let Line::Article(heading) = classify(&line) else {
            panic!("not an article header: {line}");
        };
        assert_eq!(heading.number, article.number, "{line}");
        assert_eq!(heading.article_title(), article.title, "{line}");

        // Re-parsing the rendered line also restores the lead-in
        let reparsed = parse(&line).document;
        let first = reparsed.articles().next().unwrap();
        assert_eq!(first.paragraphs[0].text, article.paragraphs[0].text, "{line}");
    }
}

#[test]
fn test_fully_declared_body_validates_clean() {
    let body = "제1조(목적) 본문\n제2조(정의) 본문\n제2조의2(특례) 본문\n제3조(보칙) 본문";
    let declared: Vec<_> = body
        .lines()
        .map(|line| line.split_once(' ').map_or(line, |(head, _)| head))
        .collect();
    let text = format!("{}\n{{전문}}\n{body}", declared.join("\n"));

    let report = parse(&text).report;
    assert!(report.missing.is_empty());
    assert!(report.extra.is_empty());
}

#[test]
fn test_article_order_is_preserved() {
    let text = "제3조(셋) 본문\n제1장 총칙\n제1조(하나) 본문\n제1절 통칙\n제10조(열) 본문\n\
                제2조의2(특례) 본문\n제2장 보칙\n제2조(둘) 본문";
    let document = parse(text).document;
    assert_eq!(
        document.article_numbers(),
        vec!["3조", "1조", "10조", "2조의2", "2조"]
    );
}

#[test]
fn test_orphan_lines_are_dropped_deterministically() {
    let text = "머리말\n① 고아 항\n1. 고아 호\n제1조(목적) 본문\n가. 고아 목\n1) 고아 하위목";
    let first = parse(text);
    let second = parse(text);
    assert_eq!(first.document, second.document);

    let dropped: Vec<_> = first
        .dropped
        .iter()
        .map(|d| (d.line_number, d.kind.as_str()))
        .collect();
    assert_eq!(
        dropped,
        vec![
            (1, "continuation"),
            (2, "paragraph"),
            (3, "item"),
            (5, "subitem"),
            (6, "subsubitem"),
        ]
    );

    let article = &first.document.chapters[0].sections[0].articles[0];
    assert_eq!(article.paragraphs, vec![Paragraph::new("①", "본문")]);
}

#[test]
fn test_subitem_requires_dot() {
    let document = parse("제1조(목적) 본문\n1. 호\n가 나다라").document;
    let item = &document.chapters[0].sections[0].articles[0].paragraphs[0].items[0];
    assert_eq!(item.text, "호 가 나다라");
    assert_eq!(item.subitems, Vec::<Subitem>::new());
}

// =============================================================================
// Batch
// =============================================================================

#[test]
fn test_parse_fixture_directory() {
    let parsed = parse_directory(&fixture_dir(), &ParserConfig::default()).unwrap();
    let summary: Vec<_> = parsed
        .iter()
        .map(|p| (p.document.id.as_str(), p.document.title.as_str(), p.report.is_clean()))
        .collect();
    assert_eq!(
        summary,
        vec![("1", "군수품관리규정", true), ("2", "누락규정", false)]
    );
}

#[test]
fn test_parse_directory_with_custom_marker() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("규정.txt"),
        "제1조(목적)\n[본문]\n제1조(목적) 본문",
    )
    .unwrap();

    let config = ParserConfig::default().with_marker("[본문]");
    let parsed = parse_directory(dir.path(), &config).unwrap();
    assert!(parsed[0].marker_found);
    assert!(parsed[0].report.is_clean());
}
