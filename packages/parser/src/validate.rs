//! Reconciliation of declared contents with the built tree.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::Document;

/// Differences between the declared article list and the parsed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Declared in the contents but never recognized in the body.
    pub missing: BTreeSet<String>,

    /// Recognized in the body but not declared in the contents.
    pub extra: BTreeSet<String>,
}

impl ValidationReport {
    /// True when both views agree.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Collect the number of every article in the tree.
#[must_use]
pub fn recognized_article_numbers(document: &Document) -> BTreeSet<String> {
    document.articles().map(|a| a.number.clone()).collect()
}

/// Compare declared article numbers against the built document.
///
/// This is a diagnostic: the caller decides whether a non-clean report
/// matters.
#[must_use]
pub fn validate(declared: &BTreeSet<String>, document: &Document) -> ValidationReport {
    let recognized = recognized_article_numbers(document);

    let report = ValidationReport {
        missing: declared.difference(&recognized).cloned().collect(),
        extra: recognized.difference(declared).cloned().collect(),
    };

    if !report.is_clean() {
        tracing::warn!(
            document = %document.id,
            missing = report.missing.len(),
            extra = report.extra.len(),
            "Declared contents and body disagree"
        );
    }

    report
}
