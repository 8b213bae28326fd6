//! Line-by-line document builder.

use serde::Serialize;

use super::state::{ParserState, Step};
use crate::classify::{classify, LineKind};
use crate::types::Document;

/// A body line that could not be attached to any open node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedLine {
    /// 1-based body line number, counting blank and skipped lines.
    pub line_number: usize,

    /// How the line was classified.
    #[serde(serialize_with = "serialize_kind")]
    pub kind: LineKind,

    /// The trimmed line.
    pub text: String,
}

fn serialize_kind<S: serde::Serializer>(kind: &LineKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.as_str())
}

/// Output of a completed build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub document: Document,
    pub dropped: Vec<DroppedLine>,
}

/// Builds a [`Document`] tree from body lines.
///
/// Each builder owns an isolated [`ParserState`]; separate documents can be
/// built on separate threads without any coordination.
#[derive(Debug)]
pub struct HierarchyBuilder {
    document: Document,
    state: ParserState,
    dropped: Vec<DroppedLine>,
    line_number: usize,
    structural_only: bool,
}

impl HierarchyBuilder {
    /// Start building into `document`, whose metadata fields are kept as-is.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            state: ParserState::new(),
            dropped: Vec::new(),
            line_number: 0,
            structural_only: false,
        }
    }

    /// Skip continuation and sub-subitem lines instead of applying them.
    ///
    /// Skipped lines still count towards line numbers.
    #[must_use]
    pub fn structural_only(mut self, structural_only: bool) -> Self {
        self.structural_only = structural_only;
        self
    }

    /// Feed the next body line. Blank lines are counted but otherwise skipped.
    pub fn push_line(&mut self, raw: &str) {
        self.line_number += 1;

        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        let classified = classify(line);
        let kind = classified.kind();
        if self.structural_only && !kind.is_structural() {
            return;
        }
        if self.state.apply(classified, &mut self.document.chapters) == Step::Dropped {
            tracing::debug!(
                line = self.line_number,
                kind = %kind,
                text = %line,
                "Dropping line without an open parent"
            );
            self.dropped.push(DroppedLine {
                line_number: self.line_number,
                kind,
                text: line.to_string(),
            });
        }
    }

    /// Feed every line of `lines`.
    pub fn push_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            self.push_line(line);
        }
    }

    /// Flush all open nodes and return the finished document.
    #[must_use]
    pub fn finish(self) -> BuildOutcome {
        let Self {
            mut document,
            state,
            dropped,
            ..
        } = self;
        state.finish(&mut document.chapters);

        BuildOutcome { document, dropped }
    }
}

/// Build a document from `lines` in one call.
#[must_use]
pub fn build_document<'a>(
    document: Document,
    lines: impl IntoIterator<Item = &'a str>,
) -> BuildOutcome {
    let mut builder = HierarchyBuilder::new(document);
    builder.push_lines(lines);
    builder.finish()
}
