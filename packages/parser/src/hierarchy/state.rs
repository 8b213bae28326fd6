//! Cursor over the nodes currently being built.
//!
//! Each level has one slot holding the open node, owned exclusively by the
//! state. A node leaves its slot exactly once: when it is closed it moves
//! into its parent's sequence. A slot is only ever filled while the slot
//! above it is filled, so closing always finds a parent.

use std::mem;

use crate::classify::{Heading, Line, Marked};
use crate::config::FIRST_PARAGRAPH_SYMBOL;
use crate::types::{Article, Chapter, Item, Paragraph, Section, Subitem, Subsubitem};

/// Result of applying one line to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The line opened a node or extended an open one.
    Applied,
    /// The line had no open node to attach to and was discarded.
    Dropped,
}

/// Open-node slots for every level of the hierarchy.
#[derive(Debug)]
pub struct ParserState {
    chapter: Chapter,
    section: Option<Section>,
    article: Option<Article>,
    paragraph: Option<Paragraph>,
    item: Option<Item>,
    subitem: Option<Subitem>,
    subsubitem: Option<Subsubitem>,
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserState {
    /// Start with a placeholder chapter and no open section.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chapter: Chapter::placeholder(),
            section: None,
            article: None,
            paragraph: None,
            item: None,
            subitem: None,
            subsubitem: None,
        }
    }

    /// Apply one classified line, moving completed chapters into `chapters`.
    pub fn apply(&mut self, line: Line<'_>, chapters: &mut Vec<Chapter>) -> Step {
        match line {
            Line::Chapter(heading) => {
                self.open_chapter(&heading, chapters);
                Step::Applied
            }
            Line::Section(heading) => {
                self.open_section(&heading);
                Step::Applied
            }
            Line::Article(heading) => {
                self.open_article(&heading);
                Step::Applied
            }
            Line::Paragraph(marked) => self.open_paragraph(&marked),
            Line::Item(marked) => self.open_item(&marked),
            Line::Subitem(marked) => self.open_subitem(&marked),
            Line::Subsubitem(marked) => self.open_subsubitem(&marked),
            Line::Continuation(text) => self.continue_text(text),
        }
    }

    /// Flush every open node, in order, and hand over the last chapter.
    ///
    /// Unlike a mid-stream chapter change this does not check for articles:
    /// the final chapter and section are always kept.
    pub fn finish(mut self, chapters: &mut Vec<Chapter>) {
        self.close_section();
        chapters.push(self.chapter);
    }

    fn open_chapter(&mut self, heading: &Heading<'_>, chapters: &mut Vec<Chapter>) {
        self.close_section();

        let next = Chapter::new(heading.number, heading.label_title());
        let finished = mem::replace(&mut self.chapter, next);
        if finished.has_articles() {
            chapters.push(finished);
        } else {
            tracing::debug!(
                chapter = %finished.number,
                "Discarding chapter without articles"
            );
        }

        self.section = Some(Section::placeholder());
    }

    fn open_section(&mut self, heading: &Heading<'_>) {
        self.close_article();

        if self.section.as_ref().is_some_and(|s| !s.articles.is_empty()) {
            self.close_section();
        } else if let Some(empty) = self.section.take() {
            tracing::debug!(section = %empty.number, "Discarding section without articles");
        }

        self.section = Some(Section::new(heading.number, heading.label_title()));
    }

    fn open_article(&mut self, heading: &Heading<'_>) {
        if self.section.is_none() {
            self.section = Some(Section::placeholder());
        }
        self.close_article();

        // Text before an inline ① is context, not paragraph content
        let lead_in = heading.article_lead_in();
        let first_text = match lead_in.split_once(FIRST_PARAGRAPH_SYMBOL) {
            Some((_, after)) => after.trim(),
            None => lead_in.trim(),
        };

        self.article = Some(Article::new(heading.number, heading.article_title()));
        self.paragraph = Some(Paragraph::new(FIRST_PARAGRAPH_SYMBOL, first_text));
    }

    fn open_paragraph(&mut self, marked: &Marked<'_>) -> Step {
        if self.article.is_none() {
            return Step::Dropped;
        }
        self.close_paragraph();
        self.paragraph = Some(Paragraph::new(marked.symbol, marked.text));
        Step::Applied
    }

    fn open_item(&mut self, marked: &Marked<'_>) -> Step {
        if self.paragraph.is_none() {
            return Step::Dropped;
        }
        self.close_item();
        self.item = Some(Item::new(marked.symbol, marked.text));
        Step::Applied
    }

    fn open_subitem(&mut self, marked: &Marked<'_>) -> Step {
        if self.item.is_none() {
            return Step::Dropped;
        }
        self.close_subitem();
        self.subitem = Some(Subitem::new(marked.symbol, marked.text));
        Step::Applied
    }

    fn open_subsubitem(&mut self, marked: &Marked<'_>) -> Step {
        if self.subitem.is_none() {
            return Step::Dropped;
        }
        self.close_subsubitem();
        self.subsubitem = Some(Subsubitem::new(marked.symbol, marked.text));
        Step::Applied
    }

    /// Append free text to the deepest open node.
    fn continue_text(&mut self, text: &str) -> Step {
        let target = if let Some(node) = self.subsubitem.as_mut() {
            &mut node.text
        } else if let Some(node) = self.subitem.as_mut() {
            &mut node.text
        } else if let Some(node) = self.item.as_mut() {
            &mut node.text
        } else if let Some(node) = self.paragraph.as_mut() {
            &mut node.text
        } else if let Some(node) = self.article.as_mut() {
            &mut node.text
        } else {
            return Step::Dropped;
        };

        if !target.is_empty() {
            target.push(' ');
        }
        target.push_str(text);
        Step::Applied
    }

    fn close_subsubitem(&mut self) {
        if let (Some(node), Some(parent)) = (self.subsubitem.take(), self.subitem.as_mut()) {
            parent.subsubitems.push(node);
        }
    }

    fn close_subitem(&mut self) {
        self.close_subsubitem();
        if let (Some(node), Some(parent)) = (self.subitem.take(), self.item.as_mut()) {
            parent.subitems.push(node);
        }
    }

    fn close_item(&mut self) {
        self.close_subitem();
        if let (Some(node), Some(parent)) = (self.item.take(), self.paragraph.as_mut()) {
            parent.items.push(node);
        }
    }

    fn close_paragraph(&mut self) {
        self.close_item();
        if let (Some(node), Some(parent)) = (self.paragraph.take(), self.article.as_mut()) {
            parent.paragraphs.push(node);
        }
    }

    fn close_article(&mut self) {
        self.close_paragraph();
        if let (Some(node), Some(parent)) = (self.article.take(), self.section.as_mut()) {
            parent.articles.push(node);
        }
    }

    fn close_section(&mut self) {
        self.close_article();
        if let Some(node) = self.section.take() {
            self.chapter.sections.push(node);
        }
    }
}
