//! Hierarchy building for regulation bodies.
//!
//! Classified body lines drive a single-owner cursor ([`ParserState`]) that
//! opens nodes on headers and markers and moves each node into its parent
//! when a sibling or ancestor-level header closes it.
//!
//! Lines that cannot attach anywhere (an item before any paragraph, free
//! text before the first article, ...) are dropped and reported as
//! [`DroppedLine`]s; they never fail the document.

mod builder;
mod state;

pub use builder::{build_document, BuildOutcome, DroppedLine, HierarchyBuilder};
pub use state::{ParserState, Step};
