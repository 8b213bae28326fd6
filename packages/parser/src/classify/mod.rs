//! Line classification for regulation text.
//!
//! Every non-empty line maps to exactly one [`LineKind`] through ordered
//! pattern matching against the static tables in [`tables`].

mod classifier;
pub mod tables;
mod types;

pub use classifier::{classify, is_structural_line};
pub use tables::{PARAGRAPH_SYMBOLS, SUBITEM_SYMBOLS};
pub use types::{Heading, Line, LineKind, Marked};
