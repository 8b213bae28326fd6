//! Error types for the parser.
//!
//! Parsing a document never fails: malformed lines degrade to documented
//! fallbacks inside the builder. `ParserError` only covers the I/O boundary
//! around the parser (reading inputs, writing output, serialization) and
//! the CLI's strict validation mode.

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Input path does not exist or is neither a file nor a directory.
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Invalid enforcement date.
    #[error("Invalid enforcement date: '{0}'. Expected YYYYMMDD (e.g., 20240101)")]
    InvalidEnforcementDate(String),

    /// Reading a single input file failed.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Declared contents and body disagree (strict mode only).
    #[error(
        "Table of contents mismatch: missing {}, extra {}",
        format_ids(.missing),
        format_ids(.extra)
    )]
    ValidationFailed {
        missing: BTreeSet<String>,
        extra: BTreeSet<String>,
    },
}

fn format_ids(ids: &BTreeSet<String>) -> String {
    if ids.is_empty() {
        return "none".to_string();
    }
    ids.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
