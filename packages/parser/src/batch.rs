//! Parsing every text file in a directory.
//!
//! Each file gets its own builder, so files are parsed in parallel on the
//! rayon pool and collected back in path order. A file that cannot be read
//! is logged and skipped; it never fails the rest of the batch.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::{ParserConfig, TEXT_EXTENSIONS};
use crate::error::{ParserError, Result};
use crate::parser::{parse_named, read_input, ParsedDocument};

/// Find input files under `dir`, recursively, sorted by path.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ParserError::InputNotFound(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_text_extension(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    tracing::debug!(dir = %dir.display(), files = paths.len(), "Collected input files");
    Ok(paths)
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TEXT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Parse `paths` in parallel, assigning document ids 1..=N in input order.
///
/// Unreadable files are skipped and take no id. `on_parsed` runs once per
/// input path, read or not, from whichever worker handled it.
pub fn parse_paths<F>(
    paths: &[PathBuf],
    config: &ParserConfig,
    on_parsed: F,
) -> Vec<ParsedDocument>
where
    F: Fn(&Path) + Sync,
{
    let inputs: Vec<(&PathBuf, String)> = paths
        .par_iter()
        .filter_map(|path| match read_input(path) {
            Ok(text) => Some((path, text)),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping unreadable input");
                on_parsed(path);
                None
            }
        })
        .collect();

    inputs
        .par_iter()
        .enumerate()
        .map(|(index, (path, text))| {
            let parsed = parse_named(path, text, &(index + 1).to_string(), config);
            on_parsed(path);
            parsed
        })
        .collect()
}

/// Parse every text file under `dir`.
pub fn parse_directory(dir: &Path, config: &ParserConfig) -> Result<Vec<ParsedDocument>> {
    let paths = collect_inputs(dir)?;
    Ok(parse_paths(&paths, config, |_| {}))
}
