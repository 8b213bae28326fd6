//! Serialization of parsed documents.

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::DocumentCollection;

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// Guess the format from an output path, defaulting to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Render a collection as a string. Korean text is written unescaped.
pub fn render(collection: &DocumentCollection, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(collection)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(collection)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Render a collection and write it to `path`, creating parent directories.
pub fn save_output(
    collection: &DocumentCollection,
    format: OutputFormat,
    path: &Path,
) -> Result<()> {
    let rendered = render(collection, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, rendered)?;

    tracing::info!(
        path = %path.display(),
        documents = collection.documents.len(),
        "Wrote output"
    );
    Ok(())
}
