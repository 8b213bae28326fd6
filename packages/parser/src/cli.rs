//! Command-line interface for the parser.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::batch::{collect_inputs, parse_paths};
use crate::config::ParserConfig;
use crate::error::{ParserError, Result};
use crate::metadata::parse_filename;
use crate::output::{render, save_output, OutputFormat};
use crate::parser::{parse_file, ParsedDocument};
use crate::types::DocumentCollection;

/// regdoc-parser - Parse Korean regulation text into a structured hierarchy.
#[derive(Parser)]
#[command(name = "regdoc-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a text file, or every .txt file in a directory.
    Parse {
        /// Input text file or directory
        input: PathBuf,

        /// Document id for a single file (default: 1)
        #[arg(long)]
        id: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (default: from output extension, else json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        parser: ParserArgs,
    },

    /// Compare the declared contents with the articles found in the body.
    Validate {
        /// Input text file or directory
        input: PathBuf,

        /// Exit with an error when any document has discrepancies
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        parser: ParserArgs,
    },

    /// Show the metadata extracted from a filename.
    Metadata {
        /// Filename such as "규정(훈령)(제1호)(20240101).hwp"
        file_name: String,
    },
}

/// Parser settings shared by subcommands.
#[derive(Args, Debug, Default)]
pub struct ParserArgs {
    /// Marker line separating the contents listing from the body
    /// (default: $REGDOC_MARKER or "{전문}")
    #[arg(long)]
    pub marker: Option<String>,

    /// Drop non-structural lines from the body before building
    #[arg(long)]
    pub filter_body: bool,
}

impl ParserArgs {
    /// Environment config with command-line overrides applied.
    #[must_use]
    pub fn to_config(&self) -> ParserConfig {
        let mut config = ParserConfig::from_env();
        if let Some(marker) = &self.marker {
            config = config.with_marker(marker.as_str());
        }
        if self.filter_body {
            config = config.with_filter_body(true);
        }
        config
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            id,
            output,
            format,
            parser,
        } => parse_command(
            &input,
            id.as_deref(),
            output.as_deref(),
            format,
            &parser.to_config(),
        ),
        Commands::Validate {
            input,
            strict,
            parser,
        } => validate_command(&input, strict, &parser.to_config()),
        Commands::Metadata { file_name } => metadata_command(&file_name),
    }
}

/// Parse a single file or a whole directory.
fn parse_input(
    input: &Path,
    id: Option<&str>,
    config: &ParserConfig,
) -> Result<Vec<ParsedDocument>> {
    if input.is_file() {
        return Ok(vec![parse_file(input, id.unwrap_or("1"), config)?]);
    }
    if !input.is_dir() {
        return Err(ParserError::InputNotFound(input.to_path_buf()));
    }

    let paths = collect_inputs(input)?;

    let pb = ProgressBar::new(paths.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Parsing documents...");

    let parsed = parse_paths(&paths, config, |_| pb.inc(1));
    pb.finish_and_clear();
    Ok(parsed)
}

/// Execute the parse command.
fn parse_command(
    input: &Path,
    id: Option<&str>,
    output: Option<&Path>,
    format: Option<OutputFormat>,
    config: &ParserConfig,
) -> Result<()> {
    // Validate output location before doing any work
    if let Some(parent) = output.and_then(Path::parent) {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ParserError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", parent.display()),
            )));
        }
    }

    eprintln!(
        "{} {}",
        style("Parsing").bold(),
        style(input.display()).cyan()
    );

    let parsed = parse_input(input, id, config)?;

    for doc in &parsed {
        print_summary(doc);
    }

    let collection = DocumentCollection {
        documents: parsed.into_iter().map(|p| p.document).collect(),
    };

    match output {
        Some(path) => {
            let format = format.unwrap_or_else(|| OutputFormat::from_path(path));
            save_output(&collection, format, path)?;
            eprintln!();
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => {
            print!("{}", render(&collection, format.unwrap_or_default())?);
        }
    }

    Ok(())
}

fn print_summary(parsed: &ParsedDocument) {
    let document = &parsed.document;
    eprintln!();
    eprintln!("  Title: {}", style(&document.title).green());
    if !document.doc_type.is_empty() {
        eprintln!("  Type: {}", document.doc_type);
    }
    eprintln!("  Chapters: {}", document.chapters.len());
    eprintln!("  Articles: {}", document.articles().count());
    if !parsed.marker_found {
        eprintln!(
            "  {}",
            style("No contents marker, parsed whole text as body").dim()
        );
    }
    if !parsed.dropped.is_empty() {
        eprintln!(
            "  Dropped lines: {}",
            style(parsed.dropped.len()).yellow().bold()
        );
    }
    if !parsed.report.is_clean() {
        print_discrepancies(parsed);
    }
}

fn print_discrepancies(parsed: &ParsedDocument) {
    if !parsed.report.missing.is_empty() {
        eprintln!(
            "  {} {}",
            style("Missing:").red().bold(),
            parsed.missing_articles().join(", ")
        );
    }
    if !parsed.report.extra.is_empty() {
        eprintln!(
            "  {} {}",
            style("Extra:").yellow().bold(),
            join(&parsed.report.extra)
        );
    }
}

fn join(ids: &BTreeSet<String>) -> String {
    ids.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Execute the validate command.
fn validate_command(input: &Path, strict: bool, config: &ParserConfig) -> Result<()> {
    let parsed = parse_input(input, None, config)?;

    let mut missing = BTreeSet::new();
    let mut extra = BTreeSet::new();

    for doc in &parsed {
        if doc.report.is_clean() {
            println!(
                "{} {} ({} articles)",
                style("OK").green().bold(),
                doc.document.title,
                doc.document.articles().count()
            );
            continue;
        }

        println!("{} {}", style("MISMATCH").red().bold(), doc.document.title);
        if !doc.report.missing.is_empty() {
            println!("  missing: {}", doc.missing_articles().join(", "));
        }
        if !doc.report.extra.is_empty() {
            println!("  extra: {}", join(&doc.report.extra));
        }
        missing.extend(doc.report.missing.iter().cloned());
        extra.extend(doc.report.extra.iter().cloned());
    }

    if strict && !(missing.is_empty() && extra.is_empty()) {
        return Err(ParserError::ValidationFailed { missing, extra });
    }

    Ok(())
}

/// Execute the metadata command.
fn metadata_command(file_name: &str) -> Result<()> {
    let metadata = parse_filename(file_name);
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
