//! `redline annotations` command implementation.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;

use redline_core::{annotations, next_annotation, prev_annotation, AnnotationRange};

use crate::error::CliError;

/// Arguments for the annotations command.
#[derive(Args)]
pub(crate) struct AnnotationsArgs {
    /// Markdown file to inspect.
    file: PathBuf,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Print only the annotation after this byte offset (wraps around).
    #[arg(long, value_name = "OFFSET")]
    next: Option<usize>,

    /// Print only the annotation before this byte offset (wraps around).
    #[arg(long, value_name = "OFFSET", conflicts_with = "next")]
    prev: Option<usize>,
}

impl AnnotationsArgs {
    /// Execute the annotations command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let source = std::fs::read_to_string(&self.file)?;

        let found = if let Some(cursor) = self.next {
            next_annotation(&source, cursor).into_iter().collect()
        } else if let Some(cursor) = self.prev {
            prev_annotation(&source, cursor).into_iter().collect()
        } else {
            annotations(&source)
        };

        let listing = if self.json {
            let mut json = serde_json::to_string_pretty(&found)?;
            json.push('\n');
            json
        } else {
            format_listing(&found)
        };
        super::write_output(None, &listing)?;
        Ok(())
    }
}

/// Format annotation ranges as one line each, with 1-based positions.
fn format_listing(found: &[AnnotationRange]) -> String {
    let mut out = String::new();
    for range in found {
        let _ = writeln!(
            out,
            "{}:{}-{}:{} {}",
            range.start_position.line + 1,
            range.start_position.column + 1,
            range.end_position.line + 1,
            range.end_position.column + 1,
            range.kind.css_suffix(),
        );
    }
    out
}
