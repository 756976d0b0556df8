//! CLI command implementations.

pub(crate) mod annotations;
pub(crate) mod css;
pub(crate) mod render;

use std::io::Write;
use std::path::Path;

pub(crate) use annotations::AnnotationsArgs;
pub(crate) use css::CssArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Write command output to a file, or to stdout when no path is given.
fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => std::io::stdout().write_all(content.as_bytes())?,
    }
    Ok(())
}
