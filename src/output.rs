//! Output formatting for parse results.
//!
//! Provides functions to format a [`ParseResult`] as a tree drawing, a plain
//! path list, or JSON.

use crate::tree::render_tree;
use crate::{ParseResult, TreesketchError};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tree,
    Paths,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tree => "tree",
            OutputFormat::Paths => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the parse result into a string.
pub fn format_result(
    result: &ParseResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, TreesketchError> {
    match format {
        OutputFormat::Tree => Ok(render_tree(&result.nodes)),
        OutputFormat::Paths => Ok(result.normalized.clone()),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &ParseResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), TreesketchError> {
    let mut content = format_result(result, format, pretty)?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(&path, content).map_err(|e| TreesketchError::io(path.as_ref(), e))?;
    Ok(())
}

fn format_json(result: &ParseResult, pretty: bool) -> Result<String, TreesketchError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    Ok(json?)
}
