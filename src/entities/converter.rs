//! File conversion
//!
//! Reads an input file, escapes it and writes the result to the output file.

use std::path::{Path, PathBuf};

use log::info;

use crate::errors::Result;

use super::document::TextDocument;
use super::table::SubstitutionTable;

/// Outcome of converting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// The file that was read
    pub input: PathBuf,
    /// The file that was written
    pub output: PathBuf,
    /// Number of characters that were replaced by entities
    pub replaced: usize,
}

/// Escapes the content of `input` with `table` and writes it to `output`
///
/// The input is read completely before the output is touched, so a read
/// failure never produces an output file.
///
/// # Arguments
/// * `input` - File to read
/// * `output` - File to write; replaced if it exists
/// * `table` - Substitutions to apply
///
/// # Returns
/// * `Result<ConversionReport>` - Paths and replacement count, or an error
///
/// # Errors
/// Returns an error if the input cannot be read or the output cannot be written
pub fn convert_file(
    input: &Path,
    output: &Path,
    table: &SubstitutionTable,
) -> Result<ConversionReport> {
    let document = TextDocument::load(input)?;
    let (escaped, replaced) = document.escape(table);
    escaped.save(output)?;

    info!(
        "Escaped {} characters from {} into {}",
        replaced,
        input.display(),
        output.display()
    );

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        replaced,
    })
}
