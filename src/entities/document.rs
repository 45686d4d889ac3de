//! Text documents
//!
//! A document is read completely into memory before it is transformed and
//! written back in a single write.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use encoding_rs::UTF_8;
use log::{debug, warn};

use crate::errors::{file_operation_error, Result};

use super::table::SubstitutionTable;

/// Immutable in-memory text with normalized line endings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    content: String,
}

impl TextDocument {
    /// Creates a document from raw text, normalizing its line endings
    pub fn from_text(text: &str) -> Self {
        TextDocument {
            content: normalize_lines(text),
        }
    }

    /// Reads a UTF-8 file into a document
    ///
    /// Malformed byte sequences are replaced with U+FFFD.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let (text, had_errors) = UTF_8.decode_without_bom_handling(&bytes);
        if had_errors {
            warn!(
                "{} is not valid UTF-8, malformed sequences were replaced",
                path.display()
            );
        }

        Ok(Self::from_text(&text))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Applies the substitution table, returning the new document and the replacement count
    pub fn escape(&self, table: &SubstitutionTable) -> (TextDocument, usize) {
        let (content, replaced) = table.apply_counted(&self.content);
        (TextDocument { content }, replaced)
    }

    /// Writes the document to `path` in one go
    ///
    /// An existing file is truncated and keeps its permissions. Read-only
    /// targets are refused before anything is written.
    ///
    /// # Errors
    /// Returns an error if the target is read-only or cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Ok(metadata) = fs::metadata(path) {
            if metadata.permissions().readonly() {
                let denied = io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only");
                return Err(file_operation_error(denied, path.to_path_buf(), "write"));
            }
        }

        let mut file = File::create(path)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "create"))?;
        file.write_all(self.content.as_bytes())
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;

        debug!("Wrote {} bytes to {}", self.content.len(), path.display());
        Ok(())
    }
}

/// Terminates every line with a single `\n`
///
/// `\r\n`, lone `\r` and `\n` all count as line ends. A last line without a
/// terminator gets one; empty text stays empty.
fn normalize_lines(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len() + 1);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                normalized.push('\n');
            }
            _ => normalized.push(c),
        }
    }

    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}
