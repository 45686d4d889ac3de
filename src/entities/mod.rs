//! HTML entity converter
//!
//! This module escapes German umlauts and `ß` in a text file into named
//! HTML entities.

mod converter;
mod document;
mod table;

pub use converter::{convert_file, ConversionReport};
pub use document::TextDocument;
pub use table::{SubstitutionTable, UMLAUT_ENTITIES};
