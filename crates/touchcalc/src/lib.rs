//! # touchcalc
//!
//! Conversion between the two text formats of a touchcalc spreadsheet.
//!
//! ## Features
//!
//! - Compact `coordinate:value` text to expanded cell records and back
//! - A1-style coordinate encoding and decoding
//! - Structural validation of expanded documents
//! - Seed content for new spreadsheets
//!
//! ## Example
//!
//! ```rust
//! use touchcalc::prelude::*;
//!
//! let doc = Document::from_compact("A1:Sales\nA2:=B1*2");
//! assert_eq!(doc.cells.len(), 2);
//! assert!(doc.validate().is_ok());
//!
//! assert_eq!(doc.to_compact(), "A1:Sales\nA2:=B1*2");
//! ```

pub mod prelude;

// Re-export core types
pub use touchcalc_core::{
    decode, default_document, default_document_records, encode, escape, is_valid_coordinate,
    unescape, validate, CellRecord, Coordinate, Document, Error, FormatError, Record, Result,
    SheetDimensions, ValidationError, DEFAULT_VERSION,
};

// Re-export I/O types
pub use touchcalc_msc::{
    CompactLine, CompactValue, LineTerminator, MscReadOptions, MscReader, MscWriteOptions,
    MscWriter,
};

/// Extension trait for Document to add compact-format conversion
pub trait DocumentExt {
    /// Build a document from compact text with the default options
    fn from_compact(text: &str) -> Document;

    /// Write the document's cells as compact text with the default options
    fn to_compact(&self) -> String;

    /// Validate the rendered document
    fn validate(&self) -> std::result::Result<(), ValidationError>;
}

impl DocumentExt for Document {
    fn from_compact(text: &str) -> Document {
        MscReader::read(text, &MscReadOptions::default())
    }

    fn to_compact(&self) -> String {
        MscWriter::write(self, &MscWriteOptions::default())
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate(&self.to_string())
    }
}
