//! # touchcalc-core
//!
//! Core data structures for touchcalc spreadsheet documents.
//!
//! This crate provides:
//! - [`Coordinate`] - A1-style cell coordinates, with [`encode`]/[`decode`]
//! - [`escape`]/[`unescape`] - Payload escaping for expanded records
//! - [`CellRecord`], [`Record`] and [`Document`] - The expanded cell-record format
//! - [`validate`] - Structural validation of expanded text
//! - [`default_document`] - Seed content for new spreadsheets
//!
//! Everything here is a pure function over text; nothing touches the
//! filesystem or the network.
//!
//! ## Example
//!
//! ```rust
//! use touchcalc_core::{decode, encode, validate, CellRecord, Document};
//!
//! assert_eq!(decode("AA12").unwrap(), (12, 27));
//! assert_eq!(encode(12, 27), "AA12");
//!
//! let doc = Document::default().with_cell(CellRecord::text("A1", "Hello"));
//! assert_eq!(doc.to_string(), "version:1.4\ncell:A1:t:Hello");
//! assert!(validate(&doc.to_string()).is_ok());
//! ```

pub mod coordinate;
pub mod defaults;
pub mod document;
pub mod error;
pub mod escape;
pub mod record;
pub mod validate;

// Re-exports for convenience
pub use coordinate::{decode, encode, is_valid_coordinate, Coordinate};
pub use defaults::{default_document, default_document_records};
pub use document::Document;
pub use error::{Error, FormatError, Result, ValidationError};
pub use escape::{escape, unescape};
pub use record::{CellRecord, Record, SheetDimensions, DEFAULT_VERSION};
pub use validate::validate;
