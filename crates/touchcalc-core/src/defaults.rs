//! Canned content for new spreadsheets

use crate::document::Document;
use crate::record::{CellRecord, SheetDimensions};

/// Build the welcome document given to a newly created spreadsheet
///
/// `storage_backend` is shown in cell C3. Text is escaped on rendering, so any
/// label yields a document that passes [`validate`](crate::validate()).
///
/// The colons in B3 and A5 are written as `\c` rather than raw, and so is any
/// colon in the label, so those cells convert back to compact text intact.
pub fn default_document_records(storage_backend: &str) -> Document {
    Document::default()
        .with_cell(CellRecord::text("A1", "TouchCalc Spreadsheet"))
        .with_cell(CellRecord::text("B1", "Welcome to your cloud spreadsheet!"))
        .with_cell(CellRecord::text("A2", "Cell A2"))
        .with_cell(CellRecord::text("B2", "Cell B2"))
        .with_cell(CellRecord::formula("C2", "A2+B2"))
        .with_cell(CellRecord::text("A3", "Data automatically saves to the cloud"))
        .with_cell(CellRecord::text("B3", "Storage Backend:"))
        .with_cell(CellRecord::text("C3", storage_backend))
        .with_cell(CellRecord::text("A5", "Try these features:"))
        .with_cell(CellRecord::text("B5", "• Edit any cell by clicking"))
        .with_cell(CellRecord::text("B6", "• Use formulas like =A1+B1"))
        .with_cell(CellRecord::text("B7", "• Auto-save every 30 seconds"))
        .with_cell(CellRecord::text("B8", "• Export to CSV or Excel"))
        .with_sheet(SheetDimensions::default())
}

/// Expanded text of [`default_document_records`]
pub fn default_document(storage_backend: &str) -> String {
    default_document_records(storage_backend).to_string()
}
