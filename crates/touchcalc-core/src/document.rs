//! Expanded documents

use crate::record::{CellRecord, Record, SheetDimensions, DEFAULT_VERSION};
use std::fmt;

/// An expanded-format document
///
/// Rendering writes the version record first, then the cells in order, then
/// the sheet dimensions if present. Lines are joined with `\n` and there is no
/// trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Version token, without the `version:` prefix
    pub version: Option<String>,
    /// Cell records in document order
    pub cells: Vec<CellRecord>,
    /// Trailing sheet dimensions
    pub sheet: Option<SheetDimensions>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION)
    }
}

impl Document {
    /// Create an empty document with the given version token
    pub fn new<S: Into<String>>(version: S) -> Self {
        Self {
            version: Some(version.into()),
            cells: Vec::new(),
            sheet: None,
        }
    }

    /// Append a cell record
    pub fn push(&mut self, cell: CellRecord) {
        self.cells.push(cell);
    }

    /// Builder-style [`Document::push`]
    pub fn with_cell(mut self, cell: CellRecord) -> Self {
        self.push(cell);
        self
    }

    /// Builder-style setter for the sheet dimensions
    pub fn with_sheet(mut self, sheet: SheetDimensions) -> Self {
        self.sheet = Some(sheet);
        self
    }

    /// Read an expanded document, leniently
    ///
    /// Lines are trimmed; unrecognised or malformed lines are skipped. The first
    /// version record and the last sheet record win. Use
    /// [`validate`](crate::validate()) when strictness matters.
    pub fn parse(text: &str) -> Self {
        let mut doc = Self {
            version: None,
            cells: Vec::new(),
            sheet: None,
        };

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            match Record::parse(line) {
                Some(Record::Version(version)) => {
                    doc.version.get_or_insert(version);
                }
                Some(Record::Cell(cell)) => doc.cells.push(cell),
                Some(Record::Sheet(dims)) => doc.sheet = Some(dims),
                None => tracing::debug!(line = idx + 1, text = line, "skipping record"),
            }
        }

        doc
    }

    /// Iterate over the records in rendering order
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.version
            .iter()
            .cloned()
            .map(Record::Version)
            .chain(self.cells.iter().cloned().map(Record::Cell))
            .chain(self.sheet.map(Record::Sheet))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render() {
        let doc = Document::default()
            .with_cell(CellRecord::text("A1", "hello"))
            .with_cell(CellRecord::formula("B2", "A1+A2"))
            .with_sheet(SheetDimensions::default());

        assert_eq!(
            doc.to_string(),
            "version:1.4\ncell:A1:t:hello\ncell:B2:vtf:n:0:A1+A2\nsheet:c:10:r:20"
        );
    }

    #[test]
    fn test_parse_lenient() {
        let text = "\n  cell:A1:t:hi  \nfont:1:bold\ncell:B1\nversion:1.4\nversion:2\n\
                    cell:C3:v:42\nsheet:c:5:r:6\n";
        let doc = Document::parse(text);

        assert_eq!(doc.version.as_deref(), Some("1.4"));
        assert_eq!(
            doc.cells,
            vec![
                CellRecord::text("A1", "hi"),
                CellRecord::Value {
                    coord: "C3".into(),
                    literal: "42".into()
                },
            ]
        );
        assert_eq!(doc.sheet, Some(SheetDimensions::new(5, 6)));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::parse("");
        assert_eq!(doc.version, None);
        assert_eq!(doc.to_string(), "");
        assert_eq!(Document::default().to_string(), "version:1.4");
    }
}
