//! Compact format reader

use std::fmt;

use crate::options::MscReadOptions;
use touchcalc_core::{is_valid_coordinate, CellRecord, Document};

/// Value half of a compact line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompactValue {
    /// Plain text, unescaped
    Text(String),
    /// Formula source without the leading `=`
    Formula(String),
}

/// One `coordinate:value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactLine {
    /// A1-style coordinate, already checked against the grammar
    pub coord: String,
    /// Cell value
    pub value: CompactValue,
}

impl CompactLine {
    /// Parse a single compact line
    ///
    /// The line is split at its first colon and both halves are trimmed. Returns
    /// `None` when there is no colon or the coordinate is not A1-style.
    pub fn parse(line: &str) -> Option<Self> {
        let (coord, value) = line.split_once(':')?;
        let coord = coord.trim();
        let value = value.trim();

        if !is_valid_coordinate(coord) {
            return None;
        }

        let value = match value.strip_prefix('=') {
            Some(formula) => CompactValue::Formula(formula.to_string()),
            None => CompactValue::Text(value.to_string()),
        };

        Some(Self {
            coord: coord.to_string(),
            value,
        })
    }

    /// Convert into the equivalent expanded cell record
    pub fn into_record(self) -> CellRecord {
        match self.value {
            CompactValue::Text(text) => CellRecord::text(self.coord, text),
            CompactValue::Formula(source) => CellRecord::formula(self.coord, source),
        }
    }
}

impl From<&CellRecord> for CompactLine {
    /// Numeric literals become text; the compact format has no number type
    fn from(cell: &CellRecord) -> Self {
        let value = match cell {
            CellRecord::Text { text, .. } => CompactValue::Text(text.clone()),
            CellRecord::Value { literal, .. } => CompactValue::Text(literal.clone()),
            CellRecord::Formula { source, .. } => CompactValue::Formula(source.clone()),
        };

        Self {
            coord: cell.coord().to_string(),
            value,
        }
    }
}

impl fmt::Display for CompactLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            CompactValue::Text(text) => write!(f, "{}:{}", self.coord, text),
            CompactValue::Formula(source) => write!(f, "{}:={}", self.coord, source),
        }
    }
}

/// Compact format reader
pub struct MscReader;

impl MscReader {
    /// Convert compact text to expanded text using the default options
    ///
    /// Never fails: blank lines, lines without a colon and lines with an
    /// invalid coordinate are dropped.
    ///
    /// ```
    /// use touchcalc_msc::MscReader;
    ///
    /// let expanded = MscReader::parse("A1:hello\nB2:=A1+A2");
    /// assert_eq!(
    ///     expanded,
    ///     "version:1.4\ncell:A1:t:hello\ncell:B2:vtf:n:0:A1+A2\nsheet:c:10:r:20"
    /// );
    /// ```
    pub fn parse(text: &str) -> String {
        Self::parse_with_options(text, &MscReadOptions::default())
    }

    /// Convert compact text to expanded text
    pub fn parse_with_options(text: &str, options: &MscReadOptions) -> String {
        Self::read(text, options).to_string()
    }

    /// Read compact text into a [`Document`]
    ///
    /// The document always carries a version record and sheet dimensions.
    pub fn read(text: &str, options: &MscReadOptions) -> Document {
        let mut doc = Document::new(options.version.clone());
        for line in Self::lines(text) {
            doc.push(line.into_record());
        }

        let sheet = if options.fit_sheet_to_cells {
            options.sheet.covering(&doc.cells)
        } else {
            options.sheet
        };
        doc.with_sheet(sheet)
    }

    /// Iterate over the well-formed lines of compact text
    pub fn lines(text: &str) -> impl Iterator<Item = CompactLine> + '_ {
        text.trim()
            .lines()
            .enumerate()
            .filter_map(|(idx, raw)| {
                let line = raw.trim();
                if line.is_empty() {
                    return None;
                }

                let parsed = CompactLine::parse(line);
                if parsed.is_none() {
                    tracing::debug!(line = idx + 1, text = line, "dropping compact line");
                }
                parsed
            })
    }
}
