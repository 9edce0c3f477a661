//! Expanded-format records
//!
//! An expanded document is a sequence of colon-delimited lines:
//!
//! | Record | Shape |
//! |---|---|
//! | version | `version:<token>` |
//! | text cell | `cell:<COORD>:t:<escaped>` |
//! | numeric cell | `cell:<COORD>:v:<number>` |
//! | formula cell | `cell:<COORD>:vtf:<type>:<cached>:<formula>` |
//! | sheet dimensions | `sheet:c:<cols>:r:<rows>` |

use crate::coordinate::Coordinate;
use crate::escape::{escape, unescape};
use std::fmt;

/// Prefix of version records
pub const VERSION_PREFIX: &str = "version:";
/// Prefix of cell records
pub const CELL_PREFIX: &str = "cell:";
/// Prefix of sheet dimension records
pub const SHEET_PREFIX: &str = "sheet:";

/// Version token written into new documents
pub const DEFAULT_VERSION: &str = "1.4";

/// Cached-value type tag written on new formula records
pub const FORMULA_VALUE_TYPE: &str = "n";
/// Cached value written on new formula records
pub const FORMULA_CACHED_VALUE: &str = "0";

/// A single `cell:` record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellRecord {
    /// `t` record; `text` holds the unescaped payload
    Text { coord: String, text: String },

    /// `v` record; the literal is passed through without numeric parsing
    Value { coord: String, literal: String },

    /// `vtf` record
    Formula {
        coord: String,
        /// Opaque cached-value type tag
        value_type: String,
        /// Opaque cached value
        cached: String,
        /// Formula source without the leading `=`
        source: String,
    },
}

impl CellRecord {
    /// Create a text record
    pub fn text<C: Into<String>, S: Into<String>>(coord: C, text: S) -> Self {
        CellRecord::Text {
            coord: coord.into(),
            text: text.into(),
        }
    }

    /// Create a formula record with the default cached-value metadata
    pub fn formula<C: Into<String>, S: Into<String>>(coord: C, source: S) -> Self {
        CellRecord::Formula {
            coord: coord.into(),
            value_type: FORMULA_VALUE_TYPE.to_string(),
            cached: FORMULA_CACHED_VALUE.to_string(),
            source: source.into(),
        }
    }

    /// Parse a `cell:` line, leniently
    ///
    /// Returns `None` for lines that are not cell records, have fewer than four
    /// fields, carry an unknown kind tag, or are `vtf` records with fewer than
    /// six fields. The coordinate field is not checked against the grammar.
    ///
    /// The formula of a `vtf` record is the sixth field alone. Formula text is
    /// stored unescaped, so a range such as `SUM(A1:A3)` is cut at its colon.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with(CELL_PREFIX) {
            return None;
        }

        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() < 4 {
            return None;
        }

        let coord = fields[1].to_string();
        match fields[2] {
            "t" => Some(CellRecord::Text {
                coord,
                text: unescape(fields[3]),
            }),
            "v" => Some(CellRecord::Value {
                coord,
                literal: fields[3].to_string(),
            }),
            "vtf" if fields.len() >= 6 => Some(CellRecord::Formula {
                coord,
                value_type: fields[3].to_string(),
                cached: fields[4].to_string(),
                source: fields[5].to_string(),
            }),
            _ => None,
        }
    }

    /// Raw coordinate text of this record
    pub fn coord(&self) -> &str {
        match self {
            CellRecord::Text { coord, .. }
            | CellRecord::Value { coord, .. }
            | CellRecord::Formula { coord, .. } => coord,
        }
    }

    /// Kind tag written in the third field (`t`, `v` or `vtf`)
    pub fn kind(&self) -> &'static str {
        match self {
            CellRecord::Text { .. } => "t",
            CellRecord::Value { .. } => "v",
            CellRecord::Formula { .. } => "vtf",
        }
    }

    /// Value as it appears in the compact format
    ///
    /// Formulas get their leading `=` back; text is unescaped.
    pub fn compact_value(&self) -> String {
        match self {
            CellRecord::Text { text, .. } => text.clone(),
            CellRecord::Value { literal, .. } => literal.clone(),
            CellRecord::Formula { source, .. } => format!("={}", source),
        }
    }
}

impl fmt::Display for CellRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRecord::Text { coord, text } => {
                write!(f, "{}{}:t:{}", CELL_PREFIX, coord, escape(text))
            }
            CellRecord::Value { coord, literal } => {
                write!(f, "{}{}:v:{}", CELL_PREFIX, coord, literal)
            }
            CellRecord::Formula {
                coord,
                value_type,
                cached,
                source,
            } => write!(
                f,
                "{}{}:vtf:{}:{}:{}",
                CELL_PREFIX, coord, value_type, cached, source
            ),
        }
    }
}

/// Declared extent of a sheet (`sheet:c:<cols>:r:<rows>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetDimensions {
    /// Number of columns
    pub cols: u32,
    /// Number of rows
    pub rows: u32,
}

impl Default for SheetDimensions {
    fn default() -> Self {
        Self { cols: 10, rows: 20 }
    }
}

impl SheetDimensions {
    /// Create new dimensions
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Grow these dimensions until every decodable cell coordinate fits
    ///
    /// Records whose coordinate does not decode are ignored.
    pub fn covering<'a, I>(self, cells: I) -> Self
    where
        I: IntoIterator<Item = &'a CellRecord>,
    {
        cells
            .into_iter()
            .filter_map(|cell| Coordinate::parse(cell.coord()).ok())
            .fold(self, |dims, coord| Self {
                cols: dims.cols.max(coord.col),
                rows: dims.rows.max(coord.row),
            })
    }

    /// Parse a `sheet:` line, leniently
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(':').collect();
        match fields.as_slice() {
            ["sheet", "c", cols, "r", rows, ..] => Some(Self {
                cols: cols.parse().ok()?,
                rows: rows.parse().ok()?,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for SheetDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}c:{}:r:{}", SHEET_PREFIX, self.cols, self.rows)
    }
}

/// Any line of an expanded document this crate understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `version:<token>`
    Version(String),
    /// `cell:...`
    Cell(CellRecord),
    /// `sheet:c:<cols>:r:<rows>`
    Sheet(SheetDimensions),
}

impl Record {
    /// Parse an already trimmed line; unrecognised lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        if let Some(version) = line.strip_prefix(VERSION_PREFIX) {
            Some(Record::Version(version.to_string()))
        } else if line.starts_with(CELL_PREFIX) {
            CellRecord::parse(line).map(Record::Cell)
        } else if line.starts_with(SHEET_PREFIX) {
            SheetDimensions::parse(line).map(Record::Sheet)
        } else {
            None
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Version(version) => write!(f, "{}{}", VERSION_PREFIX, version),
            Record::Cell(cell) => fmt::Display::fmt(cell, f),
            Record::Sheet(dims) => fmt::Display::fmt(dims, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_text_record() {
        let record = CellRecord::parse("cell:A1:t:time\\c 10\\c30").unwrap();
        assert_eq!(record, CellRecord::text("A1", "time: 10:30"));
        assert_eq!(record.compact_value(), "time: 10:30");
    }

    #[test]
    fn test_parse_value_record() {
        let record = CellRecord::parse("cell:C3:v:42.5").unwrap();
        assert_eq!(
            record,
            CellRecord::Value {
                coord: "C3".into(),
                literal: "42.5".into()
            }
        );
        assert_eq!(record.kind(), "v");
    }

    #[test]
    fn test_parse_formula_record() {
        let record = CellRecord::parse("cell:B2:vtf:n:0:A1+A2").unwrap();
        assert_eq!(record, CellRecord::formula("B2", "A1+A2"));
        assert_eq!(record.compact_value(), "=A1+A2");

        let record = CellRecord::parse("cell:B3:vtf:n:6:SUM(A1:A3)").unwrap();
        assert_eq!(
            record,
            CellRecord::Formula {
                coord: "B3".into(),
                value_type: "n".into(),
                cached: "6".into(),
                source: "SUM(A1".into(),
            }
        );
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(CellRecord::parse("cell:A1"), None);
        assert_eq!(CellRecord::parse("cell:A1:t"), None);
        assert_eq!(CellRecord::parse("cell:A1:vtf:n:0"), None);
        assert_eq!(CellRecord::parse("cell:A1:b:1:2:3"), None);
        assert_eq!(CellRecord::parse("col:A:w:80"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellRecord::text("A1", "a:b").to_string(), "cell:A1:t:a\\cb");
        assert_eq!(
            CellRecord::formula("B2", "A1+A2").to_string(),
            "cell:B2:vtf:n:0:A1+A2"
        );
        assert_eq!(SheetDimensions::default().to_string(), "sheet:c:10:r:20");
        assert_eq!(Record::Version("1.4".into()).to_string(), "version:1.4");
    }

    #[test]
    fn test_sheet_dimensions() {
        assert_eq!(
            SheetDimensions::parse("sheet:c:10:r:20"),
            Some(SheetDimensions::new(10, 20))
        );
        assert_eq!(SheetDimensions::parse("sheet:c:x:r:20"), None);

        let cells = vec![
            CellRecord::text("L3", "wide"),
            CellRecord::text("B45", "tall"),
            CellRecord::text("bogus", "ignored"),
        ];
        assert_eq!(
            SheetDimensions::default().covering(&cells),
            SheetDimensions::new(12, 45)
        );
    }

    #[test]
    fn test_record_parse() {
        assert_eq!(
            Record::parse("version:1.4"),
            Some(Record::Version("1.4".into()))
        );
        assert_eq!(
            Record::parse("sheet:c:3:r:4"),
            Some(Record::Sheet(SheetDimensions::new(3, 4)))
        );
        assert_eq!(Record::parse("font:1:* * *"), None);
    }
}
