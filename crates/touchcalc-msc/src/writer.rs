//! Compact format writer

use crate::options::MscWriteOptions;
use crate::reader::CompactLine;
use touchcalc_core::{CellRecord, Document};

/// Compact format writer
pub struct MscWriter;

impl MscWriter {
    /// Convert expanded text to compact text using the default options
    ///
    /// Never fails. Only `t`, `v` and `vtf` cell records are written, in input
    /// order; every other line is skipped. Cells whose value is empty are
    /// dropped, so an empty text cell does not survive the trip.
    ///
    /// ```
    /// use touchcalc_msc::MscWriter;
    ///
    /// let compact = MscWriter::convert("version:1.4\ncell:A1:t:hi\ncell:B2:vtf:n:0:A1*2");
    /// assert_eq!(compact, "A1:hi\nB2:=A1*2");
    /// ```
    pub fn convert(expanded: &str) -> String {
        Self::convert_with_options(expanded, &MscWriteOptions::default())
    }

    /// Convert expanded text to compact text
    pub fn convert_with_options(expanded: &str, options: &MscWriteOptions) -> String {
        Self::write(&Document::parse(expanded), options)
    }

    /// Write the cells of a [`Document`] as compact text
    pub fn write(document: &Document, options: &MscWriteOptions) -> String {
        document
            .cells
            .iter()
            .filter_map(Self::compact_line)
            .collect::<Vec<_>>()
            .join(options.line_terminator.as_str())
    }

    /// Render one record as `coord:value`, or `None` if its value is empty
    fn compact_line(cell: &CellRecord) -> Option<String> {
        if cell.compact_value().is_empty() {
            tracing::trace!(coord = cell.coord(), kind = cell.kind(), "dropping empty cell");
            return None;
        }
        Some(CompactLine::from(cell).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LineTerminator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_scenario() {
        let compact =
            MscWriter::convert("version:1.4\ncell:A1:t:hi\ncell:C3:v:42\ncell:B2:vtf:n:0:A1+A2");
        assert_eq!(compact, "A1:hi\nC3:42\nB2:=A1+A2");
    }

    #[test]
    fn test_convert_unescapes_text() {
        assert_eq!(
            MscWriter::convert("version:1.4\ncell:A1:t:a\\cb\\nc\\bd"),
            "A1:a:b\nc\\d"
        );
    }

    #[test]
    fn test_convert_skips_unknown_and_short_records() {
        let expanded = "version:1.4\n\
                        cell:A1\n\
                        cell:A2:t\n\
                        cell:A3:vtf:n:0\n\
                        cell:A4:zz:1\n\
                        col:A:w:80\n\
                        cell:A5:v:7\n\
                        sheet:c:10:r:20";
        assert_eq!(MscWriter::convert(expanded), "A5:7");
    }

    #[test]
    fn test_convert_drops_empty_values() {
        assert_eq!(
            MscWriter::convert("cell:A1:t:\ncell:A2:v:\ncell:A3:t:kept"),
            "A3:kept"
        );
        // An empty formula still has its `=`
        assert_eq!(MscWriter::convert("cell:A1:vtf:n:0:"), "A1:=");
    }

    #[test]
    fn test_convert_cuts_formula_at_colon() {
        assert_eq!(
            MscWriter::convert("version:1.4\ncell:B9:vtf:n:0:SUM(B1:B8)"),
            "B9:=SUM(B1"
        );
    }

    #[test]
    fn test_convert_trims_lines() {
        assert_eq!(MscWriter::convert("  cell:A1:t:hi  \r\n"), "A1:hi");
    }

    #[test]
    fn test_convert_crlf() {
        let options = MscWriteOptions {
            line_terminator: LineTerminator::CRLF,
        };
        assert_eq!(
            MscWriter::convert_with_options("cell:A1:t:x\ncell:A2:t:y", &options),
            "A1:x\r\nA2:y"
        );
    }

    #[test]
    fn test_convert_empty() {
        assert_eq!(MscWriter::convert(""), "");
        assert_eq!(MscWriter::convert("version:1.4\nsheet:c:10:r:20"), "");
    }
}
