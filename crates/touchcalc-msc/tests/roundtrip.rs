//! Compact -> expanded -> compact tests

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use touchcalc_core::validate;
use touchcalc_msc::{MscReader, MscWriter};

/// Text values containing every reserved character survive the trip
#[test]
fn test_reserved_characters_roundtrip() {
    let compact = "A1:path C:\\data\\q1.csv\nB1:ratio 3:1\nC1:=A1&B1";
    let expanded = MscReader::parse(compact);

    assert!(expanded.contains("cell:A1:t:path C\\c\\bdata\\bq1.csv"));
    assert_eq!(MscWriter::convert(&expanded), compact);
}

/// Whitespace and junk are normalised away
#[test]
fn test_normalising_roundtrip() {
    let compact = "\n  A1 : one \n\nnonsense\nB2:= A1 * 2\nC3:\n";
    let expanded = MscReader::parse(compact);

    assert_eq!(MscWriter::convert(&expanded), "A1:one\nB2:= A1 * 2");
}

/// Record order follows input order, not coordinate order
#[test]
fn test_order_preserved() {
    let compact = "C3:third\nA1:first\nB2:second";
    assert_eq!(MscWriter::convert(&MscReader::parse(compact)), compact);
}

proptest! {
    #[test]
    fn parsed_output_always_validates(text in "\\PC{0,200}") {
        prop_assert_eq!(validate(&MscReader::parse(&text)), Ok(()));
    }

    #[test]
    fn parsed_lines_always_validate(
        lines in proptest::collection::vec("[A-Za-z]{0,3}[0-9]{0,3}[ :=]{0,3}[a-z:\\\\ ]{0,10}", 0..20)
    ) {
        let text = lines.join("\n");
        prop_assert_eq!(validate(&MscReader::parse(&text)), Ok(()));
    }

    #[test]
    fn well_formed_lines_roundtrip(
        cells in proptest::collection::vec(("[A-Z]{1,2}[1-9][0-9]{0,2}", "[a-z0-9:\\\\ ]{0,12}[a-z]"), 1..10)
    ) {
        let compact = cells
            .iter()
            .map(|(coord, value)| format!("{}:{}", coord, value))
            .collect::<Vec<_>>()
            .join("\n");
        let expected = cells
            .iter()
            .map(|(coord, value)| format!("{}:{}", coord, value.trim()))
            .collect::<Vec<_>>()
            .join("\n");

        prop_assert_eq!(MscWriter::convert(&MscReader::parse(&compact)), expected);
    }
}
