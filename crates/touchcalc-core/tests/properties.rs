//! Property tests for coordinates and escaping

use proptest::prelude::*;
use touchcalc_core::{decode, encode, escape, is_valid_coordinate, unescape, FormatError};

proptest! {
    #[test]
    fn encode_then_decode_is_identity(row in 1u32..=1000, col in 1u32..=1000) {
        prop_assert_eq!(decode(&encode(row, col)), Ok((row, col)));
    }

    #[test]
    fn grammar_conforming_coordinates_decode(coord in "[A-Z]{1,5}[0-9]{1,9}") {
        prop_assert!(is_valid_coordinate(&coord));
        prop_assert!(decode(&coord).is_ok());
    }

    #[test]
    fn lowercase_coordinates_are_rejected(coord in "[a-z]{1,3}[0-9]{1,4}") {
        prop_assert_eq!(
            decode(&coord),
            Err(FormatError::InvalidCoordinate(coord.clone()))
        );
    }

    #[test]
    fn non_conforming_coordinates_are_rejected(coord in "[A-Za-z0-9: $]{0,8}") {
        prop_assume!(!is_valid_coordinate(&coord));
        prop_assert_eq!(
            decode(&coord),
            Err(FormatError::InvalidCoordinate(coord.clone()))
        );
    }

    #[test]
    fn escape_then_unescape_is_identity(text in "[a-c:\\\\\n ]{0,24}") {
        let escaped = escape(&text);
        prop_assert!(!escaped.contains(':'));
        prop_assert!(!escaped.contains('\n'));
        prop_assert_eq!(unescape(&escaped), text);
    }
}
