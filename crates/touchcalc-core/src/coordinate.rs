//! A1-style coordinates

use crate::error::FormatError;
use lazy_regex::regex_is_match;
use std::fmt;
use std::str::FromStr;

/// A cell coordinate (e.g., "A1", "AA12")
///
/// Both fields are 1-based, matching the textual form: `A1` is row 1, column 1.
/// Columns use bijective base-26 letters, so `Z` is 26 and `AA` is 27.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1)
    pub col: u32,
}

impl Coordinate {
    /// Create a coordinate from 1-based row and column numbers
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a coordinate from A1-style notation
    ///
    /// The grammar is `[A-Z]+[0-9]+` and is case-sensitive; no `$` markers and
    /// no surrounding whitespace are accepted.
    ///
    /// # Examples
    /// ```
    /// use touchcalc_core::Coordinate;
    ///
    /// let coord = Coordinate::parse("AA12").unwrap();
    /// assert_eq!(coord.row, 12);
    /// assert_eq!(coord.col, 27);
    ///
    /// assert!(Coordinate::parse("a1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        if !is_valid_coordinate(s) {
            return Err(FormatError::InvalidCoordinate(s.to_string()));
        }

        // The grammar guarantees at least one letter followed only by digits.
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| FormatError::InvalidCoordinate(s.to_string()))?;
        let (letters, digits) = s.split_at(split);

        let col = letters_to_column(letters)
            .ok_or_else(|| FormatError::ColumnOverflow(s.to_string()))?;
        let row: u32 = digits
            .parse()
            .map_err(|_| FormatError::InvalidRow(s.to_string()))?;

        Ok(Self { row, col })
    }

    /// Format as A1-style string
    ///
    /// Returns an empty string when either the row or the column is 0.
    pub fn to_a1_string(&self) -> String {
        encode(self.row, self.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for Coordinate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        Self::parse(s)
    }
}

/// Check `s` against the coordinate grammar `[A-Z]+[0-9]+`
pub fn is_valid_coordinate(s: &str) -> bool {
    regex_is_match!(r"^[A-Z]+[0-9]+$", s)
}

/// Decode an A1-style coordinate into its 1-based `(row, col)` pair
pub fn decode(coord: &str) -> Result<(u32, u32), FormatError> {
    let coord = Coordinate::parse(coord)?;
    Ok((coord.row, coord.col))
}

/// Encode a 1-based `(row, col)` pair as an A1-style coordinate
///
/// Unlike [`decode`], this never fails: a row or column of 0 yields an empty
/// string.
pub fn encode(row: u32, col: u32) -> String {
    if row < 1 || col < 1 {
        return String::new();
    }

    let mut result = column_to_letters(col);
    result.push_str(&row.to_string());
    result
}

/// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA)
pub fn column_to_letters(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col;

    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// Convert uppercase column letters to a 1-based column number
///
/// Returns `None` on an empty string, a non-uppercase letter, or overflow.
pub fn letters_to_column(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }

    letters.bytes().try_fold(0u32, |col, b| {
        if !b.is_ascii_uppercase() {
            return None;
        }
        col.checked_mul(26)?.checked_add(u32::from(b - b'A') + 1)
    })
}
