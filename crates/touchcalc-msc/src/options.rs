//! Compact format options

use touchcalc_core::{SheetDimensions, DEFAULT_VERSION};

/// Options for reading compact text into an expanded document
#[derive(Debug, Clone)]
pub struct MscReadOptions {
    /// Version token written in the header (default: `1.4`)
    pub version: String,
    /// Sheet dimensions written in the footer (default: 10 columns, 20 rows)
    pub sheet: SheetDimensions,
    /// Grow the footer dimensions to cover every cell (default: false)
    pub fit_sheet_to_cells: bool,
}

impl Default for MscReadOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            sheet: SheetDimensions::default(),
            fit_sheet_to_cells: false,
        }
    }
}

/// Options for writing compact text
#[derive(Debug, Clone, Default)]
pub struct MscWriteOptions {
    /// Line terminator
    pub line_terminator: LineTerminator,
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    /// Unix-style (LF)
    #[default]
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}

impl LineTerminator {
    /// The terminator as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::LF => "\n",
            LineTerminator::CRLF => "\r\n",
            LineTerminator::CR => "\r",
        }
    }
}
