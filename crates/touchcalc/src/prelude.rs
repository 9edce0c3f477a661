//! Prelude module - common imports for touchcalc users
//!
//! ```rust
//! use touchcalc::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellRecord,
    CompactLine,
    CompactValue,
    Coordinate,
    // Main types
    Document,
    // Extension traits
    DocumentExt,
    // Error types
    Error,
    FormatError,
    // I/O types
    MscReadOptions,
    MscReader,
    MscWriteOptions,
    MscWriter,
    Result,
    SheetDimensions,
    ValidationError,
};
