//! # touchcalc-msc
//!
//! Reader and writer for the compact `coordinate:value` format.
//!
//! ```text
//! A1:Quarterly totals
//! B2:=B3*B4
//! ```
//!
//! [`MscReader`] turns compact text into an expanded document and
//! [`MscWriter`] turns an expanded document back into compact text.

mod options;
mod reader;
mod writer;

pub use options::{LineTerminator, MscReadOptions, MscWriteOptions};
pub use reader::{CompactLine, CompactValue, MscReader};
pub use writer::MscWriter;
