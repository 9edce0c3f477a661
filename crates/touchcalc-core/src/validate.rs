//! Structural validation of expanded documents

use crate::coordinate::is_valid_coordinate;
use crate::error::ValidationError;
use crate::record::{CELL_PREFIX, VERSION_PREFIX};

/// Check that `text` is a well-formed expanded document
///
/// Requires at least one `version:` record (more are allowed) and checks every
/// `cell:` record for at least four fields and an A1-style coordinate. The
/// first problem found is returned. Declared sheet dimensions are not compared
/// against the cells.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let mut has_version = false;

    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(VERSION_PREFIX) {
            has_version = true;
            continue;
        }

        if line.starts_with(CELL_PREFIX) {
            let fields: Vec<&str> = line.split(':').collect();
            if fields.len() < 4 {
                return Err(ValidationError::MalformedCell {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }

            if !is_valid_coordinate(fields[1]) {
                return Err(ValidationError::InvalidCoordinate {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    if !has_version {
        return Err(ValidationError::MissingVersion);
    }

    Ok(())
}
