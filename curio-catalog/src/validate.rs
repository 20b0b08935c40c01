//! Field validation applied at the presentation boundary.
//!
//! Items are plain records and can be constructed with any contents; callers
//! run [`validate`] before committing a submission to the store.

use thiserror::Error;

use crate::types::Item;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("Year must not be zero")]
    ZeroYear,
}

/// Check that every field of `item` is filled in.
///
/// String fields must be non-empty after trimming; the year must be non-zero
/// (the presentation layer already rejects non-numeric year input when it
/// parses the submission). Returns the first offending field.
pub fn validate(item: &Item) -> Result<(), ValidationError> {
    require("Name", item.name())?;
    if item.year() == 0 {
        return Err(ValidationError::ZeroYear);
    }
    require("Genre", item.genre())?;
    require(item.detail_label(), item.detail())?;
    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
