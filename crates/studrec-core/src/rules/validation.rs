//! Caller-side validation of user-entered field values
//!
//! The presentation layer supplies all fields as strings. Only two checks
//! exist by contract: the id must be numeric and the full name (PIB) must be
//! non-empty. Rejections happen here, before any dispatch or persistence call
//! ever sees the input.

use crate::errors::{CoreError, Result};

/// Parse a user-entered student id
///
/// The input is trimmed; an empty or non-numeric string is rejected.
///
/// # Errors
///
/// Returns `InvalidId` carrying the offending input.
pub fn parse_student_id(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|_| CoreError::InvalidId {
        input: trimmed.to_string(),
    })
}

/// Validate a user-entered full name (PIB)
///
/// # Errors
///
/// Returns `EmptyPib` if the trimmed input is empty.
pub fn validate_pib(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(CoreError::EmptyPib);
    }
    Ok(())
}
