//! Input validation helpers.

use crate::error::ListError;

/// Check that `value` is a positive integer.
///
/// The error message names the offending parameter and value so it can be
/// surfaced to callers verbatim.
pub fn validate_positive_integer(name: &str, value: i64) -> Result<(), ListError> {
    if value <= 0 {
        return Err(ListError::InvalidArgument(format!(
            "'{name}' must be a positive integer, got {value}"
        )));
    }
    Ok(())
}
