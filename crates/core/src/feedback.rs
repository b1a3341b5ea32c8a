//! Rating validation for submission feedback.

use crate::error::CoreError;

/// Lowest rating a submission can receive.
pub const MIN_RATING: i32 = 1;

/// Highest rating a submission can receive.
pub const MAX_RATING: i32 = 5;

/// Check a rating against the 1-5 scale before it goes anywhere near the
/// store. The same bound is also a CHECK constraint on the table.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating {rating} is outside the allowed {MIN_RATING}-{MAX_RATING} range"
        )));
    }
    Ok(())
}
