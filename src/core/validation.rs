//! Input validation for cipher operations.
//!
//! The cipher functions assume in-range text and do not check it
//! themselves; validating is the caller's explicit step before
//! encrypting or decrypting.

use crate::core::constants::{LOWER_BOUND, UPPER_BOUND};
use crate::error::{CipherError, Result};

/// Check whether every character of `text` lies within the legal range.
///
/// The empty string is vacuously in range: no character violates the
/// bounds.
///
/// # Arguments
///
/// * `text` - The text to check
pub fn is_in_range(text: &str) -> bool {
    text.chars().all(|c| (LOWER_BOUND..=UPPER_BOUND).contains(&c))
}

/// Validate that `text` is fully within the legal range.
///
/// Same check as [`is_in_range`], reporting the first offending
/// character instead of a bare `false`.
///
/// # Arguments
///
/// * `text` - The text to validate
///
/// # Errors
///
/// Returns `CipherError::OutOfRange` naming the first character outside
/// the range and its position.
pub fn ensure_in_range(text: &str) -> Result<()> {
    for (position, ch) in text.chars().enumerate() {
        if !(LOWER_BOUND..=UPPER_BOUND).contains(&ch) {
            return Err(CipherError::OutOfRange { ch, position });
        }
    }

    Ok(())
}
