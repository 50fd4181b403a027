//! Caesar cipher implementation.
//!
//! Shifts every character by the same offset within the legal range.
//! Any integer key is accepted; the effective shift is the key reduced
//! modulo the range size, so negative keys and keys larger than the
//! range behave like their canonical equivalents.

use tracing::trace;

use super::{wrap_into_range, Cipher};
use crate::core::constants::RANGE_SIZE;
use crate::error::Result;

/// Caesar cipher with a fixed integer offset.
#[derive(Debug, Clone, Copy)]
pub struct Caesar {
    key: i32,
}

impl Caesar {
    /// Create a cipher with the given offset.
    pub fn new(key: i32) -> Self {
        Caesar { key }
    }
}

impl Cipher for Caesar {
    fn name(&self) -> &'static str {
        "caesar"
    }

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(encrypt_caesar(plaintext, self.key))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(decrypt_caesar(ciphertext, self.key))
    }
}

/// Encrypt `plain_text` by shifting each character `key` positions
/// forward, wrapping at the upper bound.
///
/// Characters outside the legal range are not rejected here; callers
/// that need range-conformant output must check the input first with
/// [`crate::core::validation::is_in_range`].
pub fn encrypt_caesar(plain_text: &str, key: i32) -> String {
    let shift = key.rem_euclid(RANGE_SIZE);
    trace!(plaintext_len = plain_text.len(), shift, "caesar encrypt");

    plain_text
        .chars()
        .map(|c| wrap_into_range(c as i32 + shift))
        .collect()
}

/// Decrypt `cipher_text` by shifting each character `key` positions
/// backward, wrapping at the lower bound. Inverse of [`encrypt_caesar`]
/// under the same key.
pub fn decrypt_caesar(cipher_text: &str, key: i32) -> String {
    let shift = key.rem_euclid(RANGE_SIZE);
    trace!(ciphertext_len = cipher_text.len(), shift, "caesar decrypt");

    cipher_text
        .chars()
        .map(|c| wrap_into_range(c as i32 - shift))
        .collect()
}
