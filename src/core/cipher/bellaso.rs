//! Bellaso cipher implementation.
//!
//! Polyalphabetic substitution: position `i` is offset by the code point
//! of `key_str[i mod key_len]`, the key string repeating cyclically to
//! cover the whole text.

use tracing::trace;

use super::{wrap_into_range, Cipher};
use crate::error::{CipherError, Result};

/// Bellaso cipher driven by a repeating key string.
#[derive(Debug, Clone)]
pub struct Bellaso {
    key: String,
}

impl Bellaso {
    /// Create a cipher from a key string.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EmptyKey` if the key string is empty.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        Ok(Bellaso { key })
    }
}

impl Cipher for Bellaso {
    fn name(&self) -> &'static str {
        "bellaso"
    }

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        encrypt_bellaso(plaintext, &self.key)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        decrypt_bellaso(ciphertext, &self.key)
    }
}

/// Encrypt `plain_text`, offsetting each character forward by the code
/// point of the corresponding key character, wrapping at the upper
/// bound.
///
/// # Errors
///
/// Returns `CipherError::EmptyKey` if `key_str` is empty; an empty key
/// has no characters to cycle through.
pub fn encrypt_bellaso(plain_text: &str, key_str: &str) -> Result<String> {
    if key_str.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    trace!(
        plaintext_len = plain_text.len(),
        key_len = key_str.len(),
        "bellaso encrypt"
    );

    Ok(plain_text
        .chars()
        .zip(key_str.chars().cycle())
        .map(|(c, k)| wrap_into_range(c as i32 + k as i32))
        .collect())
}

/// Decrypt `cipher_text`, offsetting each character backward by the code
/// point of the corresponding key character, wrapping at the lower
/// bound. Inverse of [`encrypt_bellaso`] under the same key.
///
/// # Errors
///
/// Returns `CipherError::EmptyKey` if `key_str` is empty.
pub fn decrypt_bellaso(cipher_text: &str, key_str: &str) -> Result<String> {
    if key_str.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    trace!(
        ciphertext_len = cipher_text.len(),
        key_len = key_str.len(),
        "bellaso decrypt"
    );

    Ok(cipher_text
        .chars()
        .zip(key_str.chars().cycle())
        .map(|(c, k)| wrap_into_range(c as i32 - k as i32))
        .collect())
}
