//! Character range constants shared by every cipher operation.
//!
//! Centralizes the legal alphabet: the contiguous ASCII block from space
//! (0x20) through underscore (0x5F), 64 symbols covering digits, the
//! uppercase letters and common punctuation. All wrap-around arithmetic
//! is taken modulo [`RANGE_SIZE`].

/// Lowest legal character (ASCII space).
pub const LOWER_BOUND: char = ' ';

/// Highest legal character (ASCII underscore).
pub const UPPER_BOUND: char = '_';

/// Number of symbols in the legal alphabet.
pub const RANGE_SIZE: i32 = UPPER_BOUND as i32 - LOWER_BOUND as i32 + 1;
