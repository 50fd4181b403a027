//! Figleaf - classical substitution ciphers over a fixed character range.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── error             # Error taxonomy
//! └── core/             # Core library components
//!     ├── constants     # Legal character range
//!     ├── validation    # Caller-side range checks
//!     └── cipher/       # Cipher implementations
//!         ├── mod       # Cipher trait
//!         ├── caesar    # Fixed-offset cipher
//!         └── bellaso   # Repeating-key polyalphabetic cipher
//! ```
//!
//! # Features
//!
//! - Caesar cipher over any integer key, negative keys included
//! - Bellaso cipher driven by a cyclically repeated key string
//! - Range validation against the 64-symbol alphabet (space through underscore)
//! - Pure, synchronous functions safe to call from any thread
//!
//! These are classical ciphers: trivially breakable, suitable for puzzles
//! and teaching, never for confidentiality.

pub mod core;
pub mod error;
