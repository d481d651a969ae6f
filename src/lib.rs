//! # fst-helpers
//!
//! Helper utilities for German web backends: numbers written out in German
//! words, input sanitizing, key-search predicates over JSON data, JSON
//! response envelopes, and crash dumps to disk.
//!
//! ## Quick Start
//!
//! ```rust
//! use fst_helpers::*;
//!
//! assert_eq!(number_to_words_german(21, false, Capitalize::None), "einundzwanzig");
//! assert_eq!(number_to_words_german(1500, true, Capitalize::None), "eintausend fünfhundert");
//! assert_eq!(number_to_words_german(-2_000_000, true, Capitalize::First), "Minus zwei Millionen");
//!
//! let words = try_number_to_words_german("1e12", WordOptions::new());
//! assert_eq!(words, Err(NumberWordsError::TooLarge));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Number words, sanitizing, error types |
//! | `collections` | Depth, key search and dot paths over JSON values |
//! | `json` | JSON response envelopes |
//! | `crash` | Crash and log dumps to disk |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "crash")]
pub mod crash;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
