//! Helpers over JSON-shaped data.
//!
//! PHP-style "arrays" map onto [`serde_json::Value`]: objects and arrays
//! are both containers, everything else is a scalar.
//!
//! # Example
//!
//! ```
//! use fst_helpers::collections::*;
//! use serde_json::json;
//!
//! let mut settings = json!({"mail": {"host": "localhost"}});
//! set_path(&mut settings, "mail.port", json!(587));
//! assert_eq!(settings["mail"]["port"], 587);
//! assert_eq!(depth(&settings), 2);
//!
//! let tags = ["invoice-2024", "storno"];
//! assert!(contains_keys(&["invoice"], &tags, SearchMode::default()));
//! assert!(!contains_keys(&["invoice"], &tags, SearchMode::literal()));
//! ```

mod path;
mod search;

pub use path::{depth, set_path, to_plain_value, with_path};
pub use search::{SearchMode, contains_any, contains_keys};
