//! Number words, string sanitizing, and the shared error types.
//!
//! Everything here is pure and has no optional dependencies.

mod error;
mod input;
mod number_words;
mod options;
mod strings;

pub use error::*;
pub use input::NumberInput;
pub use number_words::*;
pub use options::*;
pub use strings::*;
