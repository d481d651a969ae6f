use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Capitalization applied once to a finished phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capitalize {
    /// Natural German lowercase (magnitude nouns keep their capital).
    #[default]
    None,
    /// Uppercase the first character only.
    First,
    /// Uppercase everything.
    All,
}

impl Capitalize {
    /// Apply this capitalization to `text`.
    ///
    /// Uses Unicode case mapping, so `"dreißig"` becomes `"DREISSIG"` under
    /// [`Capitalize::All`].
    pub fn apply(self, text: String) -> String {
        match self {
            Capitalize::None => text,
            Capitalize::All => text.to_uppercase(),
            Capitalize::First => {
                let mut chars = text.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => text,
                }
            }
        }
    }
}

/// Error returned when a capitalization name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCapitalize(pub String);

impl fmt::Display for UnknownCapitalize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown capitalization '{}' (expected none, first or all)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCapitalize {}

impl FromStr for Capitalize {
    type Err = UnknownCapitalize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Capitalize::None),
            "first" => Ok(Capitalize::First),
            "all" => Ok(Capitalize::All),
            _ => Err(UnknownCapitalize(s.into())),
        }
    }
}

/// Formatting options for number words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordOptions {
    /// Separate compound parts with spaces ("ein und zwanzig").
    pub space_between: bool,
    /// Capitalization of the finished phrase.
    pub capitalize: Capitalize,
}

impl WordOptions {
    /// Default options: compounds glued together, natural capitalization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Separate compound parts with spaces.
    pub fn spaced(mut self) -> Self {
        self.space_between = true;
        self
    }

    /// Set the capitalization.
    pub fn capitalize(mut self, capitalize: Capitalize) -> Self {
        self.capitalize = capitalize;
        self
    }
}
