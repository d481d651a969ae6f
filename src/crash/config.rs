use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where crash and log dumps go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrashConfig {
    /// Root directory; one subdirectory per reporter is created below it.
    pub directory: PathBuf,
    /// Reporter used when the caller passes an empty name.
    pub default_reporter: String,
}

impl Default for CrashConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("storage/crashes"),
            default_reporter: "app".into(),
        }
    }
}
