//! Crash and log dumps to disk.
//!
//! Each dump is a human-readable text file under
//! `<directory>/<reporter>/<YYYYmmdd-HHMMSS>-crash.txt` (or `-log.txt`):
//! a short header, the error or message text, and a pretty-printed JSON
//! block with details.
//!
//! # Example
//!
//! ```no_run
//! use fst_helpers::crash::*;
//!
//! let reporter = CrashReporter::new(CrashConfig {
//!     directory: "/var/log/app/crashes".into(),
//!     ..Default::default()
//! });
//!
//! let err = std::fs::read("/does/not/exist").unwrap_err();
//! let path = reporter.crash(&err, "import", "Kundenimport fehlgeschlagen").unwrap();
//! println!("dump written to {}", path.display());
//! ```

mod config;
mod report;

pub use config::CrashConfig;
pub use report::{CrashDetails, CrashReporter};
