use std::any;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fs;
use std::panic::Location;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::config::CrashConfig;
use crate::core::HelperError;

const RULE: &str = "-------------------------------------------------";

/// Structured part of a crash dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrashDetails {
    /// Debug representation of the error.
    pub original: String,
    /// Display representation of the error.
    pub message: String,
    /// Display text of each `source()` in order, innermost last.
    pub source_chain: Vec<String>,
    /// Source file of the reporting call.
    pub file: String,
    /// Line of the reporting call.
    pub line: u32,
    /// Rust type name of the error.
    #[serde(default)]
    pub error_type: String,
    /// Backtrace of the reporting call. Only resolved when `RUST_BACKTRACE`
    /// or `RUST_LIB_BACKTRACE` enables capturing.
    #[serde(default)]
    pub backtrace: String,
}

impl CrashDetails {
    /// Collect details of `error`, located at `location`.
    pub fn new<E: Error + ?Sized>(error: &E, location: &Location<'_>) -> Self {
        let mut source_chain = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            source_chain.push(cause.to_string());
            source = cause.source();
        }
        Self {
            original: format!("{error:?}"),
            message: error.to_string(),
            source_chain,
            file: location.file().to_string(),
            line: location.line(),
            error_type: any::type_name::<E>().to_string(),
            backtrace: Backtrace::capture().to_string(),
        }
    }
}

/// Writes crash and log dumps below a configured directory.
#[derive(Debug, Clone, Default)]
pub struct CrashReporter {
    config: CrashConfig,
}

impl CrashReporter {
    pub fn new(config: CrashConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CrashConfig {
        &self.config
    }

    /// Dump `error` with a free-text `message`. Returns the written file.
    ///
    /// The location recorded in the dump is the caller's.
    #[track_caller]
    pub fn crash<E: Error + ?Sized>(
        &self,
        error: &E,
        reporter: &str,
        message: &str,
    ) -> Result<PathBuf, HelperError> {
        self.crash_at(error, reporter, message, Local::now().naive_local())
    }

    /// Like [`crash`](Self::crash) with an explicit timestamp.
    #[track_caller]
    pub fn crash_at<E: Error + ?Sized>(
        &self,
        error: &E,
        reporter: &str,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf, HelperError> {
        let details = CrashDetails::new(error, Location::caller());
        let reporter = self.reporter_dir(reporter)?;
        let stamp = timestamp.format("%Y%m%d-%H%M%S").to_string();

        let content = render(
            &stamp,
            &reporter,
            message,
            &error.to_string(),
            &serde_json::to_string_pretty(&details)?,
        );
        let path = self.write(&reporter, &format!("{stamp}-crash.txt"), &content)?;

        if !message.is_empty() {
            tracing::error!("[{reporter}] {message}");
        }
        tracing::info!(path = %path.display(), "crash report written");
        Ok(path)
    }

    /// Dump a message together with arbitrary serializable content.
    pub fn log<T: Serialize + ?Sized>(
        &self,
        message: &str,
        content: &T,
        reporter: &str,
    ) -> Result<PathBuf, HelperError> {
        self.log_at(message, content, reporter, Local::now().naive_local())
    }

    /// Like [`log`](Self::log) with an explicit timestamp.
    pub fn log_at<T: Serialize + ?Sized>(
        &self,
        message: &str,
        content: &T,
        reporter: &str,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf, HelperError> {
        let json = serde_json::to_string_pretty(content)?;
        tracing::debug!(%json, "log dump: {message}");

        let reporter = self.reporter_dir(reporter)?;
        let stamp = timestamp.format("%Y%m%d-%H%M%S").to_string();
        let body = render(&stamp, &reporter, message, message, &json);
        self.write(&reporter, &format!("{stamp}-log.txt"), &body)
    }

    /// Reporter name reduced to one safe path component.
    fn reporter_dir(&self, reporter: &str) -> Result<String, HelperError> {
        let raw = match reporter.trim() {
            "" => self.config.default_reporter.trim(),
            name => name,
        };
        let name: String = raw
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        if name.is_empty() || name == "." || name == ".." {
            return Err(HelperError::InvalidPath(format!(
                "reporter '{reporter}' is not a usable directory name"
            )));
        }
        Ok(name)
    }

    fn write(
        &self,
        reporter: &str,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf, HelperError> {
        let dir = self.config.directory.join(reporter);
        fs::create_dir_all(&dir)?;
        let path = dir.join(file_name);
        fs::write(&path, content)?;
        Ok(path)
    }
}

fn render(stamp: &str, reporter: &str, message: &str, original: &str, json: &str) -> String {
    format!(
        "Date: {stamp}\nReporter: {reporter}\nMessage: {message}\nOriginal Message:\n{RULE}\n\n\n\
         {original}\n\nJson:\n{RULE}\n{json}\n"
    )
}
