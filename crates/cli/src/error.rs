// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

use std::path::PathBuf;

/// Nohush error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tool identifier outside the recognized set
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File read failure, reported on stderr without stopping the run
    #[error("Error reading {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using nohush Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
///
/// Findings take precedence over read errors; read errors over a clean run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No findings, no errors
    Success = 0,
    /// At least one finding
    Findings = 1,
    /// Usage error, or a read failure with no findings
    Error = 2,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::UnknownTool(_) | Error::Argument(_) | Error::Io { .. } => ExitCode::Error,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
