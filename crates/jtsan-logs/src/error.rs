// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for jtsan-logs

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading test logs
#[derive(Debug, Error)]
pub enum LogError {
    /// A log file could not be opened or read
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// The log file that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error reading from a log stream with no associated file
    #[error("IO error: {0}")]
    Read(#[from] std::io::Error),
}

impl LogError {
    /// Attach a file path to a reader error
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Read(source) => Self::Io {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
