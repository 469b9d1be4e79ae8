//! Error types for file import.

use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use thiserror::Error;

/// Reasons a file could not be imported.
///
/// The loader never returns these; it logs them and leaves the file
/// content empty.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The content could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// File that failed.
        path: Utf8PathBuf,
        /// Parser message.
        message: String,
    },

    /// The content is not valid UTF-8.
    #[error("{path} is not valid UTF-8")]
    Encoding {
        /// File that failed.
        path: Utf8PathBuf,
    },
}

impl ImportError {
    /// Creates a read error.
    #[must_use]
    pub fn read(path: &Utf8Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_owned(),
            source,
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(path: &Utf8Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_owned(),
            message: message.into(),
        }
    }

    /// Creates an encoding error.
    #[must_use]
    pub fn encoding(path: &Utf8Path) -> Self {
        Self::Encoding {
            path: path.to_owned(),
        }
    }
}
