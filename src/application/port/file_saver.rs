// SPDX-License-Identifier: MPL-2.0
//! File saving port definition.
//!
//! Downloads end with a call to [`FileSaver::save`]. The desktop adapter
//! writes into the download directory; tests use an in-memory recorder.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting downloaded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// No directory is available to save into.
    #[error("no download directory available")]
    NoTargetDirectory,

    /// Writing the file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::Io(err.to_string())
    }
}

/// Persists bytes under a suggested filename.
///
/// Returns the location the bytes ended up at, which may differ from the
/// suggestion (e.g. when a file with that name already exists).
pub trait FileSaver: Send + Sync {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, SaveError>;
}
