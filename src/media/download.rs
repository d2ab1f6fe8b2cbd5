// SPDX-License-Identifier: MPL-2.0
//! Photo download: fetch the full-resolution bytes and hand them to a saver.
//!
//! The saved file is named `photo-{photographer}.jpg` after sanitizing the
//! photographer name for the filesystem.

use crate::application::port::{FetchError, FileSaver, ImageFetcher, SaveError};
use std::path::PathBuf;
use std::sync::Arc;

/// Replacement for characters that are not allowed in file names.
const REPLACEMENT: char = '_';

/// Fallback used when the photographer name sanitizes to nothing.
const UNKNOWN_PHOTOGRAPHER: &str = "unknown";

/// Why a download did not end up on disk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("download failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("could not save photo: {0}")]
    Save(#[from] SaveError),
}

impl DownloadError {
    /// Notification message key describing this failure.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DownloadError::Fetch(_) => "notification-download-error",
            DownloadError::Save(_) => "notification-download-save-error",
        }
    }
}

/// Builds the target file name for a photo by `photographer`.
///
/// Path separators, reserved characters and control characters become `_`.
/// Surrounding whitespace and dots are stripped so the name can never
/// resolve to a hidden file or a parent directory.
#[must_use]
pub fn download_filename(photographer: &str) -> String {
    let sanitized: String = photographer
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => REPLACEMENT,
            c if c.is_control() => REPLACEMENT,
            c => c,
        })
        .collect();
    let trimmed = sanitized.trim_matches(|c: char| c.is_whitespace() || c == '.');

    let name = if trimmed.is_empty() {
        UNKNOWN_PHOTOGRAPHER
    } else {
        trimmed
    };
    format!("photo-{name}.jpg")
}

/// Downloads `url` and saves it under [`download_filename`]`(photographer)`.
///
/// Saving runs on the blocking thread pool so large files never stall the
/// async executor.
pub async fn download_photo(
    fetcher: Arc<dyn ImageFetcher>,
    saver: Arc<dyn FileSaver>,
    url: String,
    photographer: String,
) -> Result<PathBuf, DownloadError> {
    tracing::debug!(%url, %photographer, "downloading photo");

    let bytes = fetcher.fetch_image(&url).await.inspect_err(|e| {
        tracing::warn!(%url, error = %e, "photo download failed");
    })?;

    let filename = download_filename(&photographer);
    let saved = tokio::task::spawn_blocking(move || saver.save(&bytes, &filename))
        .await
        .map_err(|e| SaveError::Io(e.to_string()))?;

    saved.map_err(|e| {
        tracing::warn!(error = %e, "saving photo failed");
        DownloadError::Save(e)
    })
}
