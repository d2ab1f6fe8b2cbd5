// SPDX-License-Identifier: MPL-2.0
//! Saves downloaded photos into a directory on disk.
//!
//! Bytes are first written to a temporary `.part` file inside the target
//! directory and only renamed to the final name once fully written. A
//! failed write drops the temporary file, which deletes it.

use crate::application::port::{FileSaver, SaveError};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Upper bound on ` (n)` suffixes tried before giving up on a free name.
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// [`FileSaver`] writing into a fixed directory.
#[derive(Debug, Clone)]
pub struct DiskFileSaver {
    directory: Option<PathBuf>,
}

impl DiskFileSaver {
    /// Creates a saver for `directory`. `None` makes every save fail with
    /// [`SaveError::NoTargetDirectory`].
    #[must_use]
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

impl FileSaver for DiskFileSaver {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, SaveError> {
        let directory = self.directory.as_ref().ok_or(SaveError::NoTargetDirectory)?;
        std::fs::create_dir_all(directory)?;

        let mut part = tempfile::Builder::new()
            .prefix(".iced_gallery-")
            .suffix(".part")
            .tempfile_in(directory)?;
        part.write_all(bytes)?;
        part.flush()?;

        let target = available_path(directory, filename)?;
        part.persist_noclobber(&target)
            .map_err(|e| SaveError::Io(e.error.to_string()))?;

        tracing::info!(path = %target.display(), bytes = bytes.len(), "photo saved");
        Ok(target)
    }
}

/// Returns `directory/filename`, or the first free `stem (n).ext` variant.
fn available_path(directory: &Path, filename: &str) -> Result<PathBuf, SaveError> {
    let candidate = directory.join(filename);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let name = Path::new(filename);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = name.extension().map(|e| e.to_string_lossy().into_owned());

    for n in 1..=MAX_NAME_ATTEMPTS {
        let numbered = match &extension {
            Some(ext) => format!("{stem} ({n}).{ext}"),
            None => format!("{stem} ({n})"),
        };
        let candidate = directory.join(numbered);
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(SaveError::Io(format!("no free file name for {filename}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_writes_bytes_under_requested_name() {
        let dir = tempdir().expect("failed to create temp dir");
        let saver = DiskFileSaver::new(Some(dir.path().to_path_buf()));

        let path = saver
            .save(b"jpeg-bytes", "photo-Ansel.jpg")
            .expect("save should succeed");

        assert_eq!(path, dir.path().join("photo-Ansel.jpg"));
        assert_eq!(std::fs::read(&path).expect("file should exist"), b"jpeg-bytes");
    }

    #[test]
    fn existing_file_gets_numbered_suffix() {
        let dir = tempdir().expect("failed to create temp dir");
        let saver = DiskFileSaver::new(Some(dir.path().to_path_buf()));

        let first = saver.save(b"one", "photo-A.jpg").expect("first save");
        let second = saver.save(b"two", "photo-A.jpg").expect("second save");
        let third = saver.save(b"three", "photo-A.jpg").expect("third save");

        assert_eq!(first, dir.path().join("photo-A.jpg"));
        assert_eq!(second, dir.path().join("photo-A (1).jpg"));
        assert_eq!(third, dir.path().join("photo-A (2).jpg"));
        assert_eq!(std::fs::read(&first).expect("first file"), b"one");
    }

    #[test]
    fn no_partial_files_are_left_behind() {
        let dir = tempdir().expect("failed to create temp dir");
        let saver = DiskFileSaver::new(Some(dir.path().to_path_buf()));
        saver.save(b"data", "photo-B.jpg").expect("save should succeed");

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .expect("dir should be readable")
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".part"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("deep").join("downloads");
        let saver = DiskFileSaver::new(Some(nested.clone()));

        let path = saver.save(b"x", "photo-C.jpg").expect("save should succeed");
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn no_directory_is_an_error() {
        let saver = DiskFileSaver::new(None);
        assert_eq!(
            saver.save(b"x", "photo.jpg"),
            Err(SaveError::NoTargetDirectory)
        );
    }
}
