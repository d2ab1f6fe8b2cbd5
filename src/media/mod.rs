// SPDX-License-Identifier: MPL-2.0
//! Remote image handling: grid thumbnails and full-resolution downloads.

pub mod download;
pub mod thumbnails;

pub use download::{download_filename, download_photo, DownloadError};
pub use thumbnails::{Thumbnail, ThumbnailCache, ThumbnailRequest};
