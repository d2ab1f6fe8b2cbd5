// SPDX-License-Identifier: MPL-2.0
//! Bounded cache of grid thumbnails.
//!
//! Thumbnails are keyed by photo id and evicted least-recently-requested
//! first. An entry is created as [`Thumbnail::Loading`] the moment a fetch
//! is issued, so the same photo is never requested twice while in flight.

use crate::application::port::FetchError;
use crate::domain::{Photo, PhotoId};
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Display state of one thumbnail.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(Handle),
    Failed,
}

/// A thumbnail fetch the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailRequest {
    pub photo: PhotoId,
    pub url: String,
}

#[derive(Debug)]
pub struct ThumbnailCache {
    entries: LruCache<PhotoId, Thumbnail>,
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` thumbnails (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Looks up a thumbnail without touching recency.
    #[must_use]
    pub fn get(&self, photo: PhotoId) -> Option<&Thumbnail> {
        self.entries.peek(&photo)
    }

    /// Returns fetch requests for every photo not yet cached and marks them
    /// as loading. Photos already cached are promoted to most recent.
    pub fn request_missing<'a>(
        &mut self,
        photos: impl IntoIterator<Item = &'a Photo>,
    ) -> Vec<ThumbnailRequest> {
        let mut requests = Vec::new();
        for photo in photos {
            if self.entries.get(&photo.id()).is_some() {
                continue;
            }
            self.entries.put(photo.id(), Thumbnail::Loading);
            requests.push(ThumbnailRequest {
                photo: photo.id(),
                url: photo.display_url().to_string(),
            });
        }
        requests
    }

    /// Stores the outcome of a thumbnail fetch.
    pub fn complete(&mut self, photo: PhotoId, result: Result<Vec<u8>, FetchError>) {
        let thumbnail = match result {
            Ok(bytes) => Thumbnail::Ready(Handle::from_bytes(bytes)),
            Err(error) => {
                tracing::debug!(photo = %photo, %error, "thumbnail fetch failed");
                Thumbnail::Failed
            }
        };
        self.entries.put(photo, thumbnail);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
