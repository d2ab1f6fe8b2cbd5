// SPDX-License-Identifier: MPL-2.0
//! Image retrieval port definition.

use super::search::FetchError;
use futures_util::future::BoxFuture;

/// Retrieves the raw bytes of an image URL.
///
/// Used for both grid thumbnails and full-resolution downloads. A single
/// attempt is made; non-success statuses are reported as
/// [`FetchError::Status`].
pub trait ImageFetcher: Send + Sync {
    fn fetch_image(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>>;
}
