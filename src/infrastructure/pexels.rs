// SPDX-License-Identifier: MPL-2.0
//! Pexels search API client.
//!
//! One `GET {search_url}?query=..&page=..&per_page=..` per search, with the
//! API key sent verbatim in the `Authorization` header. Image downloads are
//! plain `GET`s without credentials.

use crate::application::port::{FetchError, ImageFetcher, PhotoSearch, SearchRequest};
use crate::config::{ApiConfig, ApiKey};
use crate::domain::{Photo, PhotoId, PhotoSources};
use futures_util::future::{BoxFuture, FutureExt};
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    photos: Vec<PhotoRecord>,
}

#[derive(Debug, Deserialize)]
struct PhotoRecord {
    id: u64,
    #[serde(default)]
    photographer: String,
    #[serde(default)]
    alt: Option<String>,
    src: SourceRecord,
}

#[derive(Debug, Deserialize)]
struct SourceRecord {
    medium: String,
    original: String,
}

impl From<PhotoRecord> for Photo {
    fn from(record: PhotoRecord) -> Self {
        Photo::new(
            PhotoId::new(record.id),
            record.photographer,
            record.alt.unwrap_or_default(),
            PhotoSources {
                medium: record.src.medium,
                original: record.src.original,
            },
        )
    }
}

/// Decodes a search response body into photos, preserving service order.
pub fn parse_search_response(body: &[u8]) -> Result<Vec<Photo>, FetchError> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(response.photos.into_iter().map(Photo::from).collect())
}

// =============================================================================
// Client
// =============================================================================

/// HTTP adapter for the Pexels API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct PexelsClient {
    http: reqwest::Client,
    search_url: String,
    api_key: Option<ApiKey>,
}

impl std::fmt::Debug for PexelsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PexelsClient")
            .field("search_url", &self.search_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl PexelsClient {
    /// Builds a client for the configured endpoint.
    ///
    /// The key is injected by the caller; the client never reads it from the
    /// environment itself. Without a key requests are still sent and the
    /// service rejects them.
    pub fn new(api: &ApiConfig, api_key: Option<ApiKey>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            search_url: api.search_url().to_string(),
            api_key,
        })
    }

    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl PhotoSearch for PexelsClient {
    fn search(&self, request: SearchRequest) -> BoxFuture<'static, Result<Vec<Photo>, FetchError>> {
        let http = self.http.clone();
        let url = self.search_url.clone();
        let api_key = self.api_key.clone();

        async move {
            let params = [
                ("query", request.query.as_str().to_string()),
                ("page", request.page.value().to_string()),
                ("per_page", request.page_size.value().to_string()),
            ];

            let mut builder = http.get(&url).query(&params);
            if let Some(key) = &api_key {
                builder = builder.header(AUTHORIZATION, key.expose());
            }

            tracing::debug!(
                query = %request.query,
                page = request.page.value(),
                per_page = request.page_size.value(),
                "searching photos"
            );

            let response = builder
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            parse_search_response(&body)
        }
        .boxed()
    }
}

impl ImageFetcher for PexelsClient {
    fn fetch_image(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
        let http = self.http.clone();
        let url = url.to_string();

        async move {
            let response = http
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            Ok(bytes.to_vec())
        }
        .boxed()
    }
}
