// SPDX-License-Identifier: MPL-2.0
//! Gallery component: search, pagination and download state with its
//! update logic.
//!
//! The component performs no I/O. Every operation mutates [`State`] and
//! returns [`Effect`]s describing the work the application must run; the
//! results come back as [`Message`]s.

use crate::application::port::{FetchError, SearchRequest};
use crate::domain::{PageNumber, PageSize, Photo, PhotoId, Query};
use crate::media::{DownloadError, ThumbnailCache, ThumbnailRequest};
use crate::ui::notifications::Notification;
use crate::ui::widgets::animated_spinner;
use std::collections::HashSet;
use std::path::PathBuf;

/// Identifier used for the grid scrollable widget.
pub const GRID_SCROLLABLE_ID: &str = "gallery-grid-scrollable";

/// Tag attached to each search or pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Rejected search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("search query is empty")]
    EmptyQuery,
}

impl ValidationError {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::EmptyQuery => "notification-search-empty-query",
        }
    }
}

/// What a fetch was issued for, which decides how its result is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Page 1 of a new query; results replace the list. A silent search
    /// only reports failures.
    Search { silent: bool },
    /// Next page of the current query; results are appended.
    LoadMore,
}

/// A search request the application must send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: RequestId,
    pub request: SearchRequest,
}

/// A download the application must run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTicket {
    pub photo: PhotoId,
    pub url: String,
    pub photographer: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SubmitSearch,
    LoadMore,
    SearchCompleted {
        request: RequestId,
        result: Result<Vec<Photo>, FetchError>,
    },
    ThumbnailLoaded {
        photo: PhotoId,
        result: Result<Vec<u8>, FetchError>,
    },
    DownloadRequested(PhotoId),
    DownloadCompleted {
        photo: PhotoId,
        result: Result<PathBuf, DownloadError>,
    },
    ViewportResized(f32),
    SpinnerTick,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone)]
pub enum Effect {
    Search(SearchTicket),
    LoadThumbnails(Vec<ThumbnailRequest>),
    Download(DownloadTicket),
    ScrollToTop,
    ScrollToEnd,
    Notify(Notification),
}

/// Submitted query and page, restored when the request that replaced them
/// fails.
#[derive(Debug, Clone)]
struct Cursor {
    query: Option<Query>,
    page: PageNumber,
}

#[derive(Debug)]
struct PendingFetch {
    id: RequestId,
    kind: FetchKind,
    rollback: Cursor,
}

#[derive(Debug)]
pub struct State {
    /// Text field content, distinct from the submitted query.
    draft: String,
    query: Option<Query>,
    page: PageNumber,
    page_size: PageSize,
    photos: Vec<Photo>,
    pending: Option<PendingFetch>,
    next_request: u64,
    downloads: HashSet<PhotoId>,
    thumbnails: ThumbnailCache,
    viewport_width: f32,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new(page_size: PageSize, thumbnail_capacity: usize) -> Self {
        Self {
            draft: String::new(),
            query: None,
            page: PageNumber::FIRST,
            page_size,
            photos: Vec::new(),
            pending: None,
            next_request: 0,
            downloads: HashSet::new(),
            thumbnails: ThumbnailCache::new(thumbnail_capacity),
            viewport_width: 0.0,
            spinner_rotation: 0.0,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Last submitted query, which pagination continues.
    #[must_use]
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// True while a search or pagination request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn is_downloading(&self, photo: PhotoId) -> bool {
        self.downloads.contains(&photo)
    }

    #[must_use]
    pub fn downloads(&self) -> &HashSet<PhotoId> {
        &self.downloads
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Validates `input` and issues a request for page 1 of it.
    ///
    /// The current results stay on screen until the response replaces them.
    pub fn submit_search(&mut self, input: &str) -> Result<SearchTicket, ValidationError> {
        let query = Query::parse(input).ok_or(ValidationError::EmptyQuery)?;
        Ok(self.issue(query, PageNumber::FIRST, FetchKind::Search { silent: false }))
    }

    /// Like [`submit_search`](Self::submit_search), but success and
    /// zero-result outcomes are not announced. Used for the startup search.
    pub fn initial_search(&mut self, input: &str) -> Option<SearchTicket> {
        let query = Query::parse(input)?;
        self.draft = query.as_str().to_string();
        Some(self.issue(query, PageNumber::FIRST, FetchKind::Search { silent: true }))
    }

    /// Issues a request for the next page of the current query.
    ///
    /// Returns `None` when there is nothing to extend or a fetch is already
    /// outstanding.
    pub fn load_more(&mut self) -> Option<SearchTicket> {
        if self.photos.is_empty() || self.is_loading() {
            tracing::debug!(
                photos = self.photos.len(),
                loading = self.is_loading(),
                "load more ignored"
            );
            return None;
        }
        let query = self.query.clone()?;
        let next = self.page.next();
        Some(self.issue(query, next, FetchKind::LoadMore))
    }

    fn issue(&mut self, query: Query, page: PageNumber, kind: FetchKind) -> SearchTicket {
        // A superseded request never committed, so keep its rollback point.
        let rollback = match self.pending.take() {
            Some(superseded) => {
                tracing::debug!(request = superseded.id.0, "request superseded");
                superseded.rollback
            }
            None => Cursor {
                query: self.query.clone(),
                page: self.page,
            },
        };

        self.next_request += 1;
        let id = RequestId(self.next_request);
        self.query = Some(query.clone());
        self.page = page;
        self.pending = Some(PendingFetch { id, kind, rollback });

        SearchTicket {
            id,
            request: SearchRequest::new(query, page, self.page_size),
        }
    }

    /// Applies the response to request `id`.
    ///
    /// Responses to anything but the outstanding request are discarded.
    pub fn complete_search(
        &mut self,
        id: RequestId,
        result: Result<Vec<Photo>, FetchError>,
    ) -> Vec<Effect> {
        let Some(pending) = self.pending.take_if(|pending| pending.id == id) else {
            tracing::debug!(request = id.0, "discarding stale search response");
            return Vec::new();
        };

        let photos = match result {
            Ok(photos) => photos,
            Err(error) => {
                tracing::warn!(request = id.0, %error, "search failed");
                self.restore(pending.rollback);
                return vec![Effect::Notify(Notification::error(error.i18n_key()))];
            }
        };

        let mut effects = Vec::new();
        match pending.kind {
            FetchKind::Search { silent } => {
                tracing::info!(
                    query = %self.query_text(),
                    count = photos.len(),
                    "search completed"
                );
                self.photos = photos;
                if !silent {
                    effects.push(Effect::Notify(if self.photos.is_empty() {
                        Notification::info("notification-no-results")
                    } else {
                        Notification::success("notification-photos-loaded")
                            .with_arg("count", self.photos.len().to_string())
                    }));
                }
                effects.push(Effect::ScrollToTop);
            }
            FetchKind::LoadMore if photos.is_empty() => {
                tracing::info!(page = self.page.value(), "no more photos");
                let query = self.query_text();
                self.page = pending.rollback.page;
                effects.push(Effect::Notify(
                    Notification::info("notification-no-more-results").with_arg("query", query),
                ));
            }
            FetchKind::LoadMore => {
                tracing::info!(
                    page = self.page.value(),
                    count = photos.len(),
                    "page appended"
                );
                let count = photos.len();
                self.photos.extend(photos);
                effects.push(Effect::Notify(
                    Notification::success("notification-photos-loaded")
                        .with_arg("count", count.to_string()),
                ));
                effects.push(Effect::ScrollToEnd);
            }
        }

        let requests = self.thumbnails.request_missing(&self.photos);
        if !requests.is_empty() {
            effects.push(Effect::LoadThumbnails(requests));
        }
        effects
    }

    /// Starts the single download attempt for `photo`.
    ///
    /// Returns `None` if the photo is not listed or already downloading.
    pub fn request_download(&mut self, photo: PhotoId) -> Option<DownloadTicket> {
        let listed = self.photos.iter().find(|p| p.id() == photo)?;
        if !self.downloads.insert(photo) {
            return None;
        }
        Some(DownloadTicket {
            photo,
            url: listed.original_url().to_string(),
            photographer: listed.photographer().to_string(),
        })
    }

    /// Clears the in-flight marker and reports the outcome.
    pub fn complete_download(
        &mut self,
        photo: PhotoId,
        result: Result<PathBuf, DownloadError>,
    ) -> Notification {
        self.downloads.remove(&photo);
        match result {
            Ok(path) => {
                let file = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                Notification::success("notification-download-success").with_arg("file", file)
            }
            Err(error) => Notification::error(error.i18n_key()),
        }
    }

    fn restore(&mut self, cursor: Cursor) {
        self.query = cursor.query;
        self.page = cursor.page;
    }

    fn query_text(&self) -> String {
        self.query
            .as_ref()
            .map(|q| q.as_str().to_string())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------------

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::QueryChanged(text) => {
                self.draft = text;
                Vec::new()
            }
            Message::SubmitSearch => {
                let input = self.draft.clone();
                match self.submit_search(&input) {
                    Ok(ticket) => vec![Effect::Search(ticket)],
                    Err(error) => vec![Effect::Notify(Notification::warning(error.i18n_key()))],
                }
            }
            Message::LoadMore => self.load_more().map(Effect::Search).into_iter().collect(),
            Message::SearchCompleted { request, result } => self.complete_search(request, result),
            Message::ThumbnailLoaded { photo, result } => {
                self.thumbnails.complete(photo, result);
                Vec::new()
            }
            Message::DownloadRequested(photo) => self
                .request_download(photo)
                .map(Effect::Download)
                .into_iter()
                .collect(),
            Message::DownloadCompleted { photo, result } => {
                vec![Effect::Notify(self.complete_download(photo, result))]
            }
            Message::ViewportResized(width) => {
                self.viewport_width = width;
                Vec::new()
            }
            Message::SpinnerTick => {
                self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                Vec::new()
            }
        }
    }
}
