// SPDX-License-Identifier: MPL-2.0
//! Photo search port definition.

use crate::domain::{PageNumber, PageSize, Photo, Query};
use futures_util::future::BoxFuture;
use thiserror::Error;

/// Errors raised when a search or image request fails.
///
/// A search that matches nothing is *not* an error: it resolves to an empty
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "notification-fetch-error-network",
            FetchError::Status(_) | FetchError::Decode(_) => "notification-fetch-error",
        }
    }
}

/// One page of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Query,
    pub page: PageNumber,
    pub page_size: PageSize,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: Query, page: PageNumber, page_size: PageSize) -> Self {
        Self {
            query,
            page,
            page_size,
        }
    }
}

/// Remote photo search.
///
/// Implementations issue exactly one request per call and resolve to the
/// photos in service order.
pub trait PhotoSearch: Send + Sync {
    fn search(&self, request: SearchRequest) -> BoxFuture<'static, Result<Vec<Photo>, FetchError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_get_their_own_message() {
        assert_eq!(
            FetchError::Transport("reset".into()).i18n_key(),
            "notification-fetch-error-network"
        );
        assert_eq!(FetchError::Status(500).i18n_key(), "notification-fetch-error");
        assert_eq!(
            FetchError::Decode("eof".into()).i18n_key(),
            "notification-fetch-error"
        );
    }

    #[test]
    fn status_error_displays_code() {
        assert_eq!(
            FetchError::Status(401).to_string(),
            "unexpected HTTP status: 401"
        );
    }
}
