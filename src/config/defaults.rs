// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Search API**: Endpoint, page size and startup query
//! - **Notifications**: Toast auto-dismiss interval
//! - **Thumbnails**: In-memory thumbnail cache size

use crate::domain::photo::page_size_bounds;

// ==========================================================================
// Search API Defaults
// ==========================================================================

/// Search endpoint of the Pexels API.
pub const DEFAULT_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

/// Photos requested per page.
pub const DEFAULT_PER_PAGE: u32 = page_size_bounds::DEFAULT;

/// Query searched silently at startup.
pub const DEFAULT_INITIAL_QUERY: &str = "nature";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Time a toast stays visible before it is dismissed (milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 2_000;

/// Minimum toast duration (milliseconds).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Maximum toast duration (milliseconds).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 30_000;

// ==========================================================================
// Thumbnail Cache Defaults
// ==========================================================================

/// Number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_CAPACITY: usize = 256;

/// Minimum thumbnail cache capacity.
pub const MIN_THUMBNAIL_CACHE_CAPACITY: usize = 16;

/// Maximum thumbnail cache capacity.
pub const MAX_THUMBNAIL_CACHE_CAPACITY: usize = 4_096;
