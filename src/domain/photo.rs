// SPDX-License-Identifier: MPL-2.0
//! Photo search value objects.
//!
//! These types carry the search session: what the user asked for
//! ([`Query`]), where pagination stands ([`PageNumber`], [`PageSize`]) and
//! what came back ([`Photo`]).

use std::fmt;

// =============================================================================
// PhotoId
// =============================================================================

/// Identifier assigned to a photo by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(u64);

impl PhotoId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Photo
// =============================================================================

/// Image URLs attached to a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSources {
    /// Display-resolution image, used for grid tiles.
    pub medium: String,
    /// Full-resolution image, used for downloads.
    pub original: String,
}

/// A single search result.
///
/// Photos are immutable once received; the gallery owns them for as long
/// as they are displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: PhotoId,
    photographer: String,
    alt: String,
    sources: PhotoSources,
}

impl Photo {
    #[must_use]
    pub fn new(
        id: PhotoId,
        photographer: impl Into<String>,
        alt: impl Into<String>,
        sources: PhotoSources,
    ) -> Self {
        Self {
            id,
            photographer: photographer.into(),
            alt: alt.into(),
            sources,
        }
    }

    #[must_use]
    pub fn id(&self) -> PhotoId {
        self.id
    }

    /// Attribution name shown under the tile and used for download filenames.
    #[must_use]
    pub fn photographer(&self) -> &str {
        &self.photographer
    }

    /// Accessible text description. May be empty.
    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    #[must_use]
    pub fn display_url(&self) -> &str {
        &self.sources.medium
    }

    #[must_use]
    pub fn original_url(&self) -> &str {
        &self.sources.original
    }
}

// =============================================================================
// Query
// =============================================================================

/// A search query, guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Validates raw user input.
    ///
    /// Returns `None` when the input is empty or whitespace-only.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PageNumber
// =============================================================================

/// 1-based pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    /// Creates a page number, treating 0 as the first page.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == 1
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

// =============================================================================
// PageSize
// =============================================================================

/// Page size bounds accepted by the search service.
pub mod page_size_bounds {
    pub const MIN: u32 = 1;
    /// Largest page the service will return.
    pub const MAX: u32 = 80;
    pub const DEFAULT: u32 = 12;
}

/// Number of photos requested per page, clamped to the service limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self(size.clamp(page_size_bounds::MIN, page_size_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_size_bounds::DEFAULT)
    }
}
