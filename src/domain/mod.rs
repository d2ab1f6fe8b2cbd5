// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core search types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so the search rules can be
//! tested without any network or rendering layer.
//!
//! # Modules
//!
//! - [`photo`]: Search types ([`Photo`](photo::Photo), [`Query`](photo::Query),
//!   [`PageNumber`](photo::PageNumber), [`PageSize`](photo::PageSize))

pub mod photo;

pub use photo::{PageNumber, PageSize, Photo, PhotoId, PhotoSources, Query};
