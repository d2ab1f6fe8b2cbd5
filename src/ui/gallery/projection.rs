// SPDX-License-Identifier: MPL-2.0
//! Pure projection of gallery state into what the window shows.
//!
//! Kept free of widgets so the display rules can be checked without a
//! renderer.

use crate::domain::{Photo, PhotoId};
use std::collections::HashSet;

/// Width breakpoints (logical pixels) and the column count from each one up.
const BREAKPOINTS: [(f32, usize); 3] = [(1024.0, 4), (768.0, 3), (640.0, 2)];

/// One grid tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile<'a> {
    pub photo: &'a Photo,
    /// The download button is disabled while this is set.
    pub downloading: bool,
}

/// Everything the gallery view needs to decide what to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    pub tiles: Vec<Tile<'a>>,
    pub show_empty_state: bool,
    pub show_spinner: bool,
    pub show_load_more: bool,
}

#[must_use]
pub fn project<'a>(
    photos: &'a [Photo],
    is_loading: bool,
    downloads: &HashSet<PhotoId>,
) -> Projection<'a> {
    let tiles = photos
        .iter()
        .map(|photo| Tile {
            photo,
            downloading: downloads.contains(&photo.id()),
        })
        .collect();

    Projection {
        tiles,
        show_empty_state: photos.is_empty() && !is_loading,
        show_spinner: is_loading,
        show_load_more: !photos.is_empty() && !is_loading,
    }
}

/// Number of grid columns for a window `width` wide.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(min_width, _)| width >= *min_width)
        .map_or(1, |(_, columns)| *columns)
}
