// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the gallery logic remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`search`]: Photo search against the remote service
//! - [`image`]: Raw image retrieval (thumbnails and originals)
//! - [`file_saver`]: Persisting downloaded bytes under a filename
//!
//! # Design Notes
//!
//! - Network ports return `'static` boxed futures so callers can hand them
//!   straight to `iced::Task::perform`
//! - Traits are `Send + Sync` and used behind `Arc<dyn ...>`
//! - Errors are `Clone` because they travel inside iced messages

pub mod file_saver;
pub mod image;
pub mod search;

pub use file_saver::{FileSaver, SaveError};
pub use image::ImageFetcher;
pub use search::{FetchError, PhotoSearch, SearchRequest};
