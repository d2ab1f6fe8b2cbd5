// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like
//! `reqwest` and the filesystem.
//!
//! # Available Adapters
//!
//! - [`pexels`]: HTTP client for the Pexels search API (implements
//!   [`PhotoSearch`] and [`ImageFetcher`])
//! - [`file_saver`]: Saves downloads into a directory (implements [`FileSaver`])
//!
//! [`PhotoSearch`]: crate::application::port::PhotoSearch
//! [`ImageFetcher`]: crate::application::port::ImageFetcher
//! [`FileSaver`]: crate::application::port::FileSaver

pub mod file_saver;
pub mod pexels;

pub use file_saver::DiskFileSaver;
pub use pexels::PexelsClient;
