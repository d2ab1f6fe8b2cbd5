// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo search gallery built with the Iced GUI framework.
//!
//! It queries the Pexels search API, shows the results in a responsive grid,
//! pages further results on demand and saves originals to disk.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod media;
pub mod ui;
