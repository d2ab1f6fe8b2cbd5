// SPDX-License-Identifier: MPL-2.0
//! Localized user-facing text.
//!
//! Translations are Fluent (`.ftl`) files embedded at build time. The locale
//! comes from the `--lang` flag, then `general.language` in the settings
//! file, then the operating system, and finally `en-US`. Keys missing from
//! the selected locale fall back to the `en-US` text.

pub mod fluent;

pub use fluent::I18n;
