// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Search endpoint, page size and startup query
//! - `[downloads]` - Where downloaded photos are saved
//! - `[notifications]` - Toast auto-dismiss interval
//! - `[thumbnails]` - Thumbnail cache size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The API key is deliberately *not* part of `settings.toml`; see [`ApiKey`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let page_size = config.api.page_size();
//! let toast_duration = config.notifications.duration();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::PageSize;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable holding the search API key.
pub const ENV_API_KEY: &str = "ICED_GALLERY_API_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Search service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Search endpoint URL.
    #[serde(default = "default_search_url", skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,

    /// Photos requested per page.
    #[serde(default = "default_per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Query searched at startup. Empty disables the startup search.
    #[serde(
        default = "default_initial_query",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_query: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            per_page: default_per_page(),
            initial_query: default_initial_query(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn search_url(&self) -> &str {
        self.search_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_SEARCH_URL)
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.per_page.unwrap_or(DEFAULT_PER_PAGE))
    }
}

/// Download settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DownloadsConfig {
    /// Directory downloaded photos are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// How long a toast stays visible (milliseconds).
    #[serde(
        default = "default_notification_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_notification_duration_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Returns the auto-dismiss interval, clamped to the supported range.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let millis = self
            .duration_ms
            .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS)
            .clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS);
        Duration::from_millis(millis)
    }
}

/// Thumbnail cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailsConfig {
    /// Number of decoded thumbnails kept in memory.
    #[serde(
        default = "default_thumbnail_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_capacity: Option<usize>,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_thumbnail_cache_capacity(),
        }
    }
}

impl ThumbnailsConfig {
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache_capacity
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_CAPACITY)
            .clamp(MIN_THUMBNAIL_CACHE_CAPACITY, MAX_THUMBNAIL_CACHE_CAPACITY)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub downloads: DownloadsConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub thumbnails: ThumbnailsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_search_url() -> Option<String> {
    Some(DEFAULT_SEARCH_URL.to_string())
}

fn default_per_page() -> Option<u32> {
    Some(DEFAULT_PER_PAGE)
}

fn default_initial_query() -> Option<String> {
    Some(DEFAULT_INITIAL_QUERY.to_string())
}

fn default_notification_duration_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DURATION_MS)
}

fn default_thumbnail_cache_capacity() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_CACHE_CAPACITY)
}

// =============================================================================
// API Key
// =============================================================================

/// Static credential attached to every search request.
///
/// Never written to `settings.toml` and never printed: `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key, rejecting blank values.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Resolves the key from, in order: the `--api-key` flag, the
    /// `ICED_GALLERY_API_KEY` environment variable, and the value of that
    /// variable captured at build time.
    #[must_use]
    pub fn resolve(cli_value: Option<String>) -> Option<Self> {
        Self::resolve_from(
            cli_value,
            std::env::var(ENV_API_KEY).ok(),
            option_env!("ICED_GALLERY_API_KEY"),
        )
    }

    fn resolve_from(
        cli_value: Option<String>,
        env_value: Option<String>,
        build_value: Option<&str>,
    ) -> Option<Self> {
        cli_value
            .and_then(Self::new)
            .or_else(|| env_value.and_then(Self::new))
            .or_else(|| build_value.and_then(Self::new))
    }

    /// Returns the raw key for use in a request header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
