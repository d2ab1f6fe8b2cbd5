// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--download-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_GALLERY_CONFIG_DIR`, `ICED_GALLERY_DOWNLOAD_DIR`)
//! 4. **Configured value** (download directory only, `[downloads] directory`)
//! 5. **Platform default** - via `dirs` crate
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.download_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

/// Environment variable to override the download directory.
pub const ENV_DOWNLOAD_DIR: &str = "ICED_GALLERY_DOWNLOAD_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for download directory (set once at startup).
static CLI_DOWNLOAD_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for config and download directories.
///
/// Later calls are ignored; the first initialization wins.
pub fn init_cli_overrides(config_dir: Option<String>, download_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
    if CLI_DOWNLOAD_DIR.set(download_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("download dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_download_dir() -> Option<PathBuf> {
    CLI_DOWNLOAD_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// Platform defaults:
///    - Linux: `~/.config/IcedGallery/`
///    - macOS: `~/Library/Application Support/IcedGallery/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\IcedGallery\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory downloads are saved into.
///
/// `configured` is the `[downloads] directory` value from `settings.toml`.
/// Falls back to the current directory when the platform has no download
/// directory.
pub fn get_download_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    get_download_dir_with_override(None, configured)
}

/// Returns the download directory with an optional override.
pub fn get_download_dir_with_override(
    override_path: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_download_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_DOWNLOAD_DIR) {
        return Some(path);
    }

    if let Some(path) = configured {
        return Some(path);
    }

    dirs::download_dir().or_else(|| std::env::current_dir().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn env_var_beats_configured_download_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DOWNLOAD_DIR, "/env/downloads");

        let result = get_download_dir(Some(PathBuf::from("/configured/downloads")));
        assert_eq!(result, Some(PathBuf::from("/env/downloads")));

        std::env::remove_var(ENV_DOWNLOAD_DIR);
    }

    #[test]
    fn configured_download_dir_is_used_without_env() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DOWNLOAD_DIR);

        let configured = PathBuf::from("/configured/downloads");
        let result = get_download_dir(Some(configured.clone()));
        assert_eq!(result, Some(configured));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DOWNLOAD_DIR, "");

        let configured = PathBuf::from("/configured/downloads");
        let result = get_download_dir(Some(configured.clone()));
        assert_eq!(result, Some(configured));

        std::env::remove_var(ENV_DOWNLOAD_DIR);
    }

    #[test]
    fn override_path_takes_precedence_for_download_dir() {
        let override_path = PathBuf::from("/override/downloads");
        let result = get_download_dir_with_override(
            Some(override_path.clone()),
            Some(PathBuf::from("/configured")),
        );
        assert_eq!(result, Some(override_path));
    }
}
