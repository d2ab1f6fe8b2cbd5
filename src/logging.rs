// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter is read from `ICED_GALLERY_LOG` using the usual `EnvFilter`
//! directive syntax and defaults to `iced_gallery=info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "ICED_GALLERY_LOG";

const DEFAULT_FILTER: &str = "iced_gallery=info";

/// Installs the global subscriber writing to stderr.
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::info!("still running");
    }
}
