// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::ApiKey;
use crate::ui::gallery;
use crate::ui::notifications;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `en-US`, `fr`).
    pub lang: Option<String>,
    /// Search run at startup instead of the configured initial query.
    pub query: Option<String>,
    /// Credential for the search service, already resolved by the launcher.
    pub api_key: Option<ApiKey>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Optional download directory override.
    pub download_dir: Option<String>,
}
