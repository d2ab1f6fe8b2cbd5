// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery, the toast manager and the
//! services that reach the network and the filesystem. Startup policy
//! (config loading, credential warnings, the initial search) lives here so
//! it is easy to audit user-facing behavior.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{FetchError, FileSaver, ImageFetcher, PhotoSearch, SearchRequest};
use crate::config::{self, Config};
use crate::domain::Photo;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{DiskFileSaver, PexelsClient};
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use futures_util::future::{BoxFuture, FutureExt};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1080.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;

/// The adapters the application talks to.
#[derive(Clone)]
pub struct Services {
    pub search: Arc<dyn PhotoSearch>,
    pub images: Arc<dyn ImageFetcher>,
    pub saver: Arc<dyn FileSaver>,
}

impl Services {
    /// Builds the HTTP and disk adapters from configuration.
    ///
    /// If the HTTP client cannot be created, every request fails with that
    /// error so the window still opens and reports it.
    pub fn from_config(config: &Config, api_key: Option<config::ApiKey>) -> Self {
        let download_dir = paths::get_download_dir(config.downloads.directory.clone());
        let saver: Arc<dyn FileSaver> = Arc::new(DiskFileSaver::new(download_dir));

        match PexelsClient::new(&config.api, api_key) {
            Ok(client) => {
                let client = Arc::new(client);
                Self {
                    search: client.clone(),
                    images: client,
                    saver,
                }
            }
            Err(error) => {
                tracing::error!(%error, "HTTP client unavailable");
                let offline = Arc::new(Offline(error));
                Self {
                    search: offline.clone(),
                    images: offline,
                    saver,
                }
            }
        }
    }
}

/// Stand-in adapter that fails every request with the same error.
struct Offline(FetchError);

impl PhotoSearch for Offline {
    fn search(&self, _request: SearchRequest) -> BoxFuture<'static, Result<Vec<Photo>, FetchError>> {
        let error = self.0.clone();
        async move { Err(error) }.boxed()
    }
}

impl ImageFetcher for Offline {
    fn fetch_image(&self, _url: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
        let error = self.0.clone();
        async move { Err(error) }.boxed()
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    services: Services,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.gallery.photos().len())
            .field("loading", &self.gallery.is_loading())
            .field("notifications", &self.notifications.visible_count())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, builds the services and starts the initial
    /// search.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone(), flags.download_dir.clone());
        let (config, config_warning) = config::load();
        let services = Services::from_config(&config, flags.api_key.clone());
        Self::with_services(flags, &config, config_warning, services)
    }

    /// Builds the application around the given services.
    pub fn with_services(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
        services: Services,
    ) -> (Self, Task<Message>) {
        let mut app = App {
            i18n: I18n::new(flags.lang.clone(), config),
            gallery: gallery::State::new(config.api.page_size(), config.thumbnails.capacity()),
            notifications: notifications::Manager::new(config.notifications.duration()),
            theme_mode: config.general.theme_mode,
            services,
        };

        // Until the window reports its size, lay the grid out for the
        // requested one.
        let _ = app
            .gallery
            .update(gallery::Message::ViewportResized(WINDOW_DEFAULT_WIDTH));

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if flags.api_key.is_none() {
            app.notifications
                .push(Notification::warning("notification-missing-api-key"));
        }

        let initial_query = flags.query.or_else(|| config.api.initial_query.clone());
        let task = match initial_query.and_then(|query| app.gallery.initial_search(&query)) {
            Some(ticket) => app.run_effects(vec![gallery::Effect::Search(ticket)]),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.query() {
            Some(query) => format!("{query} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            subscription::create_spinner_subscription(self.gallery.is_loading()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
            services: &self.services,
        }
    }

    fn run_effects(&mut self, effects: Vec<gallery::Effect>) -> Task<Message> {
        update::run_effects(&mut self.update_context(), effects)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut self.update_context(), gallery_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.gallery
                    .update(gallery::Message::ViewportResized(size.width));
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
