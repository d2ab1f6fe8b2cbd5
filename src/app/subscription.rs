// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::ui::gallery;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Toast expiry check interval.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner frame interval (~30 fps).
const SPINNER_INTERVAL: Duration = Duration::from_millis(33);

/// Forwards the window size, on open and on every resize, so the grid can
/// pick its column count.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| window_size_message(event))
}

fn window_size_message(event: event::Event) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}

/// Ticks only while there is a toast to expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Drives the spinner only while a fetch is outstanding.
pub fn create_spinner_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_INTERVAL).map(|_| Message::Gallery(gallery::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
