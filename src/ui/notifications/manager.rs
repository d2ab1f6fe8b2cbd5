// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    /// How long a notification stays visible, whatever its severity.
    duration: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS))
    }
}

impl Manager {
    /// Creates an empty manager whose toasts disappear after `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            duration,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, mut notification: Notification) {
        let key = notification.message_key();
        match notification.severity() {
            Severity::Error => tracing::error!(key, "notification"),
            Severity::Warning => tracing::warn!(key, "notification"),
            Severity::Success | Severity::Info => tracing::info!(key, "notification"),
        }

        if self.visible.len() < MAX_VISIBLE {
            notification.mark_shown();
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that has outlived its duration.
    ///
    /// Queued notifications start their timer only once promoted, so each
    /// one gets the full duration on screen.
    pub fn tick(&mut self) {
        let duration = self.duration;
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(duration))
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(mut notification) = self.queue.pop_front() {
                notification.mark_shown();
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_lived() -> Manager {
        Manager::new(Duration::from_secs(3600))
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = long_lived();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn default_duration_matches_config_default() {
        assert_eq!(
            Manager::default().duration(),
            Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS)
        );
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = long_lived();

        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::info("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn newest_notification_is_shown_first() {
        let mut manager = long_lived();
        manager.push(Notification::success("first"));
        manager.push(Notification::error("second"));

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, ["second", "first"]);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = long_lived();

        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued"));
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = long_lived();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = long_lived();
        let notification = Notification::error("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn every_severity_auto_dismisses() {
        let mut manager = Manager::new(Duration::ZERO);
        manager.push(Notification::success("a"));
        manager.push(Notification::warning("b"));
        manager.push(Notification::error("c"));
        manager.push(Notification::info("d"));

        manager.handle_message(&Message::Tick);
        // The queued one was promoted during the sweep; its timer starts now.
        assert_eq!(manager.visible_count(), 1);
        manager.tick();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn promoted_notification_gets_full_duration() {
        let duration = Duration::from_millis(500);
        let mut manager = Manager::new(duration);
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::info(format!("burst-{i}")));
        }
        assert_eq!(manager.queued_count(), 1);

        std::thread::sleep(duration + Duration::from_millis(50));
        manager.tick();
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);

        std::thread::sleep(Duration::from_millis(100));
        manager.tick();
        assert_eq!(manager.visible_count(), 1);

        std::thread::sleep(duration);
        manager.tick();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = long_lived();
        manager.push(Notification::error("fresh"));
        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }
}
