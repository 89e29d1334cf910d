//! Notification center
//!
//! Holds the currently visible notifications. Multiple notifications
//! coexist and are independent; there is no de-duplication.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::notification::Notification;

/// The set of currently visible notifications
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification; returns its id for explicit dismissal
    pub fn push(&mut self, notification: Notification) -> Uuid {
        tracing::debug!(
            severity = ?notification.severity,
            message = %notification.message,
            "notification shown"
        );
        let id = notification.id;
        self.items.push(notification);
        id
    }

    /// Notifications still visible at the given instant
    pub fn active_at(&self, now: DateTime<Utc>) -> Vec<&Notification> {
        self.items.iter().filter(|n| !n.expired_at(now)).collect()
    }

    /// Drop every notification whose dismiss interval has elapsed
    pub fn sweep(&mut self, now: DateTime<Utc>) {
        self.items.retain(|n| !n.expired_at(now));
    }

    /// User clicked the close button
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() < before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent notification, if any (newest last)
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }
}
