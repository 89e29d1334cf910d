//! Notification unit
//!
//! One transient visible message. Auto-dismiss intervals are configured per
//! call site: near-identical flows genuinely differ (5s success in most
//! places, 8s for the login demo hint), so no single constant is imposed.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a notification, mapped to the alert style by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "alert-info",
            Severity::Success => "alert-success",
            Severity::Warning => "alert-warning",
            Severity::Danger => "alert-danger",
        }
    }
}

/// One transient visible message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    /// None means the message stays until explicitly dismissed
    pub auto_dismiss: Option<Duration>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self::new_at(message, severity, Utc::now())
    }

    /// Clock-explicit constructor; the rest of the crate takes instants too
    pub fn new_at(message: impl Into<String>, severity: Severity, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: at,
            auto_dismiss: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Danger)
    }

    /// Auto-dismiss after the given number of seconds
    pub fn dismiss_after_secs(mut self, secs: i64) -> Self {
        self.auto_dismiss = Some(Duration::seconds(secs));
        self
    }

    /// Stay until the user closes it (warnings and errors in some flows)
    pub fn sticky(mut self) -> Self {
        self.auto_dismiss = None;
        self
    }

    /// Whether the notification has outlived its dismiss interval
    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.auto_dismiss {
            Some(interval) => now - self.created_at >= interval,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn auto_dismiss_expiry() {
        let note = Notification::new_at("Saved", Severity::Success, t(0)).dismiss_after_secs(5);
        assert!(!note.expired_at(t(4)));
        assert!(note.expired_at(t(5)));
    }

    #[test]
    fn sticky_never_expires() {
        let note = Notification::new_at("Invalid credentials", Severity::Danger, t(0)).sticky();
        assert!(!note.expired_at(t(1_000_000)));
    }

    #[test]
    fn severity_classes() {
        assert_eq!(Severity::Success.css_class(), "alert-success");
        assert_eq!(Severity::Danger.css_class(), "alert-danger");
    }
}
