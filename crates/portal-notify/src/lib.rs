//! Portal Notify: transient, auto-dismissing messages
//!
//! Consumed by the submission flows and the dashboard's record operations
//! alike. Each `show` creates one independent visible unit; dismissal is
//! either automatic after a per-call-site interval or explicit.

pub mod center;
pub mod notification;

pub use center::NotificationCenter;
pub use notification::{Notification, Severity};
