//! Keystroke debouncing
//!
//! Coalesces rapid inputs into a single validation after a quiescence
//! window. Last write wins: a new input supersedes any pending one, which is
//! how the registration form keeps email validation from firing on every
//! keystroke.

use chrono::{DateTime, Duration, Utc};

/// A pending value waiting out its quiescence window
#[derive(Debug, Clone)]
struct Pending {
    value: String,
    arrived_at: DateTime<Utc>,
}

/// Instant-based debouncer; callers supply the clock
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    /// The registration form's email debounce window
    pub const DEFAULT_WINDOW_MS: i64 = 300;

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn with_default_window() -> Self {
        Self::new(Duration::milliseconds(Self::DEFAULT_WINDOW_MS))
    }

    /// Record an input, superseding any pending one
    pub fn input(&mut self, value: impl Into<String>, at: DateTime<Utc>) {
        self.pending = Some(Pending {
            value: value.into(),
            arrived_at: at,
        });
    }

    /// Take the settled value if the window has elapsed since the last input
    pub fn take_ready(&mut self, now: DateTime<Utc>) -> Option<String> {
        let ready = self
            .pending
            .as_ref()
            .map(|p| now - p.arrived_at >= self.window)
            .unwrap_or(false);
        if ready {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::with_default_window()
    }
}
