//! Form snapshots and submission outcomes
//!
//! A snapshot is the ordered field-name → value mapping captured at submit
//! time. It is immutable once captured: the payload for the simulated call,
//! and the rollback target for the profile editor's cancel action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portal_validate::FormState;

/// Immutable capture of a form's values at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    entries: Vec<(String, String)>,
    captured_at: DateTime<Utc>,
}

impl FormSnapshot {
    /// Capture the current values of every field, in declaration order
    pub fn capture(form: &FormState) -> Self {
        Self {
            entries: form.entries(),
            captured_at: Utc::now(),
        }
    }

    /// Build a snapshot from explicit pairs (drafts, tests)
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self {
            entries,
            captured_at: Utc::now(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<(String, String)> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }
}

/// Terminal result of one submission attempt. Produced exactly once per
/// attempt; never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionOutcome {
    Success {
        message: String,
    },
    Failure {
        reason: String,
    },
}

impl SubmissionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        SubmissionOutcome::Success {
            message: message.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        SubmissionOutcome::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    /// The message or reason, whichever side this is
    pub fn text(&self) -> &str {
        match self {
            SubmissionOutcome::Success { message } => message,
            SubmissionOutcome::Failure { reason } => reason,
        }
    }
}
