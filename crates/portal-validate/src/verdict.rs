//! Field verdict types
//!
//! A verdict is the result of validating one field value. `Neutral` is
//! distinct from `Valid`: an empty optional field carries no visual state
//! at all, while a valid field is positively marked.

use serde::{Deserialize, Serialize};

/// The result of validating a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldVerdict {
    /// Value passes the rule for its kind
    Valid,

    /// Value fails the rule; carries the message to surface next to the field
    Invalid {
        /// Human-readable error message
        message: String,
    },

    /// No judgement yet (empty optional field, or not yet touched)
    Neutral,
}

impl FieldVerdict {
    /// Create an invalid verdict with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        FieldVerdict::Invalid {
            message: message.into(),
        }
    }

    /// Whether the value positively passes the rule for its kind
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldVerdict::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldVerdict::Invalid { .. })
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, FieldVerdict::Neutral)
    }

    /// The error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldVerdict::Invalid { message } => Some(message),
            _ => None,
        }
    }

    /// The visual validity class the rendering layer should apply
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            FieldVerdict::Valid => Some("is-valid"),
            FieldVerdict::Invalid { .. } => Some("is-invalid"),
            FieldVerdict::Neutral => None,
        }
    }
}

impl Default for FieldVerdict {
    fn default() -> Self {
        FieldVerdict::Neutral
    }
}
