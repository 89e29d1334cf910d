//! Field kinds
//!
//! The semantic category of a form field. The kind decides which validation
//! rule applies and whether the live input filter rewrites keystrokes.

use serde::{Deserialize, Serialize};

/// Semantic category of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Email address (shape check, debounced live validation)
    Email,
    /// 10-digit Indian mobile number starting with 6-9
    Phone,
    /// 6-digit PIN code
    Pincode,
    /// Student ID: 6-12 uppercase letters and digits
    Identifier,
    /// Password: minimum 8 characters blocks submission
    Password,
    /// Must equal the current password field value
    ConfirmPassword,
    /// Date of birth: computed age must fall in 16..=100
    DateOfBirth,
    /// Any other field: required means non-empty after trim
    Generic,
}

impl FieldKind {
    /// Whether leading/trailing whitespace is trimmed before validation.
    /// Passwords are taken verbatim.
    pub fn trims_input(&self) -> bool {
        !matches!(self, FieldKind::Password | FieldKind::ConfirmPassword)
    }
}
