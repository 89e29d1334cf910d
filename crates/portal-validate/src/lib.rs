//! Portal Validate: field rules, live filters, and form state
//!
//! Pure validation for the ERP portal's forms, kept free of any UI toolkit.
//!
//! ```text
//! keystroke → live_filter → FormState.record_change → validate(kind, value)
//!                                                          ↓
//!                                     FieldVerdict (Valid / Invalid / Neutral)
//!                                                          ↓
//!                          is_form_valid → submission gate (all errors at once)
//! ```
//!
//! # Example
//!
//! ```
//! use portal_validate::{FieldKind, FormState};
//!
//! let mut form = FormState::new()
//!     .with_field("email", FieldKind::Email, true)
//!     .with_field("phone", FieldKind::Phone, true);
//!
//! form.record_change("email", "a@b.co");
//! form.record_change("phone", "(987) 654-3210"); // filtered to digits
//!
//! assert!(form.is_form_valid());
//! assert_eq!(form.value("phone"), Some("9876543210"));
//! ```

pub mod debounce;
pub mod filter;
pub mod form;
pub mod kind;
pub mod rules;
pub mod strength;
pub mod verdict;

pub use debounce::Debouncer;
pub use filter::live_filter;
pub use form::{FieldState, FormState, TERMS_MESSAGE};
pub use kind::FieldKind;
pub use rules::{pattern_message, required_message, validate, FieldContext};
pub use strength::{check_password, classify, is_strong, StrengthChecks, StrengthClass};
pub use verdict::FieldVerdict;
