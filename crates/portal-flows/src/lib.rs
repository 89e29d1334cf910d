//! # portal-flows
//!
//! The page-level workflows of the student portal, assembled from the
//! lower layers:
//!
//! ```text
//!   portal-validate ──► portal-core ──► portal-flows
//!        (rules)        (controller)     (pages)
//!                          │
//!   portal-storage ────────┤
//!   portal-notify  ────────┤
//!   portal-dashboard ──────┘
//! ```
//!
//! Each flow owns its [`FormState`](portal_validate::FormState) and a
//! [`SubmissionController`](portal_core::SubmissionController) wired to a
//! simulated backend, and adds the page's side effects: remembered email,
//! draft autosave, notifications, focus directives.

pub mod dashboard;
pub mod login;
pub mod password_reset;
pub mod profile;
pub mod registration;

pub use login::{LoginFlow, LoginFocus, DEMO_EMAIL, DEMO_PASSWORD};
pub use password_reset::PasswordResetFlow;
pub use profile::{change_password, logout, ProfileEditor};
pub use registration::{max_semesters, suggest_student_id, RegistrationFlow};
