//! Login flow
//!
//! Email + password with a remember-me checkbox. The simulated backend
//! accepts exactly one credential pair; every other pair fails with
//! "Invalid credentials" and the password field is refocused for retry.

use std::time::Duration;

use portal_core::{
    SessionContext, SimulatedBackend, SubmissionController, SubmissionOutcome, SubmissionReport,
};
use portal_notify::{Notification, NotificationCenter};
use portal_storage::{forget_email, load_remembered_email, remember_email, DeviceStore};
use portal_validate::{FieldKind, FieldVerdict, FormState};

/// The one credential pair the simulation accepts
pub const DEMO_EMAIL: &str = "ybhavesh540@gmail.com";
pub const DEMO_PASSWORD: &str = "password123";

/// Simulated network delay for login
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// The demo-credentials hint appears when both fields are still empty this
/// long after page load
pub const DEMO_HINT_DELAY: Duration = Duration::from_secs(3);

/// The follow-up redirect notice appears this long after a successful login
pub const REDIRECT_NOTICE_DELAY: Duration = Duration::from_secs(2);

/// Where focus lands after prefill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
}

pub struct LoginFlow {
    form: FormState,
    controller: SubmissionController,
    remember: bool,
}

impl LoginFlow {
    pub fn new() -> Self {
        let backend = SimulatedBackend::new("login.simulated", LOGIN_DELAY, |snapshot| {
            let email = snapshot.get("email").map(str::trim);
            let password = snapshot.get("password");
            if email == Some(DEMO_EMAIL) && password == Some(DEMO_PASSWORD) {
                SubmissionOutcome::success("Login successful!")
            } else {
                SubmissionOutcome::failure("Invalid credentials")
            }
        });
        Self {
            form: FormState::new()
                .with_field("email", FieldKind::Email, true)
                .with_field("password", FieldKind::Generic, true),
            controller: SubmissionController::new(Box::new(backend))
                .with_labels("Sign In", "Signing In...")
                .with_retry_focus("password"),
            remember: false,
        }
    }

    /// Load the remembered email, if any: prefill it, check the box, and
    /// move focus to the password field
    pub fn prefill(&mut self, store: &dyn DeviceStore) -> LoginFocus {
        match load_remembered_email(store) {
            Some(email) => {
                tracing::debug!("prefilled remembered email");
                self.form.restore(&[("email".to_string(), email)]);
                self.remember = true;
                LoginFocus::Password
            }
            None => LoginFocus::Email,
        }
    }

    pub fn set_remember(&mut self, checked: bool) {
        self.remember = checked;
    }

    pub fn remember(&self) -> bool {
        self.remember
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Run one login attempt. Success persists or clears the remembered
    /// email depending on the checkbox; failure shows the reason and the
    /// controller's directives refocus the password field.
    pub async fn submit(
        &mut self,
        ctx: &SessionContext,
        store: &mut dyn DeviceStore,
        center: &mut NotificationCenter,
    ) -> SubmissionReport {
        let report = self.controller.submit(&mut self.form, ctx).await;
        match report.outcome() {
            Some(SubmissionOutcome::Success { .. }) => {
                if self.remember {
                    let email = self.form.value("email").unwrap_or_default().trim().to_string();
                    remember_email(store, &email);
                } else {
                    forget_email(store);
                }
                center.push(
                    Notification::success("Login successful! Redirecting to dashboard...")
                        .dismiss_after_secs(5),
                );
            }
            Some(SubmissionOutcome::Failure { reason }) => {
                center.push(Notification::danger(reason.clone()).sticky());
            }
            None => {}
        }
        report
    }

    /// Live visual state of the password field: neutral when empty, valid
    /// from six characters. Advisory only; the submission gate just
    /// requires the field to be non-empty.
    pub fn password_live_state(password: &str) -> FieldVerdict {
        if password.is_empty() {
            FieldVerdict::Neutral
        } else if password.len() >= 6 {
            FieldVerdict::Valid
        } else {
            FieldVerdict::invalid("Password looks too short")
        }
    }

    /// Whether the demo hint should still appear once [`DEMO_HINT_DELAY`]
    /// elapses: only while both fields remain untouched
    pub fn wants_demo_hint(&self) -> bool {
        self.form.value("email").unwrap_or_default().is_empty()
            && self.form.value("password").unwrap_or_default().is_empty()
    }

    /// The hint shown when both fields sit empty after page load
    pub fn demo_hint() -> Notification {
        Notification::info(format!("Demo: Use {DEMO_EMAIL} / {DEMO_PASSWORD}"))
            .dismiss_after_secs(8)
    }

    /// The follow-up notice scheduled [`REDIRECT_NOTICE_DELAY`] after a
    /// successful login, standing in for the real navigation
    pub fn redirect_notice() -> Notification {
        Notification::success("Redirecting to dashboard... (This is a demo)")
            .dismiss_after_secs(5)
    }
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_live_state_is_advisory() {
        assert!(LoginFlow::password_live_state("").is_neutral());
        assert!(LoginFlow::password_live_state("12345").is_invalid());
        assert!(LoginFlow::password_live_state("123456").is_valid());
    }

    #[test]
    fn demo_hint_dismisses_after_eight_seconds() {
        let hint = LoginFlow::demo_hint();
        assert_eq!(hint.auto_dismiss, Some(chrono::Duration::seconds(8)));
    }

    #[test]
    fn demo_hint_only_wanted_while_both_fields_are_empty() {
        let mut flow = LoginFlow::new();
        assert!(flow.wants_demo_hint());

        flow.form_mut().record_change("email", "a@b.co");
        assert!(!flow.wants_demo_hint());

        flow.form_mut().record_change("email", "");
        flow.form_mut().record_change("password", "p");
        assert!(!flow.wants_demo_hint());
    }

    #[test]
    fn redirect_notice_follows_two_seconds_after_success() {
        assert_eq!(REDIRECT_NOTICE_DELAY, Duration::from_secs(2));
        let notice = LoginFlow::redirect_notice();
        assert_eq!(notice.severity, portal_notify::Severity::Success);
        assert_eq!(notice.message, "Redirecting to dashboard... (This is a demo)");
        assert_eq!(notice.auto_dismiss, Some(chrono::Duration::seconds(5)));
    }
}
