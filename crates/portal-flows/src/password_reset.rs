//! Password reset flow
//!
//! A single email field. An invalid address never reaches the backend; the
//! simulation then accepts any address containing both "@" and ".", and
//! otherwise reports that the address is unknown.

use std::time::Duration;

use portal_core::{
    SessionContext, SimulatedBackend, SubmissionController, SubmissionOutcome, SubmissionReport,
};
use portal_notify::{Notification, NotificationCenter};
use portal_validate::{FieldKind, FormState};

/// Simulated network delay for the reset request
pub const RESET_DELAY: Duration = Duration::from_secs(2);

pub struct PasswordResetFlow {
    form: FormState,
    controller: SubmissionController,
}

impl PasswordResetFlow {
    pub fn new() -> Self {
        let backend = SimulatedBackend::new("reset.simulated", RESET_DELAY, |snapshot| {
            let email = snapshot.get("email").map(str::trim).unwrap_or_default();
            if email.contains('@') && email.contains('.') {
                SubmissionOutcome::success("Password reset link sent! Check your inbox.")
            } else {
                SubmissionOutcome::failure("Email address not found in our records.")
            }
        });
        Self {
            form: FormState::new().with_field("email", FieldKind::Email, true),
            controller: SubmissionController::new(Box::new(backend))
                .with_labels("Send Reset Link", "Sending..."),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub async fn submit(
        &mut self,
        ctx: &SessionContext,
        center: &mut NotificationCenter,
    ) -> SubmissionReport {
        let report = self.controller.submit(&mut self.form, ctx).await;
        match report.outcome() {
            Some(SubmissionOutcome::Success { message }) => {
                center.push(Notification::success(message.clone()).dismiss_after_secs(5));
            }
            Some(SubmissionOutcome::Failure { reason }) => {
                center.push(Notification::danger(reason.clone()).sticky());
            }
            None => {}
        }
        report
    }
}

impl Default for PasswordResetFlow {
    fn default() -> Self {
        Self::new()
    }
}
