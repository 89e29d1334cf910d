//! Submission controller
//!
//! Drives one submission attempt through its phases:
//!
//! ```text
//! Idle → Validating → Invalid → Idle (errors surfaced, no network attempt)
//!                   → Submitting → Succeeded → Idle
//!                                → Failed    → Idle
//! ```
//!
//! UI side effects (disable the control, swap its label, refocus a field)
//! are expressed as directives the rendering layer applies; the controller
//! itself never touches a widget.

use portal_validate::FormState;
use serde::{Deserialize, Serialize};

use crate::backend::PortalBackend;
use crate::context::SessionContext;
use crate::snapshot::{FormSnapshot, SubmissionOutcome};

/// Phase of the submission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// An instruction for the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiDirective {
    /// Mark the form so native constraint messages appear alongside verdicts
    MarkWasValidated,
    /// Disable the submit control and swap in the busy label
    DisableSubmit { busy_label: String },
    /// Re-enable the submit control and restore the idle label
    EnableSubmit { idle_label: String },
    /// Move focus to a field, optionally selecting its contents
    FocusField { name: String, select_contents: bool },
}

/// What one call to [`SubmissionController::submit`] produced
#[derive(Debug, Clone)]
pub enum SubmissionReport {
    /// The validation gate rejected the form; no network attempt was made
    Rejected { directives: Vec<UiDirective> },
    /// The backend settled exactly once
    Settled {
        outcome: SubmissionOutcome,
        snapshot: FormSnapshot,
        directives: Vec<UiDirective>,
    },
}

impl SubmissionReport {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SubmissionReport::Settled { outcome, .. } if outcome.is_success()
        )
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match self {
            SubmissionReport::Settled { outcome, .. } => Some(outcome),
            SubmissionReport::Rejected { .. } => None,
        }
    }

    pub fn snapshot(&self) -> Option<&FormSnapshot> {
        match self {
            SubmissionReport::Settled { snapshot, .. } => Some(snapshot),
            SubmissionReport::Rejected { .. } => None,
        }
    }

    pub fn directives(&self) -> &[UiDirective] {
        match self {
            SubmissionReport::Rejected { directives }
            | SubmissionReport::Settled { directives, .. } => directives,
        }
    }
}

/// Orchestrates the submit lifecycle for one form
pub struct SubmissionController {
    backend: Box<dyn PortalBackend>,
    idle_label: String,
    busy_label: String,
    retry_focus: Option<String>,
    phase: SubmissionPhase,
}

impl SubmissionController {
    pub fn new(backend: Box<dyn PortalBackend>) -> Self {
        Self {
            backend,
            idle_label: "Submit".to_string(),
            busy_label: "Submitting...".to_string(),
            retry_focus: None,
            phase: SubmissionPhase::Idle,
        }
    }

    /// Labels for the submit control in its idle and busy states
    pub fn with_labels(mut self, idle: impl Into<String>, busy: impl Into<String>) -> Self {
        self.idle_label = idle.into();
        self.busy_label = busy.into();
        self
    }

    /// Field to refocus (contents selected) after a failed attempt, inviting
    /// a retry. Login points this at the password field.
    pub fn with_retry_focus(mut self, field: impl Into<String>) -> Self {
        self.retry_focus = Some(field.into());
        self
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Run one submission attempt end to end. Always returns with the
    /// machine back in `Idle`; retries are the user's decision.
    pub async fn submit(
        &mut self,
        form: &mut FormState,
        ctx: &SessionContext,
    ) -> SubmissionReport {
        self.phase = SubmissionPhase::Validating;
        if !form.is_form_valid() {
            form.mark_was_validated();
            tracing::debug!(backend = self.backend.id(), "gate rejected submission");
            self.phase = SubmissionPhase::Idle;
            return SubmissionReport::Rejected {
                directives: vec![UiDirective::MarkWasValidated],
            };
        }

        let snapshot = FormSnapshot::capture(form);
        self.phase = SubmissionPhase::Submitting;
        let mut directives = vec![UiDirective::DisableSubmit {
            busy_label: self.busy_label.clone(),
        }];

        // The simulated delay always resolves; there is no separate timeout
        let outcome = self.backend.submit(&snapshot, ctx).await;

        directives.push(UiDirective::EnableSubmit {
            idle_label: self.idle_label.clone(),
        });

        match &outcome {
            SubmissionOutcome::Success { message } => {
                self.phase = SubmissionPhase::Succeeded;
                tracing::info!(backend = self.backend.id(), trace_id = %ctx.trace_id, message, "submission succeeded");
            }
            SubmissionOutcome::Failure { reason } => {
                self.phase = SubmissionPhase::Failed;
                tracing::warn!(backend = self.backend.id(), trace_id = %ctx.trace_id, reason, "submission failed");
                if let Some(name) = &self.retry_focus {
                    directives.push(UiDirective::FocusField {
                        name: name.clone(),
                        select_contents: true,
                    });
                }
            }
        }

        self.phase = SubmissionPhase::Idle;
        SubmissionReport::Settled {
            outcome,
            snapshot,
            directives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SimulatedBackend;
    use crate::context::Role;
    use portal_validate::FieldKind;
    use std::time::Duration;

    fn login_like_controller() -> SubmissionController {
        let backend = SimulatedBackend::new(
            "login.simulated",
            Duration::from_millis(1500),
            |snapshot| {
                if snapshot.get("password") == Some("password123") {
                    SubmissionOutcome::success("Login successful!")
                } else {
                    SubmissionOutcome::failure("Invalid credentials")
                }
            },
        );
        SubmissionController::new(Box::new(backend))
            .with_labels("Sign In", "Signing In...")
            .with_retry_focus("password")
    }

    fn login_form() -> FormState {
        FormState::new()
            .with_field("email", FieldKind::Email, true)
            .with_field("password", FieldKind::Generic, true)
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_form_never_reaches_the_backend() {
        let mut controller = login_like_controller();
        let mut form = login_form();
        let ctx = SessionContext::new(Role::Student);

        let started = tokio::time::Instant::now();
        let report = controller.submit(&mut form, &ctx).await;

        assert!(matches!(report, SubmissionReport::Rejected { .. }));
        assert_eq!(report.directives(), &[UiDirective::MarkWasValidated]);
        assert!(form.was_validated());
        // No simulated delay was awaited
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn success_toggles_the_control_around_the_call() {
        let mut controller = login_like_controller();
        let mut form = login_form();
        form.record_change("email", "a@b.co");
        form.record_change("password", "password123");
        let ctx = SessionContext::new(Role::Student);

        let report = controller.submit(&mut form, &ctx).await;
        assert!(report.is_success());
        assert_eq!(
            report.directives(),
            &[
                UiDirective::DisableSubmit {
                    busy_label: "Signing In...".to_string()
                },
                UiDirective::EnableSubmit {
                    idle_label: "Sign In".to_string()
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failure_refocuses_the_retry_field() {
        let mut controller = login_like_controller();
        let mut form = login_form();
        form.record_change("email", "a@b.co");
        form.record_change("password", "wrong");
        let ctx = SessionContext::new(Role::Student);

        let report = controller.submit(&mut form, &ctx).await;
        assert!(!report.is_success());
        assert_eq!(report.outcome().unwrap().text(), "Invalid credentials");
        assert_eq!(
            report.directives().last(),
            Some(&UiDirective::FocusField {
                name: "password".to_string(),
                select_contents: true,
            })
        );
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn snapshot_carries_the_submitted_values() {
        let mut controller = login_like_controller();
        let mut form = login_form();
        form.record_change("email", "a@b.co");
        form.record_change("password", "password123");
        let ctx = SessionContext::new(Role::Student);

        let report = controller.submit(&mut form, &ctx).await;
        let snapshot = report.snapshot().unwrap();
        assert_eq!(snapshot.get("email"), Some("a@b.co"));
        assert_eq!(snapshot.get("password"), Some("password123"));
    }
}
