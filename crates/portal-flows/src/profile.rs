//! Profile editor flow
//!
//! Read-mostly profile with an explicit edit mode. A rollback snapshot is
//! captured up front and refreshed after every successful save; cancel
//! restores every field from it. While editing, a draft is autosaved to
//! device storage on a fixed cadence and offered back on the next visit.

use std::time::Duration;

use chrono::{DateTime, Utc};
use portal_core::{
    FormSnapshot, SessionContext, SimulatedBackend, SubmissionController, SubmissionOutcome,
    SubmissionReport, PortalBackend,
};
use portal_notify::{Notification, NotificationCenter};
use portal_storage::{clear_draft, clear_session, load_draft, save_draft, DeviceStore};
use portal_validate::{is_strong, FieldKind, FormState};

/// Simulated network delay for a profile save
pub const PROFILE_SAVE_DELAY: Duration = Duration::from_secs(2);

/// Simulated network delay for a password change
pub const PASSWORD_CHANGE_DELAY: Duration = Duration::from_millis(1500);

/// Draft autosave cadence while editing
pub const AUTOSAVE_INTERVAL: chrono::Duration =
    chrono::Duration::seconds(portal_storage::DRAFT_AUTOSAVE_SECS);

/// Fields that never become editable, even in edit mode
pub const READONLY_FIELDS: [&str; 5] = [
    "studentId",
    "course",
    "semester",
    "admissionYear",
    "rollNumber",
];

/// Build the profile form; only name, email, and phone are required
fn profile_form() -> FormState {
    FormState::new()
        .with_field("firstName", FieldKind::Generic, true)
        .with_field("lastName", FieldKind::Generic, true)
        .with_field("email", FieldKind::Email, true)
        .with_field("phone", FieldKind::Phone, true)
        .with_field("dateOfBirth", FieldKind::DateOfBirth, false)
        .with_field("gender", FieldKind::Generic, false)
        .with_field("address", FieldKind::Generic, false)
        .with_field("city", FieldKind::Generic, false)
        .with_field("state", FieldKind::Generic, false)
        .with_field("pincode", FieldKind::Pincode, false)
        .with_field("studentId", FieldKind::Identifier, false)
        .with_field("course", FieldKind::Generic, false)
        .with_field("semester", FieldKind::Generic, false)
        .with_field("admissionYear", FieldKind::Generic, false)
        .with_field("rollNumber", FieldKind::Generic, false)
}

pub struct ProfileEditor {
    form: FormState,
    controller: SubmissionController,
    rollback: FormSnapshot,
    editing: bool,
    last_autosave: Option<DateTime<Utc>>,
}

impl ProfileEditor {
    /// Load the profile with the user's current values
    pub fn new(initial: &[(String, String)]) -> Self {
        let mut form = profile_form();
        form.restore(initial);
        let rollback = FormSnapshot::capture(&form);
        let backend = SimulatedBackend::always_succeeding(
            "profile.simulated",
            PROFILE_SAVE_DELAY,
            "Profile updated successfully",
        );
        Self {
            form,
            controller: SubmissionController::new(Box::new(backend))
                .with_labels("Save Changes", "Saving..."),
            rollback,
            editing: false,
            last_autosave: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Whether a field unlocks in edit mode
    pub fn is_editable(name: &str) -> bool {
        !READONLY_FIELDS.contains(&name)
    }

    pub fn begin_edit(&mut self, center: &mut NotificationCenter) {
        self.editing = true;
        self.last_autosave = None;
        center.push(
            Notification::info("Edit mode enabled. Make your changes and click Save.")
                .dismiss_after_secs(4),
        );
    }

    /// Change a field; rejected outside edit mode and for read-only fields
    pub fn edit_field(&mut self, name: &str, value: &str) -> bool {
        if !self.editing || !Self::is_editable(name) {
            return false;
        }
        self.form.record_change(name, value).is_some()
    }

    /// Save the profile. On success the rollback snapshot is replaced with
    /// the just-saved values, the draft is cleared, and edit mode ends.
    pub async fn save(
        &mut self,
        ctx: &SessionContext,
        store: &mut dyn DeviceStore,
        center: &mut NotificationCenter,
    ) -> SubmissionReport {
        let report = self.controller.submit(&mut self.form, ctx).await;
        match report.outcome() {
            Some(SubmissionOutcome::Success { message }) => {
                if let Some(snapshot) = report.snapshot() {
                    self.rollback = snapshot.clone();
                }
                self.editing = false;
                self.last_autosave = None;
                clear_draft(store);
                center.push(Notification::success(message.clone()).dismiss_after_secs(4));
            }
            Some(SubmissionOutcome::Failure { reason }) => {
                center.push(Notification::danger(reason.clone()).dismiss_after_secs(4));
            }
            None => {}
        }
        report
    }

    /// Discard edits: restore every field from the last-known-good snapshot
    /// and leave edit mode without contacting the backend
    pub fn cancel(&mut self, center: &mut NotificationCenter) {
        let entries = self.rollback.entries().to_vec();
        self.form.restore(&entries);
        self.editing = false;
        self.last_autosave = None;
        center.push(Notification::info("Changes cancelled").dismiss_after_secs(4));
    }

    /// Periodic tick while the page is open. Saves a draft once per
    /// interval while editing; returns whether a draft was written.
    pub fn autosave_tick(&mut self, store: &mut dyn DeviceStore, now: DateTime<Utc>) -> bool {
        if !self.editing {
            return false;
        }
        match self.last_autosave {
            None => {
                // First tick after entering edit mode starts the cadence
                self.last_autosave = Some(now);
                false
            }
            Some(last) if now - last >= AUTOSAVE_INTERVAL => {
                save_draft(store, &FormSnapshot::capture(&self.form));
                self.last_autosave = Some(now);
                tracing::debug!("profile draft autosaved");
                true
            }
            Some(_) => false,
        }
    }

    /// Unsaved draft from a previous visit, if one exists
    pub fn offer_draft(store: &dyn DeviceStore) -> Option<FormSnapshot> {
        load_draft(store)
    }

    /// Restore a previously offered draft and enter edit mode
    pub fn restore_draft(&mut self, draft: &FormSnapshot, center: &mut NotificationCenter) {
        let entries = draft.entries().to_vec();
        self.form.restore(&entries);
        self.begin_edit(center);
    }
}

/// Change-password sub-form. Validation runs in order and surfaces the
/// first failing rule as a notification; the simulation then always
/// accepts the change.
pub async fn change_password(
    current: &str,
    new: &str,
    confirm: &str,
    ctx: &SessionContext,
    center: &mut NotificationCenter,
) -> bool {
    let failure = if current.is_empty() || new.is_empty() || confirm.is_empty() {
        Some("All password fields are required")
    } else if new != confirm {
        Some("New passwords do not match")
    } else if new.chars().count() < 8 {
        Some("New password must be at least 8 characters long")
    } else if !is_strong(new) {
        Some("Password must contain at least one uppercase letter, one lowercase letter, and one number")
    } else {
        None
    };
    if let Some(reason) = failure {
        center.push(Notification::danger(reason).dismiss_after_secs(4));
        return false;
    }

    let backend = SimulatedBackend::always_succeeding(
        "password-change.simulated",
        PASSWORD_CHANGE_DELAY,
        "Password updated successfully",
    );
    let snapshot = FormSnapshot::from_entries(vec![
        ("currentPassword".to_string(), current.to_string()),
        ("newPassword".to_string(), new.to_string()),
    ]);
    let outcome = backend.submit(&snapshot, ctx).await;
    center.push(Notification::success(outcome.text()).dismiss_after_secs(4));
    true
}

/// Logout: clear the opaque session markers and announce the redirect
pub fn logout(store: &mut dyn DeviceStore, center: &mut NotificationCenter) {
    clear_session(store);
    center.push(Notification::info("Logging out...").dismiss_after_secs(4));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readonly_fields_never_unlock() {
        assert!(!ProfileEditor::is_editable("studentId"));
        assert!(!ProfileEditor::is_editable("rollNumber"));
        assert!(ProfileEditor::is_editable("firstName"));
    }

    #[test]
    fn edits_rejected_outside_edit_mode() {
        let mut editor = ProfileEditor::new(&[("firstName".to_string(), "John".to_string())]);
        assert!(!editor.edit_field("firstName", "Jane"));
        assert_eq!(editor.form().value("firstName"), Some("John"));
    }
}
