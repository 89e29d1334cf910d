//! Registration flow
//!
//! Sixteen required fields plus the terms checkbox. Email validation is
//! debounced; phone, PIN code, and student ID are filtered as typed. The
//! simulated backend always accepts a gate-passing payload.

use std::time::Duration;

use chrono::{DateTime, Utc};
use portal_core::{SessionContext, SimulatedBackend, SubmissionController, SubmissionReport};
use portal_notify::{Notification, NotificationCenter};
use portal_validate::{Debouncer, FieldKind, FormState};

/// Simulated network delay for registration
pub const REGISTRATION_DELAY: Duration = Duration::from_secs(2);

/// The fields tracked by the completion bar, in form order
pub const REQUIRED_FIELDS: [&str; 16] = [
    "firstName",
    "lastName",
    "email",
    "phone",
    "dateOfBirth",
    "gender",
    "studentId",
    "course",
    "semester",
    "admissionYear",
    "address",
    "city",
    "state",
    "pincode",
    "password",
    "confirmPassword",
];

/// Build the registration form with every field's kind
pub fn registration_form() -> FormState {
    FormState::new()
        .with_field("firstName", FieldKind::Generic, true)
        .with_field("lastName", FieldKind::Generic, true)
        .with_field("email", FieldKind::Email, true)
        .with_field("phone", FieldKind::Phone, true)
        .with_field("dateOfBirth", FieldKind::DateOfBirth, true)
        .with_field("gender", FieldKind::Generic, true)
        .with_field("studentId", FieldKind::Identifier, true)
        .with_field("course", FieldKind::Generic, true)
        .with_field("semester", FieldKind::Generic, true)
        .with_field("admissionYear", FieldKind::Generic, true)
        .with_field("address", FieldKind::Generic, true)
        .with_field("city", FieldKind::Generic, true)
        .with_field("state", FieldKind::Generic, true)
        .with_field("pincode", FieldKind::Pincode, true)
        .with_field("password", FieldKind::Password, true)
        .with_field("confirmPassword", FieldKind::ConfirmPassword, true)
        .with_terms_requirement()
}

pub struct RegistrationFlow {
    form: FormState,
    controller: SubmissionController,
    email_debounce: Debouncer,
}

impl RegistrationFlow {
    pub fn new() -> Self {
        let backend = SimulatedBackend::always_succeeding(
            "registration.simulated",
            REGISTRATION_DELAY,
            "Registration successful! You can now sign in.",
        );
        Self {
            form: registration_form(),
            controller: SubmissionController::new(Box::new(backend))
                .with_labels("Create Account", "Creating Account..."),
            email_debounce: Debouncer::with_default_window(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Email keystroke: store the value immediately but hold validation
    /// until the debounce window settles
    pub fn email_input(&mut self, value: &str, at: DateTime<Utc>) {
        self.form.restore(&[("email".to_string(), value.to_string())]);
        self.email_debounce.input(value, at);
    }

    /// Validate the email once keystrokes have been quiet for the window.
    /// Earlier pending inputs were superseded; last write wins.
    pub fn poll_email(&mut self, now: DateTime<Utc>) -> bool {
        match self.email_debounce.take_ready(now) {
            Some(value) => {
                self.form.record_change("email", &value);
                true
            }
            None => false,
        }
    }

    /// Run one registration attempt; the simulation accepts any payload
    /// that passes the gate
    pub async fn submit(
        &mut self,
        ctx: &SessionContext,
        center: &mut NotificationCenter,
    ) -> SubmissionReport {
        let report = self.controller.submit(&mut self.form, ctx).await;
        if let Some(outcome) = report.outcome() {
            center.push(Notification::success(outcome.text()).dismiss_after_secs(5));
        }
        report
    }

    /// Clear every field, verdict, and the terms checkbox
    pub fn reset(&mut self) {
        self.form.reset();
    }
}

impl Default for RegistrationFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Semester count offered for a course code
pub fn max_semesters(course: &str) -> u8 {
    if course.contains("mtech") || course == "mba" || course == "mca" {
        4
    } else if course == "bca" {
        6
    } else {
        // B.Tech programmes
        8
    }
}

/// Suggest a student ID from admission year and course, like
/// "2024CS123". Returns None when the course has no code or the year is
/// empty. Only offered while the ID field is still empty.
pub fn suggest_student_id(admission_year: &str, course: &str) -> Option<String> {
    if admission_year.is_empty() || course.is_empty() {
        return None;
    }
    let code = if course.contains("cse") {
        "CS"
    } else if course.contains("ece") {
        "EC"
    } else if course.contains("me") {
        "ME"
    } else if course.contains("ce") {
        "CE"
    } else if course == "mba" {
        "MB"
    } else if course == "bca" {
        "BC"
    } else if course == "mca" {
        "MC"
    } else {
        return None;
    };
    // Three random digits in 100..=999, sourced from a fresh UUID
    let bytes = *uuid::Uuid::new_v4().as_bytes();
    let number = 100 + u16::from_be_bytes([bytes[0], bytes[1]]) % 900;
    Some(format!("{admission_year}{code}{number}"))
}
