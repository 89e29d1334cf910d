//! Per-form field registry
//!
//! `FormState` owns the mutable record of every field on one form: raw
//! values, verdicts, and the derived completion percentage. Field order is
//! the declaration order and is preserved in captured entries.

use serde::{Deserialize, Serialize};

use crate::filter::live_filter;
use crate::kind::FieldKind;
use crate::rules::{validate, FieldContext};
use crate::verdict::FieldVerdict;

/// Message shown when the terms checkbox is left unchecked at submit
pub const TERMS_MESSAGE: &str = "You must agree to the terms and conditions";

/// One field's mutable state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldState {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub raw_value: String,
    pub verdict: FieldVerdict,
}

/// Mutable state of one form: fields, terms checkbox, validation marker
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<FieldState>,
    require_terms: bool,
    terms_accepted: bool,
    terms_error: Option<String>,
    was_validated: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field; order of declaration is the order of capture
    pub fn with_field(mut self, name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        self.fields.push(FieldState {
            name: name.into(),
            kind,
            required,
            raw_value: String::new(),
            verdict: FieldVerdict::Neutral,
        });
        self
    }

    /// Add a form-level terms-acceptance requirement
    pub fn with_terms_requirement(mut self) -> Self {
        self.require_terms = true;
        self
    }

    /// Record a keystroke. Applies the kind's live filter, validates without
    /// enforcing required-ness, and re-checks any confirm-password field when
    /// either password field changes. Returns the filtered value.
    pub fn record_change(&mut self, name: &str, value: &str) -> Option<String> {
        let index = self.index_of(name)?;
        let kind = self.fields[index].kind;
        let filtered = live_filter(kind, value);
        self.fields[index].raw_value = filtered.clone();
        self.revalidate(index, false);

        // Either side of the password pair re-checks the confirmation
        if matches!(kind, FieldKind::Password | FieldKind::ConfirmPassword) {
            if let Some(confirm) = self.index_of_kind(FieldKind::ConfirmPassword) {
                self.revalidate(confirm, false);
            }
        }
        Some(filtered)
    }

    /// Blur event: validate with required-ness enforced
    pub fn record_blur(&mut self, name: &str) {
        if let Some(index) = self.index_of(name) {
            self.revalidate(index, true);
        }
    }

    /// Focus event: clear any prior verdict so the error disappears
    pub fn clear_verdict(&mut self, name: &str) {
        if let Some(index) = self.index_of(name) {
            self.fields[index].verdict = FieldVerdict::Neutral;
        }
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
        if accepted {
            self.terms_error = None;
        }
    }

    /// Validate every field with required-ness enforced. Deliberately no
    /// short-circuit: every invalid field must surface its message so the UI
    /// can show all errors at once.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for index in 0..self.fields.len() {
            self.revalidate(index, true);
            let field = &self.fields[index];
            if field.required && !field.verdict.is_valid() {
                all_valid = false;
            } else if field.verdict.is_invalid() {
                // Optional field with a bad non-empty value still blocks
                all_valid = false;
            }
        }
        if self.require_terms && !self.terms_accepted {
            self.terms_error = Some(TERMS_MESSAGE.to_string());
            all_valid = false;
        }
        all_valid
    }

    /// Submission gate. Re-runs full validation synchronously so field
    /// verdicts are current when the gate is evaluated.
    pub fn is_form_valid(&mut self) -> bool {
        self.validate_all()
    }

    /// Share of required inputs filled, as a percentage. Display-only; the
    /// submission gate never consults it.
    pub fn completion_percentage(&self) -> f64 {
        let required: Vec<&FieldState> = self.fields.iter().filter(|f| f.required).collect();
        let mut total = required.len();
        let mut filled = required
            .iter()
            .filter(|f| !f.raw_value.trim().is_empty())
            .count();
        if self.require_terms {
            total += 1;
            if self.terms_accepted {
                filled += 1;
            }
        }
        if total == 0 {
            return 100.0;
        }
        filled as f64 / total as f64 * 100.0
    }

    /// Ordered (name, value) pairs for snapshot capture
    pub fn entries(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.raw_value.clone()))
            .collect()
    }

    /// Overwrite field values from captured entries and clear verdicts.
    /// Used by cancel-edit rollback and draft restore.
    pub fn restore(&mut self, entries: &[(String, String)]) {
        for (name, value) in entries {
            if let Some(index) = self.index_of(name) {
                self.fields[index].raw_value = value.clone();
                self.fields[index].verdict = FieldVerdict::Neutral;
            }
        }
    }

    /// Reset the form: empty values, neutral verdicts, unchecked terms
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.raw_value.clear();
            field.verdict = FieldVerdict::Neutral;
        }
        self.terms_accepted = false;
        self.terms_error = None;
        self.was_validated = false;
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.raw_value.as_str())
    }

    pub fn verdict(&self, name: &str) -> Option<&FieldVerdict> {
        self.field(name).map(|f| &f.verdict)
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }

    /// All currently surfaced error messages, in field order
    pub fn error_messages(&self) -> Vec<(&str, &str)> {
        let mut errors: Vec<(&str, &str)> = self
            .fields
            .iter()
            .filter_map(|f| f.verdict.message().map(|m| (f.name.as_str(), m)))
            .collect();
        if let Some(message) = &self.terms_error {
            errors.push(("terms", message.as_str()));
        }
        errors
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn terms_error(&self) -> Option<&str> {
        self.terms_error.as_deref()
    }

    /// Marked by the submission controller after a rejected gate so native
    /// constraint messages show alongside field errors
    pub fn mark_was_validated(&mut self) {
        self.was_validated = true;
    }

    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    fn index_of_kind(&self, kind: FieldKind) -> Option<usize> {
        self.fields.iter().position(|f| f.kind == kind)
    }

    fn revalidate(&mut self, index: usize, enforce_required: bool) {
        let password_value = self
            .index_of_kind(FieldKind::Password)
            .map(|i| self.fields[i].raw_value.clone());
        let field = &self.fields[index];
        let ctx = FieldContext {
            enforce_required,
            required: field.required,
            password: password_value.as_deref(),
            today: None,
            field_name: Some(&field.name),
        };
        let verdict = validate(field.kind, &field.raw_value, &ctx);
        self.fields[index].verdict = verdict;
    }
}
