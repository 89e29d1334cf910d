//! Validation rules per field kind
//!
//! Pure predicates: field kind + raw value + context in, verdict out. The
//! rendering layer maps verdicts to visual state; nothing in here touches a
//! UI toolkit.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::kind::FieldKind;
use crate::verdict::FieldVerdict;

/// One-or-more non-space non-@, then @, then the same, then a dot-anchored tail
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Context a single-field rule may need beyond the value itself
#[derive(Debug, Clone, Default)]
pub struct FieldContext<'a> {
    /// When true, an empty required value is Invalid instead of Neutral.
    /// Set on blur and at submit; live keystroke validation leaves it unset.
    pub enforce_required: bool,

    /// Whether the field is required at all
    pub required: bool,

    /// Current value of the paired password field (for ConfirmPassword)
    pub password: Option<&'a str>,

    /// Today's date (for DateOfBirth); defaults to the civil date when unset
    pub today: Option<NaiveDate>,

    /// Field name, used to pick the required-field message
    pub field_name: Option<&'a str>,
}

/// Validate one field value against the rule for its kind
pub fn validate(kind: FieldKind, raw_value: &str, ctx: &FieldContext) -> FieldVerdict {
    let value: &str = if kind.trims_input() {
        raw_value.trim()
    } else {
        raw_value
    };

    if value.is_empty() {
        if ctx.required && ctx.enforce_required {
            return FieldVerdict::invalid(required_message(ctx.field_name.unwrap_or("")));
        }
        return FieldVerdict::Neutral;
    }

    match kind {
        FieldKind::Email => {
            if EMAIL_RE.is_match(value) {
                FieldVerdict::Valid
            } else {
                FieldVerdict::invalid(pattern_message(kind))
            }
        }
        FieldKind::Phone => {
            let digits_only = value.chars().all(|c| c.is_ascii_digit());
            let shape_ok = value.len() == 10
                && digits_only
                && matches!(value.as_bytes()[0], b'6'..=b'9');
            if shape_ok {
                FieldVerdict::Valid
            } else {
                FieldVerdict::invalid(pattern_message(kind))
            }
        }
        FieldKind::Pincode => {
            if value.len() == 6 && value.chars().all(|c| c.is_ascii_digit()) {
                FieldVerdict::Valid
            } else {
                FieldVerdict::invalid(pattern_message(kind))
            }
        }
        FieldKind::Identifier => {
            let ok = (6..=12).contains(&value.len())
                && value
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
            if ok {
                FieldVerdict::Valid
            } else {
                FieldVerdict::invalid(pattern_message(kind))
            }
        }
        FieldKind::Password => {
            // Character count, not bytes; multibyte input counts per character
            if value.chars().count() >= 8 {
                FieldVerdict::Valid
            } else {
                FieldVerdict::invalid("Password must be at least 8 characters long")
            }
        }
        FieldKind::ConfirmPassword => {
            if Some(value) == ctx.password {
                FieldVerdict::Valid
            } else {
                FieldVerdict::invalid("Passwords do not match")
            }
        }
        FieldKind::DateOfBirth => {
            let today = ctx
                .today
                .unwrap_or_else(|| chrono::Utc::now().date_naive());
            match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                // Calendar-year subtraction, not day-precise
                Ok(birth) => {
                    let age = today.year() - birth.year();
                    if (16..=100).contains(&age) {
                        FieldVerdict::Valid
                    } else {
                        FieldVerdict::invalid("Please enter a valid date of birth")
                    }
                }
                Err(_) => FieldVerdict::invalid("Please enter a valid date of birth"),
            }
        }
        FieldKind::Generic => FieldVerdict::Valid,
    }
}

/// Message for a required field left empty
pub fn required_message(field_name: &str) -> String {
    let message = match field_name {
        "firstName" => "First name is required",
        "lastName" => "Last name is required",
        "email" => "Email address is required",
        "phone" => "Phone number is required",
        "dateOfBirth" => "Date of birth is required",
        "gender" => "Please select your gender",
        "studentId" => "Student ID is required",
        "course" => "Please select your course",
        "semester" => "Please select your semester",
        "admissionYear" => "Please select admission year",
        "address" => "Address is required",
        "city" => "City is required",
        "state" => "State is required",
        "pincode" => "PIN code is required",
        "password" => "Password is required",
        "confirmPassword" => "Please confirm your password",
        _ => "This field is required",
    };
    message.to_string()
}

/// Message for a value that fails its kind's shape rule
pub fn pattern_message(kind: FieldKind) -> String {
    let message = match kind {
        FieldKind::Email => "Please enter a valid email address",
        FieldKind::Phone => "Please enter a valid 10-digit phone number",
        FieldKind::Pincode => "Please enter a valid 6-digit PIN code",
        FieldKind::Identifier => "Student ID should be 6-12 characters (letters and numbers only)",
        _ => "Please enter a valid value",
    };
    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FieldContext<'static> {
        FieldContext::default()
    }

    fn required_at_submit(name: &'static str) -> FieldContext<'static> {
        FieldContext {
            enforce_required: true,
            required: true,
            field_name: Some(name),
            ..Default::default()
        }
    }

    #[test]
    fn email_shape() {
        assert!(validate(FieldKind::Email, "a@b.co", &ctx()).is_valid());
        assert!(validate(FieldKind::Email, "a@b", &ctx()).is_invalid());
        assert!(validate(FieldKind::Email, "", &ctx()).is_neutral());
        assert!(validate(FieldKind::Email, "a b@c.de", &ctx()).is_invalid());
        assert!(validate(FieldKind::Email, "  a@b.co  ", &ctx()).is_valid());
    }

    #[test]
    fn email_required_at_submit() {
        let verdict = validate(FieldKind::Email, "", &required_at_submit("email"));
        assert_eq!(verdict.message(), Some("Email address is required"));
    }

    #[test]
    fn phone_shape() {
        assert!(validate(FieldKind::Phone, "9876543210", &ctx()).is_valid());
        assert!(validate(FieldKind::Phone, "5876543210", &ctx()).is_invalid());
        assert!(validate(FieldKind::Phone, "98765", &ctx()).is_invalid());
        assert!(validate(FieldKind::Phone, "98765432101", &ctx()).is_invalid());
    }

    #[test]
    fn pincode_shape() {
        assert!(validate(FieldKind::Pincode, "560001", &ctx()).is_valid());
        assert!(validate(FieldKind::Pincode, "5600", &ctx()).is_invalid());
        assert!(validate(FieldKind::Pincode, "56000a", &ctx()).is_invalid());
    }

    #[test]
    fn identifier_shape() {
        assert!(validate(FieldKind::Identifier, "2024CS101", &ctx()).is_valid());
        assert!(validate(FieldKind::Identifier, "ab1234", &ctx()).is_invalid());
        assert!(validate(FieldKind::Identifier, "A1", &ctx()).is_invalid());
        assert!(validate(FieldKind::Identifier, "ABCDEFGHIJKLM", &ctx()).is_invalid());
    }

    #[test]
    fn password_length() {
        assert!(validate(FieldKind::Password, "longenough", &ctx()).is_valid());
        let verdict = validate(FieldKind::Password, "short", &ctx());
        assert_eq!(
            verdict.message(),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Five characters, ten bytes
        assert!(validate(FieldKind::Password, "ñéüöä", &ctx()).is_invalid());
        // Eight characters with a multibyte one
        assert!(validate(FieldKind::Password, "Pässw0rd", &ctx()).is_valid());
    }

    #[test]
    fn password_not_trimmed() {
        // Surrounding spaces count toward the length
        assert!(validate(FieldKind::Password, "      ab", &ctx()).is_valid());
    }

    #[test]
    fn confirm_password_match() {
        let matched = FieldContext {
            password: Some("secret123"),
            ..Default::default()
        };
        assert!(validate(FieldKind::ConfirmPassword, "secret123", &matched).is_valid());
        assert!(validate(FieldKind::ConfirmPassword, "secret124", &matched).is_invalid());
    }

    #[test]
    fn date_of_birth_age_window() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let at = |value: &str| {
            validate(
                FieldKind::DateOfBirth,
                value,
                &FieldContext {
                    today: Some(today),
                    ..Default::default()
                },
            )
        };
        assert!(at("2000-03-15").is_valid());
        // Calendar-year subtraction: 2008 counts as 16 even before the birthday
        assert!(at("2008-12-31").is_valid());
        assert!(at("2009-01-01").is_invalid());
        assert!(at("1920-01-01").is_invalid());
        assert!(at("not-a-date").is_invalid());
    }

    #[test]
    fn generic_required() {
        assert!(validate(FieldKind::Generic, "Bengaluru", &ctx()).is_valid());
        assert!(validate(FieldKind::Generic, "   ", &ctx()).is_neutral());
        assert!(validate(FieldKind::Generic, "", &required_at_submit("city")).is_invalid());
    }
}
