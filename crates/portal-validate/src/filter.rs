//! Live input filters
//!
//! Some kinds rewrite the value as it is typed rather than merely rejecting
//! it: phone and PIN code drop non-digits and truncate, the student ID is
//! upper-cased. Filtering is idempotent.

use crate::kind::FieldKind;

/// Rewrite a raw keystroke value according to the kind's live filter.
/// Kinds without a filter return the input unchanged.
pub fn live_filter(kind: FieldKind, input: &str) -> String {
    match kind {
        FieldKind::Phone => digits_truncated(input, 10),
        FieldKind::Pincode => digits_truncated(input, 6),
        FieldKind::Identifier => input.to_ascii_uppercase(),
        _ => input.to_string(),
    }
}

fn digits_truncated(input: &str, max: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_strips_and_truncates() {
        assert_eq!(live_filter(FieldKind::Phone, "(987) 654-3210 ext 9"), "9876543210");
        assert_eq!(live_filter(FieldKind::Phone, "98-76"), "9876");
    }

    #[test]
    fn phone_filter_is_idempotent() {
        let inputs = ["(987) 654-3210", "abc123def456ghi789xyz0", "", "9876543210"];
        for input in inputs {
            let once = live_filter(FieldKind::Phone, input);
            let twice = live_filter(FieldKind::Phone, &once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn pincode_truncates_to_six() {
        assert_eq!(live_filter(FieldKind::Pincode, "5600011234"), "560001");
    }

    #[test]
    fn identifier_uppercases() {
        assert_eq!(live_filter(FieldKind::Identifier, "2024cs101"), "2024CS101");
    }

    #[test]
    fn other_kinds_pass_through() {
        assert_eq!(live_filter(FieldKind::Email, "A@b.Co"), "A@b.Co");
        assert_eq!(live_filter(FieldKind::Password, " p w "), " p w ");
    }
}
