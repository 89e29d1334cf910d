//! Password strength scoring
//!
//! Advisory only: the score never blocks submission. The blocking rule is the
//! 8-character minimum enforced by the Password kind.

use serde::{Deserialize, Serialize};

/// Which of the four requirements a password satisfies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthChecks {
    pub length_ok: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
}

impl StrengthChecks {
    /// Count of satisfied requirements (0..=4)
    pub fn score(&self) -> u8 {
        [
            self.length_ok,
            self.has_uppercase,
            self.has_lowercase,
            self.has_digit,
        ]
        .iter()
        .filter(|&&ok| ok)
        .count() as u8
    }
}

/// Advisory strength class shown next to the password field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthClass {
    Weak,
    Medium,
    Strong,
}

/// Evaluate the four password requirements
pub fn check_password(password: &str) -> StrengthChecks {
    StrengthChecks {
        length_ok: password.chars().count() >= 8,
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
    }
}

/// Classify a password; an empty password carries no class at all
pub fn classify(password: &str) -> Option<StrengthClass> {
    if password.is_empty() {
        return None;
    }
    let score = check_password(password).score();
    Some(if score < 2 {
        StrengthClass::Weak
    } else if score < 4 {
        StrengthClass::Medium
    } else {
        StrengthClass::Strong
    })
}

/// Upper + lower + digit + length, the rule the password-change form enforces
pub fn is_strong(password: &str) -> bool {
    let checks = check_password(password);
    checks.length_ok && checks.has_uppercase && checks.has_lowercase && checks.has_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_counts_requirements() {
        assert_eq!(check_password("").score(), 0);
        assert_eq!(check_password("abcdefgh").score(), 2); // length + lowercase
        assert_eq!(check_password("Abcdefg1").score(), 4);
    }

    #[test]
    fn classification_bands() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("a"), Some(StrengthClass::Weak));
        assert_eq!(classify("abcdefgh"), Some(StrengthClass::Medium));
        assert_eq!(classify("Abcdefgh"), Some(StrengthClass::Medium));
        assert_eq!(classify("Abcdefg1"), Some(StrengthClass::Strong));
    }

    #[test]
    fn strong_rule_for_password_change() {
        assert!(is_strong("Abcdefg1"));
        assert!(!is_strong("abcdefg1"));
        assert!(!is_strong("Abcdefgh"));
        assert!(!is_strong("Ab1"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five characters, ten bytes
        assert!(!check_password("Ñéüöä").length_ok);
        assert!(check_password("Pässw0rd").length_ok);
        assert!(is_strong("Pässw0rd"));
    }
}
