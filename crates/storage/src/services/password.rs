use serde::Serialize;
use utoipa::ToSchema;

/// Characters counted as "special" by the strength criteria.
const SPECIAL_CHARS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

const MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum StrengthLabel {
    #[serde(rename = "Very weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very strong")]
    VeryStrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
}

/// Score a candidate password against five independent criteria: lowercase,
/// uppercase, digit, special character and minimum length.
pub fn evaluate_password(password: &str) -> PasswordStrength {
    let criteria = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        password.chars().count() >= MIN_LENGTH,
    ];

    let score = criteria.iter().filter(|&&met| met).count() as u8;

    let label = match score {
        0 | 1 => StrengthLabel::VeryWeak,
        2 => StrengthLabel::Weak,
        3 => StrengthLabel::Medium,
        4 => StrengthLabel::Strong,
        _ => StrengthLabel::VeryStrong,
    };

    PasswordStrength { score, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        let result = evaluate_password("");
        assert_eq!(result.score, 0);
        assert_eq!(result.label, StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_all_criteria_met() {
        let result = evaluate_password("Abcdef1!");
        assert_eq!(result.score, 5);
        assert_eq!(result.label, StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_lowercase_and_length_only() {
        let result = evaluate_password("abcdefgh");
        assert_eq!(result.score, 2);
        assert_eq!(result.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_single_criterion() {
        let result = evaluate_password("a");
        assert_eq!(result.score, 1);
        assert_eq!(result.label, StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_four_criteria() {
        // Short, but mixed case with digit and special.
        let result = evaluate_password("Ab1!");
        assert_eq!(result.score, 4);
        assert_eq!(result.label, StrengthLabel::Strong);
    }

    #[test]
    fn test_three_criteria() {
        let result = evaluate_password("abcdefg1");
        assert_eq!(result.score, 3);
        assert_eq!(result.label, StrengthLabel::Medium);
    }
}
