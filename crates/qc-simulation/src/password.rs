//! Four-rule password strength meter.

use qc_session::{Payload, TelemetrySink};
use serde::Serialize;

pub const MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    VeryWeak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::VeryWeak,
            2 => Self::Medium,
            3 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Muito Fraca",
            Self::Medium => "Média",
            Self::Strong => "Forte",
            Self::VeryStrong => "Muito Forte",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
    /// One hint per unmet rule.
    pub suggestions: Vec<&'static str>,
}

impl PasswordStrength {
    /// Score `password`. Empty input yields `None`.
    pub fn evaluate(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }

        let rules = [
            (
                password.chars().count() >= MIN_LENGTH,
                "Pelo menos 8 caracteres.",
            ),
            (
                password.chars().any(|c| c.is_ascii_lowercase())
                    && password.chars().any(|c| c.is_ascii_uppercase()),
                "Use letras maiúsculas e minúsculas.",
            ),
            (
                password.chars().any(|c| c.is_ascii_digit()),
                "Inclua números.",
            ),
            (
                password.chars().any(|c| !c.is_ascii_alphanumeric()),
                "Inclua símbolos (ex: !@#$).",
            ),
        ];

        let mut score = 0u8;
        let mut suggestions = Vec::new();
        for (met, hint) in rules {
            if met {
                score += 1;
            } else {
                suggestions.push(hint);
            }
        }

        Some(Self {
            score,
            label: StrengthLabel::from_score(score),
            suggestions,
        })
    }

    /// Evaluate and report the test. The password itself is never logged.
    pub fn test(password: &str, sink: &mut impl TelemetrySink) -> Option<Self> {
        let strength = Self::evaluate(password)?;
        let mut payload = Payload::new();
        payload.insert("length".to_string(), password.chars().count().into());
        payload.insert("score".to_string(), strength.score.into());
        sink.log_event("password_strength_test", Some(payload));
        Some(strength)
    }

    pub fn percent(&self) -> u8 {
        self.score * 25
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_session::EventLog;

    #[test]
    fn test_empty_password() {
        assert_eq!(PasswordStrength::evaluate(""), None);
    }

    #[test]
    fn test_display_labels() {
        let labels: Vec<_> = (0..=4)
            .map(|score| StrengthLabel::from_score(score).label())
            .collect();
        assert_eq!(
            labels,
            ["Muito Fraca", "Muito Fraca", "Média", "Forte", "Muito Forte"]
        );
    }

    #[test]
    fn test_scores() {
        let weak = PasswordStrength::evaluate("abc").unwrap();
        assert_eq!(weak.score, 0);
        assert_eq!(weak.label, StrengthLabel::VeryWeak);
        assert_eq!(weak.suggestions.len(), 4);

        let medium = PasswordStrength::evaluate("abcdefgh1").unwrap();
        assert_eq!(medium.score, 2);
        assert_eq!(medium.label, StrengthLabel::Medium);

        let strong = PasswordStrength::evaluate("Abcdefgh1").unwrap();
        assert_eq!(strong.label, StrengthLabel::Strong);
        assert_eq!(strong.suggestions, vec!["Inclua símbolos (ex: !@#$)."]);

        let best = PasswordStrength::evaluate("Abcdefgh1!").unwrap();
        assert_eq!(best.label, StrengthLabel::VeryStrong);
        assert!(best.suggestions.is_empty());
        assert_eq!(best.percent(), 100);
    }

    #[test]
    fn test_accented_letters_count_as_symbols() {
        let strength = PasswordStrength::evaluate("quebradaé").unwrap();
        assert_eq!(strength.score, 2);
        assert!(!strength.suggestions.contains(&"Inclua símbolos (ex: !@#$)."));
    }

    #[test]
    fn test_logging_omits_password() {
        let mut log = EventLog::new();
        PasswordStrength::test("Segredo#2024", &mut log).unwrap();
        let entry = log.latest().unwrap();
        assert_eq!(entry.event_name, "password_strength_test");
        let payload = entry.payload.as_ref().unwrap();
        assert_eq!(payload["length"], 12);
        assert_eq!(payload["score"], 4);
        assert!(!serde_json::to_string(payload).unwrap().contains("Segredo"));

        assert_eq!(PasswordStrength::test("", &mut log), None);
        assert_eq!(log.len(), 1);
    }
}
