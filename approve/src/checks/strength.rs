use crate::Args;
use crate::errors::ApproveError;
use crate::checks::{Outcome, Report, Test};

const DEFAULT_MINIMUM: i64 = 8;
const DEFAULT_MINIMUM_BONUS: i64 = 10;

/// Characters that count towards the special-character check.
const SPECIAL: &str = "!@#$%^&*?_~-()";

/// Band labels indexed by score value.
const BANDS: [&str; 7] = [
    "Very Weak",
    "Weak",
    "Better",
    "Almost",
    "Acceptable",
    "Strong",
    "Very Strong",
];

/// The five named checks with their default message templates. Entries in
/// `config.messages` keyed by the first column override the second.
const CHECKS: [(&str, &str); 5] = [
    ("isMinimum", "{title} must be at least {min} characters"),
    ("hasLower", "{title} must have at least 1 lower case character"),
    ("hasUpper", "{title} must have at least 1 upper case character"),
    ("hasNumber", "{title} must have at least 1 number"),
    ("hasSpecial", "{title} must have at least 1 special character"),
];

/// The detail block of a strength outcome.
///
/// `value` is the number of passed checks (0-6, length and bonus length
/// included); `strength` is the same as a rounded-up percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Score {
    pub value: u8,
    pub is_minimum: bool,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_number: bool,
    pub has_special: bool,
    pub is_bonus: bool,
    pub strength: u8,
}

/// Scores a value as a password.
///
/// Expects `min` (length floor) and `bonus` (length earning an extra point)
/// and accepts per-check message overrides via `config.messages`. The test
/// holds no state; both lengths arrive through the extracted arguments on
/// every call.
pub struct Strength;

fn score(value: &str, minimum: i64, bonus: i64) -> Score {
    let len = value.chars().count() as i64;
    let mut score = Score {
        is_minimum: len >= minimum,
        is_bonus: len >= bonus,
        has_lower: value.chars().any(|c| c.is_ascii_lowercase()),
        has_upper: value.chars().any(|c| c.is_ascii_uppercase()),
        has_number: value.chars().any(|c| c.is_ascii_digit()),
        has_special: value.chars().any(|c| SPECIAL.contains(c)),
        ..Score::default()
    };
    score.value = [
        score.is_minimum,
        score.is_bonus,
        score.has_lower,
        score.has_upper,
        score.has_number,
        score.has_special,
    ]
    .iter()
    .filter(|&&passed| passed)
    .count() as u8;
    score.strength = (u32::from(score.value) * 100).div_ceil(6) as u8;
    score
}

impl Test for Strength {
    fn validate(&self, value: &str, args: &Args) -> Result<Outcome, ApproveError> {
        let minimum = args.int("min").unwrap_or(DEFAULT_MINIMUM);
        let bonus = args.int("bonus").unwrap_or(DEFAULT_MINIMUM_BONUS);
        let score = score(value, minimum, bonus);

        let overrides = args.config().map(|config| &config.messages);
        let passed = [
            score.is_minimum,
            score.has_lower,
            score.has_upper,
            score.has_number,
            score.has_special,
        ];
        let mut errors = Vec::new();
        for (&(name, template), ok) in CHECKS.iter().zip(passed) {
            if !ok {
                let template = overrides
                    .and_then(|messages| messages.get(name))
                    .map(String::as_str)
                    .unwrap_or(template);
                errors.push(template.to_string());
            }
        }

        Ok(Outcome::Report(Report {
            valid: score.value > 4,
            message: BANDS[score.value as usize].to_string(),
            errors,
            score: Some(score),
        }))
    }

    fn message(&self) -> &str {
        "{title} did not pass the strength test."
    }

    fn expects(&self) -> &[&'static str] {
        &["min", "bonus"]
    }
}
