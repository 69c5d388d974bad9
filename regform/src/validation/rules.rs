//! Field predicates
//!
//! Each [`Rule`] is an independent check on one field value. Rules never
//! fail on malformed input: anything that cannot be checked is simply
//! reported as not satisfying the rule.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registration::{Field, FieldValue, FormRecord};

/// Code of the presence rule
pub const REQUIRED: &str = "required";

/// Characters accepted as password symbols
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// `non-whitespace "@" non-whitespace "." non-whitespace`
pub(crate) static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// ASCII digits only, any length
pub(crate) static DIGITS_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*$").expect("digits pattern is valid"));

pub(crate) static SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("symbol pattern is valid"));

pub(crate) static DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));

pub(crate) static UPPER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("upper case pattern is valid"));

pub(crate) static LOWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("lower case pattern is valid"));

/// A single field predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text is non-empty, or the set has at least one member
    Required,
    /// Simplified email shape
    Email,
    /// Exactly this many ASCII digits and nothing else
    Digits(usize),
    /// Minimum length plus one symbol, digit, upper and lower case letter
    Password {
        /// Minimum number of characters
        min_length: usize,
    },
    /// Equal to another field, byte for byte
    Matches(Field),
    /// Parses as an integer within `min..=max`
    IntegerRange {
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },
}

impl Rule {
    /// Stable code identifying the rule kind
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => REQUIRED,
            Self::Email => "email",
            Self::Digits(_) => "phone",
            Self::Password { .. } => "password",
            Self::Matches(_) => "must_match",
            Self::IntegerRange { .. } => "range",
        }
    }

    /// Evaluate the rule against a field of `record`
    ///
    /// Format rules only make sense for text; applied to the interests set
    /// they fail.
    #[must_use]
    pub fn check(&self, field: Field, record: &FormRecord) -> bool {
        let value = record.value(field);
        match (self, value) {
            (Self::Required, value) => value.is_present(),
            (Self::Email, FieldValue::Text(text)) => is_valid_email(text),
            (Self::Digits(count), FieldValue::Text(text)) => has_exact_digits(text, *count),
            (Self::Password { min_length }, FieldValue::Text(text)) => {
                is_strong_password(text, *min_length)
            }
            (Self::Matches(other), FieldValue::Text(text)) => record.text(*other) == Some(text),
            (Self::IntegerRange { min, max }, FieldValue::Text(text)) => {
                is_integer_in_range(text, *min, *max)
            }
            (_, FieldValue::Set(_)) => false,
        }
    }
}

/// Whether `email` has the `x@y.z` shape with no whitespace
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether `text` is exactly `count` ASCII digits
#[must_use]
pub fn has_exact_digits(text: &str, count: usize) -> bool {
    text.len() == count && text.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `password` meets the length and character class policy
///
/// Length counts characters, not bytes.
#[must_use]
pub fn is_strong_password(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
        && SYMBOL_RE.is_match(password)
        && DIGIT_RE.is_match(password)
        && UPPER_RE.is_match(password)
        && LOWER_RE.is_match(password)
}

/// Whether `text` parses as an integer in `min..=max`
///
/// No trimming: `" 18"` does not parse.
#[must_use]
pub fn is_integer_in_range(text: &str, min: i64, max: i64) -> bool {
    text.parse::<i64>()
        .is_ok_and(|value| (min..=max).contains(&value))
}
