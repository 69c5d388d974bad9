//! Rule table compiled into `validator` checks
//!
//! Every [`FieldRule`] of the definition becomes a call into the
//! `validator` crate's primitives (`ValidateLength`, `ValidateRegex`,
//! `ValidateRange`, `validate_must_match`). Failures are collected into a
//! [`ValidationErrors`] the way a derived `Validate` impl would, each one
//! carrying its rule code and the table's message. The first failure per
//! field wins, so the output matches
//! [`RuleTableValidator`](super::RuleTableValidator) for any definition.

use std::borrow::Cow;

use validator::{
    validate_must_match, Validate, ValidateLength, ValidateRange, ValidateRegex, ValidationError,
    ValidationErrors,
};

use super::rules::{Rule, DIGITS_ONLY_RE, DIGIT_RE, EMAIL_RE, LOWER_RE, SYMBOL_RE, UPPER_RE};
use super::FormValidator;
use crate::forms::{ErrorMap, FieldRule, FormDefinition};
use crate::registration::{Field, FieldValue, FormRecord};

/// A definition bound to the record it is checked against
struct TableSchema<'a> {
    definition: &'a FormDefinition,
    record: &'a FormRecord,
}

impl Validate for TableSchema<'_> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for entry in &self.definition.fields {
            for field_rule in &entry.rules {
                if let Err(error) = check(field_rule, entry.field, self.record) {
                    errors.add(entry.field.as_str(), error);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check(field_rule: &FieldRule, field: Field, record: &FormRecord) -> Result<(), ValidationError> {
    let passed = match (field_rule.rule, record.value(field)) {
        (Rule::Required, FieldValue::Text(text)) => text.validate_length(Some(1), None, None),
        (Rule::Required, FieldValue::Set(set)) => set.validate_length(Some(1), None, None),
        (Rule::Email, FieldValue::Text(text)) => text.validate_regex(&*EMAIL_RE),
        (Rule::Digits(count), FieldValue::Text(text)) => {
            u64::try_from(count).is_ok_and(|count| text.validate_length(None, None, Some(count)))
                && text.validate_regex(&*DIGITS_ONLY_RE)
        }
        (Rule::Password { min_length }, FieldValue::Text(text)) => {
            u64::try_from(min_length).is_ok_and(|min| text.validate_length(Some(min), None, None))
                && text.validate_regex(&*SYMBOL_RE)
                && text.validate_regex(&*DIGIT_RE)
                && text.validate_regex(&*UPPER_RE)
                && text.validate_regex(&*LOWER_RE)
        }
        (Rule::Matches(other), FieldValue::Text(text)) => record
            .text(other)
            .is_some_and(|other| validate_must_match(text, other)),
        (Rule::IntegerRange { min, max }, FieldValue::Text(text)) => text
            .parse::<i64>()
            .is_ok_and(|value| value.validate_range(Some(min), Some(max), None, None)),
        (_, FieldValue::Set(_)) => false,
    };

    if passed {
        Ok(())
    } else {
        Err(ValidationError::new(field_rule.rule.code())
            .with_message(Cow::Owned(field_rule.message.clone())))
    }
}

/// Validation through the `validator` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    /// Create the validator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FormValidator for SchemaValidator {
    fn validate(&self, definition: &FormDefinition, record: &FormRecord) -> ErrorMap {
        let mut result = ErrorMap::new();

        let schema = TableSchema { definition, record };
        let Err(errors) = schema.validate() else {
            return result;
        };
        let field_errors = errors.field_errors();

        for entry in &definition.fields {
            let Some(first) = field_errors
                .get(entry.field.as_str())
                .and_then(|errors| errors.first())
            else {
                continue;
            };

            tracing::debug!(field = %entry.field, code = %first.code, "schema rule failed");
            let message = first.message.as_deref().unwrap_or_default();
            result.insert(entry.field, first.code.clone(), message);
        }

        result
    }

    fn name(&self) -> &'static str {
        "schema"
    }
}
