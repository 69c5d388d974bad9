//! Hand-written predicates, interpreted from the form's rule table

use tracing::debug;

use super::FormValidator;
use crate::forms::{ErrorMap, FormDefinition};
use crate::registration::FormRecord;

/// Evaluates every field's rule chain in table order
///
/// All fields are checked; within a field the first failing rule decides
/// the message and the rest of that chain is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTableValidator;

impl RuleTableValidator {
    /// Create the validator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FormValidator for RuleTableValidator {
    fn validate(&self, definition: &FormDefinition, record: &FormRecord) -> ErrorMap {
        let mut errors = ErrorMap::new();

        for entry in &definition.fields {
            let failed = entry
                .rules
                .iter()
                .find(|field_rule| !field_rule.rule.check(entry.field, record));

            if let Some(field_rule) = failed {
                debug!(field = %entry.field, code = field_rule.rule.code(), "rule failed");
                errors.insert(entry.field, field_rule.rule.code(), field_rule.message.clone());
            }
        }

        errors
    }

    fn name(&self) -> &'static str {
        "rule-table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FormBuilder, InputType};
    use crate::registration::Field;
    use crate::validation::Rule;

    fn email_form() -> FormDefinition {
        FormBuilder::new("/register", "POST")
            .field(Field::Email, InputType::Email)
            .required("Email is required")
            .rule(Rule::Email, "Invalid Email Format")
            .done()
            .field(Field::FirstName, InputType::Text)
            .required("First Name is required")
            .done()
            .build()
    }

    #[test]
    fn test_presence_checked_before_format() {
        let errors = RuleTableValidator.validate(&email_form(), &FormRecord::default());

        assert_eq!(errors.message(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Email).unwrap().code, "required");
    }

    #[test]
    fn test_all_fields_evaluated() {
        let errors = RuleTableValidator.validate(&email_form(), &FormRecord::default());
        assert_eq!(errors.fields_with_errors(), vec![Field::FirstName, Field::Email]);
    }

    #[test]
    fn test_format_message_when_present() {
        let record = FormRecord {
            email: "not-an-email".into(),
            first_name: "Ada".into(),
            ..FormRecord::default()
        };
        let errors = RuleTableValidator.validate(&email_form(), &record);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Email), Some("Invalid Email Format"));
    }

    #[test]
    fn test_fields_without_rules_are_ignored() {
        let form = FormBuilder::new("/register", "POST")
            .field(Field::Email, InputType::Email)
            .done()
            .build();

        assert!(RuleTableValidator.validate(&form, &FormRecord::default()).is_empty());
    }
}
