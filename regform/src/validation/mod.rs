//! Validation engines
//!
//! A validator is a pure function from a [`FormDefinition`] and a
//! [`FormRecord`] to an [`ErrorMap`]. It never fails: malformed input
//! becomes a message, never a panic or an `Err`.
//!
//! Two engines evaluate the same rule table:
//!
//! - [`RuleTableValidator`] interprets each field's [`Rule`] chain directly
//! - [`SchemaValidator`] compiles the same chains into `validator` checks
//!   and collects a `ValidationErrors`
//!
//! For identical inputs both produce identical maps, whatever rules the
//! definition carries.
//!
//! # Example
//!
//! ```rust
//! use regform::registration::{Field, FormRecord, FormVariant};
//! use regform::validation::{FormValidator, ValidationEngine};
//!
//! let definition = FormVariant::Manual.definition();
//! let record = FormRecord { email: "not-an-email".into(), ..FormRecord::default() };
//!
//! let errors = ValidationEngine::RuleTable.validate(&definition, &record);
//! assert_eq!(errors.message(Field::Email), Some("Invalid Email Format"));
//! ```

mod rule_table;
mod rules;
mod schema;

use serde::{Deserialize, Serialize};

pub use rule_table::RuleTableValidator;
pub use rules::{
    has_exact_digits, is_integer_in_range, is_strong_password, is_valid_email, Rule,
    PASSWORD_SYMBOLS, REQUIRED,
};
pub use schema::SchemaValidator;

use crate::forms::{ErrorMap, FormDefinition};
use crate::registration::FormRecord;

/// A strategy turning a record into its current error map
pub trait FormValidator {
    /// Evaluate every rule of `definition` against `record`
    fn validate(&self, definition: &FormDefinition, record: &FormRecord) -> ErrorMap;

    /// Short engine name for logs
    fn name(&self) -> &'static str;
}

/// Accepts every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoValidation;

impl FormValidator for NoValidation {
    fn validate(&self, _definition: &FormDefinition, _record: &FormRecord) -> ErrorMap {
        ErrorMap::new()
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// Engine selection, usable from configuration and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationEngine {
    /// Skip validation entirely
    Disabled,
    /// Interpret the rule table
    #[default]
    RuleTable,
    /// Evaluate through the `validator` crate
    Schema,
}

impl ValidationEngine {
    /// Every engine
    pub const ALL: [Self; 3] = [Self::Disabled, Self::RuleTable, Self::Schema];
}

impl FormValidator for ValidationEngine {
    fn validate(&self, definition: &FormDefinition, record: &FormRecord) -> ErrorMap {
        match self {
            Self::Disabled => NoValidation.validate(definition, record),
            Self::RuleTable => RuleTableValidator.validate(definition, record),
            Self::Schema => SchemaValidator.validate(definition, record),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Disabled => NoValidation.name(),
            Self::RuleTable => RuleTableValidator.name(),
            Self::Schema => SchemaValidator.name(),
        }
    }
}

impl std::fmt::Display for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ValidationEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.name() == s)
            .ok_or_else(|| format!("unknown validation engine: {s}"))
    }
}
