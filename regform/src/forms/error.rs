//! Form validation error types
//!
//! An [`ErrorMap`] holds at most one [`FieldError`] per field and is rebuilt
//! from scratch on every validation pass.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::registration::Field;

/// A single validation failure for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed
    pub field: Field,
    /// Code of the failing rule (`required`, `email`, ...)
    pub code: String,
    /// The human-readable message
    pub message: String,
}

impl FieldError {
    /// Create a field error
    #[must_use]
    pub fn new(field: Field, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Validation errors keyed by field
///
/// Serializes as a flat `{ "fieldName": "message" }` object.
///
/// # Examples
///
/// ```rust
/// use regform::forms::ErrorMap;
/// use regform::registration::Field;
///
/// let mut errors = ErrorMap::new();
/// errors.insert(Field::Email, "email", "Invalid Email Format");
///
/// assert!(errors.has_errors());
/// assert_eq!(errors.message(Field::Email), Some("Invalid Email Format"));
/// assert_eq!(errors.message(Field::Password), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<Field, FieldError>,
}

impl ErrorMap {
    /// Create a new empty error map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error for a field, replacing any previous one
    pub fn insert(&mut self, field: Field, code: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field, FieldError::new(field, code, message));
    }

    /// Check if there are any errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether no field failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if a specific field has an error
    #[must_use]
    pub fn has_field_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Get the error for a field
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Get the message for a field
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|error| error.message.as_str())
    }

    /// Get all fields that have errors, in field order
    #[must_use]
    pub fn fields_with_errors(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over all errors in field order
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    /// Field name to message pairs, in field order
    #[must_use]
    pub fn to_messages(&self) -> BTreeMap<&'static str, &str> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.message.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = &'a FieldError;
    type IntoIter = std::collections::btree_map::Values<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values()
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.as_str(), &error.message)?;
        }
        map.end()
    }
}
