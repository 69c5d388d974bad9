//! Form field types and input configuration
//!
//! Defines the input types, controls and per-field rule lists that make up
//! a [`FormDefinition`](super::FormDefinition).

use crate::registration::Field;
use crate::validation::Rule;

/// HTML input types used by the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    /// Text input (default)
    #[default]
    Text,
    /// Email input
    Email,
    /// Password input (masked)
    Password,
    /// Number input
    Number,
    /// Telephone input
    Tel,
    /// Date input
    Date,
}

impl InputType {
    /// Get the HTML type attribute value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Date => "date",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Option for selects, radio groups and checkbox groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value attribute
    pub value: String,
    /// Display text
    pub label: String,
    /// Whether this option is disabled
    pub disabled: bool,
}

impl SelectOption {
    /// Create a new select option
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Create a placeholder option with an empty value
    ///
    /// Choosing it leaves the field empty, so the required check still fires.
    #[must_use]
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }
}

/// Kind of control rendered for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Standard input element
    Input(InputType),
    /// Select dropdown
    Select {
        /// Available options
        options: Vec<SelectOption>,
    },
    /// Radio button group
    Radio {
        /// Available options
        options: Vec<SelectOption>,
    },
    /// Checkbox group backing a set-valued field
    CheckboxGroup {
        /// One checkbox per option
        options: Vec<SelectOption>,
    },
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::Input(InputType::default())
    }
}

impl FieldKind {
    /// Options of a select, radio or checkbox group (empty for inputs)
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::Input(_) => &[],
            Self::Select { options } | Self::Radio { options } | Self::CheckboxGroup { options } => {
                options
            }
        }
    }

    pub(crate) fn options_mut(&mut self) -> Option<&mut Vec<SelectOption>> {
        match self {
            Self::Input(_) => None,
            Self::Select { options } | Self::Radio { options } | Self::CheckboxGroup { options } => {
                Some(options)
            }
        }
    }
}

/// A validation rule bound to the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    /// The predicate
    pub rule: Rule,
    /// Message published when the predicate fails
    pub message: String,
}

impl FieldRule {
    /// Bind a rule to its message
    #[must_use]
    pub fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// A form field: its control, presentation and ordered rule chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Record key this field edits
    pub field: Field,
    /// Control kind
    pub kind: FieldKind,
    /// Label text
    pub label: Option<String>,
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Extra CSS class(es) for the control
    pub class: Option<String>,
    /// Element ID (defaults to the field's wire name)
    pub id: Option<String>,
    /// Help text shown below the field
    pub help_text: Option<String>,
    /// Rules evaluated in order; the first failure wins
    pub rules: Vec<FieldRule>,
}

impl FormField {
    /// Create a new input field
    #[must_use]
    pub fn input(field: Field, input_type: InputType) -> Self {
        Self::new(field, FieldKind::Input(input_type))
    }

    /// Create a new select field
    #[must_use]
    pub fn select(field: Field) -> Self {
        Self::new(field, FieldKind::Select { options: Vec::new() })
    }

    /// Create a new radio button group
    #[must_use]
    pub fn radio(field: Field) -> Self {
        Self::new(field, FieldKind::Radio { options: Vec::new() })
    }

    /// Create a new checkbox group
    #[must_use]
    pub fn checkbox_group(field: Field) -> Self {
        Self::new(field, FieldKind::CheckboxGroup { options: Vec::new() })
    }

    const fn new(field: Field, kind: FieldKind) -> Self {
        Self {
            field,
            kind,
            label: None,
            placeholder: None,
            class: None,
            id: None,
            help_text: None,
            rules: Vec::new(),
        }
    }

    /// The `name` attribute (the field's wire name)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field.as_str()
    }

    /// Get the effective ID (custom ID or field name)
    #[must_use]
    pub fn effective_id(&self) -> &str {
        self.id.as_deref().unwrap_or_else(|| self.name())
    }

    /// Whether any rule is attached
    #[must_use]
    pub fn is_validated(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Message of the first rule carrying `code`
    #[must_use]
    pub fn message_for_code(&self, code: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.rule.code() == code)
            .map(|rule| rule.message.as_str())
    }
}
