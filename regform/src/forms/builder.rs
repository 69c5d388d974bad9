//! Form builder API with fluent interface
//!
//! Builds a [`FormDefinition`]: the ordered field-and-rule table that drives
//! both rendering and validation.

use super::error::ErrorMap;
use super::field::{FieldRule, FormField, InputType, SelectOption};
use super::render::{FormRenderOptions, FormRenderer};
use crate::registration::{Field, FormRecord};
use crate::validation::Rule;

/// A complete form: element attributes plus the field table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefinition {
    /// Form action URL
    pub action: String,
    /// HTTP method
    pub method: String,
    /// Form ID
    pub id: Option<String>,
    /// CSS classes
    pub class: Option<String>,
    /// Form fields in display order
    pub fields: Vec<FormField>,
    /// Submit button text
    pub submit_text: Option<String>,
    /// Disable browser validation
    pub novalidate: bool,
}

impl FormDefinition {
    /// Look up the field entry for a record key
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&FormField> {
        self.fields.iter().find(|entry| entry.field == field)
    }

    /// Whether the form shows a control for `field`
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.field(field).is_some()
    }

    /// Whether any field carries rules
    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.fields.iter().any(FormField::is_validated)
    }

    /// Render with the given values and errors
    #[must_use]
    pub fn render(&self, record: &FormRecord, errors: &ErrorMap, options: &FormRenderOptions) -> String {
        FormRenderer::render(self, record, errors, options)
    }
}

/// Builder for form definitions
///
/// # Examples
///
/// ```rust
/// use regform::forms::{FormBuilder, InputType};
/// use regform::registration::Field;
/// use regform::validation::Rule;
///
/// let form = FormBuilder::new("/register", "POST")
///     .id("signup")
///     .field(Field::Email, InputType::Email)
///         .label("Email")
///         .placeholder("Email")
///         .required("Email is required")
///         .rule(Rule::Email, "Invalid Email Format")
///         .done()
///     .submit("Submit")
///     .build();
///
/// assert_eq!(form.fields.len(), 1);
/// assert_eq!(form.fields[0].rules.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FormBuilder {
    form: FormDefinition,
}

impl FormBuilder {
    /// Create a new form builder with action and method
    #[must_use]
    pub fn new(action: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            form: FormDefinition {
                action: action.into(),
                method: method.into(),
                id: None,
                class: None,
                fields: Vec::new(),
                submit_text: None,
                novalidate: false,
            },
        }
    }

    /// Set the form ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.form.id = Some(id.into());
        self
    }

    /// Set the form CSS class
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.form.class = Some(class.into());
        self
    }

    /// Set the submit button text
    #[must_use]
    pub fn submit(mut self, text: impl Into<String>) -> Self {
        self.form.submit_text = Some(text.into());
        self
    }

    /// Disable browser validation (add novalidate attribute)
    #[must_use]
    pub const fn novalidate(mut self) -> Self {
        self.form.novalidate = true;
        self
    }

    // =========================================================================
    // Field Builders
    // =========================================================================

    /// Add an input field and return a field builder
    #[must_use]
    pub fn field(self, field: Field, input_type: InputType) -> FieldBuilder {
        FieldBuilder::new(self, FormField::input(field, input_type))
    }

    /// Add a select field
    #[must_use]
    pub fn select(self, field: Field) -> FieldBuilder {
        FieldBuilder::new(self, FormField::select(field))
    }

    /// Add a radio button group
    #[must_use]
    pub fn radio(self, field: Field) -> FieldBuilder {
        FieldBuilder::new(self, FormField::radio(field))
    }

    /// Add a checkbox group for a set-valued field
    #[must_use]
    pub fn checkbox_group(self, field: Field) -> FieldBuilder {
        FieldBuilder::new(self, FormField::checkbox_group(field))
    }

    /// Add a pre-built field
    #[must_use]
    pub fn add_field(mut self, field: FormField) -> Self {
        self.form.fields.push(field);
        self
    }

    /// Finish the definition
    #[must_use]
    pub fn build(self) -> FormDefinition {
        self.form
    }
}

// =============================================================================
// Field Builder
// =============================================================================

/// Builder for one field entry
pub struct FieldBuilder {
    form: FormBuilder,
    field: FormField,
}

impl FieldBuilder {
    const fn new(form: FormBuilder, field: FormField) -> Self {
        Self { form, field }
    }

    /// Set the field label
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.field.label = Some(label.into());
        self
    }

    /// Set placeholder text
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.field.placeholder = Some(placeholder.into());
        self
    }

    /// Set CSS class
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.field.class = Some(class.into());
        self
    }

    /// Set element ID (overrides default which is the field name)
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.field.id = Some(id.into());
        self
    }

    /// Set help text
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.field.help_text = Some(text.into());
        self
    }

    /// Add an option (ignored for plain inputs)
    #[must_use]
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        if let Some(options) = self.field.kind.options_mut() {
            options.push(SelectOption::new(value, label));
        }
        self
    }

    /// Add an empty-valued leading option such as "Please Choose"
    #[must_use]
    pub fn placeholder_option(mut self, label: impl Into<String>) -> Self {
        if let Some(options) = self.field.kind.options_mut() {
            options.push(SelectOption::placeholder(label));
        }
        self
    }

    /// Require a value; shorthand for `rule(Rule::Required, message)`
    #[must_use]
    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Required, message)
    }

    /// Append a rule to the field's chain
    #[must_use]
    pub fn rule(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.field.rules.push(FieldRule::new(rule, message));
        self
    }

    /// Finish building this field and return to form builder
    #[must_use]
    pub fn done(mut self) -> FormBuilder {
        self.form.form.fields.push(self.field);
        self.form
    }
}

impl From<FormBuilder> for FormDefinition {
    fn from(builder: FormBuilder) -> Self {
        builder.build()
    }
}
