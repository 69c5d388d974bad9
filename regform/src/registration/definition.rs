//! The three registration form variants

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::{Field, Interest};
use crate::error::RegformError;
use crate::forms::{FieldBuilder, FormBuilder, FormDefinition, FormRenderOptions, InputType};
use crate::validation::{Rule, ValidationEngine};

/// Minimum accepted age
pub const MIN_AGE: i64 = 18;
/// Maximum accepted age
pub const MAX_AGE: i64 = 100;
/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Required phone number length
pub const PHONE_DIGITS: usize = 10;

/// Canonical validation messages
pub mod messages {
    #![allow(missing_docs)]

    pub const FIRST_NAME_REQUIRED: &str = "First Name is required";
    pub const LAST_NAME_REQUIRED: &str = "Last Name is required";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_INVALID: &str = "Invalid Email Format";
    pub const PHONE_REQUIRED: &str = "Phone Number is required";
    pub const PHONE_INVALID: &str = "Phone Number must be 10 digits";
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    pub const PASSWORD_WEAK: &str = "Password must be at least 8 characters long and contain at least one symbol, one number, one upper case and one lower case letter";
    pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm Password is required";
    pub const PASSWORD_MISMATCH: &str = "Password must match";
    pub const AGE_REQUIRED: &str = "Age is required";
    pub const AGE_OUT_OF_RANGE: &str = "You must be at least 18 and not older than 100 years old";
    pub const GENDER_REQUIRED: &str = "Gender is required";
    pub const CATEGORY_REQUIRED: &str = "Please select a category";
    pub const INTERESTS_REQUIRED: &str = "Select at least one interest";
    pub const BIRTH_DATE_REQUIRED: &str = "Date of Birth is required";
}

const CATEGORIES: [(&str, &str); 5] = [
    ("technology", "Technology"),
    ("health", "Health"),
    ("finance", "Finance"),
    ("education", "Education"),
    ("others", "Others"),
];

/// Which registration form to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormVariant {
    /// Plain form, every submit succeeds
    Unvalidated,
    /// Hand-written rule table, Bootstrap classes
    #[default]
    Manual,
    /// Schema-validated, utility classes, adds `category`
    Schema,
}

impl FormVariant {
    /// Every variant
    pub const ALL: [Self; 3] = [Self::Unvalidated, Self::Manual, Self::Schema];

    /// Variant name as used in configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unvalidated => "unvalidated",
            Self::Manual => "manual",
            Self::Schema => "schema",
        }
    }

    /// Engine used when configuration does not override it
    #[must_use]
    pub const fn default_engine(&self) -> ValidationEngine {
        match self {
            Self::Unvalidated => ValidationEngine::Disabled,
            Self::Manual => ValidationEngine::RuleTable,
            Self::Schema => ValidationEngine::Schema,
        }
    }

    /// Class preset the variant renders with
    #[must_use]
    pub fn render_options(&self) -> FormRenderOptions {
        match self {
            Self::Unvalidated | Self::Manual => FormRenderOptions::bootstrap(),
            Self::Schema => FormRenderOptions::tailwind(),
        }
    }

    /// Build the variant's field and rule table
    #[must_use]
    pub fn definition(&self) -> FormDefinition {
        self.definition_for("/register", "POST")
    }

    /// Build the variant's table with a custom action and method
    #[must_use]
    pub fn definition_for(&self, action: &str, method: &str) -> FormDefinition {
        match self {
            Self::Unvalidated => bootstrap_form(action, method, false),
            Self::Manual => bootstrap_form(action, method, true),
            Self::Schema => utility_form(action, method),
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormVariant {
    type Err = RegformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| RegformError::UnknownVariant(s.to_string()))
    }
}

// Rule chains shared by the validated variants. The unvalidated form gets
// the same controls with the chains dropped.
struct Rules {
    enabled: bool,
}

impl Rules {
    fn apply(&self, field: Field, builder: FieldBuilder) -> FieldBuilder {
        use messages::{
            AGE_OUT_OF_RANGE, AGE_REQUIRED, BIRTH_DATE_REQUIRED, CATEGORY_REQUIRED,
            CONFIRM_PASSWORD_REQUIRED, EMAIL_INVALID, EMAIL_REQUIRED, FIRST_NAME_REQUIRED,
            GENDER_REQUIRED, INTERESTS_REQUIRED, LAST_NAME_REQUIRED, PASSWORD_MISMATCH,
            PASSWORD_REQUIRED, PASSWORD_WEAK, PHONE_INVALID, PHONE_REQUIRED,
        };

        if !self.enabled {
            return builder;
        }

        match field {
            Field::FirstName => builder.required(FIRST_NAME_REQUIRED),
            Field::LastName => builder.required(LAST_NAME_REQUIRED),
            Field::Email => builder.required(EMAIL_REQUIRED).rule(Rule::Email, EMAIL_INVALID),
            Field::PhoneNumber => builder
                .required(PHONE_REQUIRED)
                .rule(Rule::Digits(PHONE_DIGITS), PHONE_INVALID),
            Field::Password => builder.required(PASSWORD_REQUIRED).rule(
                Rule::Password { min_length: MIN_PASSWORD_LENGTH },
                PASSWORD_WEAK,
            ),
            Field::ConfirmPassword => builder
                .required(CONFIRM_PASSWORD_REQUIRED)
                .rule(Rule::Matches(Field::Password), PASSWORD_MISMATCH),
            Field::Age => builder
                .required(AGE_REQUIRED)
                .rule(Rule::IntegerRange { min: MIN_AGE, max: MAX_AGE }, AGE_OUT_OF_RANGE),
            Field::Gender => builder.required(GENDER_REQUIRED),
            Field::Category => builder.required(CATEGORY_REQUIRED),
            Field::Interests => builder.required(INTERESTS_REQUIRED),
            Field::BirthDate => builder.required(BIRTH_DATE_REQUIRED),
        }
    }
}

fn interests(mut builder: FieldBuilder) -> FieldBuilder {
    for interest in Interest::ALL {
        builder = builder.option(interest.as_str(), interest.display_name());
    }
    builder
}

fn bootstrap_form(action: &str, method: &str, validated: bool) -> FormDefinition {
    let rules = Rules { enabled: validated };

    let form = FormBuilder::new(action, method).id("registration").novalidate();

    let form = rules
        .apply(Field::FirstName, form.field(Field::FirstName, InputType::Text))
        .label("First Name")
        .placeholder("Enter FirstName")
        .done();
    let form = rules
        .apply(Field::LastName, form.field(Field::LastName, InputType::Text))
        .label("Last Name")
        .placeholder("Enter LastName")
        .done();
    let form = rules
        .apply(Field::Email, form.field(Field::Email, InputType::Email))
        .label("Email")
        .placeholder("Email")
        .done();
    let form = rules
        .apply(Field::PhoneNumber, form.field(Field::PhoneNumber, InputType::Text))
        .label("Phone Number")
        .placeholder("Phone Number")
        .done();
    let form = rules
        .apply(Field::Password, form.field(Field::Password, InputType::Password))
        .label("Password")
        .placeholder("password")
        .done();
    let form = rules
        .apply(Field::ConfirmPassword, form.field(Field::ConfirmPassword, InputType::Password))
        .label("Confirm Password")
        .placeholder("confirmPassword")
        .done();
    let form = rules
        .apply(Field::Age, form.field(Field::Age, InputType::Number))
        .label("Age")
        .placeholder("age")
        .done();
    let form = rules
        .apply(Field::Gender, form.select(Field::Gender))
        .label("Gender")
        .placeholder_option("Select Gender")
        .option("male", "Male")
        .option("female", "Female")
        .option("other", "Other")
        .done();
    let form = interests(rules.apply(Field::Interests, form.checkbox_group(Field::Interests)))
        .label("Interests")
        .done();
    let form = rules
        .apply(Field::BirthDate, form.field(Field::BirthDate, InputType::Date))
        .label("Date of Birth")
        .placeholder("Enter birth date")
        .done();

    form.submit("Submit").build()
}

fn utility_form(action: &str, method: &str) -> FormDefinition {
    let rules = Rules { enabled: true };

    let form = FormBuilder::new(action, method).id("registration").novalidate();

    let form = rules
        .apply(Field::FirstName, form.field(Field::FirstName, InputType::Text))
        .label("First Name")
        .placeholder("First Name")
        .done();
    let form = rules
        .apply(Field::LastName, form.field(Field::LastName, InputType::Text))
        .label("Last Name")
        .placeholder("Last Name")
        .done();
    let form = rules
        .apply(Field::Age, form.field(Field::Age, InputType::Number))
        .label("Age")
        .placeholder("Enter Age")
        .done();
    let form = rules
        .apply(Field::Email, form.field(Field::Email, InputType::Email))
        .label("Email")
        .placeholder("Email")
        .done();
    let form = rules
        .apply(Field::PhoneNumber, form.field(Field::PhoneNumber, InputType::Tel))
        .label("Phone Number")
        .placeholder("phone number")
        .done();
    let form = rules
        .apply(Field::Password, form.field(Field::Password, InputType::Password))
        .label("Password")
        .placeholder("password")
        .done();
    let form = rules
        .apply(Field::ConfirmPassword, form.field(Field::ConfirmPassword, InputType::Password))
        .label("Confirm Password")
        .placeholder("Confirm Password")
        .done();

    let mut category = rules
        .apply(Field::Category, form.select(Field::Category))
        .label("Category")
        .placeholder_option("Please Choose");
    for (value, label) in CATEGORIES {
        category = category.option(value, label);
    }
    let form = category.done();

    let form = rules
        .apply(Field::Gender, form.radio(Field::Gender))
        .label("Gender")
        .option("male", "Male")
        .option("female", "Female")
        .option("others", "Others")
        .done();
    let form = interests(rules.apply(Field::Interests, form.checkbox_group(Field::Interests)))
        .label("Interests")
        .done();
    let form = rules
        .apply(Field::BirthDate, form.field(Field::BirthDate, InputType::Date))
        .label("Date of Birth")
        .done();

    form.submit("Submit").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names_round_trip() {
        for variant in FormVariant::ALL {
            assert_eq!(variant.as_str().parse::<FormVariant>().unwrap(), variant);
        }
        assert!(matches!(
            "tailwind".parse::<FormVariant>(),
            Err(RegformError::UnknownVariant(name)) if name == "tailwind"
        ));
    }

    #[test]
    fn test_category_only_in_schema_variant() {
        assert!(FormVariant::Schema.definition().contains(Field::Category));
        assert!(!FormVariant::Manual.definition().contains(Field::Category));
        assert!(!FormVariant::Unvalidated.definition().contains(Field::Category));
    }

    #[test]
    fn test_unvalidated_has_no_rules() {
        let definition = FormVariant::Unvalidated.definition();
        assert!(!definition.is_validated());
        assert_eq!(definition.fields.len(), 10);
    }

    #[test]
    fn test_every_field_validated_in_schema_variant() {
        let definition = FormVariant::Schema.definition();
        for field in Field::ALL {
            let entry = definition.field(field).unwrap();
            assert!(entry.is_validated(), "{field}");
            assert_eq!(entry.rules[0].rule, Rule::Required);
        }
    }

    #[test]
    fn test_validated_variants_share_messages() {
        let manual = FormVariant::Manual.definition();
        let schema = FormVariant::Schema.definition();

        for entry in &manual.fields {
            assert_eq!(Some(&entry.rules), schema.field(entry.field).map(|e| &e.rules));
        }
    }

    #[test]
    fn test_gender_controls_differ() {
        let manual = FormVariant::Manual.definition();
        let schema = FormVariant::Schema.definition();

        let manual_values: Vec<&str> = manual
            .field(Field::Gender)
            .unwrap()
            .kind
            .options()
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(manual_values, vec!["", "male", "female", "other"]);

        let schema_values: Vec<&str> = schema
            .field(Field::Gender)
            .unwrap()
            .kind
            .options()
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(schema_values, vec!["male", "female", "others"]);
    }

    #[test]
    fn test_default_engines() {
        assert_eq!(FormVariant::Unvalidated.default_engine(), ValidationEngine::Disabled);
        assert_eq!(FormVariant::Manual.default_engine(), ValidationEngine::RuleTable);
        assert_eq!(FormVariant::Schema.default_engine(), ValidationEngine::Schema);
    }

    #[test]
    fn test_custom_action() {
        let definition = FormVariant::Manual.definition_for("/signup", "GET");
        assert_eq!(definition.action, "/signup");
        assert_eq!(definition.method, "GET");
    }
}
