//! Registration record, field keys and interest labels

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegformError;

/// Keys of the registration record
///
/// The wire name (`as_str`) is the camelCase key used for JSON records,
/// HTML `name` attributes and error map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Email address
    Email,
    /// Ten digit phone number
    PhoneNumber,
    /// Password
    Password,
    /// Password confirmation
    ConfirmPassword,
    /// Age as numeric text
    Age,
    /// Gender label
    Gender,
    /// Category label (utility-class variant only)
    Category,
    /// Set of interest labels
    Interests,
    /// Birth date as date text
    BirthDate,
}

impl Field {
    /// Every field, in record order
    pub const ALL: [Self; 11] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::PhoneNumber,
        Self::Password,
        Self::ConfirmPassword,
        Self::Age,
        Self::Gender,
        Self::Category,
        Self::Interests,
        Self::BirthDate,
    ];

    /// Wire name of the field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Category => "category",
            Self::Interests => "interests",
            Self::BirthDate => "birthDate",
        }
    }

    /// Whether the field holds a single text value
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Interests)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = RegformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| RegformError::UnknownField(s.to_string()))
    }
}

/// Interest labels offered by the checkbox group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    /// Coding
    Coding,
    /// Sports
    Sports,
    /// Reading
    Reading,
}

impl Interest {
    /// Every interest, in display order
    pub const ALL: [Self; 3] = [Self::Coding, Self::Sports, Self::Reading];

    /// Wire label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Sports => "sports",
            Self::Reading => "reading",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Coding => "Coding",
            Self::Sports => "Sports",
            Self::Reading => "Reading",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interest {
    type Err = RegformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|interest| interest.as_str() == s)
            .ok_or_else(|| RegformError::UnknownInterest(s.to_string()))
    }
}

/// Borrowed view of a single field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Text-valued field
    Text(&'a str),
    /// The interests set
    Set(&'a BTreeSet<Interest>),
}

impl<'a> FieldValue<'a> {
    /// Whether the value counts as filled in
    ///
    /// Text is present when non-empty; whitespace is not trimmed.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Set(set) => !set.is_empty(),
        }
    }

    /// The text, or `None` for the interests set
    #[must_use]
    pub const fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(*text),
            Self::Set(_) => None,
        }
    }
}

/// Current values of one registration form
///
/// Created with all-empty defaults, edited field by field.
///
/// # Examples
///
/// ```rust
/// use regform::registration::{Field, FormRecord, Interest};
///
/// let mut record = FormRecord::default();
/// record.set_text(Field::Email, "ada@example.com").unwrap();
/// record.set_interest(Interest::Coding, true);
///
/// assert_eq!(record.text(Field::Email), Some("ada@example.com"));
/// assert!(record.has_interest(Interest::Coding));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormRecord {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone_number: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
    /// Age as entered
    pub age: String,
    /// Gender label
    pub gender: String,
    /// Category label
    pub category: String,
    /// Selected interests
    pub interests: BTreeSet<Interest>,
    /// Birth date as entered
    pub birth_date: String,
}

impl FormRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the value of any field
    #[must_use]
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Interests => FieldValue::Set(&self.interests),
            scalar => FieldValue::Text(self.scalar_ref(scalar)),
        }
    }

    /// Text of a scalar field, `None` for `interests`
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        self.value(field).as_text()
    }

    /// Replace the text of a scalar field
    ///
    /// # Errors
    ///
    /// Returns [`RegformError::NotScalar`] for `interests`, which is edited
    /// through [`FormRecord::set_interest`].
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Result<(), RegformError> {
        let slot = self.scalar_mut(field).ok_or(RegformError::NotScalar(field))?;
        *slot = value.into();
        Ok(())
    }

    /// Add or remove one interest; both directions are idempotent
    ///
    /// Returns `true` when the set changed.
    pub fn set_interest(&mut self, interest: Interest, selected: bool) -> bool {
        if selected {
            self.interests.insert(interest)
        } else {
            self.interests.remove(&interest)
        }
    }

    /// Whether an interest is selected
    #[must_use]
    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    // Field::Interests never reaches here; value() routes it to the set.
    fn scalar_ref(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Category => &self.category,
            Field::BirthDate => &self.birth_date,
            Field::Interests => "",
        }
    }

    fn scalar_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::PhoneNumber => Some(&mut self.phone_number),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Age => Some(&mut self.age),
            Field::Gender => Some(&mut self.gender),
            Field::Category => Some(&mut self.category),
            Field::BirthDate => Some(&mut self.birth_date),
            Field::Interests => None,
        }
    }
}
