//! The registration form domain
//!
//! [`FormRecord`] holds the values of one form; [`FormVariant`] selects which
//! of the three registration forms is shown and how it is validated.

mod definition;
mod record;

pub use definition::{
    messages, FormVariant, MAX_AGE, MIN_AGE, MIN_PASSWORD_LENGTH, PHONE_DIGITS,
};
pub use record::{Field, FieldValue, FormRecord, Interest};
