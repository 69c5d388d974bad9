//! Shared fixtures for unit tests

use crate::registration::{FormRecord, Interest};

/// A record that passes every rule of every variant
pub fn valid_record() -> FormRecord {
    let mut record = FormRecord {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: "0123456789".to_string(),
        password: "Abcdefg1!".to_string(),
        confirm_password: "Abcdefg1!".to_string(),
        age: "36".to_string(),
        gender: "female".to_string(),
        category: "technology".to_string(),
        birth_date: "1815-12-10".to_string(),
        ..FormRecord::default()
    };
    record.set_interest(Interest::Coding, true);
    record
}
