//! Integration tests for the registration form session
//!
//! Drives sessions the way a UI would: edits, toggles, submit.

use regform::prelude::*;

fn valid_record() -> FormRecord {
    let mut record = FormRecord {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone_number: "0123456789".into(),
        password: "Abcdefg1!".into(),
        confirm_password: "Abcdefg1!".into(),
        age: "36".into(),
        gender: "female".into(),
        category: "technology".into(),
        birth_date: "1815-12-10".into(),
        ..FormRecord::default()
    };
    record.set_interest(Interest::Coding, true);
    record
}

/// Fill a session through the public edit handlers
fn fill<S: SubmissionSink>(session: &mut FormSession<S>, record: &FormRecord) {
    for field in Field::ALL {
        if let Some(text) = record.text(field) {
            session.set_field(field, text).unwrap();
        }
    }
    for interest in &record.interests {
        session.toggle_interest(*interest, true);
    }
}

fn validated_engines() -> [(FormVariant, ValidationEngine); 4] {
    [
        (FormVariant::Manual, ValidationEngine::RuleTable),
        (FormVariant::Manual, ValidationEngine::Schema),
        (FormVariant::Schema, ValidationEngine::RuleTable),
        (FormVariant::Schema, ValidationEngine::Schema),
    ]
}

fn errors_for(variant: FormVariant, engine: ValidationEngine, record: &FormRecord) -> ErrorMap {
    engine.validate(&variant.definition(), record)
}

#[test]
fn test_fully_valid_record_has_no_errors() {
    for (variant, engine) in validated_engines() {
        assert!(errors_for(variant, engine, &valid_record()).is_empty(), "{variant}/{engine}");
    }
}

#[test]
fn test_single_empty_field_reports_only_that_field() {
    let fields = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::ConfirmPassword,
        Field::Age,
        Field::Gender,
        Field::BirthDate,
    ];

    for (variant, engine) in validated_engines() {
        for field in fields {
            let mut record = valid_record();
            record.set_text(field, "").unwrap();

            let errors = errors_for(variant, engine, &record);
            assert_eq!(errors.fields_with_errors(), vec![field], "{variant}/{engine}");
        }
    }
}

#[test]
fn test_empty_interests_and_category() {
    let mut record = valid_record();
    record.interests.clear();
    record.category.clear();

    let manual = errors_for(FormVariant::Manual, ValidationEngine::RuleTable, &record);
    assert_eq!(manual.to_messages().into_iter().collect::<Vec<_>>(), vec![(
        "interests",
        "Select at least one interest"
    )]);

    let schema = errors_for(FormVariant::Schema, ValidationEngine::Schema, &record);
    assert_eq!(schema.message(Field::Category), Some("Please select a category"));
    assert_eq!(schema.message(Field::Interests), Some("Select at least one interest"));
    assert_eq!(schema.len(), 2);
}

#[test]
fn test_age_boundaries() {
    let cases = [("17", false), ("18", true), ("100", true), ("101", false), ("abc", false)];

    for (variant, engine) in validated_engines() {
        for (age, ok) in cases {
            let record = FormRecord { age: age.into(), ..valid_record() };
            let errors = errors_for(variant, engine, &record);

            assert_eq!(errors.is_empty(), ok, "age {age} with {engine}");
            if !ok {
                assert_eq!(
                    errors.message(Field::Age),
                    Some("You must be at least 18 and not older than 100 years old")
                );
            }
        }
    }
}

#[test]
fn test_password_strength() {
    for (variant, engine) in validated_engines() {
        let weak = FormRecord {
            password: "abcdefg1!".into(),
            confirm_password: "abcdefg1!".into(),
            ..valid_record()
        };
        let errors = errors_for(variant, engine, &weak);
        assert_eq!(errors.fields_with_errors(), vec![Field::Password]);

        let strong = FormRecord {
            password: "Abcdefg1!".into(),
            confirm_password: "Abcdefg1!".into(),
            ..valid_record()
        };
        assert!(errors_for(variant, engine, &strong).is_empty());
    }
}

#[test]
fn test_confirm_password_is_case_sensitive() {
    for (variant, engine) in validated_engines() {
        let record = FormRecord {
            password: "Abc123!@".into(),
            confirm_password: "abc123!@".into(),
            ..valid_record()
        };
        let errors = errors_for(variant, engine, &record);
        assert_eq!(errors.message(Field::ConfirmPassword), Some("Password must match"));
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn test_whitespace_counts_as_present() {
    let record = FormRecord { first_name: "   ".into(), ..valid_record() };
    for (variant, engine) in validated_engines() {
        assert!(errors_for(variant, engine, &record).is_empty());
    }
}

#[test]
fn test_invalid_email_keeps_record_out_of_sink() {
    let mut session = FormSession::for_variant(FormVariant::Manual, RecordingSink::new());
    let record = FormRecord { email: "not-an-email".into(), ..valid_record() };
    fill(&mut session, &record);

    let outcome = session.submit().unwrap();

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        serde_json::json!({ "email": "Invalid Email Format" })
    );
    assert!(session.sink().is_empty());
    assert_eq!(session.phase(), FormPhase::ShowingErrors);
}

#[test]
fn test_valid_submission_reaches_sink_exactly_once() {
    let mut record = valid_record();
    record.set_interest(Interest::Reading, true);

    for variant in [FormVariant::Manual, FormVariant::Schema] {
        let mut session = FormSession::for_variant(variant, RecordingSink::new());
        fill(&mut session, &record);

        assert_eq!(session.submit().unwrap(), SubmitOutcome::Submitted);
        assert!(session.errors().is_empty());

        let sink = session.into_sink();
        assert_eq!(sink.records(), std::slice::from_ref(&record));
    }
}

#[test]
fn test_fixing_errors_then_resubmitting() {
    let mut session = FormSession::for_variant(FormVariant::Schema, RecordingSink::new());

    let outcome = session.submit().unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected(ref errors) if errors.len() == 11));

    fill(&mut session, &valid_record());
    // Errors stay until the next submit
    assert_eq!(session.errors().len(), 11);

    assert!(session.submit().unwrap().is_submitted());
    assert_eq!(session.phase(), FormPhase::Editing);
    assert_eq!(session.sink().len(), 1);
}

#[test]
fn test_jsonl_sink_end_to_end() {
    let mut session = FormSession::for_variant(FormVariant::Manual, JsonLinesSink::new(Vec::new()));
    fill(&mut session, &valid_record());
    session.submit().unwrap();

    let output = String::from_utf8(session.into_sink().into_inner()).unwrap();
    let line: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
    assert_eq!(line["record"]["email"], "ada@example.com");
    assert_eq!(line["record"]["interests"], serde_json::json!(["coding"]));
}

#[test]
fn test_records_decode_from_camel_case_json() {
    let record: FormRecord = serde_json::from_str(
        r#"{ "firstName": "Ada", "phoneNumber": "0123456789", "interests": ["sports", "coding"] }"#,
    )
    .unwrap();

    assert_eq!(record.first_name, "Ada");
    assert_eq!(record.phone_number, "0123456789");
    assert!(record.has_interest(Interest::Sports));
    assert!(record.email.is_empty());
}

#[test]
fn test_unknown_interest_label_fails_to_decode() {
    let result = serde_json::from_str::<FormRecord>(r#"{ "interests": ["gaming"] }"#);
    assert!(result.is_err());
}
