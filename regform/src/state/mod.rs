//! Form session state
//!
//! A [`FormSession`] owns the record being edited, the error map from the
//! most recent submit attempt, the validation engine and the sink. Edits
//! never validate; only [`FormSession::submit`] recomputes the error map.
//!
//! # Example
//!
//! ```rust
//! use regform::registration::{Field, FormVariant};
//! use regform::sink::RecordingSink;
//! use regform::state::{FormPhase, FormSession, SubmitOutcome};
//!
//! let mut session = FormSession::for_variant(FormVariant::Manual, RecordingSink::new());
//! session.set_field(Field::FirstName, "Ada").unwrap();
//!
//! let outcome = session.submit().unwrap();
//! assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
//! assert_eq!(session.phase(), FormPhase::ShowingErrors);
//! assert!(session.sink().is_empty());
//! ```

use tracing::{debug, info};

use crate::error::RegformError;
use crate::forms::{ErrorMap, FormDefinition, FormRenderOptions};
use crate::registration::{Field, FormRecord, FormVariant, Interest};
use crate::sink::SubmissionSink;
use crate::validation::{FormValidator, ValidationEngine};

/// What the user sees between submits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No errors shown
    Editing,
    /// The last submit produced errors
    ShowingErrors,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record passed validation and the sink accepted it
    Submitted,
    /// Validation failed; the map is also kept as the session's error state
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    /// Whether the record reached the sink
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// One user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A scalar control changed, addressed by wire name
    Change {
        /// Control name
        name: String,
        /// New value
        value: String,
    },
    /// An interest checkbox changed, addressed by label
    Toggle {
        /// Interest label
        label: String,
        /// Checked state after the change
        checked: bool,
    },
    /// The form was submitted
    Submit,
}

/// In-memory state of one form
pub struct FormSession<S> {
    definition: FormDefinition,
    engine: ValidationEngine,
    sink: S,
    record: FormRecord,
    errors: ErrorMap,
}

impl<S: SubmissionSink> FormSession<S> {
    /// Start a session with an empty record
    #[must_use]
    pub fn new(definition: FormDefinition, engine: ValidationEngine, sink: S) -> Self {
        debug!(engine = %engine, fields = definition.fields.len(), "form session started");
        Self {
            definition,
            engine,
            sink,
            record: FormRecord::default(),
            errors: ErrorMap::new(),
        }
    }

    /// Start a session for a variant with its default engine
    #[must_use]
    pub fn for_variant(variant: FormVariant, sink: S) -> Self {
        Self::new(variant.definition(), variant.default_engine(), sink)
    }

    /// Current values
    #[must_use]
    pub const fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Errors from the most recent submit
    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The form being edited
    #[must_use]
    pub const fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    /// Active validation engine
    #[must_use]
    pub const fn engine(&self) -> ValidationEngine {
        self.engine
    }

    /// Whether errors are currently shown
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        if self.errors.is_empty() {
            FormPhase::Editing
        } else {
            FormPhase::ShowingErrors
        }
    }

    /// Replace one scalar field
    ///
    /// # Errors
    ///
    /// Returns [`RegformError::NotScalar`] for [`Field::Interests`].
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), RegformError> {
        self.record.set_text(field, value)?;
        debug!(field = %field, "field changed");
        Ok(())
    }

    /// Replace one scalar field addressed by its wire name
    ///
    /// # Errors
    ///
    /// Returns [`RegformError::UnknownField`] for names outside the record,
    /// [`RegformError::NotScalar`] for `interests`.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), RegformError> {
        let field: Field = name.parse()?;
        self.set_field(field, value)
    }

    /// Select or deselect one interest
    pub fn toggle_interest(&mut self, interest: Interest, selected: bool) {
        let changed = self.record.set_interest(interest, selected);
        debug!(interest = %interest, selected, changed, "interest toggled");
    }

    /// Select or deselect one interest addressed by label
    ///
    /// # Errors
    ///
    /// Returns [`RegformError::UnknownInterest`] for labels outside the set.
    pub fn toggle_interest_by_label(&mut self, label: &str, selected: bool) -> Result<(), RegformError> {
        let interest: Interest = label.parse()?;
        self.toggle_interest(interest, selected);
        Ok(())
    }

    /// Validate and, when clean, hand the record to the sink
    ///
    /// The error state is replaced by this pass's map either way. Values are
    /// never cleared.
    ///
    /// # Errors
    ///
    /// Returns [`RegformError::Sink`] when the sink rejects a valid record.
    pub fn submit(&mut self) -> Result<SubmitOutcome, RegformError> {
        self.errors = self.engine.validate(&self.definition, &self.record);

        if self.errors.is_empty() {
            self.sink.submit(&self.record)?;
            info!(engine = %self.engine, "registration submitted");
            Ok(SubmitOutcome::Submitted)
        } else {
            info!(
                engine = %self.engine,
                errors = self.errors.len(),
                "registration rejected"
            );
            Ok(SubmitOutcome::Rejected(self.errors.clone()))
        }
    }

    /// Apply one interaction
    ///
    /// Returns the submit outcome for [`FormEvent::Submit`], `None` otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the errors of the handler the event maps to.
    pub fn apply(&mut self, event: FormEvent) -> Result<Option<SubmitOutcome>, RegformError> {
        match event {
            FormEvent::Change { name, value } => self.set_field_by_name(&name, value).map(|()| None),
            FormEvent::Toggle { label, checked } => {
                self.toggle_interest_by_label(&label, checked).map(|()| None)
            }
            FormEvent::Submit => self.submit().map(Some),
        }
    }

    /// Restore the empty record and clear errors
    pub fn reset(&mut self) {
        self.record = FormRecord::default();
        self.errors = ErrorMap::new();
        debug!("form session reset");
    }

    /// Render the current state
    #[must_use]
    pub fn render(&self, options: &FormRenderOptions) -> String {
        self.definition.render(&self.record, &self.errors, options)
    }

    /// Borrow the sink
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Give up the session, keeping the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S> std::fmt::Debug for FormSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("engine", &self.engine)
            .field("record", &self.record)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
