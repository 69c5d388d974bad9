//! regform: registration form state, validation and rendering
//!
//! One registration form in three variants, driven by a single
//! configuration-parameterized [`forms::FormDefinition`]:
//!
//! - **unvalidated**: every submit succeeds
//! - **manual**: a hand-written rule table, Bootstrap classes
//! - **schema**: the same rules evaluated through the `validator` crate,
//!   utility classes, plus a `category` select
//!
//! # Quick Start
//!
//! ```rust
//! use regform::prelude::*;
//!
//! # fn main() -> Result<(), RegformError> {
//! let mut session = FormSession::for_variant(FormVariant::Schema, RecordingSink::new());
//!
//! session.set_field(Field::Email, "not-an-email")?;
//! session.toggle_interest(Interest::Coding, true);
//!
//! if let SubmitOutcome::Rejected(errors) = session.submit()? {
//!     assert_eq!(errors.message(Field::Email), Some("Invalid Email Format"));
//! }
//!
//! let html = session.render(&FormVariant::Schema.render_options());
//! assert!(html.contains("Invalid Email Format"));
//! # Ok(())
//! # }
//! ```
//!
//! # Design Principles
//!
//! 1. **Validation failures are data**: an [`forms::ErrorMap`], never an `Err`
//! 2. **One table, two engines**: the rule table owns every message
//! 3. **Explicit sinks**: accepted records go to a [`sink::SubmissionSink`]

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod forms;
pub mod observability;
pub mod registration;
pub mod sink;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use regform::prelude::*;
    //! ```

    // Configuration
    pub use crate::config::{LogFormat, RegformConfig, SinkKind};

    // Error types
    pub use crate::error::RegformError;

    // Form definitions and rendering
    pub use crate::forms::{
        ErrorMap, FieldBuilder, FieldError, FormBuilder, FormDefinition, FormRenderOptions,
        FormRenderer, InputType,
    };

    // Registration domain
    pub use crate::registration::{Field, FormRecord, FormVariant, Interest};

    // Sinks
    pub use crate::sink::{JsonLinesSink, RecordingSink, SinkError, SubmissionSink, TracingSink};

    // Session state
    pub use crate::state::{FormEvent, FormPhase, FormSession, SubmitOutcome};

    // Validation
    pub use crate::validation::{FormValidator, Rule, ValidationEngine};

    // Re-export key dependencies
    pub use validator;
}
