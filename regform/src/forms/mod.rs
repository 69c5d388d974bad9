//! Form definitions, error maps and HTML rendering
//!
//! This module provides a builder-pattern API for describing a form as an
//! ordered table of fields, each carrying:
//! - the record key it edits
//! - its control (input, select, radio group, checkbox group)
//! - an ordered chain of validation rules with their messages
//!
//! The same [`FormDefinition`] drives validation and rendering.
//!
//! # Quick Start
//!
//! ```rust
//! use regform::forms::{ErrorMap, FormBuilder, FormRenderOptions, InputType};
//! use regform::registration::{Field, FormRecord};
//! use regform::validation::Rule;
//!
//! let form = FormBuilder::new("/register", "POST")
//!     .field(Field::Email, InputType::Email)
//!         .label("Email")
//!         .required("Email is required")
//!         .rule(Rule::Email, "Invalid Email Format")
//!         .done()
//!     .submit("Submit")
//!     .build();
//!
//! let html = form.render(&FormRecord::default(), &ErrorMap::new(), &FormRenderOptions::bootstrap());
//! assert!(html.contains(r#"type="email""#));
//! ```
//!
//! # Validation Errors
//!
//! Errors are rendered next to their field:
//!
//! ```rust
//! use regform::forms::{ErrorMap, FormRenderOptions};
//! use regform::registration::{Field, FormRecord, FormVariant};
//!
//! let mut errors = ErrorMap::new();
//! errors.insert(Field::Email, "email", "Invalid Email Format");
//!
//! let html = FormVariant::Manual
//!     .definition()
//!     .render(&FormRecord::default(), &errors, &FormRenderOptions::bootstrap());
//! assert!(html.contains("Invalid Email Format"));
//! ```

mod builder;
mod error;
mod field;
mod render;

pub use builder::{FieldBuilder, FormBuilder, FormDefinition};
pub use error::{ErrorMap, FieldError};
pub use field::{FieldKind, FieldRule, FormField, InputType, SelectOption};
pub use render::{FormRenderOptions, FormRenderer};
