//! Error types and error handling
//!
//! Field validation failures are not errors in this sense: they are reported
//! as data through [`crate::forms::ErrorMap`]. `RegformError` covers the
//! operational failures around a form session.

use thiserror::Error;

use crate::registration::Field;
use crate::sink::SinkError;

/// Library error type
#[derive(Debug, Error)]
pub enum RegformError {
    /// Configuration could not be loaded or extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Default configuration could not be encoded as TOML
    #[error("Configuration encoding error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    /// A field name that is not part of the registration record
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// An interest label outside the offered set
    #[error("Unknown interest: {0}")]
    UnknownInterest(String),

    /// A form variant name that does not exist
    #[error("Unknown form variant: {0}")]
    UnknownVariant(String),

    /// A scalar edit was addressed to the set-valued `interests` field
    #[error("Field {0} does not hold a single value")]
    NotScalar(Field),

    /// The submission sink failed
    #[error("Submission sink error: {0}")]
    Sink(#[from] SinkError),

    /// A serialized record could not be decoded
    #[error("Invalid record: {0}")]
    Record(#[from] serde_json::Error),

    /// Observability could not be initialized
    #[error("Observability error: {0}")]
    Observability(String),

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for RegformError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Library result alias
pub type Result<T, E = RegformError> = std::result::Result<T, E>;
