//! Submission sinks
//!
//! A sink receives a record once it has passed validation. What it does with
//! it is up to the implementation: [`TracingSink`] logs it, [`RecordingSink`]
//! keeps it in memory and [`JsonLinesSink`] appends it to a writer.

mod jsonl;

use thiserror::Error;
use tracing::info;

pub use jsonl::{JsonLinesSink, Submission};

use crate::registration::FormRecord;

/// Errors raised while handing a record to a sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink's writer failed
    #[error("failed to write submission: {0}")]
    Io(#[from] std::io::Error),

    /// The submission could not be encoded
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Receives validated records
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Accept one validated record
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the record could not be delivered.
    fn submit(&mut self, record: &FormRecord) -> Result<(), SinkError>;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn submit(&mut self, record: &FormRecord) -> Result<(), SinkError> {
        (**self).submit(record)
    }
}

/// Emits each record as a structured `info` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn submit(&mut self, record: &FormRecord) -> Result<(), SinkError> {
        let payload = serde_json::to_string(record)?;
        info!(target: "regform::submission", record = %payload, "form submitted");
        Ok(())
    }
}

/// Keeps every submitted record in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Vec<FormRecord>,
}

impl RecordingSink {
    /// Create an empty sink
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Records received so far, oldest first
    #[must_use]
    pub fn records(&self) -> &[FormRecord] {
        &self.records
    }

    /// Number of records received
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been submitted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take the received records, leaving the sink empty
    pub fn drain(&mut self) -> Vec<FormRecord> {
        std::mem::take(&mut self.records)
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, record: &FormRecord) -> Result<(), SinkError> {
        self.records.push(record.clone());
        Ok(())
    }
}
