//! JSON lines output

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{SinkError, SubmissionSink};
use crate::registration::FormRecord;

/// One accepted record with its submission metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Unique submission id
    pub id: Uuid,
    /// When the record was accepted
    pub submitted_at: DateTime<Utc>,
    /// The record itself
    pub record: FormRecord,
}

impl Submission {
    /// Wrap a record, stamping it with a fresh id and the current time
    #[must_use]
    pub fn new(record: FormRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            record,
        }
    }
}

/// Writes one [`Submission`] per line to any writer
///
/// # Example
///
/// ```rust
/// use regform::registration::FormRecord;
/// use regform::sink::{JsonLinesSink, SubmissionSink};
///
/// let mut sink = JsonLinesSink::new(Vec::new());
/// sink.submit(&FormRecord::default()).unwrap();
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 1);
/// ```
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the underlying writer
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonLinesSink<W> {
    fn submit(&mut self, record: &FormRecord) -> Result<(), SinkError> {
        let submission = Submission::new(record.clone());
        serde_json::to_writer(&mut self.writer, &submission)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        debug!(id = %submission.id, "submission written");
        Ok(())
    }
}
