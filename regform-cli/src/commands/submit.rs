//! Submit command

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use regform::config::{RegformConfig, SinkKind};
use regform::registration::{Field, FormRecord};
use regform::sink::{JsonLinesSink, SubmissionSink, TracingSink};
use regform::state::{FormSession, SubmitOutcome};

use super::validate::write_report;
use super::{CommandStatus, FormArgs};
use crate::load_record;

/// Validate a JSON record and hand it to a sink
#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// JSON record to submit
    record: PathBuf,

    #[command(flatten)]
    form: FormArgs,

    /// Append accepted records as JSON lines to this file
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl SubmitCommand {
    /// Execute the command
    pub fn execute(&self, config: &RegformConfig, out: &mut dyn Write) -> Result<CommandStatus> {
        let record = load_record(&self.record)?;
        let sink = self.build_sink(config)?;

        let mut session = FormSession::new(self.form.definition(config), self.form.engine(config), sink);
        fill(&mut session, &record)?;

        match session.submit().context("Submission failed")? {
            SubmitOutcome::Submitted => {
                tracing::debug!(record = %self.record.display(), "record accepted");
                writeln!(out, "{}", style("Submitted").green().bold())?;
                Ok(CommandStatus::Success)
            }
            SubmitOutcome::Rejected(errors) => {
                write_report(out, &errors)?;
                Ok(CommandStatus::Invalid)
            }
        }
    }

    fn build_sink(&self, config: &RegformConfig) -> Result<Box<dyn SubmissionSink>> {
        if let Some(ref path) = self.out {
            return Ok(Box::new(JsonLinesSink::new(open_append(path)?)));
        }

        let sink: Box<dyn SubmissionSink> = match (config.sink.kind, &config.sink.path) {
            (SinkKind::Tracing, _) => Box::new(TracingSink),
            (SinkKind::JsonLines, Some(path)) => Box::new(JsonLinesSink::new(open_append(path)?)),
            (SinkKind::JsonLines, None) => Box::new(JsonLinesSink::new(io::stdout())),
        };
        Ok(sink)
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))
}

/// Replay a record through the session's edit handlers
fn fill<S: SubmissionSink>(session: &mut FormSession<S>, record: &FormRecord) -> Result<()> {
    for field in Field::ALL {
        if let Some(text) = record.text(field) {
            session.set_field(field, text)?;
        }
    }
    for interest in &record.interests {
        session.toggle_interest(*interest, true);
    }
    Ok(())
}
