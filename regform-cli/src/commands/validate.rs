//! Validate command

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::{style, Emoji};
use regform::config::RegformConfig;
use regform::forms::ErrorMap;
use regform::validation::FormValidator;

use super::{CommandStatus, FormArgs};
use crate::load_record;

static SUCCESS: Emoji = Emoji("✓", "√");
static FAILURE: Emoji = Emoji("✗", "x");

/// Validate a JSON record
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// JSON record to validate
    record: PathBuf,

    #[command(flatten)]
    form: FormArgs,

    /// Print the error map as JSON
    #[arg(long)]
    json: bool,
}

impl ValidateCommand {
    /// Execute the command
    pub fn execute(&self, config: &RegformConfig, out: &mut dyn Write) -> Result<CommandStatus> {
        let record = load_record(&self.record)?;
        let definition = self.form.definition(config);
        let engine = self.form.engine(config);

        let errors = engine.validate(&definition, &record);

        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?;
        } else {
            write_report(out, &errors)?;
        }

        Ok(if errors.is_empty() {
            CommandStatus::Success
        } else {
            CommandStatus::Invalid
        })
    }
}

/// Human-readable error listing
pub(crate) fn write_report(out: &mut dyn Write, errors: &ErrorMap) -> Result<()> {
    if errors.is_empty() {
        writeln!(out, "{} {}", SUCCESS, style("Record is valid").green().bold())?;
        return Ok(());
    }

    writeln!(
        out,
        "{} {}",
        FAILURE,
        style(format!("{} field(s) failed validation", errors.len())).red().bold()
    )?;
    for error in errors {
        writeln!(out, "  {}: {}", style(error.field).cyan(), error.message)?;
    }
    Ok(())
}
