//! Render command

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use regform::config::RegformConfig;
use regform::forms::ErrorMap;
use regform::registration::FormRecord;
use regform::validation::FormValidator;

use super::{CommandStatus, FormArgs};
use crate::load_record;

/// Print the form as HTML
#[derive(Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    form: FormArgs,

    /// JSON record whose values fill the form
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// Validate the record first and show its errors inline
    #[arg(long)]
    validate: bool,
}

impl RenderCommand {
    /// Execute the command
    pub fn execute(&self, config: &RegformConfig, out: &mut dyn Write) -> Result<CommandStatus> {
        let variant = self.form.variant(config);
        let definition = self.form.definition(config);

        let record = match self.record {
            Some(ref path) => load_record(path)?,
            None => FormRecord::default(),
        };
        let errors = if self.validate {
            self.form.engine(config).validate(&definition, &record)
        } else {
            ErrorMap::new()
        };

        let html = definition.render(&record, &errors, &variant.render_options());
        writeln!(out, "{html}")?;
        Ok(CommandStatus::Success)
    }
}
