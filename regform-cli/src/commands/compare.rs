//! Compare command

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use regform::config::RegformConfig;
use regform::registration::{Field, FormVariant};
use regform::validation::{FormValidator, ValidationEngine};

use super::CommandStatus;
use crate::load_record;

/// Run the rule-table and schema engines on one record
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// JSON record to validate
    record: PathBuf,

    /// Form variant (unvalidated, manual, schema)
    #[arg(short, long)]
    variant: Option<FormVariant>,
}

impl CompareCommand {
    /// Execute the command
    pub fn execute(&self, config: &RegformConfig, out: &mut dyn Write) -> Result<CommandStatus> {
        let record = load_record(&self.record)?;
        let variant = self.variant.unwrap_or(config.form.variant);
        let definition = variant.definition_for(&config.form.action, &config.form.method);

        let table = ValidationEngine::RuleTable.validate(&definition, &record);
        let schema = ValidationEngine::Schema.validate(&definition, &record);

        writeln!(
            out,
            "{} rule-table: {} error(s), schema: {} error(s)",
            style(variant).bold(),
            table.len(),
            schema.len()
        )?;

        if table == schema {
            writeln!(out, "{}", style("Engines agree").green().bold())?;
            return Ok(CommandStatus::Success);
        }

        writeln!(out, "{}", style("Engines disagree").red().bold())?;
        for field in Field::ALL {
            let left = table.message(field);
            let right = schema.message(field);
            if left != right {
                writeln!(
                    out,
                    "  {}: rule-table={:?} schema={:?}",
                    style(field).cyan(),
                    left,
                    right
                )?;
            }
        }
        Ok(CommandStatus::Invalid)
    }
}
