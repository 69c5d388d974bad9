//! CLI command implementations

pub mod compare;
pub mod config;
pub mod render;
pub mod submit;
pub mod validate;

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use regform::config::RegformConfig;
use regform::forms::FormDefinition;
use regform::registration::FormVariant;
use regform::validation::ValidationEngine;

pub use compare::CompareCommand;
pub use config::ConfigCommand;
pub use render::RenderCommand;
pub use submit::SubmitCommand;
pub use validate::ValidateCommand;

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Everything checked out
    Success,
    /// The record was invalid or the engines disagreed
    Invalid,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the form as HTML
    Render(RenderCommand),
    /// Validate a JSON record and print its errors
    Validate(ValidateCommand),
    /// Validate a JSON record and hand it to the configured sink
    Submit(SubmitCommand),
    /// Run both validation engines and compare their results
    Compare(CompareCommand),
    /// Print the effective configuration as TOML
    Config(ConfigCommand),
}

impl Command {
    /// Execute the command, writing its report to `out`
    pub fn execute(&self, config: &RegformConfig, out: &mut dyn Write) -> Result<CommandStatus> {
        match self {
            Self::Render(cmd) => cmd.execute(config, out),
            Self::Validate(cmd) => cmd.execute(config, out),
            Self::Submit(cmd) => cmd.execute(config, out),
            Self::Compare(cmd) => cmd.execute(config, out),
            Self::Config(cmd) => cmd.execute(config, out),
        }
    }
}

/// Variant and engine selection shared by several commands
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// Form variant (unvalidated, manual, schema)
    #[arg(short, long)]
    pub variant: Option<FormVariant>,

    /// Validation engine (disabled, rule-table, schema)
    #[arg(short, long)]
    pub engine: Option<ValidationEngine>,
}

impl FormArgs {
    /// Variant from the command line, else from configuration
    #[must_use]
    pub fn variant(&self, config: &RegformConfig) -> FormVariant {
        self.variant.unwrap_or(config.form.variant)
    }

    /// Engine from the command line, else the configured override, else the
    /// variant's default
    #[must_use]
    pub fn engine(&self, config: &RegformConfig) -> ValidationEngine {
        self.engine
            .or(config.form.engine)
            .unwrap_or_else(|| self.variant(config).default_engine())
    }

    /// The selected variant's definition with the configured action and method
    #[must_use]
    pub fn definition(&self, config: &RegformConfig) -> FormDefinition {
        self.variant(config)
            .definition_for(&config.form.action, &config.form.method)
    }
}
