//! Config command

use std::io::Write;

use anyhow::Result;
use clap::Args;
use regform::config::RegformConfig;

use super::CommandStatus;

/// Print the effective configuration
#[derive(Debug, Args)]
pub struct ConfigCommand {
    /// Print the per-user config path instead
    #[arg(long)]
    path: bool,
}

impl ConfigCommand {
    /// Execute the command
    pub fn execute(&self, config: &RegformConfig, out: &mut dyn Write) -> Result<CommandStatus> {
        if self.path {
            writeln!(out, "{}", RegformConfig::recommended_path().display())?;
        } else {
            write!(out, "{}", config.to_toml()?)?;
        }
        Ok(CommandStatus::Success)
    }
}
