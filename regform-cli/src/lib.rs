//! regform CLI library

#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use regform::config::RegformConfig;
use regform::registration::FormRecord;

pub use commands::{Command, CommandStatus};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "regform")]
#[command(version)]
#[command(about = "Render, validate and submit registration forms", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load the configuration this invocation asks for
    pub fn load_config(&self) -> Result<RegformConfig> {
        match self.config {
            Some(ref path) => RegformConfig::load_from(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display())),
            None => RegformConfig::load().context("Failed to load configuration"),
        }
    }
}

/// Read a JSON record; missing keys default to empty
pub fn load_record(path: &Path) -> Result<FormRecord> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid record in {}", path.display()))
}
