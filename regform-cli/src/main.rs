//! regform CLI tool

#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use regform_cli_lib::{Cli, CommandStatus};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    regform::observability::init(&config.logging)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = cli.command.execute(&config, &mut out)?;

    Ok(match status {
        CommandStatus::Success => ExitCode::SUCCESS,
        CommandStatus::Invalid => ExitCode::FAILURE,
    })
}
