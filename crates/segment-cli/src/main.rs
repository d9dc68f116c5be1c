#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod command;
mod config;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use crate::config::{Cli, Command};

/// Tracing target for CLI operations.
pub const TRACING_TARGET: &str = "segment_cli";

fn main() -> ExitCode {
    let cli = Cli::init();
    Cli::init_tracing();
    cli.log();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET,
                error = %format!("{error:#}"),
                "command failed"
            );
            eprintln!("Error: {error:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs the selected command; `Ok(false)` means the filter is invalid.
fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Command::Validate {
            file,
            dimensions,
            limits,
        } => {
            let report = command::validate(&read(&file)?, &read(&dimensions)?, limits)?;
            if report.is_valid() {
                println!("valid");
            } else {
                for message in report.errors() {
                    println!("{message}");
                }
            }
            Ok(report.is_valid())
        }
        Command::Summarize { file, labels } => {
            let labels = labels.as_deref().map(read).transpose()?;
            println!("{}", command::summarize(&read(&file)?, labels.as_deref())?);
            Ok(true)
        }
        Command::Convert {
            file,
            format,
            pretty,
        } => {
            println!("{}", command::convert(&read(&file)?, format, pretty)?);
            Ok(true)
        }
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
