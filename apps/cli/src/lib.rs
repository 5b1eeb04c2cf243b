//! # ts-scaffolder
//!
//! Command-line front end: parses arguments, validates the project name, sets up logging
//! and drives the provisioning pipeline in the current working directory. Every path ends
//! in an exit code from [`tss::domain::exit`] or the code of the failing step.

pub mod args;
pub mod report;

pub use crate::args::Cli;

use anyhow::Context;
use std::io::IsTerminal;
use tracing::debug;
use tss::Scaffold;
use tss::domain::constants::TOOL_NAME;
use tss::kernel::config::EnvSnapshot;
use tss_logger::{LevelFilter, Logger};

/// Runs one scaffolding invocation and returns the process exit code.
///
/// The name is validated before logging is set up, so a rejected name leaves no trace
/// on disk.
///
/// # Errors
/// Returns an error for failures outside the pipeline itself: an unreadable working
/// directory or a logger that cannot be initialized.
pub async fn run(cli: Cli) -> anyhow::Result<u8> {
    let Some(raw_name) = cli.project_name.as_deref().filter(|name| !name.is_empty()) else {
        return Ok(report::usage());
    };

    let base_dir = std::env::current_dir().context("Failed to read the working directory")?;
    let scaffold =
        match Scaffold::prepare(raw_name, &cli.flag_overrides(), &EnvSnapshot::capture(), base_dir) {
            Ok(scaffold) => scaffold,
            Err(err) => return Ok(report::invalid_name(&err)),
        };

    let _logger = init_logger(&cli).context("Failed to initialize logging")?;
    debug!(
        project = %scaffold.project_dir().display(),
        is_webapp = scaffold.config.is_webapp,
        umd_name = %scaffold.config.umd_name,
        "Scaffolding request"
    );

    Ok(scaffold.run().await.exit_code())
}

fn init_logger(cli: &Cli) -> Result<Logger, tss_logger::LoggerError> {
    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let builder = Logger::builder()
        .name(TOOL_NAME)
        .level(level)
        .ansi(std::io::stdout().is_terminal());

    match &cli.log_dir {
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    }
}
