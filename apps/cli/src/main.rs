use clap::Parser;
use std::process::ExitCode;
use tss_cli::{Cli, report};

#[tss_runtime::main(current_thread, thread_name = "ts-scaffolder", bootstrap_error = bootstrap_failed)]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return Ok(ExitCode::from(report::parse_error(&err))),
    };

    let code = match tss_cli::run(cli).await {
        Ok(code) => code,
        Err(err) => report::uncaught(&err),
    };

    Ok(ExitCode::from(code))
}

#[allow(clippy::unnecessary_wraps)]
fn bootstrap_failed(err: anyhow::Error) -> anyhow::Result<ExitCode> {
    Ok(ExitCode::from(report::uncaught(&err)))
}
