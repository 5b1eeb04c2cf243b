//! Human-facing terminal messages for the non-success paths.
#![allow(clippy::print_stderr)]

use crate::args::USAGE;
use clap::error::ErrorKind;
use tss::domain::constants::NAMING_RULES_URL;
use tss::domain::exit;
use tss::features::naming::{NameIssue, NamingError, Severity};

/// Prints the usage line. Returns the usage exit code.
pub fn usage() -> u8 {
    eprintln!("{USAGE}");
    exit::USAGE
}

/// Handles a clap parse failure: help and version are not errors.
pub fn parse_error(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            exit::SUCCESS
        },
        _ => {
            eprintln!("{}", err.render());
            usage()
        },
    }
}

/// Lists every reason the project name was rejected, errors first.
pub fn invalid_name(err: &NamingError) -> u8 {
    let NamingError::Invalid { issues, .. } = err;

    eprintln!("INVALID project-name");
    eprintln!("project names must follow the npm package naming rules: {NAMING_RULES_URL}");
    for issue in by_severity(issues, Severity::Error).chain(by_severity(issues, Severity::Warning)) {
        eprintln!("> {issue}");
    }
    exit::INVALID_NAME
}

/// Reports a failure nobody handled, with its full cause chain.
pub fn uncaught(err: &anyhow::Error) -> u8 {
    eprintln!("UNCAUGHT ERROR!");
    eprintln!("{err:?}");
    eprintln!("exiting!");
    exit::UNEXPECTED
}

fn by_severity(issues: &[NameIssue], severity: Severity) -> impl Iterator<Item = &NameIssue> {
    issues.iter().filter(move |issue| issue.severity() == severity)
}
