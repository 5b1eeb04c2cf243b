//! # CLI Argument Definitions
//!
//! The positional project name is optional at the parser level so that its absence can be
//! reported with the usage line and exit code `1` instead of clap's own error path.

use clap::Parser;
use std::convert::Infallible;
use std::path::PathBuf;
use tss::kernel::config::{FlagOverrides, coerce_bool};

/// One-line usage shown when the project name is missing or the arguments are malformed.
pub const USAGE: &str = "Usage: ts-scaffolder project-name [--iswebapp] [--umdname=\"bundleName\"]";

/// Command-line arguments of `ts-scaffolder`.
#[derive(Debug, Parser)]
#[command(name = "ts-scaffolder")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scaffold a new TypeScript project with ts-scaffolder-scripts")]
pub struct Cli {
    /// Name of the project folder and npm package
    #[arg(value_name = "project-name")]
    pub project_name: Option<String>,

    /// Scaffold a web application (env: ISWEBAPP)
    #[arg(
        long = "iswebapp",
        alias = "isWebapp",
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = lenient_bool
    )]
    pub is_webapp: Option<bool>,

    /// UMD bundle name forwarded to the helper initializer (env: UMDNAME)
    #[arg(long = "umdname", alias = "umdName", value_name = "bundleName")]
    pub umd_name: Option<String>,

    /// Log at DEBUG level
    #[arg(short, long)]
    pub verbose: bool,

    /// Additionally write a rolling log file into this directory
    #[arg(long, env = "TSS_LOG_DIR", value_name = "path")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Flags that were given explicitly; everything else is left to env and defaults.
    #[must_use]
    pub fn flag_overrides(&self) -> FlagOverrides {
        FlagOverrides { is_webapp: self.is_webapp, umd_name: self.umd_name.clone() }
    }
}

fn lenient_bool(raw: &str) -> Result<bool, Infallible> {
    Ok(coerce_bool(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ts-scaffolder").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn project_name_is_optional_for_the_parser() {
        assert_eq!(parse(&[]).project_name, None);
        assert_eq!(parse(&["valid-name"]).project_name.as_deref(), Some("valid-name"));
    }

    #[test]
    fn bare_iswebapp_means_true() {
        assert_eq!(parse(&["app", "--iswebapp"]).is_webapp, Some(true));
    }

    #[test]
    fn iswebapp_accepts_an_explicit_value() {
        assert_eq!(parse(&["app", "--iswebapp=false"]).is_webapp, Some(false));
        assert_eq!(parse(&["app", "--isWebapp=1"]).is_webapp, Some(true));
    }

    #[test]
    fn absent_flags_do_not_override() {
        assert_eq!(parse(&["app"]).flag_overrides(), FlagOverrides::default());
    }

    #[test]
    fn umdname_accepts_both_spellings() {
        assert_eq!(parse(&["app", "--umdname=Shop"]).umd_name.as_deref(), Some("Shop"));
        assert_eq!(parse(&["app", "--umdName", "Shop"]).umd_name.as_deref(), Some("Shop"));
    }

    #[test]
    fn bare_iswebapp_does_not_swallow_the_project_name() {
        let cli = parse(&["--iswebapp", "app"]);
        assert_eq!(cli.is_webapp, Some(true));
        assert_eq!(cli.project_name.as_deref(), Some("app"));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["ts-scaffolder", "app", "--bogus"]).is_err());
    }
}
