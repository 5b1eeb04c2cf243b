//! Facade crate for the scaffolder.
//! Re-exports domain/kernel primitives and the feature crates, and composes them into a
//! ready-to-run [`Scaffold`] request.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Build a request with [`Scaffold::prepare`] from the raw CLI inputs.
//! - Run it with [`Scaffold::run`] (real filesystem) or [`Scaffold::run_with`] (any runner).

pub use tss_domain as domain;
pub use tss_kernel as kernel;

use std::path::{Path, PathBuf};
use tss_domain::config::ScaffoldConfig;
use tss_domain::outcome::PipelineResult;
use tss_kernel::config::{EnvSnapshot, FlagOverrides, resolve_config};

/// Feature slices.
pub mod features {
    pub use tss_naming as naming;
    pub use tss_provisioning as provisioning;
}

use features::naming::{NamingError, ProjectName};
use features::provisioning::{Pipeline, StepRunner, SystemRunner};

/// A validated name plus the resolved configuration, anchored to a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    pub name: ProjectName,
    pub config: ScaffoldConfig,
    pub base_dir: PathBuf,
}

impl Scaffold {
    /// Validates `raw_name` and resolves the configuration.
    ///
    /// Validation happens before anything else, so an invalid name never leads to side effects.
    ///
    /// # Errors
    /// Returns [`NamingError::Invalid`] when `raw_name` is not an acceptable package name.
    pub fn prepare(
        raw_name: &str,
        flags: &FlagOverrides,
        env: &EnvSnapshot,
        base_dir: impl Into<PathBuf>,
    ) -> Result<Self, NamingError> {
        let name = ProjectName::parse(raw_name)?;
        let config = resolve_config(flags, env);
        Ok(Self { name, config, base_dir: base_dir.into() })
    }

    #[must_use]
    pub fn project_dir(&self) -> PathBuf {
        self.base_dir.join(&self.name)
    }

    /// Runs the pipeline against the real filesystem and process table.
    pub async fn run(self) -> PipelineResult {
        self.run_with(SystemRunner).await
    }

    /// Runs the pipeline with a caller-supplied runner.
    pub async fn run_with<R: StepRunner>(self, runner: R) -> PipelineResult {
        Pipeline::new(runner, Path::new(&self.base_dir), &self.name, self.config).run().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_name_is_rejected_before_anything_else() {
        let err = Scaffold::prepare("Bad Name", &FlagOverrides::default(), &EnvSnapshot::default(), "/work")
            .unwrap_err();
        assert!(matches!(err, NamingError::Invalid { .. }));
    }

    #[test]
    fn prepare_resolves_configuration() {
        let env = EnvSnapshot::from_pairs([("UMDNAME", "Bar")]);
        let scaffold =
            Scaffold::prepare("valid-name", &FlagOverrides::default(), &env, "/work").unwrap();

        assert_eq!(scaffold.config.umd_name, "Bar");
        assert!(!scaffold.config.is_webapp);
        assert_eq!(scaffold.project_dir(), Path::new("/work/valid-name"));
    }
}
