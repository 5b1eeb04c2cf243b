//! Provisioning stages and the concrete steps built from them.

use crate::config::ScaffoldConfig;
use crate::constants::{
    HELPER_INIT_BIN, HELPER_PACKAGE, LOCAL_BIN_DIR, PACKAGE_MANAGER, VCS_PROGRAM,
};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Label reported for the directory-create step, which runs no external program.
pub const CREATE_DIR_LABEL: &str = "mkdir";

/// The fixed, ordered stages of a scaffolding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    CreateDirectory,
    InitVcs,
    InitManifest,
    InstallHelper,
    RunHelperInit,
}

impl Stage {
    /// Every stage, in execution order.
    pub const ALL: [Self; 5] = [
        Self::CreateDirectory,
        Self::InitVcs,
        Self::InitManifest,
        Self::InstallHelper,
        Self::RunHelperInit,
    ];

    /// Human-readable line logged right before the stage starts.
    #[must_use]
    pub const fn announcement(self) -> &'static str {
        match self {
            Self::CreateDirectory => "create project folder",
            Self::InitVcs => "init git repo",
            Self::InitManifest => "init npm module",
            Self::InstallHelper => "install ts-scaffolder-scripts",
            Self::RunHelperInit => "init ts-scaffolder-scripts",
        }
    }

    /// Builds the concrete step for this stage.
    #[must_use]
    pub fn step(self, project_dir: &Path, config: &ScaffoldConfig) -> ProvisioningStep {
        let in_project = |program: &str, args: &[&str]| {
            ProvisioningStep::Command(CommandSpec::new(
                program,
                args.iter().map(|a| (*a).to_owned()).collect(),
                project_dir,
            ))
        };

        match self {
            Self::CreateDirectory => {
                ProvisioningStep::CreateDirectory { path: project_dir.to_path_buf() }
            },
            Self::InitVcs => in_project(VCS_PROGRAM, &["init"]),
            Self::InitManifest => in_project(PACKAGE_MANAGER, &["init", "-y"]),
            Self::InstallHelper => in_project(PACKAGE_MANAGER, &["i", "-D", HELPER_PACKAGE]),
            Self::RunHelperInit => {
                ProvisioningStep::Command(CommandSpec::new(
                    helper_init_path(project_dir),
                    config.forwarded_flags(),
                    project_dir,
                ))
            },
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.announcement())
    }
}

/// Absolute path of the helper initializer inside a project.
#[must_use]
pub fn helper_init_path(project_dir: &Path) -> PathBuf {
    let bin = if cfg!(windows) { format!("{HELPER_INIT_BIN}.cmd") } else { HELPER_INIT_BIN.to_owned() };
    project_dir.join(LOCAL_BIN_DIR).join(bin)
}

/// One unit of provisioning work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProvisioningStep {
    /// Create a new directory; fails if it already exists.
    CreateDirectory { path: PathBuf },
    /// Run an external program.
    Command(CommandSpec),
}

impl ProvisioningStep {
    /// Short name used as log prefix and in failure reports.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::CreateDirectory { .. } => CREATE_DIR_LABEL,
            Self::Command(spec) => &spec.label,
        }
    }
}

impl fmt::Display for ProvisioningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDirectory { path } => write!(f, "{CREATE_DIR_LABEL} {}", path.display()),
            Self::Command(spec) => write!(f, "{spec}"),
        }
    }
}

/// An external program invocation: argv plus working directory. Never a shell string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    /// File name of the program, used to prefix its output lines.
    pub label: String,
    /// Bare name looked up on `PATH`, or an exact path kept byte for byte.
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let label = program
            .file_name()
            .map_or_else(|| program.to_string_lossy(), |name| name.to_string_lossy())
            .into_owned();
        Self { label, program, args, cwd: cwd.into() }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
