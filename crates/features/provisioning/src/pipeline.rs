//! # Provisioning Pipeline
//!
//! Runs the fixed stage sequence for one project, strictly one step after another.
//! The first failing step stops the run; nothing created before it is undone.

use crate::runner::StepRunner;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tss_domain::config::ScaffoldConfig;
use tss_domain::constants::TOOL_NAME;
use tss_domain::outcome::{PipelineResult, StepFailure};
use tss_domain::step::Stage;
use tss_naming::ProjectName;

/// One scaffolding run: where the project goes, how to configure it, and who executes steps.
#[derive(Debug)]
pub struct Pipeline<R> {
    runner: R,
    project_dir: PathBuf,
    config: ScaffoldConfig,
}

impl<R: StepRunner> Pipeline<R> {
    /// The project lands in `base_dir/<name>`.
    pub fn new(runner: R, base_dir: &Path, name: &ProjectName, config: ScaffoldConfig) -> Self {
        Self { runner, project_dir: base_dir.join(name), config }
    }

    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    #[must_use]
    pub const fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Executes every stage in order.
    ///
    /// Each step is built right before it runs and starts only after the previous one
    /// has exited successfully.
    pub async fn run(&self) -> PipelineResult {
        info!("[{TOOL_NAME}] start scaffolding");

        for (index, stage) in Stage::ALL.into_iter().enumerate() {
            info!("[{TOOL_NAME}] {}", stage.announcement());

            let step = stage.step(&self.project_dir, &self.config);
            if let Err(err) = self.runner.execute(&step).await {
                let failure = StepFailure {
                    index,
                    stage,
                    command: step.label().to_owned(),
                    reason: err.into_reason(),
                };
                error!("[{TOOL_NAME}] {failure}");
                return PipelineResult::Failed(failure);
            }
        }

        info!(project = %self.project_dir.display(), "[{TOOL_NAME}] done");
        PipelineResult::Succeeded { steps: Stage::ALL.len() }
    }
}
