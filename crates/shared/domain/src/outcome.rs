//! Terminal outcome of a provisioning run.

use crate::exit;
use crate::step::Stage;
use serde::Serialize;
use std::fmt;

/// Why a step failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FailureReason {
    /// The external program exited with a non-zero status.
    ExitStatus(i32),
    /// The step could not be carried out at all (directory exists, spawn failed, ...).
    Io(String),
}

/// The step at which a run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepFailure {
    /// Zero-based position in [`Stage::ALL`].
    pub index: usize,
    pub stage: Stage,
    /// Label of the originating command (`git`, `npm`, `mkdir`, ...).
    pub command: String,
    pub reason: FailureReason,
}

impl StepFailure {
    /// Exit code for the whole process: the step's own non-zero code when there is one.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self.reason {
            FailureReason::ExitStatus(code) => u8::try_from(code)
                .ok()
                .filter(|&code| code != exit::SUCCESS)
                .unwrap_or(exit::UNEXPECTED),
            FailureReason::Io(_) => exit::UNEXPECTED,
        }
    }
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            FailureReason::ExitStatus(code) => write!(
                f,
                "step {} ({}) failed: {} exited with code {code}",
                self.index + 1,
                self.stage,
                self.command
            ),
            FailureReason::Io(message) => write!(
                f,
                "step {} ({}) failed: {}: {message}",
                self.index + 1,
                self.stage,
                self.command
            ),
        }
    }
}

/// Result of a whole pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PipelineResult {
    Succeeded { steps: usize },
    Failed(StepFailure),
}

impl PipelineResult {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Succeeded { .. } => exit::SUCCESS,
            Self::Failed(failure) => failure.exit_code(),
        }
    }
}
