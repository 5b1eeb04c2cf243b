//! # Provisioning
//!
//! Turns a validated project name and a resolved configuration into a fresh project on disk:
//!
//! 1.  **Runner ([`runner`]):** executes a single step. [`SystemRunner`] talks to the real
//!     filesystem and spawns processes, forwarding their output into the log.
//! 2.  **Pipeline ([`pipeline`]):** drives the fixed stage order with fail-fast semantics and
//!     reports a [`PipelineResult`].
//!
//! The runner sits behind the [`StepRunner`] trait so the pipeline can be driven without
//! spawning anything.

mod error;
pub mod pipeline;
pub mod runner;

pub use crate::error::{ProvisionError, ProvisionErrorExt};
pub use crate::pipeline::Pipeline;
pub use crate::runner::{StepRunner, SystemRunner};
pub use tss_domain::outcome::{FailureReason, PipelineResult, StepFailure};
