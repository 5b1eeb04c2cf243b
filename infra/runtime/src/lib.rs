//! # Runtime
//!
//! Tokio runtime bootstrap for the scaffolder binary.
//!
//! The provisioning pipeline runs strictly one step at a time, so the runtime is a single
//! current-thread scheduler. Only blocking work (`tokio::fs`) leaves the calling thread,
//! on pool threads named after [`RuntimeConfig::thread_name`].
//!
//! ## Example
//!
//! ```rust,ignore
//! #[tss_runtime::main(current_thread, bootstrap_error = on_bootstrap_error)]
//! async fn main() -> anyhow::Result<std::process::ExitCode> {
//!     Ok(std::process::ExitCode::SUCCESS)
//! }
//! ```

pub use anyhow::Result;
pub use tss_derive::main;

use anyhow::anyhow;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const DEFAULT_THREAD_NAME: &str = "tss-worker";

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub thread_name: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::current_thread()
    }
}

impl RuntimeConfig {
    /// Single-threaded preset.
    #[must_use]
    pub fn current_thread() -> Self {
        Self { thread_name: DEFAULT_THREAD_NAME.to_owned() }
    }

    #[must_use = "Customize the thread name"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name = if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }
}

/// Builds a current-thread Tokio runtime with I/O, time and process support enabled.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the OS refuses to create the runtime (epoll, signal pipe, ...).
pub fn build_runtime(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(config = ?config, "Building tokio runtime");

    Builder::new_current_thread()
        .thread_name(&config.thread_name)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}
