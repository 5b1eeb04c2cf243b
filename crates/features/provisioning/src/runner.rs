//! # Process Runner
//!
//! Bridges provisioning steps to the operating system. Commands are spawned from an argv
//! list (no shell), their stdout/stderr are forwarded line by line into the log with a
//! `[<program>]` prefix, and the call completes exactly once, when the child exits.

use crate::error::{ProvisionError, ProvisionErrorExt};
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};
use tss_domain::exit;
use tss_domain::step::{CommandSpec, ProvisioningStep};

/// Exit code reported when a process ends without one (killed by a signal).
pub const SIGNALLED_EXIT_CODE: i32 = exit::UNEXPECTED as i32;

/// How long output readers may keep draining after the child has exited.
pub const OUTPUT_DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Executes one provisioning step to completion.
pub trait StepRunner {
    /// Resolves once the step has finished: `Ok(())` on success, an error otherwise.
    fn execute(&self, step: &ProvisioningStep) -> impl Future<Output = Result<(), ProvisionError>>;
}

impl<T: StepRunner + ?Sized> StepRunner for &T {
    fn execute(&self, step: &ProvisioningStep) -> impl Future<Output = Result<(), ProvisionError>> {
        (**self).execute(step)
    }
}

/// Runs steps against the real filesystem and process table.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl StepRunner for SystemRunner {
    async fn execute(&self, step: &ProvisioningStep) -> Result<(), ProvisionError> {
        match step {
            ProvisioningStep::CreateDirectory { path } => create_project_dir(path).await,
            ProvisioningStep::Command(spec) => run_command(spec).await,
        }
    }
}

/// Creates `path` as a new directory (mode `0750` on Unix). Fails if it already exists.
///
/// # Errors
/// Returns [`ProvisionError::Io`] when the directory exists or cannot be created.
pub async fn create_project_dir(path: &Path) -> Result<(), ProvisionError> {
    let mut builder = tokio::fs::DirBuilder::new();
    #[cfg(unix)]
    builder.mode(0o750);

    builder
        .create(path)
        .await
        .context(format!("Failed to create project folder {}", path.display()))
}

/// Spawns `spec`, forwards its output and waits for it to exit.
///
/// Completion follows the child's exit, not its pipes: once the child is reaped its output
/// readers get [`OUTPUT_DRAIN_GRACE`] to flush what is left and are then aborted, so a
/// background process holding the inherited pipes cannot keep the step open.
///
/// # Errors
/// * [`ProvisionError::Io`] if the program cannot be spawned or awaited.
/// * [`ProvisionError::ExitStatus`] if it exits with a non-zero status.
pub async fn run_command(spec: &CommandSpec) -> Result<(), ProvisionError> {
    debug!(command = %spec, cwd = %spec.cwd.display(), "Spawning process");

    let mut child = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .context(format!("Failed to spawn '{}'", spec.label))?;

    let label = spec.label.as_str();
    let readers = [
        tokio::spawn(forward_lines(child.stdout.take(), label.to_owned(), Stream::Stdout)),
        tokio::spawn(forward_lines(child.stderr.take(), label.to_owned(), Stream::Stderr)),
    ];

    let status = child.wait().await;
    drain(readers, label).await;
    let status = status.context(format!("Failed to wait for '{label}'"))?;

    if status.success() {
        debug!(command = label, "Process exited successfully");
        Ok(())
    } else {
        Err(ProvisionError::ExitStatus {
            command: label.to_owned(),
            code: status.code().unwrap_or(SIGNALLED_EXIT_CODE),
        })
    }
}

async fn drain(readers: [JoinHandle<()>; 2], label: &str) {
    for mut reader in readers {
        if timeout(OUTPUT_DRAIN_GRACE, &mut reader).await.is_err() {
            reader.abort();
            debug!(command = label, "Output still open after exit, detaching");
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

async fn forward_lines<R>(reader: Option<R>, label: String, stream: Stream)
where
    R: AsyncRead + Unpin,
{
    let Some(reader) = reader else {
        return;
    };

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\r', '\n']);
                match stream {
                    Stream::Stdout => info!("[{label}] {line}"),
                    Stream::Stderr => error!("[{label}] {line}"),
                }
            },
            Err(err) => {
                warn!(error = %err, "[{label}] output stream closed unexpectedly");
                break;
            },
        }
    }
}
