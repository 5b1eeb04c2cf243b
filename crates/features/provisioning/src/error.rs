use std::borrow::Cow;
use tss_domain::outcome::FailureReason;

/// Error types specific to provisioning steps.
#[tss_derive::tss_error]
pub enum ProvisionError {
    /// The step could not be carried out: spawn failure, directory already exists, ...
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The external program ran and exited with a non-zero status.
    #[error("{command} exited with code {code}")]
    ExitStatus { command: String, code: i32 },
}

impl ProvisionError {
    #[must_use]
    pub fn into_reason(self) -> FailureReason {
        match self {
            Self::ExitStatus { code, .. } => FailureReason::ExitStatus(code),
            io @ Self::Io { .. } => FailureReason::Io(io.to_string()),
        }
    }
}
