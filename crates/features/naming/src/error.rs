use crate::validator::NameIssue;
use std::borrow::Cow;

/// Error types specific to project naming.
#[tss_derive::tss_error]
pub enum NamingError {
    /// The name broke at least one naming rule; every violation is listed.
    #[error("Invalid project name '{name}'{}: {}", format_context(.context), join_issues(.issues))]
    Invalid { name: String, issues: Vec<NameIssue>, context: Option<Cow<'static, str>> },
}

fn join_issues(issues: &[NameIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
