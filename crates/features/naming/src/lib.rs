//! # Project Naming
//!
//! Gatekeeper for the name of a new project. A [`ProjectName`] can only be obtained through
//! [`ProjectName::parse`], so holding one proves the name passed every rule in [`validator`]
//! before anything touches the filesystem.

mod builtins;
mod error;
pub mod validator;

pub use crate::error::{NamingError, NamingErrorExt};
pub use crate::validator::{NameIssue, NameReport, Severity, validate};

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// A project name that satisfies the naming rules for new packages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    /// Returns [`NamingError::Invalid`] with every violated rule when `raw` is not
    /// acceptable as a new package name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, NamingError> {
        let name = raw.into();
        let report = validate(&name);

        if report.valid_for_new_packages() {
            Ok(Self(name))
        } else {
            Err(NamingError::Invalid { name, issues: report.into_issues(), context: None })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for ProjectName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
