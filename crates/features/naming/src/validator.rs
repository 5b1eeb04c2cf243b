//! # Name Validation
//!
//! Structural checks of a candidate project name against npm's package-naming rules.
//! Nothing here consults a registry; the same input always yields the same report.
//!
//! Issues come in two severities:
//! 1. **Errors**: the registry never accepted such names.
//! 2. **Warnings**: names that old packages may still carry but new packages cannot use.
//!
//! A new project needs a name with neither.

use crate::builtins::{BLACKLIST, CORE_MODULES};
use serde::Serialize;
use std::fmt;

/// Longest name accepted for a new package.
pub const MAX_NAME_LENGTH: usize = 214;

const SPECIAL_CHARACTERS: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// How serious a [`NameIssue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NameIssue {
    Empty,
    LeadingPeriod,
    LeadingUnderscore,
    SurroundingSpaces,
    Blacklisted(String),
    NotUrlFriendly,
    CoreModule(String),
    TooLong,
    Uppercase,
    SpecialCharacters,
}

impl NameIssue {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Empty
            | Self::LeadingPeriod
            | Self::LeadingUnderscore
            | Self::SurroundingSpaces
            | Self::Blacklisted(_)
            | Self::NotUrlFriendly => Severity::Error,
            Self::CoreModule(_) | Self::TooLong | Self::Uppercase | Self::SpecialCharacters => {
                Severity::Warning
            },
        }
    }
}

impl fmt::Display for NameIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("name length must be greater than zero"),
            Self::LeadingPeriod => f.write_str("name cannot start with a period"),
            Self::LeadingUnderscore => f.write_str("name cannot start with an underscore"),
            Self::SurroundingSpaces => {
                f.write_str("name cannot contain leading or trailing spaces")
            },
            Self::Blacklisted(name) => write!(f, "{name} is a blacklisted name"),
            Self::NotUrlFriendly => f.write_str("name can only contain URL-friendly characters"),
            Self::CoreModule(name) => write!(f, "{name} is a core module name"),
            Self::TooLong => write!(
                f,
                "name can no longer contain more than {MAX_NAME_LENGTH} characters"
            ),
            Self::Uppercase => f.write_str("name can no longer contain capital letters"),
            Self::SpecialCharacters => {
                f.write_str("name can no longer contain special characters (\"~'!()*\")")
            },
        }
    }
}

/// Outcome of validating one name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameReport {
    issues: Vec<NameIssue>,
}

impl NameReport {
    /// Every issue found, in rule order.
    #[must_use]
    pub fn issues(&self) -> &[NameIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &NameIssue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &NameIssue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Warning)
    }

    /// No issue of any severity.
    #[must_use]
    pub fn valid_for_new_packages(&self) -> bool {
        self.issues.is_empty()
    }

    /// No error-level issue; warnings are tolerated for names that already exist.
    #[must_use]
    pub fn valid_for_old_packages(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Human-readable reasons: errors first, then warnings.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.errors().chain(self.warnings()).map(ToString::to_string).collect()
    }

    pub(crate) fn into_issues(self) -> Vec<NameIssue> {
        self.issues
    }
}

/// Validates `name` against every rule and collects all violations.
#[must_use]
pub fn validate(name: &str) -> NameReport {
    let mut issues = Vec::new();

    if name.is_empty() {
        issues.push(NameIssue::Empty);
    }
    if name.starts_with('.') {
        issues.push(NameIssue::LeadingPeriod);
    }
    if name.starts_with('_') {
        issues.push(NameIssue::LeadingUnderscore);
    }
    if name.trim() != name {
        issues.push(NameIssue::SurroundingSpaces);
    }

    let lowercase = name.to_lowercase();
    if let Some(blocked) = BLACKLIST.iter().find(|blocked| **blocked == lowercase) {
        issues.push(NameIssue::Blacklisted((*blocked).to_owned()));
    }
    if CORE_MODULES.contains(&lowercase.as_str()) {
        issues.push(NameIssue::CoreModule(name.to_owned()));
    }
    if name.encode_utf16().count() > MAX_NAME_LENGTH {
        issues.push(NameIssue::TooLong);
    }
    if lowercase != name {
        issues.push(NameIssue::Uppercase);
    }
    if last_segment(name).contains(SPECIAL_CHARACTERS) {
        issues.push(NameIssue::SpecialCharacters);
    }
    if !is_url_friendly(name) && !is_url_friendly_scoped(name) {
        issues.push(NameIssue::NotUrlFriendly);
    }

    NameReport { issues }
}

fn last_segment(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// True when percent-encoding `value` as a URI component would leave it unchanged.
fn is_url_friendly(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || "-_.!~*'()".contains(c))
}

/// Accepts `@scope/package` when both halves are URL-friendly on their own.
fn is_url_friendly_scoped(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('@') else {
        return false;
    };
    let Some((scope, package)) = rest.split_once('/') else {
        return false;
    };

    !scope.is_empty()
        && !package.is_empty()
        && !package.contains('/')
        && is_url_friendly(scope)
        && is_url_friendly(package)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(name: &str) -> Vec<NameIssue> {
        validate(name).into_issues()
    }

    #[test]
    fn accepts_ordinary_names() {
        for name in ["valid-name", "some-package", "example.com", "under_score", "period.js", "123numeric"]
        {
            assert!(validate(name).valid_for_new_packages(), "{name} should be valid");
        }
    }

    #[test]
    fn accepts_scoped_names() {
        assert!(validate("@npm/thingy").valid_for_new_packages());
        assert!(validate("@npm-zors/money!time.js").valid_for_old_packages());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(issues(""), [NameIssue::Empty]);
    }

    #[test]
    fn rejects_leading_period_and_underscore() {
        assert_eq!(issues(".start-with-period"), [NameIssue::LeadingPeriod]);
        assert_eq!(issues("_start-with-underscore"), [NameIssue::LeadingUnderscore]);
    }

    #[test]
    fn rejects_surrounding_spaces() {
        let found = issues(" leading-space");
        assert!(found.contains(&NameIssue::SurroundingSpaces));
        assert!(found.contains(&NameIssue::NotUrlFriendly));
    }

    #[test]
    fn rejects_url_unsafe_characters() {
        assert_eq!(issues("contain:colons"), [NameIssue::NotUrlFriendly]);
        assert_eq!(issues("s/l/a/s/h/e/s"), [NameIssue::NotUrlFriendly]);
        assert_eq!(issues("with space"), [NameIssue::NotUrlFriendly]);
    }

    #[test]
    fn blacklisted_names_are_errors() {
        assert_eq!(issues("node_modules"), [NameIssue::Blacklisted("node_modules".to_owned())]);
        let report = validate("favicon.ico");
        assert!(!report.valid_for_old_packages());
    }

    #[test]
    fn core_modules_are_warnings() {
        let report = validate("http");
        assert_eq!(report.issues(), [NameIssue::CoreModule("http".to_owned())]);
        assert!(report.valid_for_old_packages());
        assert!(!report.valid_for_new_packages());
    }

    #[test]
    fn capital_letters_are_warnings() {
        let report = validate("CAPITAL-LETTERS");
        assert_eq!(report.issues(), [NameIssue::Uppercase]);
        assert_eq!(report.reasons(), ["name can no longer contain capital letters"]);
    }

    #[test]
    fn special_characters_are_warnings() {
        assert_eq!(issues("crazy!"), [NameIssue::SpecialCharacters]);
        assert_eq!(issues("@npm/te*st"), [NameIssue::SpecialCharacters]);
    }

    #[test]
    fn length_limit_is_inclusive() {
        let at_limit = "a".repeat(MAX_NAME_LENGTH);
        assert!(validate(&at_limit).valid_for_new_packages());

        let over_limit = "a".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(issues(&over_limit), [NameIssue::TooLong]);
    }

    #[test]
    fn reasons_list_errors_before_warnings() {
        let report = validate("_Under");
        assert_eq!(
            report.reasons(),
            ["name cannot start with an underscore", "name can no longer contain capital letters"]
        );
    }
}
