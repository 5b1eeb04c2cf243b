//! Process exit codes of the `ts-scaffolder` binary.
//!
//! A failing external step propagates its own exit code instead of one of these.

pub const SUCCESS: u8 = 0;
/// No project name given, or the arguments could not be parsed.
pub const USAGE: u8 = 1;
/// The project name violates the naming rules.
pub const INVALID_NAME: u8 = 2;
/// Anything not covered above: I/O errors, spawn failures, signals.
pub const UNEXPECTED: u8 = 3;
