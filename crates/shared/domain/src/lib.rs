//! # Domain Models
//!
//! Pure scaffolding types with a single dependency (`serde`).
//! Keep it lean: no I/O or process handling here, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod exit;
pub mod outcome;
pub mod step;
