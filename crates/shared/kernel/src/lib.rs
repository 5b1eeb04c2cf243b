//! Kernel utilities shared across the scaffolder crates.
//! Keep this crate lightweight; today it owns configuration resolution.
//!
//! ## Config resolution
//! ```rust
//! use tss_kernel::config::{EnvSnapshot, FlagOverrides, resolve_config};
//!
//! let env = EnvSnapshot::from_pairs([("UMDNAME", "Bar")]);
//! let flags = FlagOverrides { umd_name: Some("Foo".to_owned()), ..FlagOverrides::default() };
//! assert_eq!(resolve_config(&flags, &env).umd_name, "Foo");
//! ```
pub mod config;

pub use tss_domain as domain;
