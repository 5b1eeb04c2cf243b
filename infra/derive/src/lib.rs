#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the scaffolder crates.
//!
//! * [`macro@main`] bootstraps the current-thread Tokio runtime from `tss-runtime`.
//! * [`macro@tss_error`] turns an enum into a `thiserror` error with context helpers.
//!
//! The generated code refers to `::tss_runtime` and `::thiserror`, so consuming crates
//! must depend on those directly.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime for an `async fn main`.
///
/// # Arguments
///
/// * `current_thread` / `default` (or no argument) - Single-threaded scheduler.
/// * `thread_name = "..."` - Name given to the runtime's blocking-pool threads.
/// * `bootstrap_error = path` - Function called with the `anyhow::Error` when the runtime
///   cannot be built; its return value becomes the return value of `main`. Without it
///   the error is propagated with `?`.
///
/// # Examples
///
/// ```rust,ignore
/// fn on_bootstrap_error(err: anyhow::Error) -> anyhow::Result<std::process::ExitCode> {
///     eprintln!("{err:?}");
///     Ok(std::process::ExitCode::from(3))
/// }
///
/// #[tss_runtime::main(current_thread, bootstrap_error = on_bootstrap_error)]
/// async fn main() -> anyhow::Result<std::process::ExitCode> {
///     Ok(std::process::ExitCode::SUCCESS)
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for domain-specific error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)`, implemented for `Result<T, ErrorName>`
///   and for `Result<T, SourceError>` of every variant carrying a source.
/// * `From<SourceError>` for every variant with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a source must also declare
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tss_derive::tss_error]
/// pub enum RunnerError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn open() -> Result<std::fs::File, RunnerError> {
///     std::fs::File::open("package.json").context("Reading manifest")
/// }
/// ```
#[proc_macro_attribute]
pub fn tss_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
