#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the shell crates.
//!
//! ## Usage
//! Add the crate to the consumer's dependencies together with `thiserror`, which the
//! generated code derives from:
//! ```toml
//! [dependencies]
//! vcb-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Injected Items
///
/// * **Derives**: `Debug` and `thiserror::Error` unless already derived.
/// * **Context**: a companion `<Name>Ext` trait adding `.context(...)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every variant that wraps a source.
/// * **Conversions**: `From<Source>` for sourced variants, so `?` works on upstream errors.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant with a `message` field exists.
/// * **`format_context`**: a module-private helper rendering ` (context)` or nothing,
///   meant for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted, and every variant must use named fields.
/// 2. A variant wrapping an error (field named `source` or marked `#[source]`) must also
///    carry `context: Option<Cow<'static, str>>`.
/// 3. Two variants must not wrap the same source type, and only one annotated enum may
///    live in a module (the helper function would clash).
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use vcb_derive::vcb_error;
///
/// #[vcb_error]
/// pub enum ReadError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, ReadError> {
///     std::fs::read_to_string(path).context("Reading shell config")
/// }
///
/// let err = read("/definitely/not/here").unwrap_err();
/// assert!(err.to_string().starts_with("IO error (Reading shell config): "));
/// ```
///
/// A sourced variant without a context slot is rejected:
///
/// ```compile_fail
/// use vcb_derive::vcb_error;
///
/// #[vcb_error]
/// pub enum ReadError {
///     #[error("IO error: {source}")]
///     Io { source: std::io::Error },
/// }
/// ```
///
/// So are tuple variants:
///
/// ```compile_fail
/// use vcb_derive::vcb_error;
///
/// #[vcb_error]
/// pub enum ReadError {
///     #[error("IO error: {0}")]
///     Io(std::io::Error),
/// }
/// ```
///
/// And a context field of the wrong type:
///
/// ```compile_fail
/// use vcb_derive::vcb_error;
///
/// #[vcb_error]
/// pub enum ReadError {
///     #[error("IO error: {source}")]
///     Io { source: std::io::Error, context: Option<String> },
/// }
/// ```
#[proc_macro_attribute]
pub fn vcb_error(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(proc_macro2::Span::call_site(), "vcb_error takes no arguments")
            .to_compile_error()
            .into();
    }
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(&input).into()
}
