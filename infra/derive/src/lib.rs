#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `GameShop` workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! gshop-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! Examples are `ignore`d to avoid compiling in this crate; the `tests/ui` cases exercise them.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// A high-level attribute macro for defining domain-specific error enums.
///
/// This macro reduces boilerplate by transforming a standard enum into a fully-featured
/// error type integrated with the shop infrastructure.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `#[source]` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` if an `Internal` variant
///   is present.
/// * **Classification**: When variants carry `#[kind(...)]`, generates
///   `fn kind(&self) -> gshop_domain::ErrorKind`. `#[kind(source)]` delegates to the wrapped
///   error's own `kind()`.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`).
/// 4. Tuple or unit variants are rejected to keep error wiring explicit and reliable.
/// 5. Classification is all-or-nothing: once a variant has `#[kind(...)]`, every variant needs
///    one, and the consuming crate must depend on `gshop-domain`.
///
/// # Example
///
/// ```rust,ignore
/// use gshop_derive::shop_error;
/// use std::borrow::Cow;
///
/// #[shop_error]
/// pub enum CartError {
///     #[kind(StateConflict)]
///     #[error("Cart is empty{}", format_context(.context))]
///     EmptyCart { context: Option<Cow<'static, str>> },
///
///     #[kind(source)]
///     #[error("Catalog failure{}: {source}", format_context(.context))]
///     Catalog { source: CatalogError, context: Option<Cow<'static, str>> },
/// }
///
/// assert_eq!(CartError::EmptyCart { context: None }.kind(), ErrorKind::StateConflict);
/// ```
#[proc_macro_attribute]
pub fn shop_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
