#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros used across the site workspace.
//!
//! * [`site_error`] turns an enum into a `thiserror` error with a `context` helper trait.
//! * [`site_slice`] wraps feature state in an `Arc` and registers it as a feature slice.
//! * [`api_model`] / [`api_handler`] keep JSON DTOs and axum handlers consistent with `OpenAPI`.
//! * [`main`] bootstraps the Tokio runtime from a named profile (re-exported by `aasm-runtime`).
//!
//! Examples below are `ignore`d; they compile only inside consuming crates.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a plain `fn main` running on a configured Tokio runtime.
///
/// Accepted profiles: `high_performance`, `memory_efficient`, `default` (or no argument).
/// The function must return a `Result`.
///
/// ```rust,ignore
/// #[aasm_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a JSON data model exposed by the HTTP surface.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, `utoipa::ToSchema` under the
/// `server` feature, `rename_all = "camelCase"` and `deny_unknown_fields` unless told otherwise.
///
/// ```rust,ignore
/// #[aasm_derive::api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct MemberView {
///     pub name: String,
///     pub affiliation: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Wraps an axum handler and forwards its arguments to `utoipa::path` under the `server` feature.
///
/// ```rust,ignore
/// #[aasm_derive::api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a crate error enum.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<Name>Ext` trait with `.context(...)`, implemented for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Named-field variants only. Variants with a source must carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[aasm_derive::site_error]
/// pub enum PagesError {
///     #[error("Content error{}: {source}", format_context(.context))]
///     Content { source: toml::de::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// let content = toml::from_str(raw).context("Parsing site.toml")?;
/// ```
#[proc_macro_attribute]
pub fn site_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is an `Arc` wrapper with `new`,
/// `Deref` to the inner state and an `aasm_kernel::domain::registry::FeatureSlice` impl.
///
/// ```rust,ignore
/// #[aasm_derive::site_slice]
/// pub struct Pages {
///     pub renderer: Renderer,
/// }
///
/// let pages = Pages::new(PagesInner { renderer });
/// ```
#[proc_macro_attribute]
pub fn site_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
