use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME: &str = "camelCase";

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

/// Serde settings already written on the struct by hand.
#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands `#[api_model]`.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let args = match parse_model_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };
    let existing = match existing_serde(&input.attrs) {
        Ok(existing) => existing,
        Err(err) => return err,
    };
    let derives = derived_traits(&input.attrs);

    let derive_attr = derive_attr(&derives);
    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };
    let rename_attr = match rename_attr(args.rename_all, &existing) {
        Ok(attr) => attr,
        Err(err) => return err,
    };
    let deny_attr = match deny_attr(args.deny_unknown_fields, &existing, &input) {
        Ok(attr) => attr,
        Err(err) => return err,
    };

    quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    }
}

/// Expands `#[api_handler]`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = &input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_model_args(args: TokenStream) -> Result<ModelArgs, TokenStream> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated
        .parse2(args)
        .map_err(|err| err.to_compile_error())?;

    let mut parsed = ModelArgs::default();
    for meta in metas {
        let nv = match meta {
            Meta::NameValue(nv) => nv,
            other => return Err(compile_error(&other, "expected `key = value` arguments")),
        };

        if nv.path.is_ident("rename_all") {
            if parsed.rename_all.is_some() {
                return Err(compile_error(&nv, "duplicate `rename_all`"));
            }
            parsed.rename_all = Some(string_literal(&nv)?);
        } else if nv.path.is_ident("deny_unknown_fields") {
            if parsed.deny_unknown_fields.is_some() {
                return Err(compile_error(&nv, "duplicate `deny_unknown_fields`"));
            }
            parsed.deny_unknown_fields = Some(bool_literal(&nv)?);
        } else {
            return Err(compile_error(
                &nv.path,
                "unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn string_literal(nv: &MetaNameValue) -> Result<LitStr, TokenStream> {
    match &nv.value {
        Expr::Lit(expr) => match &expr.lit {
            Lit::Str(lit) => Ok(lit.clone()),
            _ => Err(compile_error(&nv.value, "expected a string literal")),
        },
        _ => Err(compile_error(&nv.value, "expected a string literal")),
    }
}

fn bool_literal(nv: &MetaNameValue) -> Result<bool, TokenStream> {
    match &nv.value {
        Expr::Lit(expr) => match &expr.lit {
            Lit::Bool(lit) => Ok(lit.value),
            _ => Err(compile_error(&nv.value, "expected a boolean literal")),
        },
        _ => Err(compile_error(&nv.value, "expected a boolean literal")),
    }
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let mut missing = Vec::new();
    if !derives.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        missing.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        missing.push(quote! { ::serde::Deserialize });
    }

    if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } }
}

fn rename_attr(
    requested: Option<LitStr>,
    existing: &ExistingSerde,
) -> Result<TokenStream, TokenStream> {
    let requested = requested.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));

    match &existing.rename_all {
        Some(current) if current.value() != requested.value() => Err(compile_error(
            current,
            "conflicting serde rename_all; drop it or pass the same value to api_model",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #requested)] }),
    }
}

fn deny_attr(
    requested: Option<bool>,
    existing: &ExistingSerde,
    input: &ItemStruct,
) -> Result<TokenStream, TokenStream> {
    let deny = requested.unwrap_or(true);

    match (existing.deny_unknown_fields, deny) {
        (true, false) => Err(compile_error(
            &input.ident,
            "serde(deny_unknown_fields) is already set; remove it before disabling",
        )),
        (true, true) | (false, false) => Ok(quote! {}),
        (false, true) => Ok(quote! { #[serde(deny_unknown_fields)] }),
    }
}

fn existing_serde(attrs: &[Attribute]) -> Result<ExistingSerde, TokenStream> {
    let mut existing = ExistingSerde::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                existing.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                existing.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Skip the value of unrelated `key = value` items.
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })
        .map_err(|err| err.to_compile_error())?;
    }

    Ok(existing)
}

fn derived_traits(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                traits.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

fn compile_error(tokens: &impl quote::ToTokens, message: &str) -> TokenStream {
    syn::Error::new_spanned(tokens, message).to_compile_error()
}
