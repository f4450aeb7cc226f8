//! Attribute parsing: the macro's own arguments and per-parameter `#[default(...)]`.

use syn::parse::Parser;
use syn::{Attribute, Expr, LitStr, Meta};

/// Arguments of `#[prettytuple(...)]`.
#[derive(Debug, Default)]
pub struct MacroArgs {
    /// Overrides the module the record reports; `module_path!()` otherwise.
    pub module: Option<LitStr>,
}

impl MacroArgs {
    pub fn parse(args: proc_macro2::TokenStream) -> syn::Result<Self> {
        let mut out = MacroArgs::default();
        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("module") {
                if out.module.is_some() {
                    return Err(meta.error("duplicate `module` argument"));
                }
                out.module = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported prettytuple argument; expected `module = \"...\"`"))
            }
        });
        parser.parse2(args)?;
        Ok(out)
    }
}

/// Split a parameter's attributes into its default expression and everything else.
///
/// Accepts `#[default(expr)]` and `#[default = expr]`. The remaining attributes are carried over to the field.
pub fn take_default(attrs: &[Attribute]) -> syn::Result<(Option<Expr>, Vec<Attribute>)> {
    let mut default = None;
    let mut rest = Vec::with_capacity(attrs.len());
    for attr in attrs {
        if !attr.path().is_ident("default") {
            rest.push(attr.clone());
            continue;
        }
        if default.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate `default` attribute"));
        }
        let expr = match &attr.meta {
            Meta::List(list) => list.parse_args::<Expr>()?,
            Meta::NameValue(nv) => nv.value.clone(),
            Meta::Path(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `#[default(expr)]` or `#[default = expr]`",
                ));
            }
        };
        default = Some(expr);
    }
    Ok((default, rest))
}

/// Attributes that only apply to functions. The function is replaced by a struct, so they are dropped.
const FN_ONLY_ATTRIBUTES: &[&str] = &[
    "inline",
    "cold",
    "track_caller",
    "no_mangle",
    "export_name",
    "link_section",
    "target_feature",
    "instruction_set",
    "naked",
];

/// The function's attributes that carry over to the generated struct.
pub fn struct_attrs(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|a| !FN_ONLY_ATTRIBUTES.iter().any(|name| a.path().is_ident(name)))
        .cloned()
        .collect()
}

/// Join `#[doc = "..."]` lines the way rustdoc sees them, dropping the single leading space of `///` comments.
pub fn doc_text(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|a| a.path().is_ident("doc"))
        .filter_map(|a| match &a.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_string).unwrap_or(line))
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
