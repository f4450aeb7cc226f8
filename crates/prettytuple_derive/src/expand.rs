//! Expansion of `#[prettytuple]`.
//!
//! Validation runs in the same order as the runtime front end: the decorated item must be a plain function, every
//! parameter must be positional-or-keyword, defaults must be trailing, and names must be usable. Failures become
//! compile errors carrying the canonical `Kind: message` text from `prettytuple_core`.

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::visit::{self, Visit};
use syn::{Attribute, Expr, FnArg, Ident, Item, ItemFn, Pat, ReturnType, Type};

use prettytuple_core::errors::quote_name;
use prettytuple_core::{ParamKind, PrettyError, rules};

use crate::attrs::{self, MacroArgs};

struct Field {
    ident: Ident,
    name: String,
    ty: Type,
    default: Option<Expr>,
    attrs: Vec<Attribute>,
    span: Span,
}

fn error(span: Span, err: PrettyError) -> syn::Error {
    syn::Error::new(span, err.to_string())
}

/// The runtime type name reported when something other than a plain `fn` is decorated.
fn item_type_name(item: &Item) -> &'static str {
    match item {
        Item::Const(_) => "const",
        Item::Enum(_) => "enum",
        Item::Fn(_) => "fn",
        Item::Impl(_) => "impl",
        Item::Mod(_) => "mod",
        Item::Static(_) => "static",
        Item::Struct(_) => "struct",
        Item::Trait(_) => "trait",
        Item::Type(_) => "type",
        Item::Union(_) => "union",
        Item::Use(_) => "use",
        _ => "item",
    }
}

fn plain_function(item: Item) -> syn::Result<ItemFn> {
    let func = match item {
        Item::Fn(func) => func,
        other => {
            return Err(error(other.span(), PrettyError::not_a_function(item_type_name(&other))));
        }
    };

    let sig = &func.sig;
    let refused = if sig.constness.is_some() {
        Some((sig.constness.span(), "const fn"))
    } else if sig.asyncness.is_some() {
        Some((sig.asyncness.span(), "async fn"))
    } else if sig.unsafety.is_some() {
        Some((sig.unsafety.span(), "unsafe fn"))
    } else if sig.abi.is_some() {
        Some((sig.abi.span(), "extern fn"))
    } else if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        Some((sig.generics.span(), "generic fn"))
    } else if let ReturnType::Type(arrow, _) = &sig.output {
        Some((arrow.span(), "fn with return type"))
    } else {
        sig.inputs.iter().find_map(|arg| match arg {
            FnArg::Receiver(r) => Some((r.span(), "method")),
            FnArg::Typed(_) => None,
        })
    };
    if let Some((span, type_name)) = refused {
        return Err(error(span, PrettyError::not_a_function(type_name)));
    }
    Ok(func)
}

/// Finds the first part of a parameter type that cannot be a struct field.
///
/// `impl Trait` makes the function generic. Borrows need a lifetime the struct does not declare, so only `'static`
/// is allowed. Function pointer and `Fn(..)` signatures are skipped: their elided lifetimes are local to them.
#[derive(Default)]
struct FieldTypeCheck {
    refused: Option<syn::Error>,
}

impl FieldTypeCheck {
    fn refuse(&mut self, err: syn::Error) {
        self.refused.get_or_insert(err);
    }

    fn borrow(span: Span) -> syn::Error {
        syn::Error::new(span, "record fields must be owned: use an owned type or a `'static` borrow")
    }
}

impl<'ast> Visit<'ast> for FieldTypeCheck {
    fn visit_type_impl_trait(&mut self, node: &'ast syn::TypeImplTrait) {
        self.refuse(error(node.span(), PrettyError::not_a_function("generic fn")));
    }

    fn visit_type_reference(&mut self, node: &'ast syn::TypeReference) {
        if node.lifetime.is_none() {
            self.refuse(Self::borrow(node.span()));
        }
        visit::visit_type_reference(self, node);
    }

    fn visit_lifetime(&mut self, node: &'ast syn::Lifetime) {
        if node.ident != "static" {
            self.refuse(Self::borrow(node.span()));
        }
    }

    fn visit_type_bare_fn(&mut self, _: &'ast syn::TypeBareFn) {}

    fn visit_parenthesized_generic_arguments(&mut self, _: &'ast syn::ParenthesizedGenericArguments) {}
}

fn check_field_type(ty: &Type) -> syn::Result<()> {
    let mut check = FieldTypeCheck::default();
    check.visit_type(ty);
    check.refused.map_or(Ok(()), Err)
}

fn collect_fields(func: &ItemFn) -> syn::Result<Vec<Field>> {
    let mut fields = Vec::with_capacity(func.sig.inputs.len());
    for arg in &func.sig.inputs {
        // Receivers were refused in `plain_function`.
        let FnArg::Typed(pat_type) = arg else { continue };
        let ident = match &*pat_type.pat {
            Pat::Ident(pat) if pat.by_ref.is_none() && pat.subpat.is_none() => pat.ident.clone(),
            other => {
                let name = other.to_token_stream().to_string();
                return Err(error(
                    other.span(),
                    PrettyError::unsupported_kind(&name, ParamKind::PositionalOnly),
                ));
            }
        };
        check_field_type(&pat_type.ty)?;
        let (default, attrs) = attrs::take_default(&pat_type.attrs)?;
        fields.push(Field {
            name: ident.unraw().to_string(),
            ident,
            ty: (*pat_type.ty).clone(),
            default,
            attrs,
            span: pat_type.span(),
        });
    }

    if let Some(variadic) = &func.sig.variadic {
        let name = match &variadic.pat {
            Some((pat, _)) => pat.to_token_stream().to_string(),
            None => "...".to_string(),
        };
        return Err(error(
            variadic.span(),
            PrettyError::unsupported_kind(&name, ParamKind::VarPositional),
        ));
    }
    Ok(fields)
}

fn validate(type_ident: &Ident, fields: &[Field]) -> syn::Result<()> {
    rules::check_defaults_contiguous(fields.iter().map(|f| (f.name.as_str(), f.default.is_some()))).map_err(
        |err| {
            let span = fields
                .iter()
                .skip_while(|f| f.default.is_none())
                .find(|f| f.default.is_none())
                .map_or(type_ident.span(), |f| f.span);
            error(span, err)
        },
    )?;

    let type_name = type_ident.unraw().to_string();
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    rules::check_names(&type_name, &names, false).map_err(|err| {
        // Point at the declaration the message names.
        let span = fields
            .iter()
            .find(|f| err.message.ends_with(&quote_name(&f.name)))
            .map_or(type_ident.span(), |f| f.span);
        error(span, err)
    })
}

/// Expand a `#[prettytuple]` invocation.
pub fn expand(args: TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    let args = MacroArgs::parse(args)?;
    let func = plain_function(syn::parse2::<Item>(input)?)?;
    let fields = collect_fields(&func)?;
    validate(&func.sig.ident, &fields)?;

    let vis = &func.vis;
    let ident = &func.sig.ident;
    let type_name = ident.unraw().to_string();
    let item_attrs = attrs::struct_attrs(&func.attrs);

    let idents: Vec<&Ident> = fields.iter().map(|f| &f.ident).collect();
    let tys: Vec<&Type> = fields.iter().map(|f| &f.ty).collect();
    let field_attrs = fields.iter().map(|f| &f.attrs);
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    let type_strs: Vec<String> = tys.iter().map(|ty| quote!(#ty).to_string()).collect();

    let (defaulted, required): (Vec<&Field>, Vec<&Field>) = fields.iter().partition(|f| f.default.is_some());
    let with_defaults = if defaulted.is_empty() {
        quote! {}
    } else {
        let req_idents: Vec<&Ident> = required.iter().map(|f| &f.ident).collect();
        let req_tys = required.iter().map(|f| &f.ty);
        let def_idents = defaulted.iter().map(|f| &f.ident);
        let def_exprs = defaulted.iter().filter_map(|f| f.default.as_ref());
        quote! {
            /// Build a record from the required fields; defaulted fields take their declared defaults.
            pub fn with_defaults(#(#req_idents: #req_tys),*) -> Self {
                Self {
                    #(#req_idents,)*
                    #(#def_idents: #def_exprs,)*
                }
            }
        }
    };
    let default_entries = defaulted.iter().filter_map(|f| {
        let name = &f.name;
        let source = f.default.as_ref().map(|e| quote!(#e).to_string())?;
        Some(quote! { (#name, #source) })
    });

    let display_writes = fields.iter().enumerate().map(|(i, f)| {
        let field_ident = &f.ident;
        let label = if i == 0 { format!("{}=", f.name) } else { format!(", {}=", f.name) };
        quote! {
            f.write_str(#label)?;
            ::core::fmt::Debug::fmt(&self.#field_ident, f)?;
        }
    });

    let module = match &args.module {
        Some(module) => quote!(#module),
        None => quote!(::core::module_path!()),
    };
    let doc = match attrs::doc_text(&item_attrs) {
        Some(doc) => quote!(::core::option::Option::Some(#doc)),
        None => quote!(::core::option::Option::None),
    };
    let open = format!("{type_name}(");

    Ok(quote! {
        #(#item_attrs)*
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #ident {
            #(
                #(#field_attrs)*
                pub #idents: #tys,
            )*
        }

        impl #ident {
            /// Build a record from every field, in declaration order.
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#idents: #tys),*) -> Self {
                Self { #(#idents),* }
            }

            #with_defaults

            /// The field values as a tuple, in declaration order.
            pub fn into_tuple(self) -> (#(#tys,)*) {
                (#(self.#idents,)*)
            }
        }

        impl ::core::convert::From<(#(#tys,)*)> for #ident {
            fn from((#(#idents,)*): (#(#tys,)*)) -> Self {
                Self { #(#idents),* }
            }
        }

        impl ::core::convert::From<#ident> for (#(#tys,)*) {
            fn from(record: #ident) -> Self {
                record.into_tuple()
            }
        }

        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#open)?;
                #(#display_writes)*
                f.write_str(")")
            }
        }

        impl ::prettytuple::RecordInfo for #ident {
            const TYPE_NAME: &'static str = #type_name;
            const MODULE: &'static str = #module;
            const DOC: ::core::option::Option<&'static str> = #doc;

            fn field_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn field_types() -> &'static [&'static str] {
                &[#(#type_strs),*]
            }

            fn field_defaults() -> &'static [(&'static str, &'static str)] {
                &[#(#default_entries),*]
            }
        }
    })
}
