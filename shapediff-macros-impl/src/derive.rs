use proc_macro2::Delimiter;
use quote::{quote, quote_spanned};
use unsynn::*;

use crate::Generics;
use crate::grammar::*;

/// Recursively flattens transparent groups (groups with `Delimiter::None`) in a token stream.
///
/// Declarative macros wrap captured fragments such as `$vis:vis` or `$ty:ty` in such
/// groups, which would otherwise not match the grammar.
fn flatten_transparent_groups(input: TokenStream) -> TokenStream {
    input
        .into_iter()
        .flat_map(|tt| match tt {
            TokenTree::Group(group) if group.delimiter() == Delimiter::None => {
                flatten_transparent_groups(group.stream())
            }
            TokenTree::Group(group) => {
                let flattened_stream = flatten_transparent_groups(group.stream());
                let mut new_group = proc_macro2::Group::new(group.delimiter(), flattened_stream);
                new_group.set_span(group.span());
                std::iter::once(TokenTree::Group(new_group)).collect()
            }
            other => std::iter::once(other).collect(),
        })
        .collect()
}

/// An error reported to the user through `compile_error!`.
#[derive(Debug)]
pub struct CompileError {
    message: String,
    span: Span,
}

impl CompileError {
    fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Turns the error into tokens that fail compilation at the recorded span.
    pub fn into_compile_error(self) -> TokenStream {
        let message = self.message;
        quote_spanned! { self.span => ::core::compile_error!(#message); }
    }
}

/// Main entry point for `#[derive(Introspect)]`.
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let input = flatten_transparent_groups(input);
    let mut i = input.to_token_iter();

    let result = match i.parse::<Cons<TypeDecl, EndOfStream>>() {
        Ok(parsed) => match parsed.first {
            TypeDecl::Struct(decl) => process_struct(decl),
            TypeDecl::Enum(decl) => process_enum(decl),
        },
        Err(err) => Err(CompileError::new(
            format!("#[derive(Introspect)] only supports structs and enums: {err}"),
            Span::call_site(),
        )),
    };

    result.unwrap_or_else(CompileError::into_compile_error)
}

/// Where an `#[introspect(...)]` attribute sits, which decides the arguments it accepts.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Site {
    Container,
    Variant,
    Field,
}

#[derive(Default)]
struct Options {
    crate_path: Option<TokenStream>,
    rename: Option<TokenStream>,
    skip: bool,
}

impl Options {
    fn parse(attributes: &[Attribute], site: Site) -> core::result::Result<Self, CompileError> {
        let mut options = Options::default();
        for attribute in attributes {
            let AttributeInner::Introspect(attr) = &attribute.body.content else {
                continue;
            };
            let group = &attr.args.0;
            let args = group
                .stream()
                .to_token_iter()
                .parse_all::<CommaDelimitedVec<IntrospectArg>>()
                .map_err(|err| {
                    CompileError::new(
                        format!(
                            "expected `crate = path`, `rename = \"name\"` or `skip` in #[introspect(...)]: {err}"
                        ),
                        group.span(),
                    )
                })?;

            for arg in args.iter().map(|delimited| &delimited.value) {
                match arg {
                    IntrospectArg::Crate { path, .. } if site == Site::Container => {
                        options.crate_path = Some(
                            path.iter()
                                .map(|item| item.value.second.clone())
                                .collect(),
                        );
                    }
                    IntrospectArg::Rename { name, .. } => {
                        options.rename = Some(name.to_token_stream());
                    }
                    IntrospectArg::Skip(_) if site == Site::Field => options.skip = true,
                    IntrospectArg::Crate { .. } => {
                        return Err(CompileError::new(
                            "`crate` is only allowed on the type itself",
                            group.span(),
                        ));
                    }
                    IntrospectArg::Skip(_) => {
                        return Err(CompileError::new(
                            "`skip` is only allowed on fields",
                            group.span(),
                        ));
                    }
                }
            }
        }
        Ok(options)
    }

    /// The display name: the rename if any, the identifier otherwise.
    fn label(&self, ident: &Ident) -> TokenStream {
        match &self.rename {
            Some(rename) => rename.clone(),
            None => {
                let text = ident.to_string();
                let text = text.strip_prefix("r#").unwrap_or(&text);
                TokenTree::Literal(Literal::string(text)).into()
            }
        }
    }
}

/// The parts of the `impl` block that depend on generics.
struct ImplHeader {
    impl_generics: TokenStream,
    type_generics: TokenStream,
    where_clause: TokenStream,
}

impl ImplHeader {
    fn new(
        generics: Option<&Generics>,
        where_clause: Option<&WhereClause>,
        krate: &TokenStream,
    ) -> Self {
        let (impl_generics, type_generics, bounds) = match generics {
            Some(generics) if !generics.params.is_empty() => {
                let params = generics.impl_params();
                let args = generics.type_args();
                let bounds: Vec<TokenStream> = generics
                    .type_param_names()
                    .map(|name| quote! { #name: #krate::Introspect })
                    .collect();
                (quote! { <#(#params),*> }, quote! { <#(#args),*> }, bounds)
            }
            _ => (TokenStream::new(), TokenStream::new(), Vec::new()),
        };

        let existing = where_clause.map(WhereClause::predicates);
        let where_clause = match (existing, bounds.is_empty()) {
            (None, true) => TokenStream::new(),
            (None, false) => quote! { where #(#bounds),* },
            (Some(existing), true) => quote! { where #existing },
            (Some(existing), false) => quote! { where #existing, #(#bounds),* },
        };

        Self {
            impl_generics,
            type_generics,
            where_clause,
        }
    }

    fn wrap(&self, name: &Ident, krate: &TokenStream, body: TokenStream) -> TokenStream {
        let Self {
            impl_generics,
            type_generics,
            where_clause,
        } = self;
        quote! {
            #[automatically_derived]
            impl #impl_generics #krate::Introspect for #name #type_generics #where_clause {
                fn shape(&self) -> #krate::Shape<'_> {
                    #body
                }
            }
        }
    }
}

fn crate_path(options: &Options) -> TokenStream {
    options
        .crate_path
        .clone()
        .unwrap_or_else(|| quote! { ::shapediff })
}

fn process_struct(decl: StructDecl) -> core::result::Result<TokenStream, CompileError> {
    let options = Options::parse(&decl.attributes, Site::Container)?;
    let krate = crate_path(&options);
    let type_name = options.label(&decl.name);

    let (fields, where_clause) = match &decl.kind {
        StructKind::Named {
            where_clause,
            fields,
        } => {
            let mut exprs = Vec::new();
            for field in fields.content.iter().map(|d| &d.value) {
                let field_options = Options::parse(&field.attributes, Site::Field)?;
                if field_options.skip {
                    continue;
                }
                let ident = &field.name;
                let label = field_options.label(ident);
                exprs.push(quote! { #krate::Field::named(#label, &self.#ident) });
            }
            (exprs, where_clause.as_ref())
        }
        StructKind::Tuple {
            fields,
            where_clause,
            ..
        } => {
            let mut exprs = Vec::new();
            for (index, field) in fields.content.iter().map(|d| &d.value).enumerate() {
                if Options::parse(&field.attributes, Site::Field)?.skip {
                    continue;
                }
                let index = Literal::usize_unsuffixed(index);
                exprs.push(quote! { #krate::Field::positional(&self.#index) });
            }
            (exprs, where_clause.as_ref())
        }
        StructKind::Unit { where_clause, .. } => (Vec::new(), where_clause.as_ref()),
    };

    let body = quote! {
        #krate::Shape::Record(#krate::Record::new(
            ::core::option::Option::Some(#type_name),
            ::std::vec![#(#fields),*],
        ))
    };

    let header = ImplHeader::new(decl.generics.as_ref(), where_clause, &krate);
    Ok(header.wrap(&decl.name, &krate, body))
}

fn process_enum(decl: EnumDecl) -> core::result::Result<TokenStream, CompileError> {
    let options = Options::parse(&decl.attributes, Site::Container)?;
    let krate = crate_path(&options);
    let type_name = options.label(&decl.name);

    let mut arms = Vec::new();
    for variant in decl.body.content.iter().map(|d| &d.value) {
        let variant_options = Options::parse(&variant.attributes, Site::Variant)?;
        let ident = &variant.name;
        let case = variant_options.label(ident);

        let (pattern, payload) = match &variant.data {
            VariantData::Unit(_) => (quote! { Self::#ident }, Vec::new()),
            VariantData::Tuple(fields) => {
                let mut bindings = Vec::new();
                let mut payload = Vec::new();
                for (index, field) in fields.content.iter().map(|d| &d.value).enumerate() {
                    if Options::parse(&field.attributes, Site::Field)?.skip {
                        bindings.push(quote! { _ });
                        continue;
                    }
                    let binding = quote::format_ident!("__f{}", index);
                    payload.push(quote! { #krate::Field::positional(#binding) });
                    bindings.push(quote! { #binding });
                }
                (quote! { Self::#ident(#(#bindings),*) }, payload)
            }
            VariantData::Struct(fields) => {
                let mut bindings = Vec::new();
                let mut payload = Vec::new();
                for (index, field) in fields.content.iter().map(|d| &d.value).enumerate() {
                    let field_options = Options::parse(&field.attributes, Site::Field)?;
                    if field_options.skip {
                        continue;
                    }
                    let name = &field.name;
                    let label = field_options.label(name);
                    let binding = quote::format_ident!("__f{}", index);
                    payload.push(quote! { #krate::Field::named(#label, #binding) });
                    bindings.push(quote! { #name: #binding });
                }
                (quote! { Self::#ident { #(#bindings,)* .. } }, payload)
            }
        };

        arms.push(quote! {
            #pattern => #krate::Shape::Union(#krate::Union::new(
                #type_name,
                #case,
                ::std::vec![#(#payload),*],
            )),
        });
    }

    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    let header = ImplHeader::new(decl.generics.as_ref(), decl.where_clause.as_ref(), &krate);
    Ok(header.wrap(&decl.name, &krate, body))
}
