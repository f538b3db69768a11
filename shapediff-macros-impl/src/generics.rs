use unsynn::*;

use crate::grammar::{AngleDepth, is_punct};

/// Generic parameters of a type declaration: `<'a, T: Bound = Default, const N: usize>`.
///
/// Parsed by hand because bounds may contain `<`, `>` and commas that only make sense
/// with angle bracket nesting in mind.
#[derive(Debug, Clone)]
pub struct Generics {
    tokens: TokenStream,
    /// The parameters, in declaration order.
    pub params: Vec<GenericParam>,
}

/// A single generic parameter.
#[derive(Debug, Clone)]
pub enum GenericParam {
    /// `'a: 'b`
    Lifetime {
        /// The declaration, bounds included.
        decl: TokenStream,
        /// `'a`
        name: TokenStream,
    },
    /// `T: Bound`
    Type {
        /// The declaration without its default.
        decl: TokenStream,
        /// `T`
        name: Ident,
    },
    /// `const N: usize`
    Const {
        /// The declaration without its default.
        decl: TokenStream,
        /// `N`
        name: Ident,
    },
}

impl GenericParam {
    fn from_tokens(mut tokens: Vec<TokenTree>) -> Option<Self> {
        // attributes on generic parameters (`#[cfg(..)]`) are dropped
        while tokens.len() >= 2
            && is_punct(&tokens[0], '#')
            && matches!(&tokens[1], TokenTree::Group(g) if g.delimiter() == Delimiter::Bracket)
        {
            tokens.drain(..2);
        }

        match tokens.first()? {
            TokenTree::Punct(p) if p.as_char() == '\'' => {
                let name = tokens.iter().take(2).cloned().collect();
                Some(GenericParam::Lifetime {
                    decl: tokens.into_iter().collect(),
                    name,
                })
            }
            TokenTree::Ident(ident) if ident == "const" => {
                let TokenTree::Ident(name) = tokens.get(1)?.clone() else {
                    return None;
                };
                Some(GenericParam::Const {
                    decl: without_default(tokens),
                    name,
                })
            }
            TokenTree::Ident(name) => {
                let name = name.clone();
                Some(GenericParam::Type {
                    decl: without_default(tokens),
                    name,
                })
            }
            _ => None,
        }
    }
}

fn without_default(tokens: Vec<TokenTree>) -> TokenStream {
    let mut depth = AngleDepth::default();
    let mut kept = Vec::with_capacity(tokens.len());
    for tt in tokens {
        if depth.is_top_level() && is_punct(&tt, '=') {
            break;
        }
        depth.track(&tt);
        kept.push(tt);
    }
    kept.into_iter().collect()
}

fn split_top_level(tokens: Vec<TokenTree>) -> Vec<Vec<TokenTree>> {
    let mut depth = AngleDepth::default();
    let mut parts = vec![Vec::new()];
    for tt in tokens {
        if depth.is_top_level() && is_punct(&tt, ',') {
            parts.push(Vec::new());
            continue;
        }
        depth.track(&tt);
        if let Some(current) = parts.last_mut() {
            current.push(tt);
        }
    }
    parts.retain(|part| !part.is_empty());
    parts
}

impl Generics {
    /// Parameters for the `impl<...>` header: defaults removed.
    pub fn impl_params(&self) -> Vec<TokenStream> {
        self.params
            .iter()
            .map(|param| match param {
                GenericParam::Lifetime { decl, .. }
                | GenericParam::Type { decl, .. }
                | GenericParam::Const { decl, .. } => decl.clone(),
            })
            .collect()
    }

    /// Arguments for the type in the `impl` header: names only.
    pub fn type_args(&self) -> Vec<TokenStream> {
        self.params
            .iter()
            .map(|param| match param {
                GenericParam::Lifetime { name, .. } => name.clone(),
                GenericParam::Type { name, .. } | GenericParam::Const { name, .. } => {
                    TokenTree::Ident(name.clone()).into()
                }
            })
            .collect()
    }

    /// Names of the type parameters, the ones that need an `Introspect` bound.
    pub fn type_param_names(&self) -> impl Iterator<Item = &Ident> {
        self.params.iter().filter_map(|param| match param {
            GenericParam::Type { name, .. } => Some(name),
            _ => None,
        })
    }
}

impl Parser for Generics {
    fn parser(tokens: &mut TokenIter) -> Result<Self> {
        let open = match tokens.next() {
            Some(tt) if is_punct(&tt, '<') => tt,
            other => return Error::unexpected_token(other, tokens),
        };

        let mut all = vec![open];
        let mut inner = Vec::new();
        let mut depth = AngleDepth::default();
        loop {
            let Some(tt) = tokens.next() else {
                return Error::other(
                    None,
                    tokens,
                    "unterminated generic parameter list".to_string(),
                );
            };
            if depth.closes(&tt) {
                all.push(tt);
                break;
            }
            depth.track(&tt);
            all.push(tt.clone());
            inner.push(tt);
        }

        let mut params = Vec::new();
        for part in split_top_level(inner) {
            let first = part.first().cloned();
            match GenericParam::from_tokens(part) {
                Some(param) => params.push(param),
                None => {
                    return Error::other(first, tokens, "invalid generic parameter".to_string());
                }
            }
        }

        Ok(Self {
            tokens: all.into_iter().collect(),
            params,
        })
    }
}

impl ToTokens for Generics {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.tokens.clone());
    }
}
