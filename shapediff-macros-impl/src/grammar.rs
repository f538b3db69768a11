//! `unsynn` grammar for the items `#[derive(Introspect)]` accepts.

use unsynn::*;

use crate::Generics;

keyword! {
    /// The "struct" keyword.
    pub KStruct = "struct";
    /// The "enum" keyword.
    pub KEnum = "enum";
    /// The "pub" keyword.
    pub KPub = "pub";
    /// The "where" keyword.
    pub KWhere = "where";
    /// The "introspect" attribute namespace.
    pub KIntrospect = "introspect";
    /// The "crate" attribute argument.
    pub KCrate = "crate";
    /// The "rename" attribute argument.
    pub KRename = "rename";
    /// The "skip" attribute argument.
    pub KSkip = "skip";
}

unsynn! {
    /// Visibility: `pub`, `pub(crate)`, `pub(in path)`
    pub enum Vis {
        /// `pub(...)`
        PubIn(Cons<KPub, ParenthesisGroup>),
        /// `pub`
        Pub(KPub),
    }

    /// An outer attribute: `#[...]`
    pub struct Attribute {
        /// The `#` token
        pub _pound: Pound,
        /// The bracketed body
        pub body: BracketGroupContaining<AttributeInner>,
    }

    /// The body of an attribute
    pub enum AttributeInner {
        /// `introspect(...)`
        Introspect(IntrospectAttr),
        /// Anything else (doc comments, other derives' helpers, cfgs)
        Other(Vec<TokenTree>),
    }

    /// `introspect(...)`, the arguments are parsed separately to report errors on them
    pub struct IntrospectAttr {
        /// The `introspect` keyword
        pub _kw: KIntrospect,
        /// The parenthesized arguments
        pub args: ParenthesisGroup,
    }

    /// One argument of `#[introspect(...)]`
    pub enum IntrospectArg {
        /// `crate = path::to::shapediff`
        Crate {
            /// The `crate` keyword
            _kw: KCrate,
            /// The `=` token
            _eq: Assign,
            /// The path, up to the next comma
            path: Many<Cons<Except<Comma>, TokenTree>>,
        },
        /// `rename = "name"`
        Rename {
            /// The `rename` keyword
            _kw: KRename,
            /// The `=` token
            _eq: Assign,
            /// The new name
            name: LiteralString,
        },
        /// `skip`
        Skip(KSkip),
    }

    /// A type declaration
    pub enum TypeDecl {
        /// A struct
        Struct(StructDecl),
        /// An enum
        Enum(EnumDecl),
    }

    /// A struct declaration
    pub struct StructDecl {
        /// Attributes on the struct
        pub attributes: Vec<Attribute>,
        /// Visibility
        pub vis: Option<Vis>,
        /// The `struct` keyword
        pub _kw: KStruct,
        /// The struct name
        pub name: Ident,
        /// Generic parameters
        pub generics: Option<Generics>,
        /// The body
        pub kind: StructKind,
    }

    /// The three struct flavors
    pub enum StructKind {
        /// `struct S { a: T }`
        Named {
            /// Where clause, before the body
            where_clause: Option<WhereClause>,
            /// The fields
            fields: BraceGroupContaining<CommaDelimitedVec<NamedField>>,
        },
        /// `struct S(T);`
        Tuple {
            /// The fields
            fields: ParenthesisGroupContaining<CommaDelimitedVec<TupleField>>,
            /// Where clause, after the fields
            where_clause: Option<WhereClause>,
            /// The closing `;`
            _semi: Semicolon,
        },
        /// `struct S;`
        Unit {
            /// Where clause
            where_clause: Option<WhereClause>,
            /// The closing `;`
            _semi: Semicolon,
        },
    }

    /// A named field
    pub struct NamedField {
        /// Attributes on the field
        pub attributes: Vec<Attribute>,
        /// Visibility
        pub vis: Option<Vis>,
        /// Field name
        pub name: Ident,
        /// The `:` token
        pub _colon: Colon,
        /// Field type
        pub ty: TypeTokens,
    }

    /// A positional field
    pub struct TupleField {
        /// Attributes on the field
        pub attributes: Vec<Attribute>,
        /// Visibility
        pub vis: Option<Vis>,
        /// Field type
        pub ty: TypeTokens,
    }

    /// An enum declaration
    pub struct EnumDecl {
        /// Attributes on the enum
        pub attributes: Vec<Attribute>,
        /// Visibility
        pub vis: Option<Vis>,
        /// The `enum` keyword
        pub _kw: KEnum,
        /// The enum name
        pub name: Ident,
        /// Generic parameters
        pub generics: Option<Generics>,
        /// Where clause
        pub where_clause: Option<WhereClause>,
        /// The variants
        pub body: BraceGroupContaining<CommaDelimitedVec<Variant>>,
    }

    /// An enum variant
    pub struct Variant {
        /// Attributes on the variant
        pub attributes: Vec<Attribute>,
        /// Variant name
        pub name: Ident,
        /// Payload
        pub data: VariantData,
        /// Explicit discriminant, `= 3`
        pub discriminant: Option<Cons<Assign, Many<Cons<Except<Comma>, TokenTree>>>>,
    }

    /// The payload of a variant
    pub enum VariantData {
        /// `V { a: T }`
        Struct(BraceGroupContaining<CommaDelimitedVec<NamedField>>),
        /// `V(T)`
        Tuple(ParenthesisGroupContaining<CommaDelimitedVec<TupleField>>),
        /// `V`
        Unit(Nothing),
    }

    /// `where ...` up to the body or the closing `;`
    pub struct WhereClause {
        /// The `where` keyword
        pub _kw: KWhere,
        /// The predicates, kept as raw tokens
        pub predicates: Any<Cons<Except<Either<BraceGroup, Semicolon>>, TokenTree>>,
    }
}

impl WhereClause {
    /// The predicates without a trailing comma.
    pub fn predicates(&self) -> TokenStream {
        let mut tokens: Vec<TokenTree> = self
            .predicates
            .iter()
            .map(|item| item.value.second.clone())
            .collect();
        if matches!(tokens.last(), Some(TokenTree::Punct(p)) if p.as_char() == ',') {
            tokens.pop();
        }
        tokens.into_iter().collect()
    }
}

/// The tokens of a type, up to the next comma that is not nested in angle brackets.
#[derive(Debug, Clone)]
pub struct TypeTokens(pub TokenStream);

impl Parser for TypeTokens {
    fn parser(tokens: &mut TokenIter) -> Result<Self> {
        let mut collected = Vec::new();
        let mut depth = AngleDepth::default();
        while let Some(tt) = tokens.clone().next() {
            if depth.is_top_level() && is_punct(&tt, ',') {
                break;
            }
            depth.track(&tt);
            tokens.next();
            collected.push(tt);
        }
        if collected.is_empty() {
            return Error::unexpected_token(None, tokens);
        }
        Ok(Self(collected.into_iter().collect()))
    }
}

impl ToTokens for TypeTokens {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.0.clone());
    }
}

/// Tracks nesting of `<` and `>`, ignoring the `>` of `->`.
#[derive(Debug, Default)]
pub(crate) struct AngleDepth {
    depth: usize,
    after_dash: bool,
}

impl AngleDepth {
    pub(crate) fn is_top_level(&self) -> bool {
        self.depth == 0
    }

    /// Whether `tt` is the `>` closing the outermost bracket.
    pub(crate) fn closes(&self, tt: &TokenTree) -> bool {
        self.depth == 0 && !self.after_dash && is_punct(tt, '>')
    }

    pub(crate) fn track(&mut self, tt: &TokenTree) {
        let TokenTree::Punct(p) = tt else {
            self.after_dash = false;
            return;
        };
        match p.as_char() {
            '<' => self.depth += 1,
            '>' if !self.after_dash => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        self.after_dash = p.as_char() == '-' && p.spacing() == Spacing::Joint;
    }
}

pub(crate) fn is_punct(tt: &TokenTree, c: char) -> bool {
    matches!(tt, TokenTree::Punct(p) if p.as_char() == c)
}
