//! The attribute behind `shapediff_testhelpers::test`.

use unsynn::*;

unsynn! {
    /// A function split at its body.
    struct TestFn {
        /// Everything before the body: attributes, qualifiers, `fn`, name and signature.
        signature: Any<Cons<Except<BraceGroup>, TokenTree>>,
        /// The body.
        body: BraceGroup,
        _end: EndOfStream,
    }
}

impl TestFn {
    fn declares_fn(&self) -> bool {
        self.signature
            .iter()
            .any(|item| matches!(&item.value.second, TokenTree::Ident(ident) if *ident == "fn"))
    }
}

fn compile_error(message: impl core::fmt::Display) -> TokenStream {
    let message = format!("#[shapediff_testhelpers::test] {message}");
    quote::quote! { ::core::compile_error!(#message); }
}

fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return compile_error("takes no arguments");
    }

    let mut tokens = item.to_token_iter();
    let test_fn = match tokens.parse::<TestFn>() {
        Ok(test_fn) if test_fn.declares_fn() => test_fn,
        Ok(_) => return compile_error("expects a function"),
        Err(err) => return compile_error(format_args!("expects a function: {err}")),
    };

    let signature = test_fn.signature.to_token_stream();
    let body = test_fn.body.0.stream();
    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #signature {
            ::shapediff_testhelpers::setup();

            #body
        }
    }
}

/// Marks a test whose first statement installs the workspace tracing subscriber, so
/// the differ's `trace!` output shows up in failing tests. `SHAPEDIFF_LOG` filters it.
///
/// ```ignore
/// use shapediff_testhelpers::test;
///
/// #[test]
/// fn reports_field_names() {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    expand(attr.into(), item.into()).into()
}
