#![doc = include_str!("../README.md")]

/// Derives `Introspect` for a struct or an enum.
///
/// Structs become records and enums become unions. Field and variant attributes:
/// `#[introspect(skip)]` and `#[introspect(rename = "name")]`. On the type itself,
/// `#[introspect(crate = path)]` changes where the generated code looks for `shapediff`.
#[proc_macro_derive(Introspect, attributes(introspect))]
pub fn introspect(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    shapediff_macros_impl::derive_introspect(input.into()).into()
}
