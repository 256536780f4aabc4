use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Path, parse_macro_input, parse_quote};

// ELIDED FORMATTING
// ================================================================================================

/// Builds an implementation of the given `core::fmt` trait which prints
/// `<elided secret for TypeName>` regardless of the contents of the type.
fn elided_fmt_impl(ast: &DeriveInput, fmt_trait: Path) -> TokenStream2 {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    quote! {
        impl #impl_generics #fmt_trait for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "<elided secret for {}>", stringify!(#name))
            }
        }
    }
}

/// Derives a `Debug` implementation that never prints the fields of the type.
///
/// Used on NTRU secret key material (the polynomials `f`, `g` and the inverses of `f`) so that
/// coefficients cannot end up in logs or panic messages.
///
/// # Example
///
/// ```ignore
/// #[derive(SilentDebug)]
/// pub struct SecretKey {
///     f: Polynomial,
/// }
///
/// assert_eq!(format!("{:?}", sk), "<elided secret for SecretKey>");
/// ```
#[proc_macro_derive(SilentDebug)]
pub fn silent_debug(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    elided_fmt_impl(&ast, parse_quote!(::core::fmt::Debug)).into()
}

/// Derives a `Display` implementation that never prints the fields of the type.
///
/// Lets secret key types be used in generic contexts that require `Display` without exposing
/// any coefficient.
#[proc_macro_derive(SilentDisplay)]
pub fn silent_display(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    elided_fmt_impl(&ast, parse_quote!(::core::fmt::Display)).into()
}
