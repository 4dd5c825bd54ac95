use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericParam};

/// #[derive(Kind)] generates a call to the declarative macro bridge.
/// This allows module_path!() to be expanded before the proc-macro processes it.
///
/// The three-layer architecture:
/// 1. #[derive(Kind)] (proc-macro) -> generates __impl_kind! call
/// 2. __impl_kind! (decl-macro) -> passes concat!() to make_kind_stream!
/// 3. make_kind_stream! (proc-macro) -> receives the expanded string expression
pub fn expand_derive_kind(input: DeriveInput) -> TokenStream2 {
    // Lifetimes do not change identity; type and const parameters would.
    for param in &input.generics.params {
        match param {
            GenericParam::Lifetime(_) => {}
            other => {
                return syn::Error::new_spanned(
                    other,
                    "`#[derive(Kind)]` only supports lifetime parameters; implement `Kind` by hand for generic wrappers",
                )
                .to_compile_error();
            }
        }
    }

    let ident = &input.ident;
    let ident_str = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        ::tola_seq::__impl_kind!([#impl_generics] #ident #ty_generics, [#where_clause], #ident_str);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_type_parameters() {
        let input: DeriveInput = syn::parse_str("struct Wrap<T>(T);").unwrap();
        let out = expand_derive_kind(input).to_string();
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn forwards_lifetimes_to_bridge() {
        let input: DeriveInput = syn::parse_str("struct View<'a>(&'a str);").unwrap();
        let out = expand_derive_kind(input).to_string();
        assert!(out.contains("__impl_kind"));
        assert!(out.contains("\"View\""));
    }
}
