//! Peano natural generation macro.

use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::common::CountInput;

pub fn expand_nat(input: CountInput) -> TokenStream {
    let max = input.count;

    // U0 = Z
    let mut items = vec![quote! {
        #[doc = "The natural number 0."]
        pub type U0 = Z;
        impl ToNat<0> for () { type Out = U0; }
    }];

    // U1..Umax = S<U(n-1)>, each bridged from its const value
    for n in 1..=max {
        let curr = Ident::new(&format!("U{}", n), Span::call_site());
        let prev = Ident::new(&format!("U{}", n - 1), Span::call_site());
        let value = Literal::usize_unsuffixed(n);
        let doc = format!("The natural number {}.", n);
        items.push(quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
            impl ToNat<#value> for () { type Out = #curr; }
        });
    }

    quote! { #(#items)* }
}
