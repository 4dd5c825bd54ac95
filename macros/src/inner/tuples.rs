//! Tuple <-> HList bridge generation.
//!
//! For every arity `0..=N` this emits:
//! - `Tuple` for `(T0, .., Tn)` and `IntoTuple` for the matching HList
//! - `AsRefs` / `AsMuts` borrowed views
//! - `Call` for every `FnMut` of that arity
//! - `Kind` for the tuple and for `fn` pointers taking that many arguments

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::{Ident, Index};

use crate::common::CountInput;
use crate::inner::kind_stream::literal_stream;

pub fn expand_impl_tuples(input: CountInput) -> TokenStream {
    let impls = (0..=input.count).map(expand_arity);
    quote! { #(#impls)* }
}

fn expand_arity(n: usize) -> TokenStream {
    let tys: Vec<Ident> = (0..n).map(|i| format_ident!("T{}", i)).collect();
    let vars: Vec<Ident> = (0..n).map(|i| format_ident!("t{}", i)).collect();
    let fields: Vec<Index> = (0..n).map(Index::from).collect();
    let arity = Literal::usize_unsuffixed(n);

    let generics = if n == 0 { quote! {} } else { quote! { <#(#tys),*> } };
    let ref_bounds = if n == 0 { quote! {} } else { quote! { where #(#tys: 'a),* } };

    let list_ty = nest(&tys, |t| quote! { #t });
    let refs_ty = nest(&tys, |t| quote! { &'a #t });
    let muts_ty = nest(&tys, |t| quote! { &'a mut #t });
    let build = nest_expr(vars.iter().map(|v| quote! { #v }).collect());
    let pattern = nest_expr(vars.iter().map(|v| quote! { #v }).collect());
    let refs = nest_expr(fields.iter().map(|f| quote! { &self.#f }).collect());
    let muts = nest_expr(fields.iter().map(|f| quote! { &mut self.#f }).collect());

    let kind_generics = if n == 0 {
        quote! {}
    } else {
        quote! { <#(#tys: ::tola_seq::kind::Kind),*> }
    };
    let ids_ty = nest(&tys, |t| quote! { <#t as ::tola_seq::kind::Kind>::Id });
    let tuple_name = literal_stream("()");
    let fn_name = literal_stream("fn");

    quote! {
        impl #generics ::tola_seq::tuple::Tuple for (#(#tys,)*) {
            type List = #list_ty;
            const ARITY: usize = #arity;

            #[inline(always)]
            fn into_hlist(self) -> Self::List {
                let (#(#vars,)*) = self;
                #build
            }
        }

        impl #generics ::tola_seq::tuple::IntoTuple for #list_ty {
            type Tuple = (#(#tys,)*);

            #[inline(always)]
            fn into_tuple(self) -> Self::Tuple {
                let #pattern = self;
                (#(#vars,)*)
            }
        }

        impl<'a, #(#tys),*> ::tola_seq::tuple::AsRefs<'a> for (#(#tys,)*)
        #ref_bounds
        {
            type Refs = #refs_ty;

            #[inline(always)]
            fn as_refs(&'a self) -> Self::Refs {
                #refs
            }
        }

        impl<'a, #(#tys),*> ::tola_seq::tuple::AsMuts<'a> for (#(#tys,)*)
        #ref_bounds
        {
            type Muts = #muts_ty;

            #[inline(always)]
            fn as_muts(&'a mut self) -> Self::Muts {
                #muts
            }
        }

        impl<__F, __R, #(#tys),*> ::tola_seq::functional::Call<(#(#tys,)*)> for __F
        where
            __F: FnMut(#(#tys),*) -> __R,
        {
            type Output = __R;

            #[inline(always)]
            fn call(&mut self, (#(#vars,)*): (#(#tys,)*)) -> __R {
                self(#(#vars),*)
            }
        }

        impl #kind_generics ::tola_seq::kind::Kind for (#(#tys,)*) {
            type Id = ::tola_seq::kind::Node<#tuple_name, #ids_ty>;
            type Category = ::tola_seq::kind::Owned;
        }

        impl<__R: ::tola_seq::kind::Kind, #(#tys: ::tola_seq::kind::Kind),*> ::tola_seq::kind::Kind
            for fn(#(#tys),*) -> __R
        {
            type Id = ::tola_seq::kind::Node<
                #fn_name,
                ::tola_seq::hlist::HCons<<__R as ::tola_seq::kind::Kind>::Id, #ids_ty>,
            >;
            type Category = ::tola_seq::kind::Owned;
        }
    }
}

/// `HCons<E0, HCons<E1, .. HNil>>` in type position.
fn nest(tys: &[Ident], elem: impl Fn(&Ident) -> TokenStream) -> TokenStream {
    tys.iter().rev().fold(quote! { ::tola_seq::hlist::HNil }, |acc, t| {
        let head = elem(t);
        quote! { ::tola_seq::hlist::HCons<#head, #acc> }
    })
}

/// `HCons { head: e0, tail: HCons { .. HNil } }`, usable as expression or pattern.
fn nest_expr(elems: Vec<TokenStream>) -> TokenStream {
    elems.into_iter().rev().fold(quote! { ::tola_seq::hlist::HNil }, |acc, e| {
        quote! { ::tola_seq::hlist::HCons { head: #e, tail: #acc } }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_arity_has_no_generics() {
        let out = expand_arity(0).to_string();
        assert!(out.contains("Tuple for ()"));
        assert!(out.contains("const ARITY : usize = 0"));
    }

    #[test]
    fn pair_nests_two_cells() {
        let out = expand_arity(2).to_string();
        assert!(out.contains("HCons < T0 , :: tola_seq :: hlist :: HCons < T1"));
        assert!(out.contains("& mut self . 1"));
    }

    #[test]
    fn kinds_cover_tuples_and_fn_pointers() {
        let out = expand_arity(1).to_string();
        assert!(out.contains("Kind for (T0 ,)"));
        assert!(out.contains("for fn (T0) -> __R"));
    }
}
