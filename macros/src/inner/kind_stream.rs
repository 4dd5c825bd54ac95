//! Name streams for kinds.
//!
//! Every kind name becomes a cyclic 16-nibble FNV-1a stream. Literal names
//! are hashed here; other `&str` expressions are hashed by const fn after
//! `concat!`/`stringify!` have expanded.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Expr;

use crate::common::{fnv1a_64, NameSource, StreamInput};

pub fn expand_make_kind_stream(input: StreamInput) -> TokenStream {
    match input.source {
        NameSource::Literal(name) => literal_stream(&name),
        NameSource::Deferred(expr) => {
            let nibbles = deferred_nibbles(&expr);
            quote! {
                ::tola_seq::primitives::stream::HashStream16<#(#nibbles),*>
            }
        }
    }
}

/// Stream of a name known while the macro runs.
pub fn literal_stream(name: &str) -> TokenStream {
    let nibbles = literal_nibbles(name);
    quote! {
        ::tola_seq::primitives::stream::HashStream16<#(#nibbles),*>
    }
}

fn literal_nibbles(name: &str) -> Vec<u8> {
    let hash = fnv1a_64(name);
    (0..16).map(|i| ((hash >> (i * 4)) & 0xF) as u8).collect()
}

fn deferred_nibbles(expr: &Expr) -> Vec<TokenStream> {
    (0..16u8)
        .map(|i| quote! { { ::tola_seq::primitives::const_utils::hash_nibble(#expr, #i) } })
        .collect()
}
