//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    Expr, ExprLit, Lit, LitInt, Token,
};

// =============================================================================
// Count Parsing: `64`
// =============================================================================

/// A single upper bound, as in `nat!(64)` or `impl_tuples!(16)`.
pub struct CountInput {
    pub count: usize,
}

impl Parse for CountInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let count = lit.base10_parse::<usize>()?;
        Ok(CountInput { count })
    }
}

// =============================================================================
// Stream Source Parsing: `"name"` or a `&str` expression
// =============================================================================

/// Where the identity of a kind comes from.
pub enum NameSource {
    /// A literal known while the macro runs: hashed right away.
    Literal(String),
    /// Any other `&str` expression (`concat!(..)`, `stringify!(..)`): hashed by const fn.
    Deferred(Expr),
}

/// Input for `make_kind_stream!(name)`.
pub struct StreamInput {
    pub source: NameSource,
}

impl Parse for StreamInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let expr: Expr = input.parse()?;
        let source = match expr {
            Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => NameSource::Literal(s.value()),
            other => NameSource::Deferred(other),
        };
        let _: Option<Token![,]> = input.parse()?;
        Ok(StreamInput { source })
    }
}

/// FNV-1a 64-bit, identical to `tola_seq::primitives::const_utils::fnv1a_64_str`.
pub fn fnv1a_64(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv_matches_reference_vectors() {
        assert_eq!(fnv1a_64(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a_64("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn stream_input_sorts_sources() {
        let parsed: StreamInput = syn::parse_str("\"&mut\"").unwrap();
        assert!(matches!(parsed.source, NameSource::Literal(ref s) if s == "&mut"));

        let parsed: StreamInput = syn::parse_str("stringify!(i32)").unwrap();
        assert!(matches!(parsed.source, NameSource::Deferred(_)));
    }
}
