//! Procedural macros for the tola-seq sequence algebra
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `nat!(N)` | - | Peano aliases `U0..UN` and the `ToNat` const bridge |
//! | `impl_tuples!(N)` | - | Tuple/HList bridges, tuple and `fn` kinds for arities `0..=N` |
//! | `make_kind_stream!(name)` | - | Name stream of a kind |
//! | `#[derive(Kind)]` | struct/enum | Register a type as a kind |
//!
//! The first three are used by `tola-seq` internally; only `#[derive(Kind)]`
//! is meant to be written by users.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano natural aliases U0..Un and their const bridge.
///
/// # Usage
/// ```ignore
/// nat!(64);  // U0 = Z, U1 = S<U0>, ..., U64 = S<U63>; impl ToNat<k> for ()
/// ```
#[proc_macro]
pub fn nat(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::CountInput);
    inner::nat::expand_nat(input).into()
}

/// Generate the tuple bridges for arities `0..=N`.
///
/// # Usage
/// ```ignore
/// impl_tuples!(16);
/// ```
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::CountInput);
    inner::tuples::expand_impl_tuples(input).into()
}

/// Build the name stream of a kind.
///
/// # Usage
/// ```ignore
/// type Id = Leaf<make_kind_stream!("i32")>;
/// type Id = Node<make_kind_stream!("Option"), HCons<<T as Kind>::Id, HNil>>;
/// type Id = Leaf<make_kind_stream!(concat!(module_path!(), "::Foo"))>;
/// ```
#[proc_macro]
pub fn make_kind_stream(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::StreamInput);
    inner::kind_stream::expand_make_kind_stream(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Register a type as a sequence kind.
///
/// The identity is derived from the type's full path, so two types with the
/// same name in different modules stay distinct.
///
/// ```ignore
/// #[derive(Kind)]
/// struct Meters(f64);
/// ```
#[proc_macro_derive(Kind)]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_kind(input).into()
}
