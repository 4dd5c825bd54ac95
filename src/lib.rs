#![cfg_attr(not(feature = "std"), no_std)]

//! # tola-seq
//!
//! Compile-time algebra over heterogeneous sequences.
//!
//! A sequence is a tuple (or its inductive form, an HList). Every operation
//! exists at two levels at once: as a **type** computation that only names
//! the resulting sequence, and as a **value** computation that moves,
//! borrows or clones live elements while keeping each one's ownership
//! category (`T`, `&T`, `&mut T`).
//!
//! ```
//! use tola_seq::prelude::*;
//!
//! fn double(x: &mut i32) -> &mut i32 {
//!     *x *= 2;
//!     x
//! }
//!
//! let (mut a, mut b, mut c) = (1, 2, 3);
//! let (ra, _, _) = (&mut a, &mut b, &mut c).map(double);
//! *ra += 1;
//! assert_eq!((a, b, c), (3, 4, 6));
//!
//! assert_eq!((1, 2, 3).find(&3), Some(2));
//! assert!(has_op!(Plus, u8));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, Peano naturals, nibbles, hash streams                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Sequences and combinators                               |
//! |  - HList / Tuple bridge, kinds, TypeFn / Call, index lists        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Algebra and detection                                   |
//! |  - concat .. filter, Detect probes, operator catalog              |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Failures
//!
//! Misuse is a compile error: an index or count past the end of a sequence,
//! `reduce` of an empty sequence, a combinator called with the wrong arity.
//! Detection queries are the exception; they answer `false`.

// Allow `::tola_seq` to work inside the crate itself
extern crate self as tola_seq;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Sequences, kinds and combinators
// =============================================================================
pub mod hlist;
pub mod tuple;
pub mod kind;
pub mod functional;
pub mod indices;

// Sequence literals and internal arity iteration
pub mod syntax_macros;

// =============================================================================
// Layer 2: Algebra and detection
// =============================================================================
pub mod algebra;
pub mod detect;
pub mod ops;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use hlist::{HCons, HList, HNil};
pub use kind::Kind;
pub use tuple::{Tuple, TupleExt};

// Re-export proc-macros
pub use macros::Kind;

#[doc(hidden)]
pub use macros::make_kind_stream as __make_kind_stream;

// =============================================================================
// Declarative Macro Bridge for #[derive(Kind)]
// =============================================================================
//
// 1. #[derive(Kind)] (proc-macro) generates an __impl_kind! call
// 2. __impl_kind! (this decl-macro) expands concat!(module_path!(), ...)
// 3. make_kind_stream! (proc-macro) hashes the resulting path

/// Internal macro bridge. Use `#[derive(Kind)]` instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_kind {
    ([$($g:tt)*] $ty:ty, [$($w:tt)*], $name:expr) => {
        impl $($g)* $crate::kind::Kind for $ty $($w)* {
            type Id = $crate::kind::Leaf<$crate::__make_kind_stream!(concat!(module_path!(), "::", $name))>;
            type Category = $crate::kind::Owned;
        }
    };
}

/// Common items for working with sequences.
pub mod prelude {
    pub use crate::algebra::{
        Concat, Dup, Filter, Fold, Map, Pick, PickOnce, Reduce, Reverse, Search, Skip, Slice,
        Take,
    };
    pub use crate::functional::{
        bind, constant, identity, partial, Call, Complement, Contradiction, Identity, Predicate,
        Tautology, TypeFn,
    };
    pub use crate::hlist::{HCons, HNil};
    pub use crate::kind::{IsExclusive, IsOwned, IsShared, Kind, SameAs};
    pub use crate::ops::*;
    pub use crate::tuple::{AsMuts, AsRefs, IntoTuple, Tuple, TupleExt};
    pub use crate::{
        has_op, has_op_convertible, has_op_exact, has_op_nothrow, has_op_nothrow_convertible,
        hlist, idx, is_detected, tuple_cat, HList,
    };
}
