//! The sequence algebra.
//!
//! Every operation is a trait on the inductive form ([`HNil`]/[`HCons`]).
//! The associated `Out` type is the type-level result and the trait method
//! is the value-level one, so the two forms cannot drift apart.
//!
//! | operation | trait | value method |
//! |-----------|-------|--------------|
//! | concat    | [`Concat`], [`Flatten`] | `concat`, `flatten` |
//! | reverse   | [`Reverse`] | `reverse` |
//! | pick      | [`Pick`], [`PickOnce`] | `pick` (by reference, clones), `pick_once` (by move) |
//! | dup       | [`Dup`] | `dup` (by reference, clones) |
//! | skip/take/slice | [`Skip`], [`Take`], [`Slice`] | by move |
//! | map       | [`Map`], [`MapTypes`] | `map_with` |
//! | reduce/fold | [`Reduce`], [`Fold`], [`ReduceTypes`], [`FoldTypes`] | `reduce_with`, `fold_with` |
//! | first/find | [`Search`], [`FirstType`] | `position`, [`first`], [`find`] |
//! | filter    | [`Filter`] | `filter` |
//! | apply     | [`ApplyTo`], [`ApplyTypes`] | `apply_to` |
//!
//! The aliases at the bottom state the same results over tuples.
//!
//! [`HNil`]: crate::hlist::HNil
//! [`HCons`]: crate::hlist::HCons

mod apply;
mod concat;
mod filter;
mod fold;
mod map;
mod pick;
mod reverse;
mod search;
mod split;

pub use apply::{ApplyTo, ApplyTypes};
pub use concat::{Concat, Flatten};
pub use filter::{Filter, FilterTypes, Retain};
pub use fold::{Fold, FoldTypes, Reduce, ReduceTypes};
pub use map::{Map, MapTypes};
pub use pick::{Dup, Full, IntoSlots, MoveAll, MoveOut, Moved, Pick, PickOnce};
pub use reverse::{Reverse, ReverseInto};
pub use search::{all, any, find, first, Equals, FindType, FirstType, Found, FoundAt, NotFound, Search};
pub use split::{Skip, Slice, Take};

use crate::tuple::{IntoTuple, Tuple};

type ListOf<T> = <T as Tuple>::List;

/// `A ++ B` over tuples.
pub type Concatenated<A, B> =
    <<ListOf<A> as Concat<ListOf<B>>>::Out as IntoTuple>::Tuple;

/// `T` in reverse order.
pub type Reversed<T> = <<ListOf<T> as Reverse>::Out as IntoTuple>::Tuple;

/// `T` picked by the index list `Idx`.
pub type Picked<T, Idx> = <<ListOf<T> as Pick<Idx>>::Out as IntoTuple>::Tuple;

/// `T` picked by the index list `Idx`, moving each element.
pub type PickedOnce<T, Idx> = <<ListOf<T> as PickOnce<Idx>>::Out as IntoTuple>::Tuple;

/// `T` repeated `N` times.
pub type Duplicated<T, N> = <<ListOf<T> as Dup<N>>::Out as IntoTuple>::Tuple;

/// `T` without its first `N` elements.
pub type Skipped<T, N> = <<ListOf<T> as Skip<N>>::Out as IntoTuple>::Tuple;

/// The first `N` elements of `T`.
pub type Taken<T, N> = <<ListOf<T> as Take<N>>::Out as IntoTuple>::Tuple;

/// `Len` elements of `T` starting at `Start`.
pub type Sliced<T, Start, Len> = <<ListOf<T> as Slice<Start, Len>>::Out as IntoTuple>::Tuple;

/// Every kind of `T` sent through the type function `F`.
pub type Mapped<T, F> = <<ListOf<T> as MapTypes<F>>::Out as IntoTuple>::Tuple;

/// Left reduction of the kinds of `T` with `F`.
pub type Reduced<T, F> = <ListOf<T> as ReduceTypes<F>>::Out;

/// Left fold of the kinds of `T` with `F` from `Init`.
pub type Folded<T, F, Init> = <ListOf<T> as FoldTypes<F, Init>>::Out;

/// The kinds of `T` that satisfy `P`.
pub type Filtered<T, P> = <<ListOf<T> as Filter<P>>::Out as IntoTuple>::Tuple;

/// Where the first kind of `T` satisfying `P` sits.
pub type FirstOf<T, P> = <ListOf<T> as FirstType<P>>::Out;

/// Where the kind `X` first occurs in `T`.
pub type FindOf<T, X> = FindType<ListOf<T>, X>;
