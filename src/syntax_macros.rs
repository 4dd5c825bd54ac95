//! Sequence literal macros
//!
//! `hlist!` / `HList!` build lists, `idx!` builds index lists, and
//! `tuple_cat!` / `TupleCat!` concatenate any number of tuples.

// =============================================================================
// HList literals
// =============================================================================

/// Build an HList value.
///
/// ```
/// use tola_seq::hlist;
///
/// let list = hlist![1u8, "two", 3.0f32];
/// assert_eq!(list.tail.head, "two");
/// ```
#[macro_export]
macro_rules! hlist {
    () => { $crate::hlist::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::hlist::HCons { head: $head, tail: $crate::hlist![$($tail),*] }
    };
}

/// Build an HList type.
#[macro_export]
macro_rules! HList {
    () => { $crate::hlist::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::hlist::HCons<$head, $crate::HList![$($tail),*]>
    };
}

/// Build an index list type from constants.
///
/// ```
/// use tola_seq::{idx, indices::IndexList};
///
/// type Picks = idx![1, 1, 0];
/// assert_eq!(<Picks as IndexList>::LEN, 3);
/// assert_eq!(<Picks as IndexList>::nth(0), Some(1));
/// ```
#[macro_export]
macro_rules! idx {
    () => { $crate::hlist::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::hlist::HCons<$crate::primitives::nat::Num<{ $head }>, $crate::idx![$($tail),*]>
    };
}

// =============================================================================
// Tuple concatenation
// =============================================================================

/// Concatenate tuple values, left to right.
///
/// ```
/// use tola_seq::tuple_cat;
///
/// let joined = tuple_cat!((1, 'a'), (), ("b",));
/// assert_eq!(joined, (1, 'a', "b"));
/// assert_eq!(tuple_cat!(), ());
/// ```
#[macro_export]
macro_rules! tuple_cat {
    () => { () };
    ($only:expr $(,)?) => { $only };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::tuple::TupleExt::concat($first, $crate::tuple_cat!($($rest),+))
    };
}

/// Type of concatenating tuple types, left to right.
#[macro_export]
macro_rules! TupleCat {
    () => { () };
    ($only:ty $(,)?) => { $only };
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $crate::algebra::Concatenated<$first, $crate::TupleCat!($($rest),+)>
    };
}

// =============================================================================
// Arity iteration (internal)
// =============================================================================

/// Invoke `$mac!` once per arity 0..=16 with `(A_i, F_i)` ident pairs.
///
/// Matches the arities `impl_tuples!(16)` generates `Tuple` and `Call` for.
///
/// `A_i` names the i-th argument, `F_i` the i-th per-argument function.
macro_rules! for_each_arity {
    ($mac:ident) => {
        $crate::syntax_macros::for_each_arity!(@step $mac, [], [
            (A0, F0), (A1, F1), (A2, F2), (A3, F3), (A4, F4), (A5, F5),
            (A6, F6), (A7, F7), (A8, F8), (A9, F9), (A10, F10), (A11, F11),
            (A12, F12), (A13, F13), (A14, F14), (A15, F15)
        ]);
    };
    (@step $mac:ident, [$($done:tt)*], []) => {
        $mac!($($done)*);
    };
    (@step $mac:ident, [$($done:tt)*], [($a:ident, $f:ident) $(, $rest:tt)*]) => {
        $mac!($($done)*);
        $crate::syntax_macros::for_each_arity!(@step $mac, [$($done)* ($a, $f)], [$($rest),*]);
    };
}

pub(crate) use for_each_arity;
