//! Tuples as sequences.
//!
//! Tuples of arity `0..=16` convert to and from the inductive form, and
//! [`TupleExt`] puts the whole algebra on them as methods:
//!
//! ```
//! use tola_seq::prelude::*;
//!
//! let seq = (1, 2, 3);
//! assert_eq!(seq.skip::<1>(), (2, 3));
//! assert_eq!(seq.slice::<1, 1>(), (2,));
//! assert_eq!(seq.reduce(|a: i32, b: i32| a - b), -4);
//! assert_eq!(seq.find(&3), Some(2));
//! ```

use crate::algebra::{
    ApplyTo, Concat, Concatenated, Dup, Equals, Filter, Filtered, Fold, Map, Pick, PickOnce,
    PickedOnce, Reduce, Reverse, Reversed, Search, Skip, Skipped, Slice, Sliced, Take, Taken,
};
use crate::hlist::{Cloned, HList};
use crate::primitives::nat::{Num, ToNat};

/// A tuple with an inductive counterpart.
pub trait Tuple: Sized {
    /// The same elements as an HList.
    type List: HList + IntoTuple<Tuple = Self>;

    const ARITY: usize;

    fn into_hlist(self) -> Self::List;
}

/// An HList with a tuple counterpart.
pub trait IntoTuple: Sized {
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;
}

/// `&(A, B)` as the sequence `HCons<&A, HCons<&B, HNil>>`.
pub trait AsRefs<'a> {
    type Refs: HList;

    fn as_refs(&'a self) -> Self::Refs;
}

/// `&mut (A, B)` as the sequence `HCons<&mut A, HCons<&mut B, HNil>>`.
pub trait AsMuts<'a> {
    type Muts: HList;

    fn as_muts(&'a mut self) -> Self::Muts;
}

macros::impl_tuples!(16);

/// The sequence algebra as tuple methods.
///
/// Counts and positions are const generics; index lists are `idx![..]` types.
pub trait TupleExt: Tuple {
    /// `self ++ rhs`.
    #[inline(always)]
    fn concat<Rhs: Tuple>(self, rhs: Rhs) -> Concatenated<Self, Rhs>
    where
        Self::List: Concat<Rhs::List>,
        <Self::List as Concat<Rhs::List>>::Out: IntoTuple,
    {
        self.into_hlist().concat(rhs.into_hlist()).into_tuple()
    }

    #[inline(always)]
    fn reverse(self) -> Reversed<Self>
    where
        Self::List: Reverse,
        <Self::List as Reverse>::Out: IntoTuple,
    {
        self.into_hlist().reverse().into_tuple()
    }

    /// Elements at the positions listed in `Idx`, cloned.
    ///
    /// Only the picked elements need to be `Clone`; indices may repeat.
    #[inline(always)]
    fn pick<'a, Idx>(&'a self) -> <<<Self::Refs as Pick<Idx>>::Out as Cloned>::Out as IntoTuple>::Tuple
    where
        Self: AsRefs<'a>,
        Self::Refs: Pick<Idx>,
        <Self::Refs as Pick<Idx>>::Out: Cloned,
        <<Self::Refs as Pick<Idx>>::Out as Cloned>::Out: IntoTuple,
    {
        Pick::<Idx>::pick(&self.as_refs()).cloned().into_tuple()
    }

    /// Elements at the positions listed in `Idx`, moved out of `self`.
    ///
    /// Keeps `&mut` elements and values that are not `Clone`; indices must
    /// not repeat.
    #[inline(always)]
    fn pick_once<Idx>(self) -> PickedOnce<Self, Idx>
    where
        Self::List: PickOnce<Idx>,
        <Self::List as PickOnce<Idx>>::Out: IntoTuple,
    {
        PickOnce::<Idx>::pick_once(self.into_hlist()).into_tuple()
    }

    /// `self` repeated `N` times.
    #[inline(always)]
    fn dup<'a, const N: usize>(&'a self) -> <<<Self::Refs as Dup<Num<N>>>::Out as Cloned>::Out as IntoTuple>::Tuple
    where
        (): ToNat<N>,
        Self: AsRefs<'a>,
        Self::Refs: Dup<Num<N>>,
        <Self::Refs as Dup<Num<N>>>::Out: Cloned,
        <<Self::Refs as Dup<Num<N>>>::Out as Cloned>::Out: IntoTuple,
    {
        Dup::<Num<N>>::dup(&self.as_refs()).cloned().into_tuple()
    }

    #[inline(always)]
    fn skip<const N: usize>(self) -> Skipped<Self, Num<N>>
    where
        (): ToNat<N>,
        Self::List: Skip<Num<N>>,
        <Self::List as Skip<Num<N>>>::Out: IntoTuple,
    {
        Skip::<Num<N>>::skip(self.into_hlist()).into_tuple()
    }

    #[inline(always)]
    fn take<const N: usize>(self) -> Taken<Self, Num<N>>
    where
        (): ToNat<N>,
        Self::List: Take<Num<N>>,
        <Self::List as Take<Num<N>>>::Out: IntoTuple,
    {
        Take::<Num<N>>::take(self.into_hlist()).into_tuple()
    }

    #[inline(always)]
    fn slice<const START: usize, const LEN: usize>(self) -> Sliced<Self, Num<START>, Num<LEN>>
    where
        (): ToNat<START> + ToNat<LEN>,
        Self::List: Slice<Num<START>, Num<LEN>>,
        <Self::List as Slice<Num<START>, Num<LEN>>>::Out: IntoTuple,
    {
        Slice::<Num<START>, Num<LEN>>::slice(self.into_hlist()).into_tuple()
    }

    /// Send every element through `f`, which may be a closure (for a
    /// single element kind) or any type implementing `Call` per kind.
    #[inline(always)]
    fn map<F>(self, mut f: F) -> <<Self::List as Map<F>>::Out as IntoTuple>::Tuple
    where
        Self::List: Map<F>,
        <Self::List as Map<F>>::Out: IntoTuple,
    {
        self.into_hlist().map_with(&mut f).into_tuple()
    }

    #[inline(always)]
    fn reduce<F>(self, mut f: F) -> <Self::List as Reduce<F>>::Out
    where
        Self::List: Reduce<F>,
    {
        self.into_hlist().reduce_with(&mut f)
    }

    #[inline(always)]
    fn fold<Init, F>(self, init: Init, mut f: F) -> <Self::List as Fold<F, Init>>::Out
    where
        Self::List: Fold<F, Init>,
    {
        self.into_hlist().fold_with(init, &mut f)
    }

    /// Index of the first element satisfying `pred`.
    #[inline(always)]
    fn first<'a, P>(&'a self, mut pred: P) -> Option<usize>
    where
        Self: AsRefs<'a>,
        Self::Refs: Search<P>,
    {
        self.as_refs().position(&mut pred)
    }

    /// Index of the first element equal to `value`.
    #[inline(always)]
    fn find<'a, 'v, V: ?Sized>(&'a self, value: &'v V) -> Option<usize>
    where
        Self: AsRefs<'a>,
        Self::Refs: Search<Equals<'v, V>>,
    {
        self.as_refs().position(&mut Equals(value))
    }

    #[inline(always)]
    fn any<'a, P>(&'a self, mut pred: P) -> bool
    where
        Self: AsRefs<'a>,
        Self::Refs: Search<P>,
    {
        self.as_refs().any_match(&mut pred)
    }

    #[inline(always)]
    fn all<'a, P>(&'a self, mut pred: P) -> bool
    where
        Self: AsRefs<'a>,
        Self::Refs: Search<P>,
    {
        self.as_refs().all_match(&mut pred)
    }

    /// Keep the elements whose kind satisfies the type-level predicate `P`.
    #[inline(always)]
    fn filter<P>(self) -> Filtered<Self, P>
    where
        Self::List: Filter<P>,
        <Self::List as Filter<P>>::Out: IntoTuple,
    {
        Filter::<P>::filter(self.into_hlist()).into_tuple()
    }

    /// Call `f` with the elements as positional arguments.
    #[inline(always)]
    fn apply<F>(self, mut f: F) -> <Self::List as ApplyTo<F>>::Out
    where
        Self::List: ApplyTo<F>,
    {
        self.into_hlist().apply_to(&mut f)
    }
}

impl<T: Tuple> TupleExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Picked;
    use crate::hlist::HNil;
    use crate::primitives::nat::U2;
    use crate::{hlist, idx};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<(u8, char) as Tuple>::List, crate::HList![u8, char]);
    assert_type_eq_all!(<HNil as IntoTuple>::Tuple, ());
    assert_type_eq_all!(Picked<(u8, char), idx![1, 0, 1]>, (char, u8, char));
    assert_type_eq_all!(Skipped<(u8, char, bool), U2>, (bool,));

    #[test]
    fn round_trip_preserves_order() {
        let list = (1u8, 'a', "b").into_hlist();
        assert_eq!(list, hlist![1u8, 'a', "b"]);
        assert_eq!(list.into_tuple(), (1u8, 'a', "b"));
        assert_eq!(<(u8, u8, u8, u8) as Tuple>::ARITY, 4);
    }

    #[test]
    fn views_alias_each_field() {
        let mut pair = (1u32, ['x'; 2]);
        let refs = pair.as_refs();
        assert!(core::ptr::eq(refs.head, &pair.0));
        let muts = pair.as_muts();
        *muts.head += 1;
        muts.tail.head[1] = 'y';
        assert_eq!(pair, (2, ['x', 'y']));
    }

    #[test]
    fn facade_matches_list_operations() {
        assert_eq!((1, 'a').concat(("b",)), (1, 'a', "b"));
        assert_eq!((1, 'a', "b").reverse(), ("b", 'a', 1));
        assert_eq!(().reverse(), ());
        assert_eq!((1, 2, 3).take::<0>(), ());
        assert_eq!((1, 2).dup::<2>(), (1, 2, 1, 2));
        assert_eq!((1, 'x').pick::<idx![1, 1]>(), ('x', 'x'));
        assert_eq!((1, 'x').pick_once::<idx![1, 0]>(), ('x', 1));
        assert_eq!((4, 5).apply(|a: i32, b: i32| a * b), 20);
        assert_eq!(().fold(7, |_: i32, _: i32| 0), 7);
    }
}
