//! Index lists: compile-time sequences of naturals.
//!
//! An index list is an HList of [`Nat`]s, usually written `idx![..]` or
//! built with [`Range`]. Index lists drive `pick`, and `shift`/`scale`/
//! `range` build them:
//!
//! ```text
//! Iota<U3>              = [0, 1, 2]
//! Shifted<[0, 1, 2], U3> = [3, 4, 5]  = Range<3, 3>
//! Scaled<[0, 1, 2], U2>  = [0, 2, 4]
//! ```

use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::algebra::{ApplyTypes, MapTypes, Pick};
use crate::functional::TypeFn;
use crate::hlist::{HCons, HNil};
use crate::primitives::nat::{AddNat, MulNat, Nat, Num, S, ToNat, Z};
use crate::tuple::Tuple;

/// An HList whose elements are all naturals.
pub trait IndexList {
    /// Number of indices.
    const LEN: usize;

    /// The `i`-th index, or `None` past the end.
    fn nth(i: usize) -> Option<usize>;

    /// The indices in order.
    #[inline]
    fn iter() -> Indices<Self> {
        Indices { pos: 0, _list: PhantomData }
    }
}

impl IndexList for HNil {
    const LEN: usize = 0;

    #[inline]
    fn nth(_: usize) -> Option<usize> {
        None
    }
}

impl<N: Nat, T: IndexList> IndexList for HCons<N, T> {
    const LEN: usize = T::LEN + 1;

    #[inline]
    fn nth(i: usize) -> Option<usize> {
        match i {
            0 => Some(N::VALUE),
            _ => T::nth(i - 1),
        }
    }
}

/// Iterator over the values of an index list.
pub struct Indices<L: ?Sized> {
    pos: usize,
    _list: PhantomData<fn() -> L>,
}

impl<L: IndexList + ?Sized> Iterator for Indices<L> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let item = L::nth(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = L::LEN.saturating_sub(self.pos);
        (left, Some(left))
    }
}

impl<L: IndexList + ?Sized> ExactSizeIterator for Indices<L> {}
impl<L: IndexList + ?Sized> FusedIterator for Indices<L> {}

// =============================================================================
// Transforms
// =============================================================================

/// `x => x + K`.
pub struct Plus<K>(PhantomData<K>);

/// `x => x * K`.
pub struct Times<K>(PhantomData<K>);

impl<K: Nat, N: AddNat<K>> TypeFn<(N,)> for Plus<K> {
    type Out = N::Out;
}

impl<K: Nat, N: MulNat<K>> TypeFn<(N,)> for Times<K> {
    type Out = N::Out;
}

/// Every index of `L` sent through `F`.
pub type MapIndices<F, L> = <L as MapTypes<F>>::Out;

/// `shift(k, L)`.
pub type Shifted<L, K> = MapIndices<Plus<K>, L>;

/// `scale(k, L)`.
pub type Scaled<L, K> = MapIndices<Times<K>, L>;

// =============================================================================
// Ranges
// =============================================================================

/// `Len` consecutive naturals starting at `Self`.
pub trait CountFrom<Len> {
    type Out;
}

impl<Start> CountFrom<Z> for Start {
    type Out = HNil;
}

impl<Start, Len> CountFrom<S<Len>> for Start
where
    S<Start>: CountFrom<Len>,
{
    type Out = HCons<Start, <S<Start> as CountFrom<Len>>::Out>;
}

/// `[0, 1, .., Len - 1]`.
pub type Iota<Len> = <Z as CountFrom<Len>>::Out;

/// `shift(Start, [0, 1, .., Len - 1])`.
pub type IndexRange<Start, Len> = Shifted<Iota<Len>, Start>;

/// [`IndexRange`] from constants.
pub type Range<const START: usize, const LEN: usize> = IndexRange<Num<START>, Num<LEN>>;

/// Instantiate `Target` with the indices of `L` as its type arguments.
pub type ApplyIndices<Target, L> = ApplyTypes<Target, L>;

/// Target for [`ApplyIndices`]: selects from `Seq` at the applied indices.
pub struct PickFrom<Seq>(PhantomData<Seq>);

impl<Seq, Args> TypeFn<Args> for PickFrom<Seq>
where
    Args: Tuple,
    Seq: Pick<Args::List>,
{
    type Out = <Seq as Pick<Args::List>>::Out;
}

/// `Range<START, LEN>` as values, for runtime inspection.
#[inline]
pub fn range<const START: usize, const LEN: usize>() -> Indices<Range<START, LEN>>
where
    (): ToNat<START> + ToNat<LEN>,
    Z: CountFrom<Num<LEN>>,
    Iota<Num<LEN>>: MapTypes<Plus<Num<START>>>,
    Range<START, LEN>: IndexList,
{
    <Range<START, LEN> as IndexList>::iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::nat::{U2, U3, U4, U5};
    use crate::{idx, HList};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Iota<U3>, idx![0, 1, 2]);
    assert_type_eq_all!(Iota<Z>, HNil);
    assert_type_eq_all!(Range<3, 3>, idx![3, 4, 5]);
    assert_type_eq_all!(Range<4, 0>, HNil);
    assert_type_eq_all!(<U2 as CountFrom<U3>>::Out, idx![2, 3, 4]);
    assert_type_eq_all!(Scaled<idx![0, 1, 2], U2>, idx![0, 2, 4]);
    assert_type_eq_all!(
        ApplyIndices<PickFrom<HList![u8, char, bool, i64]>, idx![3, 0]>,
        HList![i64, u8]
    );

    #[test]
    fn list_values() {
        assert_eq!(<idx![5, 1] as IndexList>::LEN, 2);
        assert_eq!(<idx![5, 1] as IndexList>::nth(1), Some(1));
        assert_eq!(<idx![5, 1] as IndexList>::nth(2), None);
        assert!(<HList![U4, U5] as IndexList>::iter().eq([4, 5]));
    }

    #[test]
    fn ranges_iterate() {
        assert!(range::<3, 3>().eq([3, 4, 5]));
        assert_eq!(range::<4, 0>().len(), 0);
    }
}
