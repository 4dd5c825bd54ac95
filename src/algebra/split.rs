//! Dropping from the front (`skip`), keeping the front (`take`) and
//! sub-ranges (`slice`).
//!
//! These move elements out of the input, so every ownership category
//! survives, exclusive aliases included. A count past the end has no impl
//! and is rejected at compile time.

use crate::hlist::{HCons, HList, HNil};
use crate::primitives::nat::{S, Z};

/// Drop the first `N` elements.
#[diagnostic::on_unimplemented(
    message = "cannot skip `{N}` elements of `{Self}`",
    label = "the sequence is shorter than the skip count"
)]
pub trait Skip<N> {
    type Out: HList;

    fn skip(self) -> Self::Out;
}

impl<L: HList> Skip<Z> for L {
    type Out = L;

    #[inline(always)]
    fn skip(self) -> L {
        self
    }
}

impl<H, T: Skip<N>, N> Skip<S<N>> for HCons<H, T> {
    type Out = T::Out;

    #[inline(always)]
    fn skip(self) -> T::Out {
        self.tail.skip()
    }
}

/// Keep only the first `N` elements.
#[diagnostic::on_unimplemented(
    message = "cannot take `{N}` elements of `{Self}`",
    label = "the sequence is shorter than the take count"
)]
pub trait Take<N> {
    type Out: HList;

    fn take(self) -> Self::Out;
}

impl<L: HList> Take<Z> for L {
    type Out = HNil;

    #[inline(always)]
    fn take(self) -> HNil {
        HNil
    }
}

impl<H, T: Take<N>, N> Take<S<N>> for HCons<H, T> {
    type Out = HCons<H, T::Out>;

    #[inline(always)]
    fn take(self) -> Self::Out {
        HCons { head: self.head, tail: self.tail.take() }
    }
}

/// `Len` elements starting at `Start`: `take(Len, skip(Start, self))`.
///
/// A zero-length slice is empty whatever `Start` is.
pub trait Slice<Start, Len> {
    type Out: HList;

    fn slice(self) -> Self::Out;
}

impl<L: HList, Start> Slice<Start, Z> for L {
    type Out = HNil;

    #[inline(always)]
    fn slice(self) -> HNil {
        HNil
    }
}

impl<L, Start, Len> Slice<Start, S<Len>> for L
where
    L: HList + Skip<Start>,
    <L as Skip<Start>>::Out: Take<S<Len>>,
{
    type Out = <<L as Skip<Start>>::Out as Take<S<Len>>>::Out;

    #[inline(always)]
    fn slice(self) -> Self::Out {
        Take::<S<Len>>::take(Skip::<Start>::skip(self))
    }
}
