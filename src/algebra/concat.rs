//! Concatenation.

use crate::hlist::{HCons, HList, HNil};

/// `Self ++ Rhs`, preserving relative order.
pub trait Concat<Rhs> {
    type Out;

    fn concat(self, rhs: Rhs) -> Self::Out;
}

impl<Rhs> Concat<Rhs> for HNil {
    type Out = Rhs;

    #[inline(always)]
    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T: Concat<Rhs>, Rhs> Concat<Rhs> for HCons<H, T> {
    type Out = HCons<H, T::Out>;

    #[inline(always)]
    fn concat(self, rhs: Rhs) -> Self::Out {
        HCons { head: self.head, tail: self.tail.concat(rhs) }
    }
}

/// Concatenate a list of lists. The empty list of lists flattens to `HNil`.
pub trait Flatten {
    type Out: HList;

    fn flatten(self) -> Self::Out;
}

impl Flatten for HNil {
    type Out = HNil;

    #[inline(always)]
    fn flatten(self) -> HNil {
        HNil
    }
}

impl<H, T> Flatten for HCons<H, T>
where
    T: Flatten,
    H: Concat<T::Out>,
    H::Out: HList,
{
    type Out = H::Out;

    #[inline(always)]
    fn flatten(self) -> Self::Out {
        self.head.concat(self.tail.flatten())
    }
}
