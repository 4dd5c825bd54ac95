//! Reversal.

use crate::hlist::{HCons, HNil};

/// Move every element of `Self` onto the front of `Acc`, last element first.
pub trait ReverseInto<Acc> {
    type Out;

    fn reverse_into(self, acc: Acc) -> Self::Out;
}

impl<Acc> ReverseInto<Acc> for HNil {
    type Out = Acc;

    #[inline(always)]
    fn reverse_into(self, acc: Acc) -> Acc {
        acc
    }
}

impl<H, T, Acc> ReverseInto<Acc> for HCons<H, T>
where
    T: ReverseInto<HCons<H, Acc>>,
{
    type Out = T::Out;

    #[inline(always)]
    fn reverse_into(self, acc: Acc) -> Self::Out {
        self.tail.reverse_into(HCons { head: self.head, tail: acc })
    }
}

/// Elements in opposite order (`flip`).
pub trait Reverse {
    type Out;

    fn reverse(self) -> Self::Out;
}

impl Reverse for HNil {
    type Out = HNil;

    #[inline(always)]
    fn reverse(self) -> HNil {
        HNil
    }
}

impl<H, T> Reverse for HCons<H, T>
where
    Self: ReverseInto<HNil>,
{
    type Out = <Self as ReverseInto<HNil>>::Out;

    #[inline(always)]
    fn reverse(self) -> Self::Out {
        self.reverse_into(HNil)
    }
}
