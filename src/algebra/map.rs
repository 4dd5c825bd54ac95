//! Per-element transform.

use crate::functional::{Call, TypeFn};
use crate::hlist::{HCons, HList, HNil};

/// Apply `F` to every element, left to right, keeping positions.
///
/// `F` receives each element with its original ownership category and
/// decides the category of what it returns. Returning the `&mut T` it was
/// given is how in-place mutation is written.
pub trait Map<F> {
    type Out: HList;

    fn map_with(self, f: &mut F) -> Self::Out;
}

impl<F> Map<F> for HNil {
    type Out = HNil;

    #[inline(always)]
    fn map_with(self, _: &mut F) -> HNil {
        HNil
    }
}

impl<F, H, T> Map<F> for HCons<H, T>
where
    F: Call<(H,)>,
    T: Map<F>,
{
    type Out = HCons<F::Output, T::Out>;

    #[inline(always)]
    fn map_with(self, f: &mut F) -> Self::Out {
        let head = f.call((self.head,));
        HCons { head, tail: self.tail.map_with(f) }
    }
}

/// Type-level map through a type function.
pub trait MapTypes<F> {
    type Out: HList;
}

impl<F> MapTypes<F> for HNil {
    type Out = HNil;
}

impl<F, H, T> MapTypes<F> for HCons<H, T>
where
    F: TypeFn<(H,)>,
    T: MapTypes<F>,
{
    type Out = HCons<<F as TypeFn<(H,)>>::Out, T::Out>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::{Constant, Identity};
    use crate::{hlist, HList};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<HList![u8, &'static str] as MapTypes<Identity>>::Out, HList![u8, &'static str]);
    assert_type_eq_all!(<HList![u8, char] as MapTypes<Constant<bool>>>::Out, HList![bool, bool]);

    #[test]
    fn calls_run_left_to_right() {
        let mut seen = [0u8; 3];
        let mut at = 0;
        let mut record = |x: u8| {
            seen[at] = x;
            at += 1;
            x
        };
        let _ = hlist![7u8, 8u8, 9u8].map_with(&mut record);
        assert_eq!(seen, [7, 8, 9]);
    }

    #[test]
    fn empty_never_calls() {
        let mut calls = 0;
        let mut count = |x: i32| {
            calls += 1;
            x
        };
        assert_eq!(HNil.map_with(&mut count), HNil);
        assert_eq!(calls, 0);
    }
}
