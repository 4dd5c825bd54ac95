//! Left reduction and left fold.
//!
//! `fold(f, init, s)` is `reduce(f, concat(make(init), s))`: both walk the
//! sequence left to right, threading an accumulator. A one-element reduce
//! and an empty fold return their seed without calling `f`.

use crate::functional::{Call, TypeFn};
use crate::hlist::{HCons, HNil};

/// Fold from the seed `Init`: `f(f(f(init, s0), s1), s2)`.
pub trait Fold<F, Init> {
    type Out;

    fn fold_with(self, init: Init, f: &mut F) -> Self::Out;
}

impl<F, Init> Fold<F, Init> for HNil {
    type Out = Init;

    #[inline(always)]
    fn fold_with(self, init: Init, _: &mut F) -> Init {
        init
    }
}

impl<F, Init, H, T> Fold<F, Init> for HCons<H, T>
where
    F: Call<(Init, H)>,
    T: Fold<F, F::Output>,
{
    type Out = T::Out;

    #[inline(always)]
    fn fold_with(self, init: Init, f: &mut F) -> Self::Out {
        let acc = f.call((init, self.head));
        self.tail.fold_with(acc, f)
    }
}

/// Left-associative reduction of a non-empty sequence: `f(f(s0, s1), s2)`.
#[diagnostic::on_unimplemented(
    message = "cannot reduce `{Self}` with `{F}`",
    label = "reduce needs a non-empty sequence and `F: Call<(Acc, Element)>` at every step"
)]
pub trait Reduce<F> {
    type Out;

    fn reduce_with(self, f: &mut F) -> Self::Out;
}

impl<F, H, T: Fold<F, H>> Reduce<F> for HCons<H, T> {
    type Out = T::Out;

    #[inline(always)]
    fn reduce_with(self, f: &mut F) -> Self::Out {
        self.tail.fold_with(self.head, f)
    }
}

// =============================================================================
// Type level
// =============================================================================

/// Type-level fold: `F<F<F<Init, T0>, T1>, T2>`.
pub trait FoldTypes<F, Init> {
    type Out;
}

impl<F, Init> FoldTypes<F, Init> for HNil {
    type Out = Init;
}

impl<F, Init, H, T> FoldTypes<F, Init> for HCons<H, T>
where
    F: TypeFn<(Init, H)>,
    T: FoldTypes<F, <F as TypeFn<(Init, H)>>::Out>,
{
    type Out = <T as FoldTypes<F, <F as TypeFn<(Init, H)>>::Out>>::Out;
}

/// Type-level reduce: `F<F<T0, T1>, T2>`.
pub trait ReduceTypes<F> {
    type Out;
}

impl<F, H, T: FoldTypes<F, H>> ReduceTypes<F> for HCons<H, T> {
    type Out = T::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::MakeTuple;
    use crate::{hlist, HList};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(
        <HList![i32, &'static i32, &'static mut i32] as ReduceTypes<MakeTuple>>::Out,
        ((i32, &'static i32), &'static mut i32)
    );
    assert_type_eq_all!(<HList![u8] as ReduceTypes<MakeTuple>>::Out, u8);
    assert_type_eq_all!(<HNil as FoldTypes<MakeTuple, char>>::Out, char);
    assert_type_eq_all!(<HList![u8] as FoldTypes<MakeTuple, char>>::Out, (char, u8));

    #[test]
    fn single_element_reduce_skips_f() {
        #[derive(Debug, PartialEq)]
        struct Token(u8);

        let mut panic_if_called = |_: Token, _: Token| -> Token { unreachable!() };
        let only = hlist![Token(4)].reduce_with(&mut panic_if_called);
        assert_eq!(only, Token(4));
    }

    #[test]
    fn fold_changes_accumulator_type() {
        struct Describe;
        impl Call<(usize, &str)> for Describe {
            type Output = usize;
            fn call(&mut self, (n, s): (usize, &str)) -> usize {
                n + s.len()
            }
        }
        impl Call<(usize, char)> for Describe {
            type Output = usize;
            fn call(&mut self, (n, _): (usize, char)) -> usize {
                n + 1
            }
        }
        let total = hlist!["abc", 'd', "ef"].fold_with(0usize, &mut Describe);
        assert_eq!(total, 6);
    }
}
