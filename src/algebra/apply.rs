//! Forwarding a sequence positionally into a target.

use crate::functional::{Call, TypeFn};
use crate::tuple::IntoTuple;

/// Call `F` with the elements of `Self` as its arguments, in order.
pub trait ApplyTo<F> {
    type Out;

    fn apply_to(self, f: &mut F) -> Self::Out;
}

impl<L, F> ApplyTo<F> for L
where
    L: IntoTuple,
    F: Call<L::Tuple>,
{
    type Out = F::Output;

    #[inline(always)]
    fn apply_to(self, f: &mut F) -> F::Output {
        f.call(self.into_tuple())
    }
}

/// Instantiate the type function `Target` with the kinds of `L`.
pub type ApplyTypes<Target, L> = <Target as TypeFn<<L as IntoTuple>::Tuple>>::Out;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::{Constant, MakeTuple};
    use crate::hlist::HNil;
    use crate::{hlist, HList};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(ApplyTypes<MakeTuple, HList![u8, char]>, (u8, char));
    assert_type_eq_all!(ApplyTypes<Constant<bool>, HNil>, bool);

    #[test]
    fn forwards_in_order() {
        let mut join = |a: &str, n: usize, c: char| (a.len() + n, c);
        assert_eq!(hlist!["xz", 2usize, 'y'].apply_to(&mut join), (4, 'y'));
        assert_eq!(HNil.apply_to(&mut || 9), 9);
    }
}
