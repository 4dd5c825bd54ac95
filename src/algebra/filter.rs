//! Filtering by a type-level predicate over element kinds.
//!
//! The decision for each element is made from its kind alone, so the same
//! filter drives both the result type and the value-level move.

use crate::functional::TypeFn;
use crate::hlist::{HCons, HList, HNil};
use crate::primitives::{False, True};

/// Keep, in order, the elements whose kind satisfies `P`.
pub trait Filter<P> {
    type Out: HList;

    fn filter(self) -> Self::Out;
}

/// Keep-or-drop step, selected by the predicate's answer.
pub trait Retain<H, Rest: HList> {
    type Out: HList;

    fn retain(head: H, rest: Rest) -> Self::Out;
}

impl<H, Rest: HList> Retain<H, Rest> for True {
    type Out = HCons<H, Rest>;

    #[inline(always)]
    fn retain(head: H, rest: Rest) -> Self::Out {
        HCons { head, tail: rest }
    }
}

impl<H, Rest: HList> Retain<H, Rest> for False {
    type Out = Rest;

    #[inline(always)]
    fn retain(_: H, rest: Rest) -> Rest {
        rest
    }
}

impl<P> Filter<P> for HNil {
    type Out = HNil;

    #[inline(always)]
    fn filter(self) -> HNil {
        HNil
    }
}

impl<P, H, T> Filter<P> for HCons<H, T>
where
    P: TypeFn<(H,)>,
    T: Filter<P>,
    <P as TypeFn<(H,)>>::Out: Retain<H, T::Out>,
{
    type Out = <<P as TypeFn<(H,)>>::Out as Retain<H, T::Out>>::Out;

    #[inline(always)]
    fn filter(self) -> Self::Out {
        <<P as TypeFn<(H,)>>::Out as Retain<H, T::Out>>::retain(self.head, self.tail.filter())
    }
}

/// Type-level filter.
pub type FilterTypes<L, P> = <L as Filter<P>>::Out;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::{Complement, Contradiction};
    use crate::kind::{IsShared, SameAs};
    use crate::{hlist, HList};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(
        FilterTypes<HList![u8, &'static str, u8, char], SameAs<u8>>,
        HList![u8, u8]
    );
    assert_type_eq_all!(FilterTypes<HList![u8, char], Contradiction>, HNil);
    assert_type_eq_all!(FilterTypes<HNil, SameAs<u8>>, HNil);

    #[test]
    fn filter_moves_kept_aliases() {
        let mut owned = 5u32;
        let label = "kept";
        let list = hlist![label, &mut owned, 'c'];
        let shared = Filter::<IsShared>::filter(list);
        assert_eq!(shared, hlist!["kept"]);

        let rest = Filter::<Complement<IsShared>>::filter(hlist![label, &mut owned, 'c']);
        *rest.head += 1;
        assert_eq!(rest.tail.head, 'c');
        assert_eq!(owned, 6);
    }
}
