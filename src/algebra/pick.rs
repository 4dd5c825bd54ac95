//! Selection by index list, and self-duplication.
//!
//! [`Pick`] reads elements through `&self` and clones what it selects. For
//! shared aliases (`&T`) the clone is the same alias, so picking an index
//! twice yields two references to one storage location. Exclusive aliases
//! (`&mut T`) cannot be duplicated and are rejected at compile time.
//!
//! [`PickOnce`] consumes the sequence and moves the selected elements out,
//! so exclusive aliases and non-`Clone` values survive. Its index list must
//! not repeat an index.

use super::concat::Concat;
use crate::hlist::{Get, HCons, HList, HNil};
use crate::primitives::nat::{S, Z};

/// New sequence whose i-th element is `self[Idx_i]`.
///
/// Indices may repeat or be omitted; an empty index list yields `HNil`.
pub trait Pick<Idx> {
    type Out: HList;

    fn pick(&self) -> Self::Out;
}

impl<L: HList> Pick<HNil> for L {
    type Out = HNil;

    #[inline(always)]
    fn pick(&self) -> HNil {
        HNil
    }
}

impl<L, I, Rest> Pick<HCons<I, Rest>> for L
where
    L: HList + Get<I> + Pick<Rest>,
    <L as Get<I>>::Out: Clone,
{
    type Out = HCons<<L as Get<I>>::Out, <L as Pick<Rest>>::Out>;

    #[inline(always)]
    fn pick(&self) -> Self::Out {
        HCons {
            head: <L as Get<I>>::get_ref(self).clone(),
            tail: <L as Pick<Rest>>::pick(self),
        }
    }
}

// =============================================================================
// Pick by move
// =============================================================================

/// An element still in its slot.
pub struct Full<T>(T);

/// A slot whose element has been moved out.
pub struct Moved;

/// Every element of the list wrapped in a [`Full`] slot.
pub trait IntoSlots {
    type Out;

    fn into_slots(self) -> Self::Out;
}

impl IntoSlots for HNil {
    type Out = HNil;

    #[inline(always)]
    fn into_slots(self) -> HNil {
        HNil
    }
}

impl<H, T: IntoSlots> IntoSlots for HCons<H, T> {
    type Out = HCons<Full<H>, T::Out>;

    #[inline(always)]
    fn into_slots(self) -> Self::Out {
        HCons { head: Full(self.head), tail: self.tail.into_slots() }
    }
}

/// Move the element at `N` out, leaving [`Moved`] in its slot.
#[diagnostic::on_unimplemented(
    message = "cannot move element `{N}` out of `{Self}`",
    label = "index out of range, or already picked",
    note = "`pick_once` needs distinct indices; `pick` clones and may repeat them"
)]
pub trait MoveOut<N> {
    type Elem;
    type Rest;

    fn move_out(self) -> (Self::Elem, Self::Rest);
}

impl<H, T> MoveOut<Z> for HCons<Full<H>, T> {
    type Elem = H;
    type Rest = HCons<Moved, T>;

    #[inline(always)]
    fn move_out(self) -> (H, HCons<Moved, T>) {
        (self.head.0, HCons { head: Moved, tail: self.tail })
    }
}

impl<H, T: MoveOut<N>, N> MoveOut<S<N>> for HCons<H, T> {
    type Elem = T::Elem;
    type Rest = HCons<H, T::Rest>;

    #[inline(always)]
    fn move_out(self) -> (T::Elem, Self::Rest) {
        let (elem, rest) = self.tail.move_out();
        (elem, HCons { head: self.head, tail: rest })
    }
}

/// Move out the elements at every index of `Idx`, in order.
pub trait MoveAll<Idx> {
    type Out: HList;

    fn move_all(self) -> Self::Out;
}

impl<L> MoveAll<HNil> for L {
    type Out = HNil;

    #[inline(always)]
    fn move_all(self) -> HNil {
        HNil
    }
}

impl<L, I, Rest> MoveAll<HCons<I, Rest>> for L
where
    L: MoveOut<I>,
    L::Rest: MoveAll<Rest>,
{
    type Out = HCons<L::Elem, <L::Rest as MoveAll<Rest>>::Out>;

    #[inline(always)]
    fn move_all(self) -> Self::Out {
        let (head, rest) = self.move_out();
        HCons { head, tail: rest.move_all() }
    }
}

/// New sequence whose i-th element is moved out of `self[Idx_i]`.
///
/// Indices may be omitted (those elements are dropped) but not repeated.
pub trait PickOnce<Idx> {
    type Out: HList;

    fn pick_once(self) -> Self::Out;
}

impl<L, Idx> PickOnce<Idx> for L
where
    L: HList + IntoSlots,
    L::Out: MoveAll<Idx>,
{
    type Out = <L::Out as MoveAll<Idx>>::Out;

    #[inline(always)]
    fn pick_once(self) -> Self::Out {
        self.into_slots().move_all()
    }
}

// =============================================================================
// Dup
// =============================================================================

/// `Self` concatenated with itself `N` times (`N = 0` gives `HNil`).
pub trait Dup<N> {
    type Out: HList;

    fn dup(&self) -> Self::Out;
}

impl<L: HList> Dup<Z> for L {
    type Out = HNil;

    #[inline(always)]
    fn dup(&self) -> HNil {
        HNil
    }
}

impl<L, N> Dup<S<N>> for L
where
    L: HList + Clone + Dup<N> + Concat<<L as Dup<N>>::Out>,
    <L as Concat<<L as Dup<N>>::Out>>::Out: HList,
{
    type Out = <L as Concat<<L as Dup<N>>::Out>>::Out;

    #[inline(always)]
    fn dup(&self) -> Self::Out {
        self.clone().concat(<L as Dup<N>>::dup(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::nat::{U0, U1, U2, U3};
    use crate::{hlist, idx, HList};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<HList![i32, u8, char] as Pick<idx![2, 1, 2]>>::Out, HList![char, u8, char]);
    assert_type_eq_all!(<HList![i32, u8] as Dup<U2>>::Out, HList![i32, u8, i32, u8]);
    assert_type_eq_all!(<HList![i32, u8] as Dup<U1>>::Out, HList![i32, u8]);
    assert_type_eq_all!(<HList![i32, u8] as Dup<U0>>::Out, HNil);

    #[test]
    fn pick_repeats_and_omits() {
        let list = hlist![10, 'b', "c"];
        assert_eq!(Pick::<idx![2, 0, 2]>::pick(&list), hlist!["c", 10, "c"]);
        assert_eq!(Pick::<HNil>::pick(&list), HNil);
    }

    assert_type_eq_all!(
        <HList![i32, &'static mut u8, char] as PickOnce<idx![2, 1]>>::Out,
        HList![char, &'static mut u8]
    );
    assert_type_eq_all!(<HList![i32, u8] as PickOnce<HNil>>::Out, HNil);

    #[test]
    fn pick_once_moves_exclusive_aliases() {
        let (mut a, mut b) = (1, 2);
        let HCons { head: rb, tail: HCons { head: ra, .. } } =
            PickOnce::<idx![1, 0]>::pick_once(hlist![&mut a, &mut b]);
        *ra += 10;
        *rb += 20;
        assert_eq!((a, b), (11, 22));
    }

    #[test]
    fn pick_once_needs_no_clone() {
        #[derive(Debug, PartialEq)]
        struct Token(u8);

        let picked = PickOnce::<idx![2, 0]>::pick_once(hlist![Token(1), Token(2), Token(3)]);
        assert_eq!(picked, hlist![Token(3), Token(1)]);
    }

    #[test]
    fn dup_three_times() {
        let list = hlist![1u8, 'x'];
        assert_eq!(Dup::<U3>::dup(&list).len(), 6);
    }
}
