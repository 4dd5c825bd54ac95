//! Heterogeneous lists.
//!
//! `HNil` / `HCons<H, T>` are the inductive form of a sequence. Every algebra
//! operation is defined on this form; tuples convert in and out of it (see
//! [`crate::tuple`]). The same types serve both levels: as types they describe
//! a sequence's kinds, as values they carry its elements.

use crate::primitives::nat::{Nat, S, Z};

/// The empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HNil;

/// A non-empty sequence: `head` followed by the sequence `tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

/// Inductive heterogeneous list.
pub trait HList: Sized {
    /// Number of elements.
    const LEN: usize;

    /// Length as a type-level natural.
    type Len: Nat;

    /// Put `head` in front of this list.
    #[inline(always)]
    fn prepend<H>(self, head: H) -> HCons<H, Self> {
        HCons { head, tail: self }
    }

    #[inline(always)]
    fn len(&self) -> usize {
        Self::LEN
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl HList for HNil {
    const LEN: usize = 0;
    type Len = Z;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = T::LEN + 1;
    type Len = S<T::Len>;
}

// =============================================================================
// Positional access
// =============================================================================

/// Element at index `N`.
#[diagnostic::on_unimplemented(
    message = "index `{N}` is out of range for sequence `{Self}`",
    label = "no element at this position",
    note = "indices are type-level naturals counted from zero"
)]
pub trait Get<N> {
    type Out;

    fn get(self) -> Self::Out;
    fn get_ref(&self) -> &Self::Out;
    fn get_mut(&mut self) -> &mut Self::Out;
}

impl<H, T> Get<Z> for HCons<H, T> {
    type Out = H;

    #[inline(always)]
    fn get(self) -> H {
        self.head
    }

    #[inline(always)]
    fn get_ref(&self) -> &H {
        &self.head
    }

    #[inline(always)]
    fn get_mut(&mut self) -> &mut H {
        &mut self.head
    }
}

impl<H, T: Get<N>, N> Get<S<N>> for HCons<H, T> {
    type Out = T::Out;

    #[inline(always)]
    fn get(self) -> T::Out {
        self.tail.get()
    }

    #[inline(always)]
    fn get_ref(&self) -> &T::Out {
        self.tail.get_ref()
    }

    #[inline(always)]
    fn get_mut(&mut self) -> &mut T::Out {
        self.tail.get_mut()
    }
}

// =============================================================================
// Borrowed views
// =============================================================================

/// `&HCons<A, HCons<B, HNil>>` as `HCons<&A, HCons<&B, HNil>>`.
pub trait ToRef<'a> {
    type Out: HList;

    fn to_ref(&'a self) -> Self::Out;
}

impl<'a> ToRef<'a> for HNil {
    type Out = HNil;

    #[inline(always)]
    fn to_ref(&'a self) -> HNil {
        HNil
    }
}

impl<'a, H: 'a, T: ToRef<'a>> ToRef<'a> for HCons<H, T> {
    type Out = HCons<&'a H, T::Out>;

    #[inline(always)]
    fn to_ref(&'a self) -> Self::Out {
        HCons { head: &self.head, tail: self.tail.to_ref() }
    }
}

/// `&mut HCons<A, ..>` as `HCons<&mut A, ..>`.
pub trait ToMut<'a> {
    type Out: HList;

    fn to_mut(&'a mut self) -> Self::Out;
}

impl<'a> ToMut<'a> for HNil {
    type Out = HNil;

    #[inline(always)]
    fn to_mut(&'a mut self) -> HNil {
        HNil
    }
}

impl<'a, H: 'a, T: ToMut<'a>> ToMut<'a> for HCons<H, T> {
    type Out = HCons<&'a mut H, T::Out>;

    #[inline(always)]
    fn to_mut(&'a mut self) -> Self::Out {
        HCons { head: &mut self.head, tail: self.tail.to_mut() }
    }
}

/// `HCons<&A, HCons<&B, HNil>>` as clones `HCons<A, HCons<B, HNil>>`.
pub trait Cloned {
    type Out: HList;

    fn cloned(self) -> Self::Out;
}

impl Cloned for HNil {
    type Out = HNil;

    #[inline(always)]
    fn cloned(self) -> HNil {
        HNil
    }
}

impl<'a, H: Clone + 'a, T: Cloned> Cloned for HCons<&'a H, T> {
    type Out = HCons<H, T::Out>;

    #[inline(always)]
    fn cloned(self) -> Self::Out {
        HCons { head: self.head.clone(), tail: self.tail.cloned() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::nat::{U1, U2};

    #[test]
    fn length_counts_cells() {
        let list = HNil.prepend("c").prepend(2u8).prepend(1i32);
        assert_eq!(list.len(), 3);
        assert_eq!(<HCons<u8, HNil> as HList>::LEN, 1);
        assert!(HNil.is_empty());
    }

    #[test]
    fn get_walks_by_index() {
        let mut list = HNil.prepend("c").prepend(2u8).prepend(1i32);
        assert_eq!(*Get::<U2>::get_ref(&list), "c");
        *Get::<U1>::get_mut(&mut list) += 5;
        assert_eq!(Get::<U1>::get(list), 7);
    }

    #[test]
    fn views_alias_the_list() {
        let mut list = HNil.prepend(10u32).prepend(5i64);
        {
            let HCons { head, tail: HCons { head: second, .. } } = list.to_mut();
            *head += 1;
            *second *= 2;
        }
        let refs = list.to_ref();
        assert!(core::ptr::eq(refs.head, &list.head));
        assert_eq!((*refs.head, *refs.tail.head), (6, 20));
        assert_eq!(refs.cloned(), list);
    }
}
