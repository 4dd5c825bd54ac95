//! First-match search.
//!
//! Value level: [`Search`] scans a list of shared aliases left to right, so
//! searching never consumes or copies the sequence. Type level:
//! [`FirstType`] yields [`NotFound`] or [`FoundAt<N>`].

use crate::functional::{Predicate, TypeFn};
use crate::hlist::{HCons, HNil, ToRef};
use crate::kind::SameAs;
use crate::primitives::nat::{Nat, S, Z};
use crate::primitives::Bool;

// =============================================================================
// Value level
// =============================================================================

/// Left-to-right scan of a list of `&T` with predicate `P`.
pub trait Search<P> {
    /// Index of the first matching element, counted from `offset`.
    fn position_from(&self, pred: &mut P, offset: usize) -> Option<usize>;

    /// Does every element match? True for the empty list.
    fn all_match(&self, pred: &mut P) -> bool;

    #[inline(always)]
    fn position(&self, pred: &mut P) -> Option<usize> {
        self.position_from(pred, 0)
    }

    #[inline(always)]
    fn any_match(&self, pred: &mut P) -> bool {
        self.position(pred).is_some()
    }
}

impl<P> Search<P> for HNil {
    #[inline(always)]
    fn position_from(&self, _: &mut P, _: usize) -> Option<usize> {
        None
    }

    #[inline(always)]
    fn all_match(&self, _: &mut P) -> bool {
        true
    }
}

impl<'a, P, H: ?Sized, T> Search<P> for HCons<&'a H, T>
where
    P: Predicate<H>,
    T: Search<P>,
{
    #[inline(always)]
    fn position_from(&self, pred: &mut P, offset: usize) -> Option<usize> {
        if pred.test(self.head) {
            Some(offset)
        } else {
            self.tail.position_from(pred, offset + 1)
        }
    }

    #[inline(always)]
    fn all_match(&self, pred: &mut P) -> bool {
        pred.test(self.head) && self.tail.all_match(pred)
    }
}

/// Matches elements equal to a borrowed value.
///
/// Comparing against an element kind `T` needs `V: PartialEq<T>`; an
/// element with no such comparison is a compile error rather than a miss.
#[derive(Debug, Clone, Copy)]
pub struct Equals<'v, V: ?Sized>(pub &'v V);

impl<V, T> Predicate<T> for Equals<'_, V>
where
    V: PartialEq<T> + ?Sized,
    T: ?Sized,
{
    #[inline(always)]
    fn test(&mut self, value: &T) -> bool {
        *self.0 == *value
    }
}

/// Index of the first element of `list` satisfying `pred`.
#[inline(always)]
pub fn first<'a, L, P>(list: &'a L, mut pred: P) -> Option<usize>
where
    L: ToRef<'a>,
    L::Out: Search<P>,
{
    list.to_ref().position(&mut pred)
}

/// Index of the first element of `list` equal to `value`.
#[inline(always)]
pub fn find<'a, 'v, L, V>(list: &'a L, value: &'v V) -> Option<usize>
where
    L: ToRef<'a>,
    V: ?Sized,
    L::Out: Search<Equals<'v, V>>,
{
    first(list, Equals(value))
}

/// Does some element of `list` satisfy `pred`?
#[inline(always)]
pub fn any<'a, L, P>(list: &'a L, mut pred: P) -> bool
where
    L: ToRef<'a>,
    L::Out: Search<P>,
{
    list.to_ref().any_match(&mut pred)
}

/// Does every element of `list` satisfy `pred`?
#[inline(always)]
pub fn all<'a, L, P>(list: &'a L, mut pred: P) -> bool
where
    L: ToRef<'a>,
    L::Out: Search<P>,
{
    list.to_ref().all_match(&mut pred)
}

// =============================================================================
// Type level
// =============================================================================

/// Outcome of a type-level search.
pub trait Found {
    const VALUE: bool;
    const INDEX: Option<usize>;

    /// The same outcome seen from one position further left.
    type Succ: Found;
}

/// No element matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

/// The first match is at index `N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoundAt<N>(core::marker::PhantomData<N>);

impl Found for NotFound {
    const VALUE: bool = false;
    const INDEX: Option<usize> = None;
    type Succ = NotFound;
}

impl<N: Nat> Found for FoundAt<N> {
    const VALUE: bool = true;
    const INDEX: Option<usize> = Some(N::VALUE);
    type Succ = FoundAt<S<N>>;
}

/// First element kind satisfying the type-level predicate `P`.
pub trait FirstType<P> {
    type Out: Found;
}

impl<P> FirstType<P> for HNil {
    type Out = NotFound;
}

impl<P, H, T> FirstType<P> for HCons<H, T>
where
    P: TypeFn<(H,)>,
    <P as TypeFn<(H,)>>::Out: Bool,
    T: FirstType<P>,
    <<P as TypeFn<(H,)>>::Out as Bool>::If<FoundAt<Z>, <T::Out as Found>::Succ>: Found,
{
    type Out = <<P as TypeFn<(H,)>>::Out as Bool>::If<FoundAt<Z>, <T::Out as Found>::Succ>;
}

/// First element whose kind is `X`.
pub type FindType<L, X> = <L as FirstType<SameAs<X>>>::Out;
