//! Element kinds.
//!
//! A kind is the static type of a sequence element together with its
//! ownership category. Kinds carry an identity so type-level operations can
//! ask "is this the same kind as that one" (type-level `find`, `filter` by
//! [`SameAs`]).
//!
//! ```text
//! i32          -> Leaf<fnv("i32")>                         (Owned)
//! &'a T        -> Node<fnv("&"),      [T::Id]>             (Shared)
//! &'a mut T    -> Node<fnv("&mut"),   [T::Id]>             (Exclusive)
//! Option<T>    -> Node<fnv("Option"), [T::Id]>             (Owned)
//! [T; N]       -> Node<fnv("[;]"),    [T::Id, N]>          (Owned)
//! (A, B)       -> Node<fnv("()"),     [A::Id, B::Id]>      (Owned)
//! fn(A) -> R   -> Node<fnv("fn"),     [R::Id, A::Id]>      (Owned)
//! ```
//!
//! Names are compared as 64-bit FNV-1a hashes; parts are compared
//! structurally, to any nesting depth. Distinct kinds compare equal only if
//! two constructor or leaf names collide.

use core::marker::PhantomData;

use crate::functional::TypeFn;
use crate::hlist::{HCons, HNil};
use crate::primitives::nat::{Num, S, ToNat, U16, Z};
use crate::primitives::stream::{HashStream, StreamEq};
use crate::primitives::{Bool, False, True};

/// Nibbles compared per name: one full cycle of a 64-bit hash stream.
pub type KindDepth = U16;

/// Ownership category of an element kind.
pub trait Category: 'static {
    const NAME: &'static str;
    type IsOwned: Bool;
    type IsShared: Bool;
    type IsExclusive: Bool;
}

/// The sequence owns an independent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Owned;

/// Shared alias to storage owned elsewhere (`&T`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shared;

/// Exclusive alias to storage owned elsewhere (`&mut T`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Exclusive;

impl Category for Owned {
    const NAME: &'static str = "owned";
    type IsOwned = True;
    type IsShared = False;
    type IsExclusive = False;
}

impl Category for Shared {
    const NAME: &'static str = "shared";
    type IsOwned = False;
    type IsShared = True;
    type IsExclusive = False;
}

impl Category for Exclusive {
    const NAME: &'static str = "exclusive";
    type IsOwned = False;
    type IsShared = False;
    type IsExclusive = True;
}

/// A registered element kind.
///
/// Use `#[derive(Kind)]` for your own non-generic types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a registered kind",
    label = "no identity for this type",
    note = "add `#[derive(Kind)]` to the type, or implement `Kind` by hand for generic wrappers"
)]
pub trait Kind {
    /// Identity.
    type Id: KindId;
    /// Ownership category.
    type Category: Category;
}

// =============================================================================
// Identity
// =============================================================================

/// Identity of a kind.
pub trait KindId {}

/// A named kind with no parts, identified by a hash stream of its name.
pub struct Leaf<Name>(PhantomData<Name>);

/// A constructor applied to parts: an HList of identities (or naturals,
/// for array lengths).
pub struct Node<Name, Parts>(PhantomData<(Name, Parts)>);

impl<Name: HashStream> KindId for Leaf<Name> {}
impl<Name: HashStream, Parts> KindId for Node<Name, Parts> {}
impl KindId for Z {}
impl<N: KindId> KindId for S<N> {}

/// Structural identity comparison.
pub trait SameId<Other> {
    type Out: Bool;
}

impl<A, B> SameId<Leaf<B>> for Leaf<A>
where
    A: HashStream + StreamEq<B, KindDepth>,
    B: HashStream,
{
    type Out = <A as StreamEq<B, KindDepth>>::Out;
}

impl<A, B, Q> SameId<Node<B, Q>> for Leaf<A> {
    type Out = False;
}

impl<A, P, B> SameId<Leaf<B>> for Node<A, P> {
    type Out = False;
}

impl<A, P, B, Q> SameId<Node<B, Q>> for Node<A, P>
where
    A: HashStream + StreamEq<B, KindDepth>,
    B: HashStream,
    <A as StreamEq<B, KindDepth>>::Out: ThenSame<P, Q>,
{
    type Out = <<A as StreamEq<B, KindDepth>>::Out as ThenSame<P, Q>>::Out;
}

impl SameId<HNil> for HNil {
    type Out = True;
}

impl<H, T> SameId<HCons<H, T>> for HNil {
    type Out = False;
}

impl<H, T> SameId<HNil> for HCons<H, T> {
    type Out = False;
}

impl<H1, T1, H2, T2> SameId<HCons<H2, T2>> for HCons<H1, T1>
where
    H1: SameId<H2>,
    H1::Out: ThenSame<T1, T2>,
{
    type Out = <H1::Out as ThenSame<T1, T2>>::Out;
}

impl SameId<Z> for Z {
    type Out = True;
}

impl<N> SameId<S<N>> for Z {
    type Out = False;
}

impl<N> SameId<Z> for S<N> {
    type Out = False;
}

impl<M: SameId<N>, N> SameId<S<N>> for S<M> {
    type Out = M::Out;
}

/// Compares `A` with `B` only after a match; a mismatch stops here.
pub trait ThenSame<A, B> {
    type Out: Bool;
}

impl<A, B> ThenSame<A, B> for False {
    type Out = False;
}

impl<A: SameId<B>, B> ThenSame<A, B> for True {
    type Out = A::Out;
}

/// Type-level kind equality.
pub trait SameKind<Other: ?Sized> {
    type Out: Bool;
}

impl<A, B> SameKind<B> for A
where
    A: Kind + ?Sized,
    B: Kind + ?Sized,
    A::Id: SameId<B::Id>,
{
    type Out = <A::Id as SameId<B::Id>>::Out;
}

// =============================================================================
// Kind predicates
// =============================================================================

/// Type-level predicate: is the element kind `X`?
pub struct SameAs<X: ?Sized>(PhantomData<X>);

impl<X: ?Sized, T: SameKind<X>> TypeFn<(T,)> for SameAs<X> {
    type Out = T::Out;
}

/// Type-level predicate: does the sequence own the element?
#[derive(Debug, Clone, Copy, Default)]
pub struct IsOwned;

/// Type-level predicate: is the element a shared alias?
#[derive(Debug, Clone, Copy, Default)]
pub struct IsShared;

/// Type-level predicate: is the element an exclusive alias?
#[derive(Debug, Clone, Copy, Default)]
pub struct IsExclusive;

impl<T: Kind> TypeFn<(T,)> for IsOwned {
    type Out = <T::Category as Category>::IsOwned;
}

impl<T: Kind> TypeFn<(T,)> for IsShared {
    type Out = <T::Category as Category>::IsShared;
}

impl<T: Kind> TypeFn<(T,)> for IsExclusive {
    type Out = <T::Category as Category>::IsExclusive;
}

// =============================================================================
// Registrations
// =============================================================================
//
// Tuples and `fn` pointers are registered by `impl_tuples!` in `tuple.rs`.

macro_rules! register_kinds {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Kind for $ty {
                type Id = Leaf<macros::make_kind_stream!(stringify!($ty))>;
                type Category = Owned;
            }
        )*
    };
}

register_kinds!(
    bool, char, str,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

/// One-part constructors: `$ty` wraps `T`.
macro_rules! register_wrappers {
    ($($(#[$meta:meta])* [$($g:tt)*] $ty:ty => $name:literal, $cat:ty;)*) => {
        $(
            $(#[$meta])*
            impl<$($g)*> Kind for $ty {
                type Id = Node<macros::make_kind_stream!($name), HCons<<T as Kind>::Id, HNil>>;
                type Category = $cat;
            }
        )*
    };
}

register_wrappers! {
    ['a, T: Kind + ?Sized] &'a T => "&", Shared;
    ['a, T: Kind + ?Sized] &'a mut T => "&mut", Exclusive;
    [T: Kind + ?Sized] *const T => "*const", Owned;
    [T: Kind + ?Sized] *mut T => "*mut", Owned;
    [T: Kind] Option<T> => "Option", Owned;
    [T: Kind] [T] => "[]", Owned;
    [T: Kind + ?Sized] PhantomData<T> => "PhantomData", Owned;
    #[cfg(feature = "alloc")]
    [T: Kind] alloc::vec::Vec<T> => "Vec", Owned;
    #[cfg(feature = "alloc")]
    [T: Kind + ?Sized] alloc::boxed::Box<T> => "Box", Owned;
}

#[cfg(feature = "alloc")]
impl Kind for alloc::string::String {
    type Id = Leaf<macros::make_kind_stream!("String")>;
    type Category = Owned;
}

/// Arrays whose length has a type-level natural (`0..=64`).
impl<T: Kind, const N: usize> Kind for [T; N]
where
    (): ToNat<N>,
{
    type Id = Node<macros::make_kind_stream!("[;]"), HCons<<T as Kind>::Id, HCons<Num<N>, HNil>>>;
    type Category = Owned;
}
