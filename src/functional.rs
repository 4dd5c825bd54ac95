//! Functional combinators.
//!
//! Two parallel vocabularies:
//! - [`TypeFn`]: a type-level function from an argument tuple to a type.
//!   Type-level predicates are type functions whose `Out` is a [`Bool`].
//! - [`Call`] / [`Predicate`]: value-level callables. Every closure of arity
//!   0..=16 is a `Call`; every `FnMut(&T) -> bool` is a `Predicate<T>`.
//!
//! The combinators ([`Identity`], [`Tautology`], [`Contradiction`],
//! [`Constant`], [`Bind`], [`Partial`], [`Complement`]) implement both, so the
//! same marker works in `MapTypes<Identity>` and in `seq.map(Identity)`.

use crate::algebra::Concat;
use crate::hlist::{HCons, HNil};
use crate::primitives::{Bool, False, True};
use crate::syntax_macros::for_each_arity;
use crate::tuple::{IntoTuple, Tuple};

// =============================================================================
// Core traits
// =============================================================================

/// Type-level function. `Args` is a tuple of argument types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type function of arguments `{Args}`",
    note = "type functions are applied to a tuple of argument types, e.g. `(A,)` or `(A, B)`"
)]
pub trait TypeFn<Args> {
    type Out;
}

/// Result of applying type function `F` to `Args`.
pub type Apply<F, Args> = <F as TypeFn<Args>>::Out;

/// Value-level callable. `Args` is a tuple of argument values.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with arguments `{Args}`",
    note = "closures of matching arity implement `Call` automatically; other types implement it by hand"
)]
pub trait Call<Args> {
    type Output;

    fn call(&mut self, args: Args) -> Self::Output;
}

/// Value-level unary test.
pub trait Predicate<T: ?Sized> {
    fn test(&mut self, value: &T) -> bool;
}

impl<F, T: ?Sized> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline(always)]
    fn test(&mut self, value: &T) -> bool {
        self(value)
    }
}

// =============================================================================
// Identity
// =============================================================================

/// `identity(x, ...) = x`; further arguments are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

macro_rules! impl_identity {
    () => {};
    (($a0:ident, $f0:ident) $(($a:ident, $f:ident))*) => {
        impl<$a0 $(, $a)*> TypeFn<($a0, $($a,)*)> for Identity {
            type Out = $a0;
        }

        impl<$a0 $(, $a)*> Call<($a0, $($a,)*)> for Identity {
            type Output = $a0;

            #[inline(always)]
            fn call(&mut self, args: ($a0, $($a,)*)) -> $a0 {
                let (first, ..) = args;
                first
            }
        }
    };
}
for_each_arity!(impl_identity);

/// Value-level identity.
#[inline(always)]
pub fn identity<T>(value: T) -> T {
    value
}

// =============================================================================
// Tautology / Contradiction / Constant
// =============================================================================

/// Always true, whatever the arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tautology;

/// Always false, whatever the arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contradiction;

impl<Args> TypeFn<Args> for Tautology {
    type Out = True;
}

impl<Args> TypeFn<Args> for Contradiction {
    type Out = False;
}

impl<Args> Call<Args> for Tautology {
    type Output = bool;

    #[inline(always)]
    fn call(&mut self, _: Args) -> bool {
        true
    }
}

impl<Args> Call<Args> for Contradiction {
    type Output = bool;

    #[inline(always)]
    fn call(&mut self, _: Args) -> bool {
        false
    }
}

impl<T: ?Sized> Predicate<T> for Tautology {
    #[inline(always)]
    fn test(&mut self, _: &T) -> bool {
        true
    }
}

impl<T: ?Sized> Predicate<T> for Contradiction {
    #[inline(always)]
    fn test(&mut self, _: &T) -> bool {
        false
    }
}

/// Ignores its arguments and produces `C`.
///
/// As a type function `Constant<C>` yields the type `C`; as a value it
/// hands out clones of the wrapped value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constant<C>(pub C);

/// Value-level constant function.
#[inline(always)]
pub const fn constant<C>(value: C) -> Constant<C> {
    Constant(value)
}

impl<C, Args> TypeFn<Args> for Constant<C> {
    type Out = C;
}

impl<C: Clone, Args> Call<Args> for Constant<C> {
    type Output = C;

    #[inline(always)]
    fn call(&mut self, _: Args) -> C {
        self.0.clone()
    }
}

// =============================================================================
// Complement
// =============================================================================

/// Negates a predicate, at either level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complement<P>(pub P);

impl<P, T> TypeFn<(T,)> for Complement<P>
where
    P: TypeFn<(T,)>,
    P::Out: Bool,
{
    type Out = <P::Out as Bool>::Not;
}

impl<P: Predicate<T>, T: ?Sized> Predicate<T> for Complement<P> {
    #[inline(always)]
    fn test(&mut self, value: &T) -> bool {
        !self.0.test(value)
    }
}

// =============================================================================
// Bind
// =============================================================================

/// Applies `F_i` to argument `i`, then forwards all results to `Target`.
///
/// `Fns` is a tuple whose arity is the arity of the bound operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bind<Target, Fns> {
    pub target: Target,
    pub fns: Fns,
}

/// Value-level bind.
#[inline(always)]
pub const fn bind<Target, Fns>(target: Target, fns: Fns) -> Bind<Target, Fns> {
    Bind { target, fns }
}

macro_rules! impl_bind {
    ($(($a:ident, $f:ident))*) => {
        impl<Tg $(, $a, $f)*> TypeFn<($($a,)*)> for Bind<Tg, ($($f,)*)>
        where
            $($f: TypeFn<($a,)>,)*
            Tg: TypeFn<($(<$f as TypeFn<($a,)>>::Out,)*)>,
        {
            type Out = <Tg as TypeFn<($(<$f as TypeFn<($a,)>>::Out,)*)>>::Out;
        }

        impl<Tg $(, $a, $f)*> Call<($($a,)*)> for Bind<Tg, ($($f,)*)>
        where
            $($f: Call<($a,)>,)*
            Tg: Call<($(<$f as Call<($a,)>>::Output,)*)>,
        {
            type Output = <Tg as Call<($(<$f as Call<($a,)>>::Output,)*)>>::Output;

            #[inline(always)]
            #[allow(unused_variables)]
            fn call(&mut self, args: ($($a,)*)) -> Self::Output {
                paste::paste! {
                    let ($([<$a:lower>],)*) = args;
                    let ($([<$f:lower>],)*) = &mut self.fns;
                    let bound = ($(<$f as Call<($a,)>>::call([<$f:lower>], ([<$a:lower>],)),)*);
                }
                self.target.call(bound)
            }
        }
    };
}
for_each_arity!(impl_bind);

// =============================================================================
// Partial
// =============================================================================

/// Prepends the fixed arguments `Prefix` (a tuple) to every call.
///
/// At type level this is `apply_partial`: `Partial<T, (A, B)>` applied to
/// `(C,)` is `T` applied to `(A, B, C)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Partial<Target, Prefix> {
    pub target: Target,
    pub prefix: Prefix,
}

/// Value-level partial application.
#[inline(always)]
pub const fn partial<Target, Prefix>(target: Target, prefix: Prefix) -> Partial<Target, Prefix> {
    Partial { target, prefix }
}

/// `Prefix ++ Args` as a tuple.
pub type Joined<Prefix, Args> =
    <<<Prefix as Tuple>::List as Concat<<Args as Tuple>::List>>::Out as IntoTuple>::Tuple;

impl<Tg, Prefix, Args> TypeFn<Args> for Partial<Tg, Prefix>
where
    Prefix: Tuple,
    Args: Tuple,
    Prefix::List: Concat<Args::List>,
    <Prefix::List as Concat<Args::List>>::Out: IntoTuple,
    Tg: TypeFn<Joined<Prefix, Args>>,
{
    type Out = <Tg as TypeFn<Joined<Prefix, Args>>>::Out;
}

impl<Tg, Prefix, Args> Call<Args> for Partial<Tg, Prefix>
where
    Prefix: Tuple + Clone,
    Args: Tuple,
    Prefix::List: Concat<Args::List>,
    <Prefix::List as Concat<Args::List>>::Out: IntoTuple,
    Tg: Call<Joined<Prefix, Args>>,
{
    type Output = <Tg as Call<Joined<Prefix, Args>>>::Output;

    #[inline(always)]
    fn call(&mut self, args: Args) -> Self::Output {
        let joined = self.prefix.clone().into_hlist().concat(args.into_hlist()).into_tuple();
        self.target.call(joined)
    }
}

// =============================================================================
// Misc type functions
// =============================================================================

/// Collects its arguments into a tuple: `MakeTuple` applied to `(A, B)` is `(A, B)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTuple;

impl<Args> TypeFn<Args> for MakeTuple {
    type Out = Args;
}

// =============================================================================
// Quantifiers
// =============================================================================

/// Does some element kind satisfy `P`? False for the empty list.
pub trait AnyOf<P> {
    type Out: Bool;
}

impl<P> AnyOf<P> for HNil {
    type Out = False;
}

impl<P, H, T> AnyOf<P> for HCons<H, T>
where
    P: TypeFn<(H,)>,
    <P as TypeFn<(H,)>>::Out: Bool,
    T: AnyOf<P>,
{
    type Out = <<P as TypeFn<(H,)>>::Out as Bool>::Or<<T as AnyOf<P>>::Out>;
}

/// Does every element kind satisfy `P`? True for the empty list.
pub trait AllOf<P> {
    type Out: Bool;
}

impl<P> AllOf<P> for HNil {
    type Out = True;
}

impl<P, H, T> AllOf<P> for HCons<H, T>
where
    P: TypeFn<(H,)>,
    <P as TypeFn<(H,)>>::Out: Bool,
    T: AllOf<P>,
{
    type Out = <<P as TypeFn<(H,)>>::Out as Bool>::And<<T as AllOf<P>>::Out>;
}

/// `any(P, Args...)` over a tuple of kinds.
pub type Any<P, Args> = <<Args as Tuple>::List as AnyOf<P>>::Out;

/// `all(P, Args...)` over a tuple of kinds.
pub type All<P, Args> = <<Args as Tuple>::List as AllOf<P>>::Out;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Apply<Identity, (u8, u16, u32)>, u8);
    assert_type_eq_all!(Apply<Constant<char>, ()>, char);
    assert_type_eq_all!(Apply<Partial<MakeTuple, (u8, u16)>, (u32,)>, (u8, u16, u32));
    assert_type_eq_all!(Apply<Partial<MakeTuple, ()>, (u32,)>, (u32,));
    assert_type_eq_all!(Apply<Bind<MakeTuple, (Identity, Constant<()>)>, (u8, u16)>, (u8, ()));

    #[test]
    fn vacuous_quantifiers() {
        assert!(!<Any<Tautology, ()> as Bool>::VALUE);
        assert!(<All<Contradiction, ()> as Bool>::VALUE);
        assert!(<Any<Tautology, (u8,)> as Bool>::VALUE);
        assert!(!<All<Complement<Tautology>, (u8, u16)> as Bool>::VALUE);
    }

    #[test]
    fn value_level_combinators() {
        assert_eq!(Identity.call((1, "ignored", 'x')), 1);
        assert!(Tautology.call(()));
        assert!(!Contradiction.call((1, 2)));
        assert_eq!(constant("c").call((1u8,)), "c");

        let mut shifted = bind(|a: i32, b: i32| a - b, (|x: i32| x * 10, |y: i32| y + 1));
        assert_eq!(shifted.call((3, 4)), 25);

        let mut greet = partial(|a: &str, b: &str, c: char| (a.len() + b.len(), c), ("ab", "cde"));
        assert_eq!(greet.call(('!',)), (5, '!'));
    }

    #[test]
    fn predicates() {
        let mut positive = |x: &i32| *x > 0;
        assert!(positive.test(&3));
        assert!(!Complement(positive).test(&3));
        assert!(Tautology.test("anything"));
    }
}
