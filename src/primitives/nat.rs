//! Type-level natural numbers.
//!
//! Peano encoding: `Z` is zero, `S<N>` is `N + 1`. Counts and indices for the
//! sequence algebra are naturals; `Num<3>` bridges a const to its type.

use core::marker::PhantomData;

/// Peano natural.
pub trait Nat: 'static {
    /// The runtime value of this natural.
    const VALUE: usize;
}

/// Zero (base case)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Z;

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Addition: `Self + Rhs`.
pub trait AddNat<Rhs: Nat>: Nat {
    type Out: Nat;
}

impl<Rhs: Nat> AddNat<Rhs> for Z {
    type Out = Rhs;
}

impl<N: AddNat<Rhs>, Rhs: Nat> AddNat<Rhs> for S<N> {
    type Out = S<<N as AddNat<Rhs>>::Out>;
}

/// Multiplication: `Self * Rhs`, as `Rhs + (Self - 1) * Rhs`.
pub trait MulNat<Rhs: Nat>: Nat {
    type Out: Nat;
}

impl<Rhs: Nat> MulNat<Rhs> for Z {
    type Out = Z;
}

impl<N, Rhs> MulNat<Rhs> for S<N>
where
    N: MulNat<Rhs>,
    Rhs: AddNat<<N as MulNat<Rhs>>::Out>,
{
    type Out = <Rhs as AddNat<<N as MulNat<Rhs>>::Out>>::Out;
}

/// Const-to-type bridge, implemented on `()` for `0..=64`.
#[diagnostic::on_unimplemented(
    message = "no type-level natural is generated for this constant",
    note = "naturals are bridged for 0..=64; spell larger ones with `S<..>`"
)]
pub trait ToNat<const N: usize> {
    type Out: Nat;
}

// Generate U0..U64 and `impl ToNat<k> for ()` using proc-macro
macros::nat!(64);

/// The natural for const `N`.
pub type Num<const N: usize> = <() as ToNat<N>>::Out;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_follow_structure() {
        assert_eq!(<Num<0>>::VALUE, 0);
        assert_eq!(<Num<17>>::VALUE, 17);
        assert_eq!(U64::VALUE, 64);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(<<U3 as AddNat<U4>>::Out as Nat>::VALUE, 7);
        assert_eq!(<<U3 as MulNat<U4>>::Out as Nat>::VALUE, 12);
        assert_eq!(<<Z as MulNat<U9>>::Out as Nat>::VALUE, 0);
    }
}
