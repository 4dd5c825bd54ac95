//! Arithmetic operators.
//!
//! Integer division and remainder panic on a zero divisor, so they are not
//! `NOTHROW`. Overflow checks are a build setting, not an operand property,
//! and do not count.

use core::ops::{AddAssign, Neg, SubAssign};

use super::{binary_operator, operator, unary_operands, Operands};
use crate::detect::Operation;

binary_operator!(
    /// `x + y`
    Plus, "plus", "+", Add::add, nothrow = true
);
binary_operator!(
    /// `x - y`
    Minus, "minus", "-", Sub::sub, nothrow = true
);
binary_operator!(
    /// `x * y`
    Multiplies, "multiplies", "*", Mul::mul, nothrow = true
);
binary_operator!(
    /// `x / y`
    Divides, "divides", "/", Div::div, nothrow = false
);
binary_operator!(
    /// `x % y`
    Modulus, "modulus", "%", Rem::rem, nothrow = false
);

operator!(
    /// `-x`
    Negate, "negate", "-", Some(1)
);
unary_operands!(Negate);

impl<T: Neg> Operation<(T,)> for Negate {
    type Output = T::Output;

    #[inline(always)]
    fn apply((x,): (T,)) -> T::Output {
        -x
    }
}

operator!(
    /// `++x`: add one in place, yielding the place.
    Increment, "increment", "++", Some(1)
);
operator!(
    /// `--x`: subtract one in place, yielding the place.
    Decrement, "decrement", "--", Some(1)
);
operator!(
    /// `x++`: add one in place, yielding the previous value.
    PostIncrement, "post_increment", "++", Some(1)
);
operator!(
    /// `x--`: subtract one in place, yielding the previous value.
    PostDecrement, "post_decrement", "--", Some(1)
);

/// Steps operate on a place: the operand `T` is reached through `&mut T`.
macro_rules! step_operands {
    ($($name:ident),*) => {
        $(
            impl<T: 'static> Operands<(T,)> for $name {
                type Full = (&'static mut T,);
            }
        )*
    };
}
step_operands!(Increment, Decrement, PostIncrement, PostDecrement);

/// `1` of a numeric kind, as `T::from(true)`.
#[inline(always)]
fn one<T: From<bool>>() -> T {
    T::from(true)
}

impl<'a, T: AddAssign + From<bool>> Operation<(&'a mut T,)> for Increment {
    type Output = &'a mut T;

    #[inline(always)]
    fn apply((x,): (&'a mut T,)) -> &'a mut T {
        *x += one::<T>();
        x
    }
}

impl<'a, T: SubAssign + From<bool>> Operation<(&'a mut T,)> for Decrement {
    type Output = &'a mut T;

    #[inline(always)]
    fn apply((x,): (&'a mut T,)) -> &'a mut T {
        *x -= one::<T>();
        x
    }
}

impl<'a, T: AddAssign + From<bool> + Clone> Operation<(&'a mut T,)> for PostIncrement {
    type Output = T;

    #[inline(always)]
    fn apply((x,): (&'a mut T,)) -> T {
        let old = x.clone();
        *x += one::<T>();
        old
    }
}

impl<'a, T: SubAssign + From<bool> + Clone> Operation<(&'a mut T,)> for PostDecrement {
    type Output = T;

    #[inline(always)]
    fn apply((x,): (&'a mut T,)) -> T {
        let old = x.clone();
        *x -= one::<T>();
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Operator;

    #[test]
    fn steps_update_the_place() {
        let mut n = 5i32;
        *Increment::apply((&mut n,)) += 10;
        assert_eq!(n, 16);
        assert_eq!(PostDecrement::apply((&mut n,)), 16);
        assert_eq!(n, 15);
        let mut f = 0.5f64;
        Decrement::apply((&mut f,));
        assert_eq!(f, -0.5);
    }

    #[test]
    fn compound_assignment_returns_place() {
        let mut s = 3u8;
        *PlusAssign::apply((&mut s, 4)) *= 2;
        assert_eq!(s, 14);
        assert_eq!(<PlusAssign as Operator>::SYMBOL, "+=");
        assert_eq!(<ModulusAssign as Operator>::NAME, "modulus_assign");
    }
}
