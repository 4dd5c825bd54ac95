//! Bitwise operators and shifts.

use core::ops::Not;

use super::{binary_operator, operator, unary_operands};
use crate::detect::Operation;

binary_operator!(
    /// `x & y`
    BitAnd, "bit_and", "&", BitAnd::bitand, nothrow = true
);
binary_operator!(
    /// `x | y`
    BitOr, "bit_or", "|", BitOr::bitor, nothrow = true
);
binary_operator!(
    /// `x ^ y`
    BitXor, "bit_xor", "^", BitXor::bitxor, nothrow = true
);
binary_operator!(
    /// `x << y`
    LeftShift, "left_shift", "<<", Shl::shl, nothrow = true
);
binary_operator!(
    /// `x >> y`
    RightShift, "right_shift", ">>", Shr::shr, nothrow = true
);

operator!(
    /// `~x`, spelled `!x` on integers.
    BitNot, "bit_not", "~", Some(1)
);
unary_operands!(BitNot);

impl<T: Not> Operation<(T,)> for BitNot {
    type Output = T::Output;

    #[inline(always)]
    fn apply((x,): (T,)) -> T::Output {
        !x
    }
}
