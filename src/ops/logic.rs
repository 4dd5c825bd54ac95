//! Logical operators, defined on `bool` only.

use super::{binary_operands, operator, unary_operands};
use crate::detect::Operation;

operator!(
    /// `x && y`
    LogicalAnd, "logical_and", "&&", Some(2)
);
operator!(
    /// `x || y`
    LogicalOr, "logical_or", "||", Some(2)
);
operator!(
    /// `!x` on `bool`. Bitwise complement is [`BitNot`](super::BitNot).
    LogicalNot, "logical_not", "!", Some(1)
);
binary_operands!(LogicalAnd);
binary_operands!(LogicalOr);
unary_operands!(LogicalNot);

impl Operation<(bool, bool)> for LogicalAnd {
    type Output = bool;

    #[inline(always)]
    fn apply((l, r): (bool, bool)) -> bool {
        l && r
    }
}

impl Operation<(bool, bool)> for LogicalOr {
    type Output = bool;

    #[inline(always)]
    fn apply((l, r): (bool, bool)) -> bool {
        l || r
    }
}

impl Operation<(bool,)> for LogicalNot {
    type Output = bool;

    #[inline(always)]
    fn apply((x,): (bool,)) -> bool {
        !x
    }
}
