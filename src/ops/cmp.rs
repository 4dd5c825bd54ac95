//! Comparison operators. All yield `bool`.

use super::{binary_operands, operator};
use crate::detect::Operation;

macro_rules! comparison {
    ($(#[$meta:meta])* $name:ident, $key:literal, $symbol:literal, $Trait:ident, |$l:ident, $r:ident| $body:expr) => {
        operator!($(#[$meta])* $name, $key, $symbol, Some(2));
        binary_operands!($name);

        impl<L: $Trait<R>, R> Operation<(L, R)> for $name {
            type Output = bool;

            #[inline(always)]
            fn apply(($l, $r): (L, R)) -> bool {
                $body
            }
        }
    };
}

comparison!(
    /// `x == y`
    EqualTo, "equal_to", "==", PartialEq, |l, r| l == r
);
comparison!(
    /// `x != y`
    NotEqualTo, "not_equal_to", "!=", PartialEq, |l, r| l != r
);
comparison!(
    /// `x > y`
    Greater, "greater", ">", PartialOrd, |l, r| l > r
);
comparison!(
    /// `x < y`
    Less, "less", "<", PartialOrd, |l, r| l < r
);
comparison!(
    /// `x >= y`
    GreaterEqual, "greater_equal", ">=", PartialOrd, |l, r| l >= r
);
comparison!(
    /// `x <= y`
    LessEqual, "less_equal", "<=", PartialOrd, |l, r| l <= r
);
