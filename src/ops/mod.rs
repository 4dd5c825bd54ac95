//! # Operator Trait Catalog
//!
//! One marker type per built-in operator, each registered as an
//! [`Operation`] over the operand kinds the operator accepts. Queries go
//! through the detection engine, so every question has a `bool` answer:
//!
//! ```
//! use tola_seq::{has_op, has_op_exact, ops::*};
//!
//! assert!(has_op!(Plus, i32));                 // i32 + i32
//! assert!(!has_op!(Plus, i32, &str));
//! assert!(has_op_exact!(bool, Less, u8));
//! assert!(has_op!(Subscript, [char; 3], usize));
//! assert!(has_op!(FnCall, fn(u8) -> u8, u8));
//! ```
//!
//! ## Operand spelling
//!
//! Operands are written as the kinds of the expressions the operator is
//! applied to; [`Operands`] turns them into the argument tuple the marker is
//! registered for:
//!
//! - a binary operator given one kind uses it on both sides;
//! - operators on places (`++`, `--`, `+=`, ..) receive `&mut` to the first operand;
//! - `*x`, `&x` and `x[i]` receive `&` to their target;
//! - `f(a, b)` is registered as `(F, (A, B))`.
//!
//! [`Operation`]: crate::detect::Operation

mod access;
mod arith;
mod bits;
mod cmp;
mod logic;

pub use access::{AddressOf, CallOperands, Dereference, FnCall, Subscript, SubscriptOperands};
pub use arith::{
    Decrement, Divides, DividesAssign, Increment, Minus, MinusAssign, Modulus, ModulusAssign,
    Multiplies, MultipliesAssign, Negate, Plus, PlusAssign, PostDecrement, PostIncrement,
};
pub use bits::{
    BitAnd, BitAndAssign, BitNot, BitOr, BitOrAssign, BitXor, BitXorAssign, LeftShift,
    LeftShiftAssign, RightShift, RightShiftAssign,
};
pub use cmp::{EqualTo, Greater, GreaterEqual, Less, LessEqual, NotEqualTo};
pub use logic::{LogicalAnd, LogicalNot, LogicalOr};

/// Static description of an operator.
pub trait Operator {
    /// Catalog name, e.g. `"plus"`.
    const NAME: &'static str;
    /// Source spelling, e.g. `"+"`.
    const SYMBOL: &'static str;
    /// Number of operands; `None` for call, which takes any number.
    const ARITY: Option<usize>;
}

/// Completes the operands as written into the tuple `Self` is registered for.
pub trait Operands<Given> {
    type Full;
}

// =============================================================================
// Marker generation
// =============================================================================

/// Declare an operator marker with its metadata.
macro_rules! operator {
    ($(#[$meta:meta])* $name:ident, $key:expr, $symbol:expr, $arity:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl $crate::ops::Operator for $name {
            const NAME: &'static str = $key;
            const SYMBOL: &'static str = $symbol;
            const ARITY: Option<usize> = $arity;
        }
    };
}

/// `x OP y` through `core::ops::$Trait`, plus its `x OP= y` companion.
macro_rules! binary_operator {
    ($(#[$meta:meta])* $name:ident, $key:literal, $symbol:literal, $Trait:ident :: $method:ident, nothrow = $nothrow:expr) => {
        $crate::ops::operator!($(#[$meta])* $name, $key, $symbol, Some(2));
        $crate::ops::binary_operands!($name);

        impl<L: core::ops::$Trait<R>, R> $crate::detect::Operation<(L, R)> for $name {
            type Output = L::Output;
            const NOTHROW: bool = $nothrow;

            #[inline(always)]
            fn apply((l, r): (L, R)) -> L::Output {
                core::ops::$Trait::$method(l, r)
            }
        }

        paste::paste! {
            $crate::ops::operator!(
                #[doc = concat!("`x ", $symbol, "= y`, returning the updated place.")]
                [<$name Assign>], concat!($key, "_assign"), concat!($symbol, "="), Some(2)
            );

            impl<L: 'static, R> $crate::ops::Operands<(L, R)> for [<$name Assign>] {
                type Full = (&'static mut L, R);
            }

            impl<L: 'static> $crate::ops::Operands<(L,)> for [<$name Assign>] {
                type Full = (&'static mut L, L);
            }

            impl<'a, L, R> $crate::detect::Operation<(&'a mut L, R)> for [<$name Assign>]
            where
                L: core::ops::[<$Trait Assign>]<R>,
            {
                type Output = &'a mut L;
                const NOTHROW: bool = $nothrow;

                #[inline(always)]
                fn apply((l, r): (&'a mut L, R)) -> &'a mut L {
                    <L as core::ops::[<$Trait Assign>]<R>>::[<$method _assign>](l, r);
                    l
                }
            }
        }
    };
}

/// `(L,)` means `(L, L)`.
macro_rules! binary_operands {
    ($name:ident) => {
        impl<L, R> $crate::ops::Operands<(L, R)> for $name {
            type Full = (L, R);
        }

        impl<L> $crate::ops::Operands<(L,)> for $name {
            type Full = (L, L);
        }
    };
}

/// Operand kinds pass through unchanged.
macro_rules! unary_operands {
    ($name:ident) => {
        impl<T> $crate::ops::Operands<(T,)> for $name {
            type Full = (T,);
        }
    };
}

pub(crate) use {binary_operands, binary_operator, operator, unary_operands};

// =============================================================================
// Query macros
// =============================================================================

/// Is the operator well-formed for these operand kinds?
#[macro_export]
macro_rules! has_op {
    ($op:ty $(, $arg:ty)+ $(,)?) => {
        $crate::__detect!(
            IS_DETECTED, $op,
            <$op as $crate::ops::Operands<($($arg,)*)>>::Full,
            ()
        )
    };
}

/// Does the operator produce exactly `To` for these operand kinds?
#[macro_export]
macro_rules! has_op_exact {
    ($to:ty, $op:ty $(, $arg:ty)+ $(,)?) => {
        $crate::__detect!(
            IS_EXACT, $op,
            <$op as $crate::ops::Operands<($($arg,)*)>>::Full,
            $to
        )
    };
}

/// Is the operator's result convertible (`TryInto`) to `To`?
#[macro_export]
macro_rules! has_op_convertible {
    ($to:ty, $op:ty $(, $arg:ty)+ $(,)?) => {
        $crate::__detect!(
            IS_CONVERTIBLE, $op,
            <$op as $crate::ops::Operands<($($arg,)*)>>::Full,
            $to
        )
    };
}

/// Is the operator's result infallibly convertible (`Into`) to `To`?
#[macro_export]
macro_rules! has_op_nothrow_convertible {
    ($to:ty, $op:ty $(, $arg:ty)+ $(,)?) => {
        $crate::__detect!(
            IS_NOTHROW_CONVERTIBLE, $op,
            <$op as $crate::ops::Operands<($($arg,)*)>>::Full,
            $to
        )
    };
}

/// Is the operator well-formed and free of panics for these operand kinds?
#[macro_export]
macro_rules! has_op_nothrow {
    ($op:ty $(, $arg:ty)+ $(,)?) => {
        $crate::__detect!(
            IS_NOTHROW, $op,
            <$op as $crate::ops::Operands<($($arg,)*)>>::Full,
            ()
        )
    };
}

/// Result kind of the operator for these operand kinds.
///
/// ```
/// use tola_seq::{op_result, ops::Less};
///
/// let answer: op_result!(Less, u8, u8) = true;
/// assert!(answer);
/// ```
#[macro_export]
macro_rules! op_result {
    ($op:ty $(, $arg:ty)+ $(,)?) => {
        $crate::detect::Detected<$op, <$op as $crate::ops::Operands<($($arg,)*)>>::Full>
    };
}
