//! # Detection Engine
//!
//! Answers "is operation `Op` well-formed for operand kinds `Args`" without
//! evaluating it. An operation is registered by implementing [`Operation`]
//! for the argument tuples it accepts; the answer is `false` wherever no impl
//! applies, and never a compile error.
//!
//! ## Queries
//!
//! | macro | true when |
//! |-------|-----------|
//! | [`is_detected!`](crate::is_detected) | `Op: Operation<Args>` |
//! | [`is_detected_exact!`](crate::is_detected_exact) | ... and `Output == To` |
//! | [`is_detected_convertible!`](crate::is_detected_convertible) | ... and `Output: TryInto<To>` |
//! | [`is_detected_nothrow_convertible!`](crate::is_detected_nothrow_convertible) | ... and `Output: Into<To>` |
//! | [`is_nothrow!`](crate::is_nothrow) | ... and `Op::NOTHROW` |
//!
//! [`detected_or!`](crate::detected_or) names `Output` in type position, or a
//! default kind when the operation is not detected.
//!
//! ## How it works
//!
//! [`Detect<Op, Args, To>`] has a blanket fallback trait whose consts are all
//! `false`, and inherent consts set to `true` under the bounds above. Inherent
//! items win over trait items when their bounds hold, so the path
//! `Detect::<..>::IS_DETECTED` resolves to whichever applies.
//!
//! This resolution happens where the path is written, so the queries answer
//! for concrete kinds. Inside a generic function they see only that
//! function's bounds.
//!
//! ```
//! use tola_seq::detect::Operation;
//! use tola_seq::is_detected;
//!
//! struct Halve;
//! impl Operation<(u32,)> for Halve {
//!     type Output = u32;
//!     fn apply((x,): (u32,)) -> u32 { x / 2 }
//! }
//!
//! assert!(is_detected!(Halve, u32));
//! assert!(!is_detected!(Halve, &str));
//! ```

use core::marker::PhantomData;

use crate::primitives::{False, True};

/// A named operation over a tuple of operand kinds.
#[diagnostic::on_unimplemented(
    message = "operation `{Self}` is not defined for operands `{Args}`",
    label = "not well-formed for these operand kinds",
    note = "probe with `is_detected!` to get `false` instead of an error"
)]
pub trait Operation<Args> {
    /// Kind of the result.
    type Output;

    /// The operation never panics for well-formed operands.
    const NOTHROW: bool = true;

    fn apply(args: Args) -> Self::Output;
}

/// Result kind of a detected operation.
pub type Detected<Op, Args> = <Op as Operation<Args>>::Output;

/// Probe for `Op` applied to `Args`, compared against the kind `To`.
///
/// Never constructed; only its associated consts are read.
pub struct Detect<Op, Args, To = ()>(PhantomData<(fn() -> Op, fn() -> Args, fn() -> To)>);

/// Answers for operations that are not detected.
#[doc(hidden)]
pub trait DetectFallback {
    const IS_DETECTED: bool = false;
    const IS_EXACT: bool = false;
    const IS_CONVERTIBLE: bool = false;
    const IS_NOTHROW_CONVERTIBLE: bool = false;
    const IS_NOTHROW: bool = false;
}

impl<Op, Args, To> DetectFallback for Detect<Op, Args, To> {}

impl<Op: Operation<Args>, Args, To> Detect<Op, Args, To> {
    pub const IS_DETECTED: bool = true;
    pub const IS_NOTHROW: bool = Op::NOTHROW;
}

impl<Op, Args, To> Detect<Op, Args, To>
where
    Op: Operation<Args, Output = To>,
{
    pub const IS_EXACT: bool = true;
}

impl<Op, Args, To> Detect<Op, Args, To>
where
    Op: Operation<Args>,
    Op::Output: TryInto<To>,
{
    pub const IS_CONVERTIBLE: bool = true;
}

impl<Op, Args, To> Detect<Op, Args, To>
where
    Op: Operation<Args>,
    Op::Output: Into<To>,
{
    pub const IS_NOTHROW_CONVERTIBLE: bool = true;
}

/// `detected_or`: `Op`'s result kind when detected, `Default` otherwise.
///
/// Implemented on the detection answer ([`True`] / [`False`]).
pub trait OrDefault<Op, Args, Default> {
    type Out;
}

impl<Op: Operation<Args>, Args, Default> OrDefault<Op, Args, Default> for True {
    type Out = Op::Output;
}

impl<Op, Args, Default> OrDefault<Op, Args, Default> for False {
    type Out = Default;
}

// =============================================================================
// Query macros
// =============================================================================

/// Read one detection const.
#[doc(hidden)]
#[macro_export]
macro_rules! __detect {
    ($flag:ident, $op:ty, $args:ty, $to:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::DetectFallback as _;
        <$crate::detect::Detect<$op, $args, $to>>::$flag
    }};
}

/// Is `Op` well-formed for the operand kinds `Args..`?
///
/// ```
/// use tola_seq::{is_detected, ops::Plus};
///
/// assert!(is_detected!(Plus, i32, i32));
/// assert!(!is_detected!(Plus, i32, &str));
/// ```
#[macro_export]
macro_rules! is_detected {
    ($op:ty $(, $arg:ty)* $(,)?) => {
        $crate::__detect!(IS_DETECTED, $op, ($($arg,)*), ())
    };
}

/// Is `Op` detected for `Args..` with result kind exactly `To`?
#[macro_export]
macro_rules! is_detected_exact {
    ($to:ty, $op:ty $(, $arg:ty)* $(,)?) => {
        $crate::__detect!(IS_EXACT, $op, ($($arg,)*), $to)
    };
}

/// Is `Op` detected for `Args..` with a result convertible to `To`?
///
/// Fallible conversions count (`TryInto`).
#[macro_export]
macro_rules! is_detected_convertible {
    ($to:ty, $op:ty $(, $arg:ty)* $(,)?) => {
        $crate::__detect!(IS_CONVERTIBLE, $op, ($($arg,)*), $to)
    };
}

/// Is `Op` detected for `Args..` with a result infallibly convertible to `To` (`Into`)?
#[macro_export]
macro_rules! is_detected_nothrow_convertible {
    ($to:ty, $op:ty $(, $arg:ty)* $(,)?) => {
        $crate::__detect!(IS_NOTHROW_CONVERTIBLE, $op, ($($arg,)*), $to)
    };
}

/// Is `Op` detected for `Args..` and declared never to panic?
#[macro_export]
macro_rules! is_nothrow {
    ($op:ty $(, $arg:ty)* $(,)?) => {
        $crate::__detect!(IS_NOTHROW, $op, ($($arg,)*), ())
    };
}

/// `Op`'s result kind for `Args..`, or `Default` when it is not detected.
///
/// ```
/// use tola_seq::{detected_or, ops::Plus};
///
/// let sum: detected_or!(u8, Plus, u32, u32) = 7u32;
/// let none: detected_or!(u8, Plus, u32, &str) = 7u8;
/// assert_eq!((sum, none), (7, 7));
/// ```
#[macro_export]
macro_rules! detected_or {
    ($default:ty, $op:ty $(, $arg:ty)* $(,)?) => {
        <$crate::primitives::BoolOf<{ $crate::is_detected!($op $(, $arg)*) }>
            as $crate::detect::OrDefault<$op, ($($arg,)*), $default>>::Out
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Len;

    impl Operation<(&str,)> for Len {
        type Output = usize;
        fn apply((s,): (&str,)) -> usize {
            s.len()
        }
    }

    impl Operation<(u8, u8)> for Len {
        type Output = u8;
        const NOTHROW: bool = false;
        fn apply((a, b): (u8, u8)) -> u8 {
            b - a
        }
    }

    #[test]
    fn detection_answers() {
        assert!(is_detected!(Len, &str));
        assert!(!is_detected!(Len, char));
        assert!(is_detected_exact!(usize, Len, &str));
        assert!(!is_detected_exact!(u64, Len, &str));
        assert!(is_detected_convertible!(u32, Len, &str));
        assert!(!is_detected_nothrow_convertible!(u32, Len, &str));
        assert!(is_detected_nothrow_convertible!(u64, Len, u8, u8));
        assert!(!is_detected_convertible!(u64, Len, char));
    }

    #[test]
    fn nothrow_follows_registration() {
        assert!(is_nothrow!(Len, &str));
        assert!(!is_nothrow!(Len, u8, u8));
        assert!(!is_nothrow!(Len, ()));
    }

    #[test]
    fn fallback_names_default() {
        let found: detected_or!(char, Len, &str) = 3usize;
        let missing: detected_or!(char, Len, bool) = 'x';
        assert_eq!(found, Len::apply(("abc",)));
        assert_eq!(missing, 'x');
    }
}
