//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// Const bool as a type.
pub type BoolOf<const B: bool> = <() as SelectBool<B>>::Out;

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <BoolOf<C> as Bool>::If<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_tables() {
        assert!(<<True as Bool>::And<True> as Bool>::VALUE);
        assert!(!<<True as Bool>::And<False> as Bool>::VALUE);
        assert!(<<False as Bool>::Or<True> as Bool>::VALUE);
        assert!(!<<False as Bool>::Or<False> as Bool>::VALUE);
        assert!(<<False as Bool>::Not as Bool>::VALUE);
    }

    #[test]
    fn const_selection() {
        let picked: If<true, u8, u16> = 7u8;
        assert_eq!(picked, 7);
        assert!(!<BoolOf<false> as Bool>::VALUE);
    }
}
