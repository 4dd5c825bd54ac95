//! Functional combinators at both levels.

use static_assertions::assert_type_eq_all;
use tola_seq::algebra::{Concatenated, Mapped};
use tola_seq::functional::{
    bind, constant, identity, partial, All, Any, Apply, Bind, Call, Complement, Constant,
    Contradiction, Identity, MakeTuple, Partial, Predicate, Tautology,
};
use tola_seq::primitives::Bool;
use tola_seq::{TupleCat, TupleExt};

assert_type_eq_all!(Apply<Identity, (u8,)>, u8);
assert_type_eq_all!(Apply<Identity, (u8, String, ())>, u8);
assert_type_eq_all!(
    Apply<Identity, (char, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8)>,
    char
);
assert_type_eq_all!(Apply<Constant<()>, (u8, u16)>, ());
assert_type_eq_all!(Apply<Partial<MakeTuple, (u8,)>, (char, bool)>, (u8, char, bool));
assert_type_eq_all!(
    Apply<Bind<MakeTuple, (Constant<u8>, Identity, Constant<u16>)>, (char, bool, ())>,
    (u8, bool, u16)
);
assert_type_eq_all!(Mapped<(u8, u16), Constant<char>>, (char, char));
assert_type_eq_all!(TupleCat!((u8,), (), (u16, u32)), (u8, u16, u32));
assert_type_eq_all!(TupleCat!(), ());
assert_type_eq_all!(Concatenated<(u8,), ()>, (u8,));

#[test]
fn identity_ignores_trailing_arguments() {
    assert_eq!(identity(5), 5);
    assert_eq!(Identity.call(("first", 2, 3.0)), "first");
    assert_eq!((1, 2).map(Identity), (1, 2));
}

#[test]
fn constants_and_trivial_predicates() {
    let mut seven = constant(7u8);
    assert_eq!(seven.call(()), 7);
    assert_eq!(seven.call(("anything", 'x')), 7);
    assert!(Tautology.call((1, 2, 3)));
    assert!(!Contradiction.call(()));
    assert_eq!(("a", 'b').map(constant(0)), (0, 0));
}

#[test]
fn bind_transforms_each_argument() {
    let mut sum_of_squares = bind(|a: i32, b: i32| a + b, (|x: i32| x * x, |y: i32| y * y));
    assert_eq!(sum_of_squares.call((3, 4)), 25);

    let mut nullary = bind(|| "done", ());
    assert_eq!(nullary.call(()), "done");
}

#[test]
fn partial_prepends_fixed_arguments() {
    let mut clamp = partial(|lo: i32, hi: i32, x: i32| x.clamp(lo, hi), (0, 10));
    assert_eq!(clamp.call((-4,)), 0);
    assert_eq!(clamp.call((14,)), 10);
    assert_eq!((3, 12, -1).map(clamp), (3, 10, 0));

    let mut everything = partial(|a: u8, b: u8| a + b, (1u8, 2u8));
    assert_eq!(everything.call(()), 3);

    let mut nothing_fixed = partial(|a: u8| a, ());
    assert_eq!(nothing_fixed.call((9u8,)), 9);
}

#[test]
fn complement_negates() {
    let mut odd = |x: &i32| x % 2 != 0;
    assert!(odd.test(&3));
    let mut even = Complement(odd);
    assert!(even.test(&4));
    assert!((2, 4, 6).all(Complement(|x: &i32| x % 2 != 0)));
}

#[test]
fn vacuous_quantifiers() {
    assert!(!<Any<Tautology, ()> as Bool>::VALUE);
    assert!(<All<Contradiction, ()> as Bool>::VALUE);
    assert!(<Any<Tautology, (u8, u16)> as Bool>::VALUE);
    assert!(!<All<Contradiction, (u8,)> as Bool>::VALUE);
    assert!(<All<Complement<Contradiction>, (u8, char)> as Bool>::VALUE);
}
