//! Element kinds: registration, identity, and type-level search and filtering.

use core::marker::PhantomData;

use static_assertions::assert_type_eq_all;
use tola_seq::algebra::{FindOf, FirstOf, Filtered, Found, Mapped, Reduced, Folded};
use tola_seq::functional::{All, Any, Complement, MakeTuple, Partial};
use tola_seq::kind::{Category, IsExclusive, IsOwned, IsShared, SameAs, SameKind};
use tola_seq::primitives::Bool;
use tola_seq::{Kind, TupleExt};

#[derive(Debug, Clone, Copy, PartialEq, Kind)]
struct Meters(f64);

#[derive(Debug, Kind)]
struct Borrowed<'a>(&'a str);

mod other {
    use tola_seq::Kind;

    /// Same name as the outer `Meters`, different path.
    #[derive(Kind)]
    pub struct Meters;
}

fn same<A: SameKind<B>, B>() -> bool {
    <A::Out as Bool>::VALUE
}

#[test]
fn derived_kinds_are_distinct_by_path() {
    assert!(same::<Meters, Meters>());
    assert!(!same::<Meters, other::Meters>());
    assert!(!same::<Meters, f64>());
    assert!(same::<Borrowed<'static>, Borrowed<'static>>());
    assert!(!same::<&Meters, Meters>());
    assert_eq!(<<Meters as Kind>::Category as Category>::NAME, "owned");
}

type Mixed = (u8, &'static str, &'static mut Meters, Meters, u8);

#[test]
fn type_level_find() {
    assert_eq!(<FindOf<Mixed, Meters> as Found>::INDEX, Some(3));
    assert_eq!(<FindOf<Mixed, u8> as Found>::INDEX, Some(0));
    assert!(!<FindOf<Mixed, other::Meters> as Found>::VALUE);
    assert!(!<FindOf<(), u8> as Found>::VALUE);
    assert_eq!(<FirstOf<Mixed, IsExclusive> as Found>::INDEX, Some(2));
    assert_eq!(<FirstOf<Mixed, IsShared> as Found>::INDEX, Some(1));
}

#[test]
fn nested_kinds_are_found_by_their_innermost_kind() {
    type Nested = (&'static Option<u8>, &'static Option<bool>, Option<Option<&'static str>>);
    assert_eq!(<FindOf<Nested, &'static Option<bool>> as Found>::INDEX, Some(1));
    assert_eq!(<FindOf<Nested, Option<Option<&'static str>>> as Found>::INDEX, Some(2));
    assert!(!<FindOf<Nested, Option<Option<&'static i32>>> as Found>::VALUE);
    assert!(!same::<&&&str, &&&i32>());
}

type Compound = ([u8; 2], (u8, char), fn(u8) -> bool, *const u8, PhantomData<u8>);

#[test]
fn compound_kinds_take_part_in_search() {
    assert_eq!(<FindOf<Compound, (u8, char)> as Found>::INDEX, Some(1));
    assert_eq!(<FindOf<Compound, fn(u8) -> bool> as Found>::INDEX, Some(2));
    assert!(!<FindOf<Compound, [u8; 3]> as Found>::VALUE);
    assert!(<All<IsOwned, Compound> as Bool>::VALUE);
}

assert_type_eq_all!(Filtered<Compound, SameAs<*const u8>>, (*const u8,));
assert_type_eq_all!(
    Filtered<(&'static Option<u8>, &'static Option<bool>), SameAs<&'static Option<bool>>>,
    (&'static Option<bool>,)
);
assert_type_eq_all!(Filtered<Mixed, SameAs<u8>>, (u8, u8));
assert_type_eq_all!(Filtered<Mixed, IsOwned>, (u8, Meters, u8));
assert_type_eq_all!(
    Filtered<Mixed, Complement<IsOwned>>,
    (&'static str, &'static mut Meters)
);
assert_type_eq_all!(Filtered<(), IsOwned>, ());

assert_type_eq_all!(Mapped<(u8, char), Partial<MakeTuple, (bool,)>>, ((bool, u8), (bool, char)));
assert_type_eq_all!(Reduced<(u8, char, bool), MakeTuple>, ((u8, char), bool));
assert_type_eq_all!(Folded<(), MakeTuple, Meters>, Meters);

#[test]
fn quantifiers_over_kinds() {
    assert!(<All<IsOwned, (u8, Meters)> as Bool>::VALUE);
    assert!(!<All<IsOwned, (u8, &'static Meters)> as Bool>::VALUE);
    assert!(<Any<IsShared, (u8, &'static Meters)> as Bool>::VALUE);
    assert!(!<Any<IsShared, ()> as Bool>::VALUE);
    assert!(<All<IsShared, ()> as Bool>::VALUE);
}

#[test]
fn value_filter_keeps_aliases() {
    let mut m = Meters(1.5);
    let label = "m";
    let (only,) = (7u8, label, &mut m, 9u8).filter::<IsExclusive>();
    only.0 *= 2.0;
    assert_eq!(m, Meters(3.0));

    let owned = (7u8, label, Meters(0.5), 9u8).filter::<IsOwned>();
    assert_eq!(owned, (7u8, Meters(0.5), 9u8));
}
