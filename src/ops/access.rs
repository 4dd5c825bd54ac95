//! Dereference, address-of, subscript and call.

use core::ops::{Deref, Index};

use super::{operator, Operands};
use crate::detect::Operation;
use crate::syntax_macros::for_each_arity;
use crate::tuple::Tuple;

operator!(
    /// `*x`, through `Deref`.
    Dereference, "dereference", "*", Some(1)
);
operator!(
    /// `&x`, as a raw address.
    AddressOf, "address_of", "&", Some(1)
);
operator!(
    /// `x[i]`, through `Index`.
    Subscript, "subscript", "[]", Some(2)
);
operator!(
    /// `f(args..)`, through `FnOnce`.
    FnCall, "call", "()", None
);

impl<T: 'static> Operands<(T,)> for Dereference {
    type Full = (&'static T,);
}

impl<T: 'static> Operands<(T,)> for AddressOf {
    type Full = (&'static T,);
}

impl<T: 'static, I> Operands<(T, I)> for Subscript {
    type Full = (&'static T, I);
}

impl<'a, T: Deref + ?Sized> Operation<(&'a T,)> for Dereference {
    type Output = &'a T::Target;

    #[inline(always)]
    fn apply((x,): (&'a T,)) -> &'a T::Target {
        x
    }
}

impl<'a, T: ?Sized> Operation<(&'a T,)> for AddressOf {
    type Output = *const T;

    #[inline(always)]
    fn apply((x,): (&'a T,)) -> *const T {
        x
    }
}

impl<'a, T, I> Operation<(&'a T, I)> for Subscript
where
    T: Index<I> + ?Sized + 'a,
    T::Output: 'a,
{
    type Output = &'a T::Output;
    const NOTHROW: bool = false;

    #[inline(always)]
    fn apply((x, i): (&'a T, I)) -> &'a T::Output {
        x.index(i)
    }
}

macro_rules! impl_fn_call {
    ($(($a:ident, $f:ident))*) => {
        impl<Func, Ret $(, $a)*> Operation<(Func, ($($a,)*))> for FnCall
        where
            Func: FnOnce($($a),*) -> Ret,
        {
            type Output = Ret;
            const NOTHROW: bool = false;

            #[inline(always)]
            fn apply((func, args): (Func, ($($a,)*))) -> Ret {
                paste::paste! {
                    let ($([<$a:lower>],)*) = args;
                    func($([<$a:lower>]),*)
                }
            }
        }

        impl<Func $(, $a)*> Operands<(Func, $($a,)*)> for FnCall {
            type Full = (Func, ($($a,)*));
        }
    };
}
for_each_arity!(impl_fn_call);

/// Call operands `(F, (A..))`, split into target and argument kinds.
pub trait CallOperands {
    type Target;
    type Args: Tuple;

    /// Number of arguments.
    const ARGC: usize;
}

impl<F, Args: Tuple> CallOperands for (F, Args) {
    type Target = F;
    type Args = Args;
    const ARGC: usize = Args::ARITY;
}

/// Subscript operands `(&T, I)`, split into target and index kinds.
pub trait SubscriptOperands {
    type Target: ?Sized;
    type Index;
}

impl<'a, T: ?Sized, I> SubscriptOperands for (&'a T, I) {
    type Target = T;
    type Index = I;
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    type Shape = <FnCall as Operands<(fn(u8, char), u8, char)>>::Full;

    assert_type_eq_all!(<Shape as CallOperands>::Args, (u8, char));
    assert_type_eq_all!(<Shape as CallOperands>::Target, fn(u8, char));
    assert_type_eq_all!(
        <<Subscript as Operands<([i32; 2], usize)>>::Full as SubscriptOperands>::Target,
        [i32; 2]
    );

    #[test]
    fn call_counts_arguments() {
        assert_eq!(<Shape as CallOperands>::ARGC, 2);
        assert_eq!(<<FnCall as Operands<(fn(),)>>::Full as CallOperands>::ARGC, 0);
        assert_eq!(FnCall::apply((|a: i32, b: i32| a * b, (6, 7))), 42);
    }

    #[test]
    fn access_goes_through_the_alias() {
        let value = 9u16;
        let alias = &value;
        assert!(core::ptr::eq(Dereference::apply((&alias,)), &value));
        let word = [1u8, 2, 3];
        assert_eq!(*Subscript::apply((&word, 1usize)), 2);
        assert_eq!(AddressOf::apply((&word,)), &word as *const [u8; 3]);
    }
}
