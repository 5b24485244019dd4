//! Call signatures and the callable abstraction.
//!
//! A signature is named by its free-function pointer type: `fn(u8, u16) -> bool`
//! describes a call taking a `u8` and a `u16` and returning `bool`.
//! Arguments travel as a tuple; [`Callable`] is implemented for every closure
//! or function whose arity and types match.

use core::any::TypeId;
use core::marker::PhantomData;
use core::mem;
use core::ptr;

/// A function-pointer type used as a call signature.
///
/// Implemented for `fn(A0, .., An) -> R` with up to six arguments. Argument
/// and return types must be `'static`, which rules out signatures that
/// borrow through their parameters (`fn(&str)`); pass owned or `'static`
/// data instead.
pub trait Signature: Copy + PartialEq + 'static {
    /// Arguments as a tuple.
    type Args;

    /// Return type.
    type Output;

    /// The method pointer type on `T` with this signature, taking the
    /// receiver by reference.
    type Method<T: 'static>: Copy + PartialEq + 'static;

    /// Calls the function pointer itself.
    fn invoke(self, args: Self::Args) -> Self::Output;
}

/// Anything that can be called with signature `S`.
pub trait Callable<S: Signature> {
    /// Performs the call.
    fn call(&self, args: S::Args) -> S::Output;
}

/// A method of `T` with signature `S`.
///
/// Implemented for anything callable as `Fn(&T, A0, ..) -> R`: a method
/// named by path (`Register::masked`), a method pointer
/// ([`Signature::Method`]), or a closure taking the receiver first.
pub trait MethodOf<T: 'static, S: Signature>: Copy + 'static {
    /// Calls the method on `object`.
    fn call_on(&self, object: &T, args: S::Args) -> S::Output;
}

macro_rules! impl_signature {
    ($($arg:ident: $ty:ident),*) => {
        impl<R: 'static, $($ty: 'static),*> Signature for fn($($ty),*) -> R {
            type Args = ($($ty,)*);
            type Output = R;
            type Method<T: 'static> = fn(&T, $($ty),*) -> R;

            #[inline]
            fn invoke(self, ($($arg,)*): Self::Args) -> R {
                self($($arg),*)
            }
        }

        impl<T: 'static, M, R: 'static, $($ty: 'static),*> MethodOf<T, fn($($ty),*) -> R> for M
        where
            M: Fn(&T, $($ty),*) -> R + Copy + 'static,
        {
            #[inline]
            fn call_on(&self, object: &T, ($($arg,)*): ($($ty,)*)) -> R {
                self(object, $($arg),*)
            }
        }

        impl<F, R: 'static, $($ty: 'static),*> Callable<fn($($ty),*) -> R> for F
        where
            F: Fn($($ty),*) -> R,
        {
            #[inline]
            fn call(&self, ($($arg,)*): ($($ty,)*)) -> R {
                self($($arg),*)
            }
        }
    };
}

impl_signature!();
impl_signature!(a0: A0);
impl_signature!(a0: A0, a1: A1);
impl_signature!(a0: A0, a1: A1, a2: A2);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);

/// A free function pointer, as a callable target.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct FreeFunction<S>(pub(crate) S);

impl<S: Signature> Callable<S> for FreeFunction<S> {
    #[inline]
    fn call(&self, args: S::Args) -> S::Output {
        self.0.invoke(args)
    }
}

/// Whether two values of the method type `M` name the same method.
///
/// A method named by path is a zero-sized type of its own, so equal types
/// mean equal methods. Method pointers compare by address. Closures that
/// capture state never compare equal.
pub(crate) fn same_method<T, S, M>(lhs: &M, rhs: &M) -> bool
where
    T: 'static,
    S: Signature,
    M: MethodOf<T, S>,
{
    if mem::size_of::<M>() == 0 {
        return true;
    }
    if TypeId::of::<M>() == TypeId::of::<S::Method<T>>() {
        // SAFETY: `M` is `S::Method<T>`.
        let (lhs, rhs) = unsafe {
            (
                mem::transmute_copy::<M, S::Method<T>>(lhs),
                mem::transmute_copy::<M, S::Method<T>>(rhs),
            )
        };
        return lhs == rhs;
    }
    false
}

/// A `'static` object paired with one of its methods.
pub(crate) struct BoundMethod<T: 'static, S, M> {
    object: &'static T,
    method: M,
    _signature: PhantomData<S>,
}

impl<T: 'static, S, M> BoundMethod<T, S, M> {
    pub(crate) fn new(object: &'static T, method: M) -> Self {
        Self {
            object,
            method,
            _signature: PhantomData,
        }
    }
}

impl<T: 'static, S: Signature, M: MethodOf<T, S>> Clone for BoundMethod<T, S, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, S: Signature, M: MethodOf<T, S>> Copy for BoundMethod<T, S, M> {}

impl<T: 'static, S: Signature, M: MethodOf<T, S>> PartialEq for BoundMethod<T, S, M> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.object, other.object) && same_method::<T, S, M>(&self.method, &other.method)
    }
}

impl<T: 'static, S: Signature, M: MethodOf<T, S>> Callable<S> for BoundMethod<T, S, M> {
    #[inline]
    fn call(&self, args: S::Args) -> S::Output {
        self.method.call_on(self.object, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    struct Scale(i32);

    impl Scale {
        fn apply(&self, x: i32) -> i32 {
            self.0 * x
        }
    }

    fn call_with<S: Signature, C: Callable<S>>(target: &C, args: S::Args) -> S::Output {
        target.call(args)
    }

    #[test]
    fn test_closures_are_callable() {
        let offset = 10;
        let closure = move |x: i32| x + offset;
        assert_eq!(call_with::<fn(i32) -> i32, _>(&closure, (5,)), 15);
        assert_eq!(call_with::<fn() -> u8, _>(&|| 7u8, ()), 7);
    }

    fn call_method<T: 'static, S: Signature, M: MethodOf<T, S>>(
        method: M,
        object: &T,
        args: S::Args,
    ) -> S::Output {
        method.call_on(object, args)
    }

    #[test]
    fn test_signature_invoke_and_method() {
        let f: fn(i32, i32) -> i32 = add;
        assert_eq!(f.invoke((2, 3)), 5);

        let scale = Scale(4);
        assert_eq!(call_method::<_, fn(i32) -> i32, _>(Scale::apply, &scale, (3,)), 12);

        let pointer: <fn(i32) -> i32 as Signature>::Method<Scale> = Scale::apply;
        assert_eq!(call_method::<_, fn(i32) -> i32, _>(pointer, &scale, (5,)), 20);
    }

    #[test]
    fn test_same_method_by_name_and_pointer() {
        type Unary = fn(i32) -> i32;

        assert!(same_method::<Scale, Unary, _>(&Scale::apply, &Scale::apply));

        let apply: <Unary as Signature>::Method<Scale> = Scale::apply;
        let twice: <Unary as Signature>::Method<Scale> = |scale, x| scale.apply(x) * 2;
        assert!(same_method::<Scale, Unary, _>(&apply, &apply));
        assert!(!same_method::<Scale, Unary, _>(&apply, &twice));

        let factor = 3;
        let capturing = move |scale: &Scale, x: i32| scale.apply(x) * factor;
        assert!(!same_method::<Scale, Unary, _>(&capturing, &capturing));
    }
}
