//! `Delegate` — a non-owning, copyable callable.

use super::signature::{same_method, Callable, MethodOf, Signature};
use crate::error::{raise, FunctionError};
use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::{self, NonNull};

/// Room for a bound method: methods named by path take none of it, a method
/// pointer takes all of it.
type MethodSlot = MaybeUninit<usize>;

struct MethodVTable<S: Signature> {
    invoke: unsafe fn(NonNull<()>, &MethodSlot, S::Args) -> S::Output,
    equals: unsafe fn(&MethodSlot, &MethodSlot) -> bool,
    type_id: fn() -> TypeId,
}

struct MethodTarget<T, S, M>(PhantomData<(fn() -> T, S, M)>);

impl<T, S, M> MethodTarget<T, S, M>
where
    T: 'static,
    S: Signature,
    M: MethodOf<T, S>,
{
    const VTABLE: &'static MethodVTable<S> = &MethodVTable {
        invoke: Self::invoke,
        equals: Self::equals,
        type_id: TypeId::of::<M>,
    };

    unsafe fn read(slot: &MethodSlot) -> M {
        slot.as_ptr().cast::<M>().read()
    }

    unsafe fn invoke(object: NonNull<()>, slot: &MethodSlot, args: S::Args) -> S::Output {
        Self::read(slot).call_on(object.cast::<T>().as_ref(), args)
    }

    unsafe fn equals(lhs: &MethodSlot, rhs: &MethodSlot) -> bool {
        same_method::<T, S, M>(&Self::read(lhs), &Self::read(rhs))
    }
}

enum Binding<'a, S: Signature> {
    Empty,
    Function(S),
    Functor(&'a dyn Callable<S>),
    Method {
        object: NonNull<()>,
        method: MethodSlot,
        vtable: &'static MethodVTable<S>,
        _object: PhantomData<&'a ()>,
    },
}

impl<S: Signature> Clone for Binding<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Signature> Copy for Binding<'_, S> {}

/// A borrowed callable with signature `S`.
///
/// A delegate refers to its target rather than owning it: a free function, a
/// functor borrowed for `'a`, or an object borrowed for `'a` together with
/// one of its methods. It is `Copy` and at most four pointers wide.
///
/// ```rust
/// use etl::function::Delegate;
///
/// struct Counter {
///     step: u32,
/// }
///
/// impl Counter {
///     fn advance(&self, from: u32) -> u32 {
///         from + self.step
///     }
/// }
///
/// let counter = Counter { step: 3 };
/// let d: Delegate<'_, fn(u32) -> u32> = Delegate::from_method(&counter, Counter::advance);
/// assert_eq!(d.call((4,)), 7);
/// assert_eq!(d, Delegate::from_method(&counter, Counter::advance));
/// ```
pub struct Delegate<'a, S: Signature> {
    binding: Binding<'a, S>,
}

impl<S: Signature> Clone for Delegate<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Signature> Copy for Delegate<'_, S> {}

impl<'a, S: Signature> Delegate<'a, S> {
    /// Creates an unbound delegate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            binding: Binding::Empty,
        }
    }

    /// Binds a free function.
    #[inline]
    pub const fn from_fn(function: S) -> Self {
        Self {
            binding: Binding::Function(function),
        }
    }

    /// Binds a functor or closure by reference.
    #[inline]
    pub fn from_callable<F: Callable<S>>(functor: &'a F) -> Self {
        Self {
            binding: Binding::Functor(functor),
        }
    }

    /// Binds `method` on `object`.
    ///
    /// `method` is a method named by path (`Counter::advance`), a method
    /// pointer, or a non-capturing closure taking the receiver first.
    /// Anything larger than a pointer fails to compile.
    pub fn from_method<T, M>(object: &'a T, method: M) -> Self
    where
        T: 'static,
        M: MethodOf<T, S>,
    {
        const {
            assert!(
                mem::size_of::<M>() <= mem::size_of::<MethodSlot>()
                    && mem::align_of::<M>() <= mem::align_of::<MethodSlot>(),
                "a delegate method must be a named method or a method pointer"
            );
        };

        let mut slot = MethodSlot::uninit();
        // SAFETY: `M` fits the slot in size and alignment, checked above.
        unsafe { slot.as_mut_ptr().cast::<M>().write(method) };
        Self {
            binding: Binding::Method {
                object: NonNull::from(object).cast(),
                method: slot,
                vtable: MethodTarget::<T, S, M>::VTABLE,
                _object: PhantomData,
            },
        }
    }

    /// Rebinds to a free function.
    #[inline]
    pub fn set_fn(&mut self, function: S) {
        *self = Self::from_fn(function);
    }

    /// Rebinds to a borrowed functor.
    #[inline]
    pub fn set_callable<F: Callable<S>>(&mut self, functor: &'a F) {
        *self = Self::from_callable(functor);
    }

    /// Rebinds to a method on `object`.
    #[inline]
    pub fn set_method<T, M>(&mut self, object: &'a T, method: M)
    where
        T: 'static,
        M: MethodOf<T, S>,
    {
        *self = Self::from_method(object, method);
    }

    /// Unbinds the delegate.
    #[inline]
    pub fn clear(&mut self) {
        self.binding = Binding::Empty;
    }

    /// Returns `true` if a target is bound.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !matches!(self.binding, Binding::Empty)
    }

    /// Returns `true` if no target is bound.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.binding, Binding::Empty)
    }

    fn dispatch(&self, args: S::Args) -> Result<S::Output, S::Args> {
        match self.binding {
            Binding::Empty => Err(args),
            Binding::Function(function) => Ok(function.invoke(args)),
            Binding::Functor(functor) => Ok(functor.call(args)),
            Binding::Method {
                object,
                method,
                vtable,
                ..
            } => {
                // SAFETY: `object`, `method` and `vtable` were paired in
                // `from_method`, and the borrow is alive for `'a`.
                Ok(unsafe { (vtable.invoke)(object, &method, args) })
            }
        }
    }

    /// Invokes the target.
    ///
    /// # Panics
    /// Panics with [`FunctionError::Uninitialized`] if unbound, after
    /// reporting it to the installed error handler.
    #[inline]
    pub fn call(&self, args: S::Args) -> S::Output {
        match self.try_call(args) {
            Ok(output) => output,
            Err(err) => panic!("{err}"),
        }
    }

    /// Invokes the target, or reports [`FunctionError::Uninitialized`].
    #[inline]
    pub fn try_call(&self, args: S::Args) -> Result<S::Output, FunctionError> {
        self.dispatch(args)
            .map_err(|_| raise(FunctionError::Uninitialized))
    }

    /// Invokes the target if bound.
    #[inline]
    pub fn call_if(&self, args: S::Args) -> Option<S::Output> {
        self.dispatch(args).ok()
    }

    /// Invokes the target, or `alternative` with the same arguments when unbound.
    #[inline]
    pub fn call_or<A>(&self, args: S::Args, alternative: A) -> S::Output
    where
        A: FnOnce(S::Args) -> S::Output,
    {
        self.dispatch(args).unwrap_or_else(alternative)
    }

    /// Invokes the target, or the free function `alternative` when unbound.
    #[inline]
    pub fn call_or_fn(&self, args: S::Args, alternative: S) -> S::Output {
        self.dispatch(args)
            .unwrap_or_else(|args| alternative.invoke(args))
    }
}

impl<S: Signature> Default for Delegate<'_, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Signature> From<S> for Delegate<'_, S> {
    fn from(function: S) -> Self {
        Self::from_fn(function)
    }
}

impl<S: Signature> Callable<S> for Delegate<'_, S> {
    fn call(&self, args: S::Args) -> S::Output {
        Delegate::call(self, args)
    }
}

impl<S: Signature> PartialEq for Delegate<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.binding, &other.binding) {
            (Binding::Empty, Binding::Empty) => true,
            (Binding::Function(lhs), Binding::Function(rhs)) => lhs == rhs,
            (Binding::Functor(lhs), Binding::Functor(rhs)) => ptr::addr_eq(
                *lhs as *const dyn Callable<S>,
                *rhs as *const dyn Callable<S>,
            ),
            (
                Binding::Method {
                    object: lhs_object,
                    method: lhs_method,
                    vtable: lhs_vtable,
                    ..
                },
                Binding::Method {
                    object: rhs_object,
                    method: rhs_method,
                    vtable: rhs_vtable,
                    ..
                },
            ) => {
                lhs_object == rhs_object
                    && (lhs_vtable.type_id)() == (rhs_vtable.type_id)()
                    // SAFETY: both slots hold a method of the same type.
                    && unsafe { (lhs_vtable.equals)(lhs_method, rhs_method) }
            }
            _ => false,
        }
    }
}

impl<S: Signature> fmt::Debug for Delegate<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.binding {
            Binding::Empty => "empty",
            Binding::Function(_) => "function",
            Binding::Functor(_) => "functor",
            Binding::Method { .. } => "method",
        };
        f.debug_struct("Delegate").field("kind", &kind).finish()
    }
}
