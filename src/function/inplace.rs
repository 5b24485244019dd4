//! `InplaceFunction` — an owning, fixed-size, type-erased callable.
//!
//! The bound target lives inside the function object in an inline byte
//! buffer; nothing is allocated. Each concrete target type gets exactly one
//! static dispatch table with its invoke/clone/drop/equals entries, so the
//! container itself is not generic over the target.
//!
//! Layout:
//! - `vtable`: `None` when empty, otherwise the target type's table.
//! - `storage`: `SIZE` bytes aligned to [`INPLACE_FUNCTION_ALIGNMENT`].
//!
//! Moves are bitwise, so the table has no move entry: moving an
//! `InplaceFunction` moves its target.

use super::signature::{BoundMethod, Callable, FreeFunction, MethodOf, Signature};
use crate::config::{DEFAULT_INPLACE_FUNCTION_SIZE, INPLACE_FUNCTION_ALIGNMENT};
use crate::error::{raise, FunctionError};
use core::any::TypeId;
use core::cell::UnsafeCell;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ptr;

// Targets are called through `&self` and may mutate their captures through
// a `Cell` or an atomic, so the bytes sit behind an `UnsafeCell`.
#[repr(C, align(16))]
struct InlineStorage<const SIZE: usize> {
    bytes: UnsafeCell<[MaybeUninit<u8>; SIZE]>,
}

const _: () = assert!(mem::align_of::<InlineStorage<0>>() == INPLACE_FUNCTION_ALIGNMENT);

impl<const SIZE: usize> InlineStorage<SIZE> {
    const fn uninit() -> Self {
        Self {
            bytes: UnsafeCell::new([MaybeUninit::uninit(); SIZE]),
        }
    }

    #[inline]
    fn as_ptr(&self) -> *const u8 {
        self.bytes.get().cast_const().cast()
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.get_mut().as_mut_ptr().cast()
    }
}

struct VTable<S: Signature> {
    invoke: unsafe fn(*const u8, S::Args) -> S::Output,
    clone: unsafe fn(*const u8, *mut u8),
    drop: unsafe fn(*mut u8),
    equals: Option<unsafe fn(*const u8, *const u8) -> bool>,
    type_id: fn() -> TypeId,
    size: usize,
}

struct Target<F, S>(PhantomData<(fn() -> F, S)>);

impl<F, S> Target<F, S>
where
    F: Callable<S> + Clone + 'static,
    S: Signature,
{
    const VTABLE: &'static VTable<S> = &VTable {
        invoke: Self::invoke,
        clone: Self::clone_into,
        drop: Self::drop_in_place,
        equals: None,
        type_id: TypeId::of::<F>,
        size: mem::size_of::<F>(),
    };

    unsafe fn invoke(storage: *const u8, args: S::Args) -> S::Output {
        (*storage.cast::<F>()).call(args)
    }

    unsafe fn clone_into(source: *const u8, destination: *mut u8) {
        destination
            .cast::<F>()
            .write((*source.cast::<F>()).clone());
    }

    unsafe fn drop_in_place(storage: *mut u8) {
        ptr::drop_in_place(storage.cast::<F>());
    }
}

impl<F, S> Target<F, S>
where
    F: Callable<S> + Clone + PartialEq + 'static,
    S: Signature,
{
    const COMPARABLE_VTABLE: &'static VTable<S> = &VTable {
        invoke: Self::invoke,
        clone: Self::clone_into,
        drop: Self::drop_in_place,
        equals: Some(Self::equals),
        type_id: TypeId::of::<F>,
        size: mem::size_of::<F>(),
    };

    unsafe fn equals(lhs: *const u8, rhs: *const u8) -> bool {
        *lhs.cast::<F>() == *rhs.cast::<F>()
    }
}

/// An owning callable with signature `S`, stored inline in `SIZE` bytes.
///
/// ```rust
/// use etl::function::InplaceFunction;
///
/// fn twice(x: i32) -> i32 {
///     x * 2
/// }
///
/// let mut f: InplaceFunction<fn(i32) -> i32> = InplaceFunction::from_fn(twice);
/// assert_eq!(f.call((21,)), 42);
///
/// let offset = 5;
/// f.set_callable(move |x: i32| x + offset);
/// assert_eq!(f.call((1,)), 6);
///
/// f.clear();
/// assert_eq!(f.call_if((1,)), None);
/// ```
///
/// Binding a target larger than `SIZE` bytes, or aligned more strictly than
/// [`INPLACE_FUNCTION_ALIGNMENT`], fails to compile:
///
/// ```compile_fail
/// use etl::function::InplaceFunction;
///
/// #[derive(Clone, Copy)]
/// #[repr(align(32))]
/// struct Wide(u8);
///
/// impl Wide {
///     fn get(self) -> u8 {
///         self.0
///     }
/// }
///
/// let wide = Wide(1);
/// let f: InplaceFunction<fn() -> u8> = InplaceFunction::from_callable(move || wide.get());
/// ```
pub struct InplaceFunction<S: Signature, const SIZE: usize = DEFAULT_INPLACE_FUNCTION_SIZE> {
    vtable: Option<&'static VTable<S>>,
    storage: InlineStorage<SIZE>,
    // The target's type is erased, so its auto traits are unknown.
    _not_send: PhantomData<*const ()>,
}

impl<S: Signature, const SIZE: usize> InplaceFunction<S, SIZE> {
    /// Creates an empty function.
    #[inline]
    pub const fn new() -> Self {
        Self {
            vtable: None,
            storage: InlineStorage::uninit(),
            _not_send: PhantomData,
        }
    }

    fn store<F: 'static>(target: F, vtable: &'static VTable<S>) -> Self {
        const {
            assert!(
                mem::size_of::<F>() <= SIZE,
                "callable does not fit in the inplace_function storage"
            );
            assert!(
                mem::align_of::<F>() <= INPLACE_FUNCTION_ALIGNMENT,
                "callable is aligned more strictly than the inplace_function storage"
            );
        };

        let mut function = Self::new();
        // SAFETY: size and alignment were checked above; the storage is ours.
        unsafe { function.storage.as_mut_ptr().cast::<F>().write(target) };
        function.vtable = Some(vtable);
        function
    }

    /// Binds a free function. Two functions bound this way compare equal when
    /// they hold the same function pointer.
    ///
    /// A function named by path only coerces to `S` once `S` is known, so
    /// where nothing else fixes it, cast first: `from_fn(halve as fn(u32) -> u32)`.
    pub fn from_fn(function: S) -> Self {
        Self::store(FreeFunction(function), Target::<FreeFunction<S>, S>::COMPARABLE_VTABLE)
    }

    /// Binds a closure or functor by value.
    ///
    /// Targets bound this way never compare equal, not even to a clone of
    /// themselves; use [`from_comparable`](Self::from_comparable) for that.
    /// Zero-sized targets (non-capturing closures, fn items) occupy no storage.
    pub fn from_callable<F>(callable: F) -> Self
    where
        F: Callable<S> + Clone + 'static,
    {
        Self::store(callable, Target::<F, S>::VTABLE)
    }

    /// Binds a functor whose own `PartialEq` decides equality.
    pub fn from_comparable<F>(callable: F) -> Self
    where
        F: Callable<S> + Clone + PartialEq + 'static,
    {
        Self::store(callable, Target::<F, S>::COMPARABLE_VTABLE)
    }

    /// Binds `method` to a `'static` object.
    ///
    /// `method` is usually named by path (`Register::masked`). Two such
    /// bindings compare equal when both the object address and the method
    /// match; see [`MethodOf`] for what counts as the same method.
    pub fn from_method<T, M>(object: &'static T, method: M) -> Self
    where
        T: 'static,
        M: MethodOf<T, S>,
    {
        Self::store(
            BoundMethod::<T, S, M>::new(object, method),
            Target::<BoundMethod<T, S, M>, S>::COMPARABLE_VTABLE,
        )
    }

    /// Rebinds to a free function.
    pub fn set_fn(&mut self, function: S) {
        *self = Self::from_fn(function);
    }

    /// Rebinds to a closure or functor.
    pub fn set_callable<F>(&mut self, callable: F)
    where
        F: Callable<S> + Clone + 'static,
    {
        *self = Self::from_callable(callable);
    }

    /// Rebinds to a comparable functor.
    pub fn set_comparable<F>(&mut self, callable: F)
    where
        F: Callable<S> + Clone + PartialEq + 'static,
    {
        *self = Self::from_comparable(callable);
    }

    /// Rebinds to a method on a `'static` object.
    pub fn set_method<T, M>(&mut self, object: &'static T, method: M)
    where
        T: 'static,
        M: MethodOf<T, S>,
    {
        *self = Self::from_method(object, method);
    }

    /// Destroys the target, leaving the function empty.
    pub fn clear(&mut self) {
        if let Some(vtable) = self.vtable.take() {
            // SAFETY: a vtable is only installed together with a live target
            // of the matching type.
            unsafe { (vtable.drop)(self.storage.as_mut_ptr()) };
        }
    }

    /// Returns `true` if a target is bound.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.vtable.is_some()
    }

    /// Returns `true` if no target is bound.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.vtable.is_none()
    }

    #[inline]
    fn dispatch(&self, args: S::Args) -> Result<S::Output, S::Args> {
        match self.vtable {
            // SAFETY: see `clear`.
            Some(vtable) => Ok(unsafe { (vtable.invoke)(self.storage.as_ptr(), args) }),
            None => Err(args),
        }
    }

    /// Invokes the target.
    ///
    /// # Panics
    /// Panics with [`FunctionError::Uninitialized`] if no target is bound,
    /// after reporting it to the installed error handler.
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

    /// Invokes the target if one is bound; `None` means nothing was called.
    #[inline]
    pub fn call_if(&self, args: S::Args) -> Option<S::Output> {
        self.dispatch(args).ok()
    }

    /// Invokes the target, or `alternative` with the same arguments when empty.
    #[inline]
    pub fn call_or<A>(&self, args: S::Args, alternative: A) -> S::Output
    where
        A: FnOnce(S::Args) -> S::Output,
    {
        self.dispatch(args).unwrap_or_else(alternative)
    }

    /// Invokes the target, or the free function `alternative` when empty.
    #[inline]
    pub fn call_or_fn(&self, args: S::Args, alternative: S) -> S::Output {
        self.dispatch(args)
            .unwrap_or_else(|args| alternative.invoke(args))
    }

    /// Exchanges targets with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Inline storage capacity in bytes.
    #[inline]
    pub const fn size() -> usize {
        SIZE
    }

    /// Alignment of the inline storage.
    #[inline]
    pub const fn alignment() -> usize {
        INPLACE_FUNCTION_ALIGNMENT
    }

    /// Size in bytes of the bound target; zero when empty.
    #[inline]
    pub fn target_size(&self) -> usize {
        self.vtable.map_or(0, |vtable| vtable.size)
    }

    /// Moves the target into a function with at least as much storage.
    pub fn widen<const LARGER: usize>(self) -> InplaceFunction<S, LARGER> {
        const {
            assert!(
                LARGER >= SIZE,
                "an inplace_function can only be moved into one at least as large"
            )
        };

        let source = ManuallyDrop::new(self);
        let mut widened = InplaceFunction::<S, LARGER>::new();
        if let Some(vtable) = source.vtable {
            // SAFETY: `vtable.size <= SIZE <= LARGER`, both buffers share the
            // same alignment, and `source` is never dropped, so the bitwise
            // copy is a move.
            unsafe {
                ptr::copy_nonoverlapping(
                    source.storage.as_ptr(),
                    widened.storage.as_mut_ptr(),
                    vtable.size,
                );
            }
            widened.vtable = Some(vtable);
        }
        widened
    }
}

impl<S: Signature, const SIZE: usize> Default for InplaceFunction<S, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Signature, const SIZE: usize> From<S> for InplaceFunction<S, SIZE> {
    fn from(function: S) -> Self {
        Self::from_fn(function)
    }
}

impl<S: Signature, const SIZE: usize> Callable<S> for InplaceFunction<S, SIZE> {
    fn call(&self, args: S::Args) -> S::Output {
        InplaceFunction::call(self, args)
    }
}

impl<S: Signature, const SIZE: usize> Clone for InplaceFunction<S, SIZE> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        if let Some(vtable) = self.vtable {
            // SAFETY: the target is live and of the vtable's type; `copy` has
            // identical storage layout.
            unsafe { (vtable.clone)(self.storage.as_ptr(), copy.storage.as_mut_ptr()) };
            copy.vtable = Some(vtable);
        }
        copy
    }
}

impl<S: Signature, const SIZE: usize> Drop for InplaceFunction<S, SIZE> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<S: Signature, const SIZE: usize> PartialEq for InplaceFunction<S, SIZE> {
    fn eq(&self, other: &Self) -> bool {
        match (self.vtable, other.vtable) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => {
                if (lhs.type_id)() != (rhs.type_id)() {
                    return false;
                }
                match lhs.equals.or(rhs.equals) {
                    // SAFETY: both targets are live values of the same type.
                    Some(equals) => unsafe { equals(self.storage.as_ptr(), other.storage.as_ptr()) },
                    None => false,
                }
            }
            _ => false,
        }
    }
}

impl<S: Signature, const SIZE: usize> fmt::Debug for InplaceFunction<S, SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InplaceFunction")
            .field("valid", &self.is_valid())
            .field("size", &SIZE)
            .field("target_size", &self.target_size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn square(x: i32) -> i32 {
        x * x
    }

    fn negate(x: i32) -> i32 {
        -x
    }

    #[test]
    fn test_free_function_matches_direct_call() {
        let f: InplaceFunction<fn(i32) -> i32> = InplaceFunction::from_fn(square);
        assert!(f.is_valid());
        assert_eq!(f.call((7,)), square(7));
    }

    #[test]
    fn test_empty_call_if_and_call_or() {
        let f: InplaceFunction<fn(i32) -> i32> = InplaceFunction::new();
        assert!(f.is_empty());
        assert_eq!(f.call_if((3,)), None);
        assert_eq!(f.call_or((3,), |(x,)| x + 100), 103);
        assert_eq!(f.call_or_fn((3,), negate), -3);
        assert_eq!(f.try_call((3,)), Err(FunctionError::Uninitialized));
    }

    #[test]
    #[should_panic(expected = "inplace_function: uninitialized")]
    fn test_empty_call_panics() {
        let f: InplaceFunction<fn() -> ()> = InplaceFunction::default();
        f.call(());
    }

    #[test]
    fn test_clone_and_drop_run_through_vtable() {
        let shared = Rc::new(5);
        let captured = Rc::clone(&shared);
        let f: InplaceFunction<fn(i32) -> i32> =
            InplaceFunction::from_callable(move |x: i32| x + *captured);
        assert_eq!(Rc::strong_count(&shared), 2);

        let g = f.clone();
        assert_eq!(Rc::strong_count(&shared), 3);
        assert_eq!(g.call((1,)), 6);

        drop(f);
        drop(g);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_clear_destroys_target() {
        let shared = Rc::new(());
        let captured = Rc::clone(&shared);
        let mut f: InplaceFunction<fn()> = InplaceFunction::from_callable(move || {
            let _ = &captured;
        });
        f.clear();
        assert_eq!(Rc::strong_count(&shared), 1);
        assert!(!f.is_valid());
    }

    #[test]
    fn test_widen_moves_target() {
        let base = 40;
        let f: InplaceFunction<fn(i32) -> i32, 16> =
            InplaceFunction::from_callable(move |x: i32| x + base);
        let wide: InplaceFunction<fn(i32) -> i32, 64> = f.widen();
        assert_eq!(wide.call((2,)), 42);
        assert_eq!(InplaceFunction::<fn(i32) -> i32, 64>::size(), 64);
    }

    #[test]
    fn test_target_mutates_its_own_capture() {
        let hits = core::cell::Cell::new(0u32);
        let f: InplaceFunction<fn() -> u32> = InplaceFunction::from_callable(move || {
            hits.set(hits.get() + 1);
            hits.get()
        });
        assert_eq!(f.call(()), 1);
        assert_eq!(f.call(()), 2);

        // The clone carries the capture's current state and diverges from it.
        let g = f.clone();
        assert_eq!(g.call(()), 3);
        assert_eq!(f.call(()), 3);
    }

    #[test]
    fn test_target_size_reports_capture() {
        let a = 1u64;
        let b = 2u64;
        let f: InplaceFunction<fn() -> u64> = InplaceFunction::from_callable(move || a + b);
        assert_eq!(f.target_size(), 16);
        let zst: InplaceFunction<fn() -> u64> = InplaceFunction::from_callable(|| 3u64);
        assert_eq!(zst.target_size(), 0);
    }
}
