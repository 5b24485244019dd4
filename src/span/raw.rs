//! Untyped element addressing shared by the shared and exclusive spans.

use core::mem;
use core::ptr::NonNull;

/// The caller's `fn(*mut T) -> *mut B`, with `T` erased.
pub(crate) struct Upcast<B: ?Sized> {
    function: *const (),
    thunk: unsafe fn(*const (), *mut u8) -> *mut B,
}

impl<B: ?Sized> Clone for Upcast<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for Upcast<B> {}

impl<B: ?Sized> Upcast<B> {
    pub(crate) fn new<T>(function: fn(*mut T) -> *mut B) -> Self {
        Self {
            function: function as *const (),
            thunk: upcast_thunk::<T, B>,
        }
    }
}

unsafe fn upcast_thunk<T, B: ?Sized>(function: *const (), element: *mut u8) -> *mut B {
    let function = mem::transmute_copy::<*const (), fn(*mut T) -> *mut B>(&function);
    function(element.cast())
}

/// Base address, element count and stride of a run of same-typed elements.
pub(crate) struct RawSpan<B: ?Sized> {
    data: NonNull<u8>,
    len: usize,
    stride: usize,
    upcast: Option<Upcast<B>>,
}

impl<B: ?Sized> Clone for RawSpan<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for RawSpan<B> {}

impl<B: ?Sized> RawSpan<B> {
    pub(crate) const fn empty() -> Self {
        Self {
            data: NonNull::dangling(),
            len: 0,
            stride: 0,
            upcast: None,
        }
    }

    pub(crate) fn new<T>(data: NonNull<T>, len: usize, upcast: fn(*mut T) -> *mut B) -> Self {
        Self {
            data: data.cast(),
            len,
            stride: mem::size_of::<T>(),
            upcast: Some(Upcast::new(upcast)),
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn stride(&self) -> usize {
        self.stride
    }

    /// Pointer to element `index` viewed as `B`.
    ///
    /// # Safety
    /// `index < self.len()`.
    #[inline]
    pub(crate) unsafe fn element(&self, index: usize) -> *mut B {
        debug_assert!(index < self.len);
        match self.upcast {
            Some(upcast) => (upcast.thunk)(
                upcast.function,
                self.data.as_ptr().add(index * self.stride),
            ),
            // A span without an upcast has no elements.
            None => core::hint::unreachable_unchecked(),
        }
    }

    /// The elements `offset..offset + count`.
    ///
    /// # Safety
    /// `offset + count <= self.len()`.
    #[inline]
    pub(crate) unsafe fn slice(&self, offset: usize, count: usize) -> Self {
        debug_assert!(offset + count <= self.len);
        Self {
            data: NonNull::new_unchecked(self.data.as_ptr().add(offset * self.stride)),
            len: count,
            stride: self.stride,
            upcast: self.upcast,
        }
    }
}
