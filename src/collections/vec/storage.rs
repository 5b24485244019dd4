use core::mem::MaybeUninit;

mod sealed {
    pub trait Sealed {}
}

/// Backing buffer of a [`VectorBase`](super::VectorBase).
///
/// Implemented for an inline `[MaybeUninit<T>; N]` and for a borrowed
/// `&mut [MaybeUninit<T>]`. The buffer length is the vector's capacity and
/// never changes.
pub trait VectorStorage<T>: sealed::Sealed {
    /// The whole buffer, initialized or not.
    fn as_uninit(&self) -> &[MaybeUninit<T>];

    /// The whole buffer, mutably.
    fn as_uninit_mut(&mut self) -> &mut [MaybeUninit<T>];
}

impl<T, const N: usize> sealed::Sealed for [MaybeUninit<T>; N] {}

impl<T, const N: usize> VectorStorage<T> for [MaybeUninit<T>; N] {
    #[inline]
    fn as_uninit(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline]
    fn as_uninit_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

impl<T> sealed::Sealed for &mut [MaybeUninit<T>] {}

impl<T> VectorStorage<T> for &mut [MaybeUninit<T>] {
    #[inline]
    fn as_uninit(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline]
    fn as_uninit_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}
