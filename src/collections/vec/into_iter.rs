use super::Vector;
use core::fmt;
use core::iter::FusedIterator;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

/// Owning iterator over a [`Vector`].
pub struct IntoIter<T, const N: usize> {
    storage: [MaybeUninit<T>; N],
    front: usize,
    back: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `front..back` are initialized and not yet moved out.
        unsafe {
            slice::from_raw_parts(
                self.storage.as_ptr().add(self.front).cast(),
                self.back - self.front,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        // SAFETY: `index` was inside the live range and is now outside it.
        Some(unsafe { self.storage[index].assume_init_read() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: as in `next`.
        Some(unsafe { self.storage[self.back].assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        // SAFETY: `front..back` still hold live elements.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.storage.as_mut_ptr().add(self.front).cast::<T>(),
                remaining,
            ));
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> IntoIter<T, N> {
        let (storage, len) = self.into_parts();
        IntoIter {
            storage,
            front: 0,
            back: len,
        }
    }
}
