use super::raw::RawSpan;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Iterator over the elements of a [`PolySpan`](super::PolySpan).
pub struct Iter<'a, B: ?Sized> {
    raw: RawSpan<B>,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a B>,
}

impl<B: ?Sized> Iter<'_, B> {
    pub(crate) fn new(raw: RawSpan<B>) -> Self {
        Self {
            raw,
            front: 0,
            back: raw.len(),
            _marker: PhantomData,
        }
    }
}

impl<B: ?Sized> Clone for Iter<'_, B> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, B: ?Sized> Iterator for Iter<'a, B> {
    type Item = &'a B;

    #[inline]
    fn next(&mut self) -> Option<&'a B> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: `front < back <= len`; the run is borrowed for `'a`.
        let element = unsafe { &*self.raw.element(self.front) };
        self.front += 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    // Elements are a fixed stride apart, so skipping needs no walk.
    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a B> {
        if n >= self.back - self.front {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl<'a, B: ?Sized> DoubleEndedIterator for Iter<'a, B> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a B> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `front <= back < len`.
        Some(unsafe { &*self.raw.element(self.back) })
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a B> {
        if n >= self.back - self.front {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }
}

impl<B: ?Sized> ExactSizeIterator for Iter<'_, B> {}

impl<B: ?Sized> FusedIterator for Iter<'_, B> {}

/// Mutable iterator over the elements of a [`PolySpanMut`](super::PolySpanMut).
pub struct IterMut<'a, B: ?Sized> {
    raw: RawSpan<B>,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a mut B>,
}

impl<B: ?Sized> IterMut<'_, B> {
    pub(crate) fn new(raw: RawSpan<B>) -> Self {
        Self {
            raw,
            front: 0,
            back: raw.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, B: ?Sized> Iterator for IterMut<'a, B> {
    type Item = &'a mut B;

    #[inline]
    fn next(&mut self) -> Option<&'a mut B> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: each index is yielded once, so the borrows are disjoint.
        let element = unsafe { &mut *self.raw.element(self.front) };
        self.front += 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut B> {
        if n >= self.back - self.front {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl<'a, B: ?Sized> DoubleEndedIterator for IterMut<'a, B> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut B> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: as in `next`.
        Some(unsafe { &mut *self.raw.element(self.back) })
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a mut B> {
        if n >= self.back - self.front {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }
}

impl<B: ?Sized> ExactSizeIterator for IterMut<'_, B> {}

impl<B: ?Sized> FusedIterator for IterMut<'_, B> {}
