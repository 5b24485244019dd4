use super::iter::{Iter, IterMut};
use super::raw::RawSpan;
use crate::error::{raise, SpanError};
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::ptr::NonNull;

#[inline]
fn check_index(index: usize, len: usize) -> Result<(), SpanError> {
    if index < len {
        Ok(())
    } else {
        Err(raise(SpanError::OutOfRange { index, len }))
    }
}

#[inline]
fn check_range(offset: usize, count: usize, len: usize) -> Result<(), SpanError> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(raise(SpanError::OutOfRange {
            index: offset.saturating_add(count),
            len,
        })),
    }
}

/// A shared view of a run of same-typed elements, seen through base type `B`.
///
/// `B` is usually a trait object. The element type is fixed when the span is
/// built and only its size, the stride, is kept; every element is reached by
/// stepping that many bytes from the start of the run.
pub struct PolySpan<'a, B: ?Sized> {
    raw: RawSpan<B>,
    _marker: PhantomData<&'a B>,
}

impl<B: ?Sized> Clone for PolySpan<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for PolySpan<'_, B> {}

impl<'a, B: ?Sized> PolySpan<'a, B> {
    /// Creates a span with no elements and an element size of zero.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            raw: RawSpan::empty(),
            _marker: PhantomData,
        }
    }

    /// Views `elements` through `upcast`.
    ///
    /// Prefer [`poly_span!`](crate::poly_span), which supplies a checked upcast.
    ///
    /// # Safety
    /// `upcast` must return its argument re-typed as `B`: the same address,
    /// and a pointee that lies within the `T` it was given.
    pub unsafe fn new<T>(elements: &'a [T], upcast: fn(*mut T) -> *mut B) -> Self {
        let data = NonNull::from(elements).cast::<T>();
        Self::from_raw(RawSpan::new(data, elements.len(), upcast))
    }

    #[inline]
    pub(crate) const fn from_raw(raw: RawSpan<B>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the span has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Size in bytes of the concrete element type.
    #[inline]
    pub const fn size_of_element(&self) -> usize {
        self.raw.stride()
    }

    /// Size in bytes of the viewed run.
    #[inline]
    pub const fn size_bytes(&self) -> usize {
        self.raw.len() * self.raw.stride()
    }

    /// Element `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a B> {
        if index < self.len() {
            // SAFETY: bounds checked; the run is borrowed for `'a`.
            Some(unsafe { &*self.raw.element(index) })
        } else {
            None
        }
    }

    /// Element `index`, reporting [`SpanError::OutOfRange`] past the end.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&'a B, SpanError> {
        check_index(index, self.len())?;
        // SAFETY: bounds checked above.
        Ok(unsafe { &*self.raw.element(index) })
    }

    /// First element.
    #[inline]
    pub fn front(&self) -> Option<&'a B> {
        self.get(0)
    }

    /// Last element.
    #[inline]
    pub fn back(&self) -> Option<&'a B> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// The first `count` elements.
    pub fn first(&self, count: usize) -> Result<Self, SpanError> {
        self.subspan(0, count)
    }

    /// The last `count` elements.
    pub fn last(&self, count: usize) -> Result<Self, SpanError> {
        check_range(0, count, self.len())?;
        self.subspan(self.len() - count, count)
    }

    /// `count` elements starting at `offset`.
    pub fn subspan(&self, offset: usize, count: usize) -> Result<Self, SpanError> {
        check_range(offset, count, self.len())?;
        // SAFETY: range checked above.
        Ok(Self::from_raw(unsafe { self.raw.slice(offset, count) }))
    }

    /// Every element from `offset` to the end.
    pub fn subspan_from(&self, offset: usize) -> Result<Self, SpanError> {
        check_range(offset, 0, self.len())?;
        self.subspan(offset, self.len() - offset)
    }

    /// # Safety
    /// `offset + count <= self.len()`.
    #[inline]
    pub(crate) unsafe fn subspan_unchecked(&self, offset: usize, count: usize) -> Self {
        Self::from_raw(self.raw.slice(offset, count))
    }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'a, B> {
        Iter::new(self.raw)
    }
}

impl<'a, B> PolySpan<'a, B> {
    /// Views a slice of `B` itself.
    pub fn from_slice(elements: &'a [B]) -> Self {
        // SAFETY: the identity upcast.
        unsafe { Self::new(elements, |element| element) }
    }
}

impl<B: ?Sized> Default for PolySpan<'_, B> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<B: ?Sized> Index<usize> for PolySpan<'_, B> {
    type Output = B;

    fn index(&self, index: usize) -> &B {
        match self.get(index) {
            Some(element) => element,
            None => panic!("poly_span: index {index} out of range (size {})", self.len()),
        }
    }
}

impl<'a, B: ?Sized> IntoIterator for PolySpan<'a, B> {
    type Item = &'a B;
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Iter<'a, B> {
        self.iter()
    }
}

impl<'a, B: ?Sized> IntoIterator for &PolySpan<'a, B> {
    type Item = &'a B;
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Iter<'a, B> {
        self.iter()
    }
}

impl<B: ?Sized + fmt::Debug> fmt::Debug for PolySpan<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An exclusive view of a run of same-typed elements, seen through base type `B`.
pub struct PolySpanMut<'a, B: ?Sized> {
    raw: RawSpan<B>,
    _marker: PhantomData<&'a mut B>,
}

impl<'a, B: ?Sized> PolySpanMut<'a, B> {
    /// Creates a span with no elements and an element size of zero.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            raw: RawSpan::empty(),
            _marker: PhantomData,
        }
    }

    /// Views `elements` through `upcast`.
    ///
    /// Prefer [`poly_span_mut!`](crate::poly_span_mut), which supplies a
    /// checked upcast.
    ///
    /// # Safety
    /// Same contract as [`PolySpan::new`].
    pub unsafe fn new<T>(elements: &'a mut [T], upcast: fn(*mut T) -> *mut B) -> Self {
        let len = elements.len();
        let data = NonNull::from(elements).cast::<T>();
        Self::from_raw(RawSpan::new(data, len, upcast))
    }

    #[inline]
    const fn from_raw(raw: RawSpan<B>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the span has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Size in bytes of the concrete element type.
    #[inline]
    pub const fn size_of_element(&self) -> usize {
        self.raw.stride()
    }

    /// Size in bytes of the viewed run.
    #[inline]
    pub const fn size_bytes(&self) -> usize {
        self.raw.len() * self.raw.stride()
    }

    /// Reborrows as a shared span.
    #[inline]
    pub fn as_span(&self) -> PolySpan<'_, B> {
        PolySpan::from_raw(self.raw)
    }

    /// Converts into a shared span for the whole of `'a`.
    #[inline]
    pub fn into_span(self) -> PolySpan<'a, B> {
        PolySpan::from_raw(self.raw)
    }

    /// Element `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&B> {
        self.as_span().get(index)
    }

    /// Mutable element `index`, or `None` past the end.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut B> {
        if index < self.len() {
            // SAFETY: bounds checked; `&mut self` makes the borrow unique.
            Some(unsafe { &mut *self.raw.element(index) })
        } else {
            None
        }
    }

    /// Element `index`, reporting [`SpanError::OutOfRange`] past the end.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&B, SpanError> {
        self.as_span().at(index)
    }

    /// Mutable element `index`, reporting [`SpanError::OutOfRange`] past the end.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut B, SpanError> {
        check_index(index, self.len())?;
        // SAFETY: bounds checked above.
        Ok(unsafe { &mut *self.raw.element(index) })
    }

    /// First element.
    #[inline]
    pub fn front(&self) -> Option<&B> {
        self.get(0)
    }

    /// Last element.
    #[inline]
    pub fn back(&self) -> Option<&B> {
        self.as_span().back()
    }

    /// Mutable first element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut B> {
        self.get_mut(0)
    }

    /// Mutable last element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut B> {
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// The first `count` elements.
    pub fn first_mut(&mut self, count: usize) -> Result<PolySpanMut<'_, B>, SpanError> {
        self.subspan_mut(0, count)
    }

    /// The last `count` elements.
    pub fn last_mut(&mut self, count: usize) -> Result<PolySpanMut<'_, B>, SpanError> {
        check_range(0, count, self.len())?;
        let offset = self.len() - count;
        self.subspan_mut(offset, count)
    }

    /// `count` elements starting at `offset`.
    pub fn subspan_mut(
        &mut self,
        offset: usize,
        count: usize,
    ) -> Result<PolySpanMut<'_, B>, SpanError> {
        check_range(offset, count, self.len())?;
        // SAFETY: range checked above; the result reborrows `self`.
        Ok(PolySpanMut::from_raw(unsafe { self.raw.slice(offset, count) }))
    }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, B> {
        Iter::new(self.raw)
    }

    /// Iterates mutably over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, B> {
        IterMut::new(self.raw)
    }
}

impl<'a, B> PolySpanMut<'a, B> {
    /// Views a mutable slice of `B` itself.
    pub fn from_slice(elements: &'a mut [B]) -> Self {
        // SAFETY: the identity upcast.
        unsafe { Self::new(elements, |element| element) }
    }
}

impl<B: ?Sized> Default for PolySpanMut<'_, B> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<B: ?Sized> Index<usize> for PolySpanMut<'_, B> {
    type Output = B;

    fn index(&self, index: usize) -> &B {
        match self.get(index) {
            Some(element) => element,
            None => panic!("poly_span: index {index} out of range (size {})", self.len()),
        }
    }
}

impl<B: ?Sized> IndexMut<usize> for PolySpanMut<'_, B> {
    fn index_mut(&mut self, index: usize) -> &mut B {
        let len = self.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!("poly_span: index {index} out of range (size {len})"),
        }
    }
}

impl<'a, B: ?Sized> IntoIterator for PolySpanMut<'a, B> {
    type Item = &'a mut B;
    type IntoIter = IterMut<'a, B>;

    fn into_iter(self) -> IterMut<'a, B> {
        IterMut::new(self.raw)
    }
}

impl<'s, B: ?Sized> IntoIterator for &'s mut PolySpanMut<'_, B> {
    type Item = &'s mut B;
    type IntoIter = IterMut<'s, B>;

    fn into_iter(self) -> IterMut<'s, B> {
        self.iter_mut()
    }
}

impl<B: ?Sized + fmt::Debug> fmt::Debug for PolySpanMut<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_span(), f)
    }
}

impl<'a, B: ?Sized> From<PolySpanMut<'a, B>> for PolySpan<'a, B> {
    fn from(span: PolySpanMut<'a, B>) -> Self {
        span.into_span()
    }
}
