//! `VectorBase` — a vector with a fixed capacity and no allocation.
//!
//! The first `len` slots of the storage are initialized; the rest are not.
//! The storage is never resized, so element addresses stay put until the
//! element is moved out or the vector is dropped.

use super::storage::VectorStorage;
use crate::error::{raise, VectorError};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ops::{Bound, Deref, DerefMut, RangeBounds};
use core::ptr;
use core::slice;

/// A vector over the buffer `S`.
///
/// Use the [`Vector`] and [`ExternalVector`] aliases rather than naming this
/// type directly.
pub struct VectorBase<T, S: VectorStorage<T>> {
    len: usize,
    storage: S,
    _marker: PhantomData<T>,
}

/// A vector holding up to `N` elements inline.
pub type Vector<T, const N: usize> = VectorBase<T, [MaybeUninit<T>; N]>;

/// A vector over a caller-supplied buffer; its capacity is the buffer length.
pub type ExternalVector<'a, T> = VectorBase<T, &'a mut [MaybeUninit<T>]>;

impl<T, const N: usize> Vector<T, N> {
    /// Creates an empty vector.
    #[inline]
    pub const fn new() -> Self {
        Self {
            len: 0,
            storage: [const { MaybeUninit::uninit() }; N],
            _marker: PhantomData,
        }
    }

    /// Creates a vector holding a copy of `elements`.
    pub fn from_slice(elements: &[T]) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut vector = Self::new();
        vector.extend_from_slice(elements)?;
        Ok(vector)
    }

    /// Converts a full vector into an array, or gives the vector back.
    pub fn into_array(self) -> Result<[T; N], Self> {
        if self.len < N {
            return Err(self);
        }
        let this = ManuallyDrop::new(self);
        // SAFETY: all `N` slots are initialized, `[MaybeUninit<T>; N]` has the
        // layout of `[T; N]`, and `this` is never dropped.
        Ok(unsafe { ptr::read(this.storage.as_ptr().cast::<[T; N]>()) })
    }

    pub(crate) fn into_parts(self) -> ([MaybeUninit<T>; N], usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the storage is moved out once.
        (unsafe { ptr::read(&this.storage) }, this.len)
    }
}

impl<'a, T> ExternalVector<'a, T> {
    /// Creates an empty vector over `buffer`.
    #[inline]
    pub fn from_buffer(buffer: &'a mut [MaybeUninit<T>]) -> Self {
        Self {
            len: 0,
            storage: buffer,
            _marker: PhantomData,
        }
    }
}

impl<T, S: VectorStorage<T>> VectorBase<T, S> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.as_uninit().len()
    }

    /// Same as [`capacity`](Self::capacity).
    #[inline]
    pub fn max_size(&self) -> usize {
        self.capacity()
    }

    /// Number of free slots.
    #[inline]
    pub fn available(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns `true` if no more elements fit.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.storage.as_uninit().as_ptr().cast(), self.len) }
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.storage.as_uninit_mut().as_mut_ptr().cast(), len) }
    }

    #[inline]
    fn full_error(&self) -> VectorError {
        raise(VectorError::Full {
            capacity: self.capacity(),
        })
    }

    #[inline]
    fn out_of_bounds(&self, index: usize) -> VectorError {
        raise(VectorError::OutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Appends `value`.
    ///
    /// When the vector is full, `value` is dropped and [`VectorError::Full`]
    /// is returned.
    pub fn push(&mut self, value: T) -> Result<(), VectorError> {
        if self.is_full() {
            return Err(self.full_error());
        }
        let len = self.len;
        self.storage.as_uninit_mut()[len].write(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let len = self.len;
        // SAFETY: slot `len` was initialized and is now outside the length.
        Some(unsafe { self.storage.as_uninit()[len].assume_init_read() })
    }

    /// Inserts `value` at `index`, shifting later elements right.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        if self.is_full() {
            return Err(self.full_error());
        }
        let len = self.len;
        let base = self.storage.as_uninit_mut().as_mut_ptr().cast::<T>();
        // SAFETY: `index <= len < capacity`; the shifted range stays in bounds.
        unsafe {
            let slot = base.add(index);
            ptr::copy(slot, slot.add(1), len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    pub fn remove(&mut self, index: usize) -> Result<T, VectorError> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let len = self.len;
        let base = self.storage.as_uninit_mut().as_mut_ptr().cast::<T>();
        // SAFETY: `index < len`; the element is read out before its slot is
        // overwritten.
        let value = unsafe {
            let slot = base.add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Removes and returns the element at `index`, moving the last element
    /// into its place.
    pub fn swap_remove(&mut self, index: usize) -> Result<T, VectorError> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let last = self.len - 1;
        self.as_mut_slice().swap(index, last);
        self.len = last;
        // SAFETY: slot `last` was initialized and is now outside the length.
        Ok(unsafe { self.storage.as_uninit()[last].assume_init_read() })
    }

    /// Drops every element past `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = self.len - len;
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = len;
        let base = self.storage.as_uninit_mut().as_mut_ptr().cast::<T>();
        // SAFETY: `len..len + tail` were initialized and are now outside the length.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(len), tail)) };
    }

    /// Drops every element.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Grows with clones of `value` or shrinks to `new_len`.
    ///
    /// Nothing changes if `new_len` exceeds the capacity.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone())
    }

    /// Grows with values from `fill` or shrinks to `new_len`.
    ///
    /// Nothing changes if `new_len` exceeds the capacity.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F) -> Result<(), VectorError>
    where
        F: FnMut() -> T,
    {
        if new_len > self.capacity() {
            return Err(self.full_error());
        }
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            while self.len < new_len {
                let len = self.len;
                self.storage.as_uninit_mut()[len].write(fill());
                self.len += 1;
            }
        }
        Ok(())
    }

    /// Replaces the contents with the items of `items`.
    ///
    /// If the lower bound of `items`' size hint exceeds the capacity,
    /// [`VectorError::Full`] is returned and the vector is unchanged. An
    /// iterator that only turns out to be too long while it is drained leaves
    /// the vector empty.
    pub fn assign<I>(&mut self, items: I) -> Result<(), VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        if items.size_hint().0 > self.capacity() {
            return Err(self.full_error());
        }
        self.clear();
        for item in items {
            if self.is_full() {
                self.clear();
                return Err(self.full_error());
            }
            let len = self.len;
            self.storage.as_uninit_mut()[len].write(item);
            self.len += 1;
        }
        Ok(())
    }

    /// Appends clones of `elements`, or nothing if they do not all fit.
    pub fn extend_from_slice(&mut self, elements: &[T]) -> Result<(), VectorError>
    where
        T: Clone,
    {
        if elements.len() > self.available() {
            return Err(self.full_error());
        }
        for element in elements {
            let len = self.len;
            self.storage.as_uninit_mut()[len].write(element.clone());
            self.len += 1;
        }
        Ok(())
    }

    /// Removes the elements in `range`, shifting later elements left.
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> Result<(), VectorError> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };
        if end > self.len {
            return Err(self.out_of_bounds(end));
        }
        if start > end {
            return Err(self.out_of_bounds(start));
        }

        let len = self.len;
        // Rotate the doomed run to the end, then drop it there.
        self.as_mut_slice()[start..].rotate_left(end - start);
        self.truncate(len - (end - start));
        Ok(())
    }

    /// Keeps only the elements for which `keep` returns `true`, in order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut kept = 0;
        for index in 0..self.len {
            if keep(&self.as_slice()[index]) {
                self.as_mut_slice().swap(kept, index);
                kept += 1;
            }
        }
        self.truncate(kept);
    }

    /// The element at `index`, or [`VectorError::OutOfBounds`].
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        if index < self.len {
            Ok(&self.as_slice()[index])
        } else {
            Err(self.out_of_bounds(index))
        }
    }

    /// The element at `index` mutably, or [`VectorError::OutOfBounds`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        if index < self.len {
            Ok(&mut self.as_mut_slice()[index])
        } else {
            Err(self.out_of_bounds(index))
        }
    }
}

impl<T, S: VectorStorage<T>> Drop for VectorBase<T, S> {
    fn drop(&mut self) {
        if mem::needs_drop::<T>() {
            self.clear();
        }
    }
}

impl<T, S: VectorStorage<T>> Deref for VectorBase<T, S> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, S: VectorStorage<T>> DerefMut for VectorBase<T, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, S: VectorStorage<T>> AsRef<[T]> for VectorBase<T, S> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, S: VectorStorage<T>> AsMut<[T]> for VectorBase<T, S> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for Vector<T, N> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for element in self.iter() {
            let len = copy.len;
            copy.storage[len].write(element.clone());
            copy.len += 1;
        }
        copy
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = VectorError;

    fn try_from(elements: &[T]) -> Result<Self, VectorError> {
        Self::from_slice(elements)
    }
}

impl<T, U, S1, S2> PartialEq<VectorBase<U, S2>> for VectorBase<T, S1>
where
    T: PartialEq<U>,
    S1: VectorStorage<T>,
    S2: VectorStorage<U>,
{
    fn eq(&self, other: &VectorBase<U, S2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, S> PartialEq<[U]> for VectorBase<T, S>
where
    T: PartialEq<U>,
    S: VectorStorage<T>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, S, const M: usize> PartialEq<[U; M]> for VectorBase<T, S>
where
    T: PartialEq<U>,
    S: VectorStorage<T>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq, S: VectorStorage<T>> Eq for VectorBase<T, S> {}

impl<T: PartialOrd, S: VectorStorage<T>> PartialOrd for VectorBase<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, S: VectorStorage<T>> Ord for VectorBase<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, S: VectorStorage<T>> Hash for VectorBase<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug, S: VectorStorage<T>> fmt::Debug for VectorBase<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, S: VectorStorage<T>> IntoIterator for &'a VectorBase<T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, S: VectorStorage<T>> IntoIterator for &'a mut VectorBase<T, S> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_push_until_full() {
        let mut v: Vector<u8, 3> = Vector::new();
        for value in 0..3 {
            v.push(value).unwrap();
        }
        assert!(v.is_full());
        assert_eq!(v.push(9), Err(VectorError::Full { capacity: 3 }));
        assert_eq!(v, [0, 1, 2]);
    }

    #[test]
    fn test_at_agrees_with_index() {
        let v: Vector<i32, 4> = Vector::from_slice(&[10, 20, 30]).unwrap();
        for index in 0..v.len() {
            assert_eq!(v.at(index), Ok(&v[index]));
        }
        assert_eq!(v.at(3), Err(VectorError::OutOfBounds { index: 3, len: 3 }));
    }

    #[test]
    fn test_insert_remove_shift() {
        let mut v: Vector<char, 5> = Vector::from_slice(&['a', 'c', 'd']).unwrap();
        v.insert(1, 'b').unwrap();
        assert_eq!(v, ['a', 'b', 'c', 'd']);
        assert_eq!(v.remove(0), Ok('a'));
        assert_eq!(v.swap_remove(0), Ok('b'));
        assert_eq!(v, ['d', 'c']);
        assert_eq!(v.insert(3, 'x'), Err(VectorError::OutOfBounds { index: 3, len: 2 }));
    }

    #[test]
    fn test_assign_known_overflow_leaves_vector_unchanged() {
        let mut v: Vector<u32, 2> = Vector::from_slice(&[7]).unwrap();
        assert_eq!(v.assign([1, 2, 3]), Err(VectorError::Full { capacity: 2 }));
        assert_eq!(v, [7]);
        v.assign([4, 5]).unwrap();
        assert_eq!(v, [4, 5]);
    }

    #[test]
    fn test_assign_unsized_overflow_leaves_empty() {
        let mut v: Vector<u32, 2> = Vector::from_slice(&[7]).unwrap();
        let odd = (1..10).filter(|x| x % 2 == 1);
        assert_eq!(odd.size_hint().0, 0);
        assert_eq!(v.assign(odd), Err(VectorError::Full { capacity: 2 }));
        assert!(v.is_empty());
        v.assign((1..10).filter(|x| x % 4 == 0)).unwrap();
        assert_eq!(v, [4, 8]);
    }

    #[test]
    fn test_extend_from_slice_is_all_or_nothing() {
        let mut v: Vector<u32, 4> = Vector::from_slice(&[1, 2]).unwrap();
        assert!(v.extend_from_slice(&[3, 4, 5]).is_err());
        assert_eq!(v, [1, 2]);
        v.extend_from_slice(&[3, 4]).unwrap();
        assert_eq!(v.available(), 0);
    }

    #[test]
    fn test_erase_and_retain() {
        let mut v: Vector<u32, 8> = Vector::from_slice(&[0, 1, 2, 3, 4, 5]).unwrap();
        v.erase(1..3).unwrap();
        assert_eq!(v, [0, 3, 4, 5]);
        v.retain(|x| x % 2 == 1);
        assert_eq!(v, [3, 5]);
        assert!(v.erase(..5).is_err());
    }

    #[test]
    fn test_resize() {
        let mut v: Vector<u8, 4> = Vector::new();
        v.resize(3, 7).unwrap();
        assert_eq!(v, [7, 7, 7]);
        assert!(v.resize(5, 0).is_err());
        assert_eq!(v.len(), 3);
        v.resize(1, 0).unwrap();
        assert_eq!(v, [7]);
    }

    #[test]
    fn test_drop_releases_elements() {
        let shared = Rc::new(());
        {
            let mut v: Vector<Rc<()>, 4> = Vector::new();
            for _ in 0..3 {
                v.push(Rc::clone(&shared)).unwrap();
            }
            assert_eq!(Rc::strong_count(&shared), 4);
            v.truncate(1);
            assert_eq!(Rc::strong_count(&shared), 2);
        }
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_external_buffer() {
        let mut buffer = [MaybeUninit::<u16>::uninit(); 3];
        let mut v = ExternalVector::from_buffer(&mut buffer);
        assert_eq!(v.capacity(), 3);
        v.extend_from_slice(&[1, 2, 3]).unwrap();
        assert!(v.push(4).is_err());

        let inline: Vector<u16, 8> = Vector::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v, inline);
    }

    #[test]
    fn test_into_array_requires_full() {
        let partial: Vector<u8, 2> = Vector::from_slice(&[1]).unwrap();
        let mut partial = partial.into_array().unwrap_err();
        partial.push(2).unwrap();
        assert_eq!(partial.into_array().unwrap(), [1, 2]);
    }
}
