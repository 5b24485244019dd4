//! `Array` — a fixed-size array with checked access and in-place
//! insert/erase.

use crate::error::{raise, ArrayError};
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Deref, DerefMut};
use serde::de::{Deserialize, Deserializer, Error, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// `N` elements of `T`, laid out exactly like `[T; N]`.
///
/// ```rust
/// use etl::collections::Array;
///
/// let mut levels = Array::new([1, 2, 3, 4]);
/// assert_eq!(levels.insert_at(1, 9), Ok(4));
/// assert_eq!(levels.as_array(), &[1, 9, 2, 3]);
/// assert_eq!(levels.erase_at(0, 0), Ok(1));
/// assert_eq!(levels.as_array(), &[9, 2, 3, 0]);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Array<T, const N: usize> {
    elements: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Wraps `elements`.
    #[inline]
    pub const fn new(elements: [T; N]) -> Self {
        Self { elements }
    }

    /// Builds each element from its index.
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::new(core::array::from_fn(f))
    }

    /// The wrapped array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.elements
    }

    /// The wrapped array, mutably.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.elements
    }

    /// Unwraps the array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.elements
    }

    /// Number of elements.
    #[inline]
    pub const fn size() -> usize {
        N
    }

    #[inline]
    fn check(index: usize) -> Result<(), ArrayError> {
        if index < N {
            Ok(())
        } else {
            Err(raise(ArrayError::OutOfRange { index, len: N }))
        }
    }

    /// The element at `index`, or [`ArrayError::OutOfRange`].
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        Self::check(index)?;
        Ok(&self.elements[index])
    }

    /// The element at `index` mutably, or [`ArrayError::OutOfRange`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        Self::check(index)?;
        Ok(&mut self.elements[index])
    }

    /// First element; `None` only when `N == 0`.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Last element; `None` only when `N == 0`.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.elements.fill(value);
    }

    /// Inserts `value` at `position`, shifting later elements right.
    ///
    /// The element pushed off the end is returned.
    pub fn insert_at(&mut self, position: usize, value: T) -> Result<T, ArrayError> {
        Self::check(position)?;
        let displaced = mem::replace(&mut self.elements[N - 1], value);
        self.elements[position..].rotate_right(1);
        Ok(displaced)
    }

    /// Removes the element at `position`, shifting later elements left and
    /// putting `fill` in the freed last slot.
    ///
    /// The removed element is returned.
    pub fn erase_at(&mut self, position: usize, fill: T) -> Result<T, ArrayError> {
        Self::check(position)?;
        self.elements[position..].rotate_left(1);
        Ok(mem::replace(&mut self.elements[N - 1], fill))
    }

    /// Exchanges contents with `other`.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.elements, &mut other.elements);
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<T, const N: usize> From<Array<T, N>> for [T; N] {
    fn from(array: Array<T, N>) -> Self {
        array.elements
    }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.elements
    }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T, const N: usize> AsMut<[T]> for Array<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.elements
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

impl<T: Serialize, const N: usize> Serialize for Array<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for element in &self.elements {
            tuple.serialize_element(element)?;
        }
        tuple.end()
    }
}

struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for ArrayVisitor<T, N> {
    type Value = Array<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "an array of {N} elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut elements = super::Vector::<T, N>::new();
        while !elements.is_full() {
            match seq.next_element()? {
                Some(element) => elements.push(element).map_err(A::Error::custom)?,
                None => return Err(A::Error::invalid_length(elements.len(), &self)),
            }
        }
        elements
            .into_array()
            .map(Array::new)
            .map_err(|partial| A::Error::invalid_length(partial.len(), &self))
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Array<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, ArrayVisitor::<T, N>(PhantomData))
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_bounds() {
        let array = Array::new([5u8; 4]);
        assert_eq!(array.at(3), Ok(&5));
        assert_eq!(array.at(4), Err(ArrayError::OutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn test_insert_at_last_position() {
        let mut array = Array::new([1, 2, 3]);
        assert_eq!(array.insert_at(2, 7), Ok(3));
        assert_eq!(array.into_inner(), [1, 2, 7]);
    }

    #[test]
    fn test_erase_at_fills_tail() {
        let mut array = Array::new(['a', 'b', 'c']);
        assert_eq!(array.erase_at(1, '-'), Ok('b'));
        assert_eq!(array.as_array(), &['a', 'c', '-']);
        assert!(array.erase_at(3, '-').is_err());
    }

    #[test]
    fn test_tuple_serde() {
        let array = Array::new([1u16, 2, 3]);
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Array<u16, 3> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, array);
        assert!(serde_json::from_str::<Array<u16, 3>>("[1,2]").is_err());
    }

    #[test]
    fn test_large_default() {
        let array: Array<u8, 64> = Array::default();
        assert!(array.iter().all(|&byte| byte == 0));
        assert_eq!(Array::<u8, 64>::size(), 64);
    }
}
