use core::fmt;
use core::ops::Deref;

use super::iter::Iter;
use super::poly_span::PolySpan;
use crate::error::{raise, SpanError};

/// A [`PolySpan`] whose length `N` is part of its type.
///
/// `first`, `last` and `subspan` take their bounds as const parameters, so a
/// range that does not fit is rejected at compile time. Every read-only
/// [`PolySpan`] operation is reachable through `Deref`; the runtime-checked
/// range operations are on [`as_span`](Self::as_span).
///
/// ```rust
/// use etl::poly_span;
/// use etl::span::FixedPolySpan;
///
/// trait Sensor {
///     fn reading(&self) -> i32;
/// }
///
/// struct Thermometer(i32);
///
/// impl Sensor for Thermometer {
///     fn reading(&self) -> i32 {
///         self.0
///     }
/// }
///
/// let sensors = [Thermometer(18), Thermometer(21), Thermometer(19), Thermometer(22)];
/// let all = FixedPolySpan::<dyn Sensor, 4>::try_from(poly_span!(&sensors[..] => dyn Sensor))?;
///
/// let inner: FixedPolySpan<'_, dyn Sensor, 2> = all.subspan::<1, 2>();
/// assert_eq!(inner.iter().map(|sensor| sensor.reading()).sum::<i32>(), 40);
/// # Ok::<(), etl::error::SpanError>(())
/// ```
///
/// ```compile_fail
/// use etl::poly_span;
/// use etl::span::FixedPolySpan;
/// use std::fmt::Debug;
///
/// let values = [1u8, 2, 3];
/// let span = FixedPolySpan::<dyn Debug, 3>::try_from(poly_span!(&values[..] => dyn Debug)).unwrap();
/// let _ = span.last::<4>();
/// ```
pub struct FixedPolySpan<'a, B: ?Sized, const N: usize> {
    span: PolySpan<'a, B>,
}

impl<B: ?Sized, const N: usize> Clone for FixedPolySpan<'_, B, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized, const N: usize> Copy for FixedPolySpan<'_, B, N> {}

impl<'a, B: ?Sized, const N: usize> FixedPolySpan<'a, B, N> {
    /// Number of elements, fixed by the type.
    pub const EXTENT: usize = N;

    /// Views `elements` through `upcast`.
    ///
    /// # Safety
    /// `upcast` must return its argument re-typed as `B`: the same address,
    /// and a pointee that lies within the `T` it was given.
    pub unsafe fn new<T>(elements: &'a [T; N], upcast: fn(*mut T) -> *mut B) -> Self {
        Self {
            // SAFETY: forwarded from the caller.
            span: unsafe { PolySpan::new(elements, upcast) },
        }
    }

    /// The same elements as a runtime-length span.
    #[inline]
    pub const fn as_span(&self) -> PolySpan<'a, B> {
        self.span
    }

    /// The first `COUNT` elements.
    #[inline]
    pub fn first<const COUNT: usize>(&self) -> FixedPolySpan<'a, B, COUNT> {
        const { assert!(COUNT <= N, "poly_span: first is longer than the extent") };
        // SAFETY: `COUNT <= N` is checked at compile time.
        FixedPolySpan {
            span: unsafe { self.span.subspan_unchecked(0, COUNT) },
        }
    }

    /// The last `COUNT` elements.
    #[inline]
    pub fn last<const COUNT: usize>(&self) -> FixedPolySpan<'a, B, COUNT> {
        const { assert!(COUNT <= N, "poly_span: last is longer than the extent") };
        // SAFETY: `COUNT <= N` is checked at compile time.
        FixedPolySpan {
            span: unsafe { self.span.subspan_unchecked(N - COUNT, COUNT) },
        }
    }

    /// `COUNT` elements starting at `OFFSET`.
    #[inline]
    pub fn subspan<const OFFSET: usize, const COUNT: usize>(&self) -> FixedPolySpan<'a, B, COUNT> {
        const {
            assert!(
                OFFSET <= N && COUNT <= N - OFFSET,
                "poly_span: subspan reaches past the extent"
            )
        };
        // SAFETY: the range is checked at compile time.
        FixedPolySpan {
            span: unsafe { self.span.subspan_unchecked(OFFSET, COUNT) },
        }
    }
}

impl<B: ?Sized> Default for FixedPolySpan<'_, B, 0> {
    fn default() -> Self {
        Self {
            span: PolySpan::empty(),
        }
    }
}

impl<'a, B: ?Sized, const N: usize> Deref for FixedPolySpan<'a, B, N> {
    type Target = PolySpan<'a, B>;

    #[inline]
    fn deref(&self) -> &PolySpan<'a, B> {
        &self.span
    }
}

impl<'a, B: ?Sized, const N: usize> TryFrom<PolySpan<'a, B>> for FixedPolySpan<'a, B, N> {
    type Error = SpanError;

    fn try_from(span: PolySpan<'a, B>) -> Result<Self, SpanError> {
        if span.len() == N {
            Ok(Self { span })
        } else {
            Err(raise(SpanError::ExtentMismatch {
                extent: N,
                len: span.len(),
            }))
        }
    }
}

impl<'a, B: ?Sized, const N: usize> From<FixedPolySpan<'a, B, N>> for PolySpan<'a, B> {
    #[inline]
    fn from(fixed: FixedPolySpan<'a, B, N>) -> Self {
        fixed.span
    }
}

impl<'a, B: ?Sized, const N: usize> IntoIterator for FixedPolySpan<'a, B, N> {
    type Item = &'a B;
    type IntoIter = Iter<'a, B>;

    #[inline]
    fn into_iter(self) -> Iter<'a, B> {
        self.span.into_iter()
    }
}

impl<'a, B: ?Sized, const N: usize> IntoIterator for &FixedPolySpan<'a, B, N> {
    type Item = &'a B;
    type IntoIter = Iter<'a, B>;

    #[inline]
    fn into_iter(self) -> Iter<'a, B> {
        self.span.into_iter()
    }
}

impl<B: ?Sized + fmt::Debug, const N: usize> fmt::Debug for FixedPolySpan<'_, B, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.span, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly_span;

    trait Weighted {
        fn weight(&self) -> u32;
    }

    struct Crate(u32);

    impl Weighted for Crate {
        fn weight(&self) -> u32 {
            self.0
        }
    }

    fn crates() -> [Crate; 5] {
        [
            Crate(10),
            Crate(20),
            Crate(30),
            Crate(40),
            Crate(50),
        ]
    }

    fn weights(span: PolySpan<'_, dyn Weighted>) -> Vec<u32> {
        span.iter().map(|item| item.weight()).collect()
    }

    #[test]
    fn test_new_from_array() {
        let items = crates();
        // SAFETY: the upcast is an unsizing coercion.
        let span = unsafe {
            FixedPolySpan::<dyn Weighted, 5>::new(&items, |item| -> *mut dyn Weighted { item })
        };

        assert_eq!(FixedPolySpan::<dyn Weighted, 5>::EXTENT, 5);
        assert_eq!(span.len(), 5);
        assert_eq!(span.size_of_element(), core::mem::size_of::<Crate>());
        assert_eq!(span[4].weight(), 50);
    }

    #[test]
    fn test_const_ranges() {
        let items = crates();
        let span = FixedPolySpan::<dyn Weighted, 5>::try_from(poly_span!(&items[..] => dyn Weighted))
            .expect("extent matches");

        assert_eq!(weights(span.first::<2>().into()), vec![10, 20]);
        assert_eq!(weights(span.last::<2>().into()), vec![40, 50]);
        assert_eq!(weights(span.subspan::<1, 3>().into()), vec![20, 30, 40]);
        assert!(span.subspan::<5, 0>().is_empty());
        assert_eq!(span.last::<0>().len(), 0);
    }

    #[test]
    fn test_extent_mismatch() {
        let items = crates();
        let result = FixedPolySpan::<dyn Weighted, 4>::try_from(poly_span!(&items[..] => dyn Weighted));

        assert_eq!(
            result.err(),
            Some(SpanError::ExtentMismatch { extent: 4, len: 5 })
        );
    }

    #[test]
    fn test_runtime_ranges_through_as_span() {
        let items = crates();
        let span = FixedPolySpan::<dyn Weighted, 5>::try_from(poly_span!(&items[..] => dyn Weighted))
            .expect("extent matches");

        let tail = span.as_span().subspan_from(3).expect("offset in range");
        assert_eq!(weights(tail), vec![40, 50]);
        assert!(span.as_span().first(6).is_err());
    }

    #[test]
    fn test_iteration_and_default() {
        let items = crates();
        let span = FixedPolySpan::<dyn Weighted, 5>::try_from(poly_span!(&items[..] => dyn Weighted))
            .expect("extent matches");

        let total: u32 = span.into_iter().map(|item| item.weight()).sum();
        assert_eq!(total, 150);
        assert_eq!((&span).into_iter().rev().next().map(|item| item.weight()), Some(50));

        let empty = FixedPolySpan::<'_, dyn Weighted, 0>::default();
        assert!(empty.is_empty());
        assert_eq!(empty.iter().count(), 0);
    }
}
