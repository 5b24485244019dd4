//! `Optional` — a value that may be absent, with checked access.

use crate::error::{raise, OptionalError};
use serde::{Deserialize, Serialize};

/// Either a `T` or nothing.
///
/// An empty `Optional` orders before every present value.
///
/// ```rust
/// use etl::utility::Optional;
///
/// let mut slot = Optional::none();
/// assert!(!slot.has_value());
/// assert_eq!(slot.value_or(7), 7);
///
/// slot.emplace(3);
/// assert_eq!(slot.value(), Ok(&3));
/// assert!(Optional::none() < slot);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Optional<T> {
    inner: Option<T>,
}

impl<T> Optional<T> {
    /// An optional holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// An empty optional.
    #[inline]
    pub const fn none() -> Self {
        Self { inner: None }
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.inner.is_some()
    }

    /// The value, or [`OptionalError::Invalid`] if empty.
    pub fn value(&self) -> Result<&T, OptionalError> {
        self.inner
            .as_ref()
            .ok_or_else(|| raise(OptionalError::Invalid))
    }

    /// The value mutably, or [`OptionalError::Invalid`] if empty.
    pub fn value_mut(&mut self) -> Result<&mut T, OptionalError> {
        self.inner
            .as_mut()
            .ok_or_else(|| raise(OptionalError::Invalid))
    }

    /// A copy of the value, or `default` if empty.
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        self.inner.clone().unwrap_or(default)
    }

    /// Replaces the contents with `value` and returns it.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.inner.insert(value)
    }

    /// Drops the value, if any.
    #[inline]
    pub fn reset(&mut self) {
        self.inner = None;
    }

    /// Moves the value out, leaving the optional empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.inner.take()
    }

    /// Exchanges contents with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Returns `true` if a value equal to `value` is present.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        matches!(&self.inner, Some(inner) if inner == value)
    }

    /// The contents as a standard option.
    #[inline]
    pub const fn as_option(&self) -> &Option<T> {
        &self.inner
    }

    /// Unwraps into a standard option.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.inner
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.inner
    }
}
