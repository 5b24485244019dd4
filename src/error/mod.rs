//! Error taxonomy shared by every component.
//!
//! Each component reports misuse through its own small, `Copy` error enum so
//! callers can match on exactly what went wrong. The crate-level [`Error`]
//! wraps all of them; it is what the installed [`handler`] callback receives.
//!
//! Failures never leave a container half-modified: every checked operation
//! either completes or returns the error with the receiver unchanged. The
//! one documented exception is [`VectorBase::assign`](crate::collections::VectorBase::assign)
//! fed an iterator whose size hint hid its length, which empties the vector.

pub mod handler;

pub use handler::{clear_callback, has_callback, set_callback, ErrorCallback};

use thiserror::Error;

/// Errors raised by [`VectorBase`](crate::collections::VectorBase).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// The vector already holds `capacity` elements.
    #[error("vector: full (capacity {capacity})")]
    Full {
        /// Fixed capacity of the vector.
        capacity: usize,
    },

    /// An index was not below the current length.
    #[error("vector: index {index} out of bounds (len {len})")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Length at the time of the request.
        len: usize,
    },
}

/// Errors raised by [`Array`](crate::collections::Array).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// An index was not below the array size.
    #[error("array: index {index} out of range (size {len})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Size of the array.
        len: usize,
    },
}

/// Errors raised by [`InplaceFunction`](crate::function::InplaceFunction) and
/// [`Delegate`](crate::function::Delegate).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionError {
    /// The callable was invoked without a bound target.
    #[error("inplace_function: uninitialized")]
    Uninitialized,
}

/// Errors raised by [`Optional`](crate::utility::Optional).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    /// The value was accessed while empty.
    #[error("optional: invalid")]
    Invalid,
}

/// Errors raised by [`PolySpan`](crate::span::PolySpan),
/// [`PolySpanMut`](crate::span::PolySpanMut) and
/// [`FixedPolySpan`](crate::span::FixedPolySpan).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// An index or sub-range reached past the end of the view.
    #[error("poly_span: index {index} out of range (size {len})")]
    OutOfRange {
        /// First offending index.
        index: usize,
        /// Number of elements in the view.
        len: usize,
    },

    /// A view was fixed to a length it does not have.
    #[error("poly_span: extent {extent} does not match size {len}")]
    ExtentMismatch {
        /// Length required by the fixed extent.
        extent: usize,
        /// Number of elements in the view.
        len: usize,
    },
}

/// Any error raised by this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fixed-capacity vector misuse.
    #[error(transparent)]
    Vector(#[from] VectorError),

    /// Fixed-size array misuse.
    #[error(transparent)]
    Array(#[from] ArrayError),

    /// Empty callable invoked.
    #[error(transparent)]
    Function(#[from] FunctionError),

    /// Empty optional accessed.
    #[error(transparent)]
    Optional(#[from] OptionalError),

    /// Polymorphic span misuse.
    #[error(transparent)]
    Span(#[from] SpanError),
}

/// Convenience alias for results carrying the crate-level [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Reports `err` to the log and the installed callback, then hands it back.
///
/// Every component funnels its errors through here right before returning
/// them, so an application can observe misuse in one place.
#[inline]
pub(crate) fn raise<E>(err: E) -> E
where
    E: Into<Error> + Copy,
{
    handler::notify(&err.into());
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            VectorError::Full { capacity: 4 }.to_string(),
            "vector: full (capacity 4)"
        );
        assert_eq!(
            Error::from(FunctionError::Uninitialized).to_string(),
            "inplace_function: uninitialized"
        );
        assert_eq!(OptionalError::Invalid.to_string(), "optional: invalid");
    }

    #[test]
    fn test_raise_returns_same_error() {
        let err = ArrayError::OutOfRange { index: 3, len: 3 };
        assert_eq!(raise(err), err);
    }
}
