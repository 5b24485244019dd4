//! Polymorphic spans: views over an array of one concrete type, seen
//! through a base type.
//!
//! The concrete element type is erased once the span is built. Only its size
//! is kept, as the stride, so a span over `[Circle; 8]` and one over
//! `[Square; 3]` are both a `PolySpan<'_, dyn Shape>`.
//!
//! ```rust
//! use etl::poly_span;
//! use etl::span::PolySpan;
//!
//! trait Shape {
//!     fn corners(&self) -> usize;
//! }
//!
//! struct Triangle;
//! struct Square(u64);
//!
//! impl Shape for Triangle {
//!     fn corners(&self) -> usize {
//!         3
//!     }
//! }
//!
//! impl Shape for Square {
//!     fn corners(&self) -> usize {
//!         4
//!     }
//! }
//!
//! fn total(shapes: PolySpan<'_, dyn Shape>) -> usize {
//!     shapes.iter().map(|shape| shape.corners()).sum()
//! }
//!
//! let triangles = [Triangle, Triangle];
//! let squares = [Square(1), Square(2), Square(3)];
//! assert_eq!(total(poly_span!(&triangles[..] => dyn Shape)), 6);
//! assert_eq!(total(poly_span!(&squares[..] => dyn Shape)), 12);
//! ```

mod fixed;
mod iter;
mod poly_span;
mod raw;

pub use fixed::FixedPolySpan;
pub use iter::{Iter, IterMut};
pub use poly_span::{PolySpan, PolySpanMut};

/// Builds a [`PolySpan`] over a slice, upcasting each element to `$base` by
/// unsizing coercion.
///
/// `$elements` is evaluated outside the macro's own `unsafe` block, so an
/// unsafe expression still needs one at the call site:
///
/// ```compile_fail
/// use etl::poly_span;
/// use etl::span::PolySpan;
/// use std::fmt::Debug;
///
/// let values = [1u32, 2, 3];
/// let pointer = values.as_ptr();
/// let span: PolySpan<'_, dyn Debug> = poly_span!(std::slice::from_raw_parts(pointer, 3) => dyn Debug);
/// ```
#[macro_export]
macro_rules! poly_span {
    ($elements:expr => $base:ty) => {{
        let elements = $elements;
        // SAFETY: an unsizing coercion keeps the address and the pointee.
        unsafe { $crate::span::PolySpan::<$base>::new(elements, |element| -> *mut $base { element }) }
    }};
}

/// Builds a [`PolySpanMut`] over a mutable slice, upcasting each element to
/// `$base` by unsizing coercion.
#[macro_export]
macro_rules! poly_span_mut {
    ($elements:expr => $base:ty) => {{
        let elements = $elements;
        // SAFETY: an unsizing coercion keeps the address and the pointee.
        unsafe {
            $crate::span::PolySpanMut::<$base>::new(elements, |element| -> *mut $base { element })
        }
    }};
}
