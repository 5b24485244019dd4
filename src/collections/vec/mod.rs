//! Fixed-capacity vectors.
//!
//! [`Vector`] keeps its elements inline; [`ExternalVector`] works over a
//! buffer the caller owns. Both are [`VectorBase`] and share every operation.
//! Operations that would exceed the capacity fail with
//! [`VectorError::Full`](crate::error::VectorError::Full) instead of growing.
//!
//! ```rust
//! use etl::collections::Vector;
//!
//! let mut queue: Vector<u16, 4> = Vector::new();
//! queue.push(1)?;
//! queue.push(2)?;
//! assert_eq!(queue.available(), 2);
//! assert_eq!(queue.first(), Some(&1));
//! # Ok::<(), etl::error::VectorError>(())
//! ```

mod into_iter;
mod serde_impl;
mod storage;
mod vector;

pub use into_iter::IntoIter;
pub use storage::VectorStorage;
pub use vector::{ExternalVector, Vector, VectorBase};
