//! Fixed-capacity containers that never allocate.
//!
//! - `vec`: [`Vector`] (inline) and [`ExternalVector`] (caller's buffer)
//! - `array`: [`Array`], a fixed-size array with checked access
//! - `multi`: nested multi-dimensional aliases

pub mod array;
pub mod multi;
pub mod vec;

pub use array::Array;
pub use multi::{MultiArray2, MultiArray3, MultiArray4, MultiVector2, MultiVector3};
pub use vec::{ExternalVector, IntoIter, Vector, VectorBase, VectorStorage};
