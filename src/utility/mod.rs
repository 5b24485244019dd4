//! Small vocabulary types.
//!
//! - [`Optional`]: a maybe-absent value with checked access
//! - [`Coordinate2D`] / [`Coordinate3D`]: points with a payload
//! - [`user_type!`](crate::user_type): strong integer typedefs
//! - [`InstanceCount`]: live-instance counting

pub mod coordinate;
pub mod instance_count;
pub mod optional;
pub mod user_type;

pub use coordinate::{Coordinate2D, Coordinate3D};
pub use instance_count::{Counted, InstanceCount};
pub use optional::Optional;
