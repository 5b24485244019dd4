//! Type-erased callables that never allocate.
//!
//! - [`InplaceFunction`] owns its target, stored inline in a fixed buffer.
//! - [`Delegate`] borrows its target and is `Copy`.
//!
//! Both are parameterised by a [`Signature`], written as a function pointer
//! type, and take their arguments as a tuple:
//!
//! ```rust
//! use etl::function::{Delegate, InplaceFunction};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let owned: InplaceFunction<fn(i32, i32) -> i32> = InplaceFunction::from_fn(add);
//! let borrowed: Delegate<'_, fn(i32, i32) -> i32> = Delegate::from_callable(&owned);
//! assert_eq!(borrowed.call((2, 3)), 5);
//! ```

pub mod delegate;
pub mod inplace;
pub mod signature;

pub use delegate::Delegate;
pub use inplace::InplaceFunction;
pub use signature::{Callable, Signature};
