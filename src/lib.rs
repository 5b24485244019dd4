//! # `etl` - Embedded Template Library
//!
//! Fixed-capacity containers, allocation-free callables and table-driven
//! checksums for code that must know its memory footprint up front.
//!
//! ## Guarantees
//!
//! ### No allocation
//! - **Capacity is a type parameter**: [`Vector<T, N>`](collections::Vector)
//!   and [`InplaceFunction<S, SIZE>`](function::InplaceFunction) carry their
//!   storage inline; an [`ExternalVector`](collections::ExternalVector)
//!   borrows a caller-owned buffer instead.
//! - **Compile-time rejection**: a callable too large or too strictly aligned
//!   for its `InplaceFunction`, or a CRC table of unsupported size, fails to
//!   compile instead of failing at run time.
//!
//! ### Failures are values
//! - **Checked operations return `Result`**: every error is a small `Copy`
//!   enum from [`error`], and the container is left unchanged.
//! - **Optional reporting hook**: [`error::set_callback`] installs a function
//!   that sees every error as it is raised.
//!
//! ## Components
//!
//! 1. **Containers** ([`collections`]): `Vector`, `ExternalVector`, `Array`,
//!    and nested multi-dimensional aliases.
//! 2. **Callables** ([`function`]): the owning `InplaceFunction` and the
//!    borrowing `Delegate`.
//! 3. **Checksums** ([`crc`]): `const`-built lookup tables of 4, 16 or 256
//!    entries and a catalogue of standard CRC-8/16/32/64 parameter sets.
//! 4. **Polymorphic views** ([`span`]): `PolySpan` addresses an array of one
//!    concrete type through a trait object.
//! 5. **Vocabulary types** ([`utility`]): `Optional`, coordinates, strong
//!    integer typedefs and instance counting.
//!
//! ## Example
//!
//! ```rust
//! use etl::collections::Vector;
//! use etl::crc::{Crc, CRC32};
//! use etl::function::InplaceFunction;
//!
//! const CRC: Crc<u32> = CRC32.build();
//!
//! let mut frames: Vector<[u8; 4], 8> = Vector::new();
//! frames.push(*b"ping")?;
//! frames.push(*b"pong")?;
//!
//! let checksum: InplaceFunction<fn([u8; 4]) -> u32> =
//!     InplaceFunction::from_callable(|frame: [u8; 4]| CRC.checksum(&frame));
//! let sums: Vec<u32> = frames.iter().map(|frame| checksum.call((*frame,))).collect();
//! assert_eq!(sums[0], CRC.checksum(b"ping"));
//! # Ok::<(), etl::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod config;
pub mod crc;
pub mod error;
pub mod function;
pub mod span;
pub mod utility;

pub use collections::{Array, ExternalVector, Vector};
pub use error::{Error, Result};
pub use function::{Delegate, InplaceFunction};
pub use span::{FixedPolySpan, PolySpan, PolySpanMut};
pub use utility::{Coordinate2D, Coordinate3D, InstanceCount, Optional};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // A vector is its length plus its inline buffer.
    assert!(mem::size_of::<Vector<u32, 4>>() == mem::size_of::<usize>() + 16);
    assert!(mem::size_of::<Vector<u8, 0>>() == mem::size_of::<usize>());

    // `Array` is `repr(transparent)` over `[T; N]`.
    assert!(mem::size_of::<Array<u8, 3>>() == 3);
    assert!(mem::align_of::<Array<u64, 2>>() == mem::align_of::<u64>());

    // An inplace function is its buffer plus one vtable pointer, rounded up
    // to the buffer alignment.
    assert!(
        mem::size_of::<InplaceFunction<fn(u32) -> u32, 32>>()
            == 32 + config::INPLACE_FUNCTION_ALIGNMENT
    );
    assert!(mem::align_of::<InplaceFunction<fn() -> (), 8>>() == config::INPLACE_FUNCTION_ALIGNMENT);

    // A delegate stays within four pointers.
    assert!(mem::size_of::<Delegate<'static, fn(u32) -> u32>>() <= mem::size_of::<usize>() * 4);

    // `Optional` adds nothing over `Option`.
    assert!(mem::size_of::<Optional<u32>>() == mem::size_of::<Option<u32>>());
};
