//! Table-driven cyclic redundancy checks.
//!
//! A CRC algorithm is fully described by its [`Parameters`]: register width,
//! polynomial, initial register value, bit order and final XOR. [`Crc`] turns
//! a parameter set into a lookup table at compile time and folds bytes into a
//! running register; [`Digest`] carries that register across calls.
//!
//! Three table granularities trade ROM for speed:
//!
//! | `TABLE` | chunk bits | lookups per byte |
//! |---------|------------|------------------|
//! | 256     | 8          | 1                |
//! | 16      | 4          | 2                |
//! | 4       | 2          | 4                |
//!
//! [`Crc::new`] builds at run time for any width. In constant context, build
//! from the parameter set instead, with [`Parameters::build`]:
//!
//! ```rust
//! use etl::crc::{Crc, CRC16_CCITT, CRC32_BZIP2};
//!
//! const CCITT: Crc<u16> = CRC16_CCITT.build();
//! assert_eq!(CCITT.checksum(b"123456789"), 0x29B1);
//!
//! // Same algorithm, 16-entry table, built at run time.
//! let bzip2: Crc<u32, 16> = Crc::new(&CRC32_BZIP2);
//! let mut digest = bzip2.digest();
//! digest.add_slice(b"1234");
//! digest.add_slice(b"56789");
//! assert_eq!(digest.value(), 0xFC89_1918);
//! ```

mod catalogue;
mod digest;
mod table;

pub use catalogue::*;
pub use digest::Digest;
pub use table::Crc;

use core::fmt::Debug;

mod sealed {
    use super::{Crc, Parameters, Width};

    pub trait Sealed: Sized {
        fn build<const TABLE: usize>(parameters: &Parameters<Self>) -> Crc<Self, TABLE>
        where
            Self: Width;
    }
}

/// Unsigned integer usable as a CRC register.
pub trait Width: sealed::Sealed + Copy + Eq + Debug + 'static {
    /// Register width in bits.
    const BITS: u32;
}

impl Width for u8 {
    const BITS: u32 = 8;
}

impl Width for u16 {
    const BITS: u32 = 16;
}

impl Width for u32 {
    const BITS: u32 = 32;
}

impl Width for u64 {
    const BITS: u32 = 64;
}

/// A CRC algorithm definition in catalogue form.
///
/// `init` is written the way CRC catalogues list it, i.e. in the polynomial's
/// bit order. Reflected algorithms reflect it once when a [`Crc`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters<W: Width> {
    /// Catalogue name, e.g. `"CRC-16/MODBUS"`.
    pub name: &'static str,
    /// Generator polynomial, normal (MSB-first) form, top bit implied.
    pub poly: W,
    /// Register value before the first byte.
    pub init: W,
    /// Process bits LSB-first (input and output reflected).
    pub reflect: bool,
    /// Value XORed into the register to produce the result.
    pub xor_out: W,
    /// CRC of the ASCII string `"123456789"`.
    pub check: W,
}

/// The per-algorithm operations a running checksum is built on.
pub trait CrcPolicy {
    /// Register type.
    type Accumulator: Width;

    /// Register value before any byte is added.
    fn initial(&self) -> Self::Accumulator;

    /// Folds one byte into `crc`.
    fn add(&self, crc: Self::Accumulator, byte: u8) -> Self::Accumulator;

    /// Turns a register into the published checksum value.
    fn finalize(&self, crc: Self::Accumulator) -> Self::Accumulator;
}
