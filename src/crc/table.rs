//! Compile-time table generation and the byte-folding loop.

use super::{CrcPolicy, Digest, Parameters, Width};
use crate::config::DEFAULT_CRC_TABLE_SIZE;
use core::fmt;

/// A CRC algorithm bound to a lookup table of `TABLE` entries.
///
/// [`Parameters::build`] is a `const fn`, so the table usually lives in
/// read-only memory:
///
/// ```rust
/// use etl::crc::{Crc, CRC8_ROHC};
///
/// static ROHC: Crc<u8, 4> = CRC8_ROHC.build();
/// assert_eq!(ROHC.checksum(b"123456789"), 0xD0);
///
/// let rohc: Crc<u8, 4> = Crc::new(&CRC8_ROHC);
/// assert_eq!(rohc.table(), ROHC.table());
/// ```
///
/// `TABLE` must be 4, 16 or 256; any other value fails to compile.
#[derive(Clone)]
pub struct Crc<W: Width, const TABLE: usize = { DEFAULT_CRC_TABLE_SIZE }> {
    parameters: Parameters<W>,
    initial: W,
    table: [W; TABLE],
}

impl<W: Width, const TABLE: usize> Crc<W, TABLE> {
    /// Builds the algorithm and its lookup table.
    ///
    /// Use [`Parameters::build`] where a `const fn` is required.
    #[inline]
    pub fn new(parameters: &Parameters<W>) -> Self {
        W::build(parameters)
    }

    const CHUNK_BITS: u32 = match TABLE {
        4 => 2,
        16 => 4,
        _ => 8,
    };

    const CHUNK_MASK: u8 = (TABLE - 1) as u8;

    /// The parameter set this CRC was built from.
    #[inline]
    pub const fn parameters(&self) -> &Parameters<W> {
        &self.parameters
    }

    /// The generated lookup table.
    #[inline]
    pub const fn table(&self) -> &[W; TABLE] {
        &self.table
    }

    /// Number of table lookups performed per input byte.
    #[inline]
    pub const fn lookups_per_byte(&self) -> u32 {
        8 / Self::CHUNK_BITS
    }

    /// Starts a running checksum.
    #[inline]
    pub fn digest(&self) -> Digest<'_, Self>
    where
        Self: CrcPolicy<Accumulator = W>,
    {
        Digest::new(self)
    }
}

impl<W: Width, const TABLE: usize> fmt::Debug for Crc<W, TABLE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crc")
            .field("name", &self.parameters.name)
            .field("table_size", &TABLE)
            .field("initial", &self.initial)
            .finish()
    }
}

macro_rules! impl_crc_width {
    ($ty:ty) => {
        impl Parameters<$ty> {
            /// Builds the algorithm and its lookup table in constant context.
            pub const fn build<const TABLE: usize>(&self) -> Crc<$ty, TABLE> {
                const {
                    assert!(
                        TABLE == 4 || TABLE == 16 || TABLE == 256,
                        "CRC table size must be 4, 16 or 256"
                    )
                };

                let initial = if self.reflect {
                    self.init.reverse_bits()
                } else {
                    self.init
                };

                Crc {
                    parameters: *self,
                    initial,
                    table: Crc::<$ty, TABLE>::build_table(self.poly, self.reflect),
                }
            }
        }

        impl super::sealed::Sealed for $ty {
            #[inline]
            fn build<const TABLE: usize>(parameters: &Parameters<$ty>) -> Crc<$ty, TABLE> {
                parameters.build()
            }
        }

        impl<const TABLE: usize> Crc<$ty, TABLE> {
            // One entry per index: the index placed in the register (top bits
            // when MSB-first), shifted through the polynomial once per chunk bit.
            const fn build_table(poly: $ty, reflect: bool) -> [$ty; TABLE] {
                let reflected_poly = poly.reverse_bits();
                let top: $ty = 1 << (<$ty>::BITS - 1);
                let mut table = [0 as $ty; TABLE];
                let mut index = 0;
                while index < TABLE {
                    let mut entry: $ty = if reflect {
                        index as $ty
                    } else {
                        (index as $ty) << (<$ty>::BITS - Self::CHUNK_BITS)
                    };
                    let mut step = 0;
                    while step < Self::CHUNK_BITS {
                        entry = if reflect {
                            if entry & 1 != 0 {
                                (entry >> 1) ^ reflected_poly
                            } else {
                                entry >> 1
                            }
                        } else if entry & top != 0 {
                            (entry << 1) ^ poly
                        } else {
                            entry << 1
                        };
                        step += 1;
                    }
                    table[index] = entry;
                    index += 1;
                }
                table
            }

            /// Register value before the first byte.
            #[inline]
            pub const fn initial(&self) -> $ty {
                self.initial
            }

            #[inline]
            const fn update_chunk(&self, crc: $ty, chunk: u8) -> $ty {
                if self.parameters.reflect {
                    let index = ((crc ^ chunk as $ty) & Self::CHUNK_MASK as $ty) as usize;
                    if <$ty>::BITS > Self::CHUNK_BITS {
                        (crc >> Self::CHUNK_BITS) ^ self.table[index]
                    } else {
                        self.table[index]
                    }
                } else {
                    let index = ((crc >> (<$ty>::BITS - Self::CHUNK_BITS)) ^ chunk as $ty) as usize;
                    if <$ty>::BITS > Self::CHUNK_BITS {
                        (crc << Self::CHUNK_BITS) ^ self.table[index]
                    } else {
                        self.table[index]
                    }
                }
            }

            /// Folds one byte into `crc`.
            ///
            /// Reflected algorithms consume the low chunk of the byte first,
            /// MSB-first algorithms the high chunk.
            #[inline]
            pub const fn add(&self, mut crc: $ty, byte: u8) -> $ty {
                let chunks = 8 / Self::CHUNK_BITS;
                let mut step = 0;
                while step < chunks {
                    let shift = if self.parameters.reflect {
                        step * Self::CHUNK_BITS
                    } else {
                        8 - Self::CHUNK_BITS - step * Self::CHUNK_BITS
                    };
                    crc = self.update_chunk(crc, (byte >> shift) & Self::CHUNK_MASK);
                    step += 1;
                }
                crc
            }

            /// Applies the final XOR.
            #[inline]
            pub const fn finalize(&self, crc: $ty) -> $ty {
                crc ^ self.parameters.xor_out
            }

            /// Computes the checksum of `data` in one pass.
            pub const fn checksum(&self, data: &[u8]) -> $ty {
                let mut crc = self.initial;
                let mut index = 0;
                while index < data.len() {
                    crc = self.add(crc, data[index]);
                    index += 1;
                }
                self.finalize(crc)
            }
        }

        impl<const TABLE: usize> CrcPolicy for Crc<$ty, TABLE> {
            type Accumulator = $ty;

            #[inline]
            fn initial(&self) -> $ty {
                self.initial
            }

            #[inline]
            fn add(&self, crc: $ty, byte: u8) -> $ty {
                Crc::<$ty, TABLE>::add(self, crc, byte)
            }

            #[inline]
            fn finalize(&self, crc: $ty) -> $ty {
                Crc::<$ty, TABLE>::finalize(self, crc)
            }
        }
    };
}

impl_crc_width!(u8);
impl_crc_width!(u16);
impl_crc_width!(u32);
impl_crc_width!(u64);
