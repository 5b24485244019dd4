//! Build-time configuration knobs.
//!
//! Anything that needs to differ per use site is exposed as a const generic
//! parameter defaulting to the value below.

/// Default inline storage, in bytes, of an [`InplaceFunction`](crate::function::InplaceFunction).
pub const DEFAULT_INPLACE_FUNCTION_SIZE: usize = 32;

/// Alignment of the inline storage of every [`InplaceFunction`](crate::function::InplaceFunction).
///
/// A bound target must not be more strictly aligned than this.
pub const INPLACE_FUNCTION_ALIGNMENT: usize = 16;

/// Default number of entries in a CRC lookup table.
pub const DEFAULT_CRC_TABLE_SIZE: usize = 256;
