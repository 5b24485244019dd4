//! Running checksum over a policy.

use super::CrcPolicy;
use zerocopy::AsBytes;

/// A checksum being accumulated byte by byte.
///
/// The register starts at the policy's initial value; [`value`](Self::value)
/// reports the finalized checksum at any point without disturbing the
/// running state, so more bytes may follow.
#[derive(Debug, Clone)]
pub struct Digest<'a, P: CrcPolicy> {
    policy: &'a P,
    register: P::Accumulator,
}

impl<'a, P: CrcPolicy> Digest<'a, P> {
    /// Starts a checksum over `policy`.
    #[inline]
    pub fn new(policy: &'a P) -> Self {
        Self {
            policy,
            register: policy.initial(),
        }
    }

    /// Discards everything added so far.
    #[inline]
    pub fn reset(&mut self) {
        self.register = self.policy.initial();
    }

    /// Adds one byte.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.register = self.policy.add(self.register, byte);
    }

    /// Adds every byte of `bytes`, in order.
    pub fn add_slice(&mut self, bytes: &[u8]) {
        self.register = bytes
            .iter()
            .fold(self.register, |crc, &byte| self.policy.add(crc, byte));
    }

    /// Adds the in-memory representation of `value`.
    ///
    /// The byte order is the target's native order.
    pub fn add_value<T: AsBytes + ?Sized>(&mut self, value: &T) {
        self.add_slice(value.as_bytes());
    }

    /// The finalized checksum of everything added so far.
    #[inline]
    pub fn value(&self) -> P::Accumulator {
        self.policy.finalize(self.register)
    }

    /// The raw register, before the final XOR.
    #[inline]
    pub fn register(&self) -> P::Accumulator {
        self.register
    }

    /// Consumes the digest and returns the finalized checksum.
    #[inline]
    pub fn finalize(self) -> P::Accumulator {
        self.value()
    }
}

impl<P: CrcPolicy> Extend<u8> for Digest<'_, P> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.add(byte);
        }
    }
}

impl<'b, P: CrcPolicy> Extend<&'b u8> for Digest<'_, P> {
    fn extend<I: IntoIterator<Item = &'b u8>>(&mut self, iter: I) {
        for &byte in iter {
            self.add(byte);
        }
    }
}

impl<P: CrcPolicy> std::io::Write for Digest<'_, P> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.add_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::crc::{Crc, CRC16_XMODEM, CRC32};
    use std::io::Write;

    #[test]
    fn test_value_does_not_consume_state() {
        let crc: Crc<u32> = Crc::new(&CRC32);
        let mut digest = crc.digest();
        digest.add_slice(b"12345");
        let partial = digest.value();
        assert_eq!(partial, crc.checksum(b"12345"));
        digest.add_slice(b"6789");
        assert_eq!(digest.finalize(), 0xCBF4_3926);
    }

    #[test]
    fn test_reset_restarts() {
        let crc: Crc<u16> = Crc::new(&CRC16_XMODEM);
        let mut digest = crc.digest();
        digest.add_slice(b"garbage");
        digest.reset();
        digest.extend(b"123456789".iter());
        assert_eq!(digest.value(), 0x31C3);
    }

    #[test]
    fn test_io_write_and_values() {
        let crc: Crc<u32, 16> = Crc::new(&CRC32);
        let mut digest = crc.digest();
        write!(digest, "{}", 123_456_789).unwrap();
        assert_eq!(digest.value(), 0xCBF4_3926);

        let mut by_value = crc.digest();
        by_value.add_value(b"123456789");
        assert_eq!(by_value.value(), 0xCBF4_3926);
    }
}
