use etl::crc::{
    Crc, Parameters, CRC16_ALL, CRC16_CCITT, CRC16_KERMIT, CRC32, CRC32_ALL, CRC32_MPEG2, CRC64_ALL,
    CRC64_XZ, CRC8_ALL, CRC8_CCITT, CRC8_MAXIM,
};
use num_traits::{PrimInt, Unsigned};
use proptest::prelude::*;

const CHECK_INPUT: &[u8] = b"123456789";

/// Bit-at-a-time CRC straight from the parameter definition.
fn bitwise<W>(parameters: &Parameters<W>, data: &[u8]) -> W
where
    W: etl::crc::Width + PrimInt + Unsigned,
{
    let bits = W::zero().count_zeros() as usize;
    let top = W::one() << (bits - 1);
    let mut crc = parameters.init;
    for &byte in data {
        let byte = if parameters.reflect { byte.reverse_bits() } else { byte };
        crc = crc ^ (W::from(byte).unwrap() << (bits - 8));
        for _ in 0..8 {
            crc = if crc & top != W::zero() {
                (crc << 1) ^ parameters.poly
            } else {
                crc << 1
            };
        }
    }
    if parameters.reflect {
        crc = crc.reverse_bits();
    }
    crc ^ parameters.xor_out
}

macro_rules! check_catalogue {
    ($name:ident, $all:expr, $ty:ty) => {
        #[test]
        fn $name() {
            for &parameters in $all {
                let t256 = Crc::<$ty, 256>::new(parameters);
                let t16 = Crc::<$ty, 16>::new(parameters);
                let t4 = Crc::<$ty, 4>::new(parameters);
                assert_eq!(t256.checksum(CHECK_INPUT), parameters.check, "{} (256)", parameters.name);
                assert_eq!(t16.checksum(CHECK_INPUT), parameters.check, "{} (16)", parameters.name);
                assert_eq!(t4.checksum(CHECK_INPUT), parameters.check, "{} (4)", parameters.name);
                assert_eq!(bitwise(parameters, CHECK_INPUT), parameters.check, "{} (bitwise)", parameters.name);
            }
        }
    };
}

check_catalogue!(test_crc8_catalogue, CRC8_ALL, u8);
check_catalogue!(test_crc16_catalogue, CRC16_ALL, u16);
check_catalogue!(test_crc32_catalogue, CRC32_ALL, u32);
check_catalogue!(test_crc64_catalogue, CRC64_ALL, u64);

#[test]
fn test_catalogue_sizes() {
    assert_eq!(CRC8_ALL.len(), 14);
    assert_eq!(CRC16_ALL.len(), 26);
    assert_eq!(CRC32_ALL.len(), 9);
    assert_eq!(CRC64_ALL.len(), 2);
}

#[test]
fn test_empty_input_is_finalized_init() {
    let crc: Crc<u16> = Crc::new(&CRC16_CCITT);
    assert_eq!(crc.checksum(&[]), 0xFFFF);
    let crc32: Crc<u32> = Crc::new(&CRC32);
    assert_eq!(crc32.checksum(&[]), 0);
}

#[test]
fn test_digest_write_and_extend() -> anyhow::Result<()> {
    use std::io::Write;

    let crc: Crc<u32, 16> = Crc::new(&CRC32_MPEG2);
    let mut digest = crc.digest();
    digest.write_all(b"1234")?;
    digest.extend(b"56789".iter());
    assert_eq!(digest.finalize(), CRC32_MPEG2.check);
    Ok(())
}

#[test]
fn test_add_value_hashes_bytes() {
    let crc: Crc<u64> = Crc::new(&CRC64_XZ);
    let mut digest = crc.digest();
    digest.add_value(&0x3231_u16.to_le());
    digest.add_slice(b"3456789");
    assert_eq!(digest.value(), CRC64_XZ.check);
}

#[test]
fn test_reset_restarts() {
    let crc: Crc<u8> = Crc::new(&CRC8_MAXIM);
    let mut digest = crc.digest();
    digest.add_slice(b"garbage");
    digest.reset();
    digest.add_slice(CHECK_INPUT);
    assert_eq!(digest.value(), CRC8_MAXIM.check);
}

proptest! {
    #[test]
    fn test_tables_match_bitwise_crc8(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let t256: Crc<u8, 256> = Crc::new(&CRC8_CCITT);
        let t4: Crc<u8, 4> = Crc::new(&CRC8_CCITT);
        let expected = bitwise(&CRC8_CCITT, &data);
        prop_assert_eq!(t256.checksum(&data), expected);
        prop_assert_eq!(t4.checksum(&data), expected);
    }

    #[test]
    fn test_tables_match_bitwise_crc16(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let t16: Crc<u16, 16> = Crc::new(&CRC16_KERMIT);
        prop_assert_eq!(t16.checksum(&data), bitwise(&CRC16_KERMIT, &data));
    }

    #[test]
    fn test_incremental_equals_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        split in any::<prop::sample::Index>(),
    ) {
        let crc: Crc<u32> = Crc::new(&CRC32);
        let at = split.index(data.len() + 1);
        let mut digest = crc.digest();
        digest.add_slice(&data[..at]);
        digest.add_slice(&data[at..]);
        prop_assert_eq!(digest.value(), crc.checksum(&data));
        prop_assert_eq!(bitwise(&CRC32, &data), crc.checksum(&data));
    }
}
