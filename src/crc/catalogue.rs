//! Named parameter sets.
//!
//! Values follow the public CRC catalogues; `check` is the CRC of the ASCII
//! string `"123456789"`. `CRC16_CCITT` is the 0xFFFF-initialised
//! "CCITT-FALSE" variant; `name` holds the catalogue name.

use super::Parameters;

// CRC-8

/// `CRC-8/SMBUS`.
pub const CRC8_CCITT: Parameters<u8> = Parameters {
    name: "CRC-8/SMBUS",
    poly: 0x07,
    init: 0x00,
    reflect: false,
    xor_out: 0x00,
    check: 0xF4,
};

/// `CRC-8/ROHC`.
pub const CRC8_ROHC: Parameters<u8> = Parameters {
    name: "CRC-8/ROHC",
    poly: 0x07,
    init: 0xFF,
    reflect: true,
    xor_out: 0x00,
    check: 0xD0,
};

/// `CRC-8/CDMA2000`.
pub const CRC8_CDMA2000: Parameters<u8> = Parameters {
    name: "CRC-8/CDMA2000",
    poly: 0x9B,
    init: 0xFF,
    reflect: false,
    xor_out: 0x00,
    check: 0xDA,
};

/// `CRC-8/DVB-S2`.
pub const CRC8_DVB_S2: Parameters<u8> = Parameters {
    name: "CRC-8/DVB-S2",
    poly: 0xD5,
    init: 0x00,
    reflect: false,
    xor_out: 0x00,
    check: 0xBC,
};

/// `CRC-8/EBU`.
pub const CRC8_EBU: Parameters<u8> = Parameters {
    name: "CRC-8/EBU",
    poly: 0x1D,
    init: 0xFF,
    reflect: true,
    xor_out: 0x00,
    check: 0x97,
};

/// `CRC-8/I-CODE`.
pub const CRC8_ICODE: Parameters<u8> = Parameters {
    name: "CRC-8/I-CODE",
    poly: 0x1D,
    init: 0xFD,
    reflect: false,
    xor_out: 0x00,
    check: 0x7E,
};

/// `CRC-8/ITU`.
pub const CRC8_ITU: Parameters<u8> = Parameters {
    name: "CRC-8/ITU",
    poly: 0x07,
    init: 0x00,
    reflect: false,
    xor_out: 0x55,
    check: 0xA1,
};

/// `CRC-8/MAXIM`.
pub const CRC8_MAXIM: Parameters<u8> = Parameters {
    name: "CRC-8/MAXIM",
    poly: 0x31,
    init: 0x00,
    reflect: true,
    xor_out: 0x00,
    check: 0xA1,
};

/// `CRC-8/WCDMA`.
pub const CRC8_WCDMA: Parameters<u8> = Parameters {
    name: "CRC-8/WCDMA",
    poly: 0x9B,
    init: 0x00,
    reflect: true,
    xor_out: 0x00,
    check: 0x25,
};

/// `CRC-8/SAE-J1850`.
pub const CRC8_J1850: Parameters<u8> = Parameters {
    name: "CRC-8/SAE-J1850",
    poly: 0x1D,
    init: 0xFF,
    reflect: false,
    xor_out: 0xFF,
    check: 0x4B,
};

/// `CRC-8/SAE-J1850-ZERO`.
pub const CRC8_J1850_ZERO: Parameters<u8> = Parameters {
    name: "CRC-8/SAE-J1850-ZERO",
    poly: 0x1D,
    init: 0x00,
    reflect: false,
    xor_out: 0x00,
    check: 0x37,
};

/// `CRC-8/NRSC-5`.
pub const CRC8_NRSC5: Parameters<u8> = Parameters {
    name: "CRC-8/NRSC-5",
    poly: 0x31,
    init: 0xFF,
    reflect: false,
    xor_out: 0x00,
    check: 0xF7,
};

/// `CRC-8/OPENSAFETY`.
pub const CRC8_OPENSAFETY: Parameters<u8> = Parameters {
    name: "CRC-8/OPENSAFETY",
    poly: 0x2F,
    init: 0x00,
    reflect: false,
    xor_out: 0x00,
    check: 0x3E,
};

/// `CRC-8/BLUETOOTH`.
pub const CRC8_BLUETOOTH: Parameters<u8> = Parameters {
    name: "CRC-8/BLUETOOTH",
    poly: 0xA7,
    init: 0x00,
    reflect: true,
    xor_out: 0x00,
    check: 0x26,
};

/// Every CRC-8 parameter set above.
pub const CRC8_ALL: &[&Parameters<u8>] = &[
    &CRC8_CCITT,
    &CRC8_ROHC,
    &CRC8_CDMA2000,
    &CRC8_DVB_S2,
    &CRC8_EBU,
    &CRC8_ICODE,
    &CRC8_ITU,
    &CRC8_MAXIM,
    &CRC8_WCDMA,
    &CRC8_J1850,
    &CRC8_J1850_ZERO,
    &CRC8_NRSC5,
    &CRC8_OPENSAFETY,
    &CRC8_BLUETOOTH,
];

// CRC-16

/// `CRC-16/ARC`.
pub const CRC16: Parameters<u16> = Parameters {
    name: "CRC-16/ARC",
    poly: 0x8005,
    init: 0x0000,
    reflect: true,
    xor_out: 0x0000,
    check: 0xBB3D,
};

/// `CRC-16/CCITT-FALSE`.
pub const CRC16_CCITT: Parameters<u16> = Parameters {
    name: "CRC-16/CCITT-FALSE",
    poly: 0x1021,
    init: 0xFFFF,
    reflect: false,
    xor_out: 0x0000,
    check: 0x29B1,
};

/// `CRC-16/AUG-CCITT`.
pub const CRC16_AUG_CCITT: Parameters<u16> = Parameters {
    name: "CRC-16/AUG-CCITT",
    poly: 0x1021,
    init: 0x1D0F,
    reflect: false,
    xor_out: 0x0000,
    check: 0xE5CC,
};

/// `CRC-16/GENIBUS`.
pub const CRC16_GENIBUS: Parameters<u16> = Parameters {
    name: "CRC-16/GENIBUS",
    poly: 0x1021,
    init: 0xFFFF,
    reflect: false,
    xor_out: 0xFFFF,
    check: 0xD64E,
};

/// `CRC-16/XMODEM`.
pub const CRC16_XMODEM: Parameters<u16> = Parameters {
    name: "CRC-16/XMODEM",
    poly: 0x1021,
    init: 0x0000,
    reflect: false,
    xor_out: 0x0000,
    check: 0x31C3,
};

/// `CRC-16/KERMIT`.
pub const CRC16_KERMIT: Parameters<u16> = Parameters {
    name: "CRC-16/KERMIT",
    poly: 0x1021,
    init: 0x0000,
    reflect: true,
    xor_out: 0x0000,
    check: 0x2189,
};

/// `CRC-16/MODBUS`.
pub const CRC16_MODBUS: Parameters<u16> = Parameters {
    name: "CRC-16/MODBUS",
    poly: 0x8005,
    init: 0xFFFF,
    reflect: true,
    xor_out: 0x0000,
    check: 0x4B37,
};

/// `CRC-16/USB`.
pub const CRC16_USB: Parameters<u16> = Parameters {
    name: "CRC-16/USB",
    poly: 0x8005,
    init: 0xFFFF,
    reflect: true,
    xor_out: 0xFFFF,
    check: 0xB4C8,
};

/// `CRC-16/X-25`.
pub const CRC16_X25: Parameters<u16> = Parameters {
    name: "CRC-16/X-25",
    poly: 0x1021,
    init: 0xFFFF,
    reflect: true,
    xor_out: 0xFFFF,
    check: 0x906E,
};

/// `CRC-16/BUYPASS`.
pub const CRC16_BUYPASS: Parameters<u16> = Parameters {
    name: "CRC-16/BUYPASS",
    poly: 0x8005,
    init: 0x0000,
    reflect: false,
    xor_out: 0x0000,
    check: 0xFEE8,
};

/// `CRC-16/DDS-110`.
pub const CRC16_DDS110: Parameters<u16> = Parameters {
    name: "CRC-16/DDS-110",
    poly: 0x8005,
    init: 0x800D,
    reflect: false,
    xor_out: 0x0000,
    check: 0x9ECF,
};

/// `CRC-16/DECT-R`.
pub const CRC16_DECT_R: Parameters<u16> = Parameters {
    name: "CRC-16/DECT-R",
    poly: 0x0589,
    init: 0x0000,
    reflect: false,
    xor_out: 0x0001,
    check: 0x007E,
};

/// `CRC-16/DECT-X`.
pub const CRC16_DECT_X: Parameters<u16> = Parameters {
    name: "CRC-16/DECT-X",
    poly: 0x0589,
    init: 0x0000,
    reflect: false,
    xor_out: 0x0000,
    check: 0x007F,
};

/// `CRC-16/DNP`.
pub const CRC16_DNP: Parameters<u16> = Parameters {
    name: "CRC-16/DNP",
    poly: 0x3D65,
    init: 0x0000,
    reflect: true,
    xor_out: 0xFFFF,
    check: 0xEA82,
};

/// `CRC-16/EN-13757`.
pub const CRC16_EN13757: Parameters<u16> = Parameters {
    name: "CRC-16/EN-13757",
    poly: 0x3D65,
    init: 0x0000,
    reflect: false,
    xor_out: 0xFFFF,
    check: 0xC2B7,
};

/// `CRC-16/MAXIM`.
pub const CRC16_MAXIM: Parameters<u16> = Parameters {
    name: "CRC-16/MAXIM",
    poly: 0x8005,
    init: 0x0000,
    reflect: true,
    xor_out: 0xFFFF,
    check: 0x44C2,
};

/// `CRC-16/MCRF4XX`.
pub const CRC16_MCRF4XX: Parameters<u16> = Parameters {
    name: "CRC-16/MCRF4XX",
    poly: 0x1021,
    init: 0xFFFF,
    reflect: true,
    xor_out: 0x0000,
    check: 0x6F91,
};

/// `CRC-16/RIELLO`.
pub const CRC16_RIELLO: Parameters<u16> = Parameters {
    name: "CRC-16/RIELLO",
    poly: 0x1021,
    init: 0xB2AA,
    reflect: true,
    xor_out: 0x0000,
    check: 0x63D0,
};

/// `CRC-16/T10-DIF`.
pub const CRC16_T10DIF: Parameters<u16> = Parameters {
    name: "CRC-16/T10-DIF",
    poly: 0x8BB7,
    init: 0x0000,
    reflect: false,
    xor_out: 0x0000,
    check: 0xD0DB,
};

/// `CRC-16/TELEDISK`.
pub const CRC16_TELEDISK: Parameters<u16> = Parameters {
    name: "CRC-16/TELEDISK",
    poly: 0xA097,
    init: 0x0000,
    reflect: false,
    xor_out: 0x0000,
    check: 0x0FB3,
};

/// `CRC-16/TMS37157`.
pub const CRC16_TMS37157: Parameters<u16> = Parameters {
    name: "CRC-16/TMS37157",
    poly: 0x1021,
    init: 0x89EC,
    reflect: true,
    xor_out: 0x0000,
    check: 0x26B1,
};

/// `CRC-16/ISO-IEC-14443-3-A`.
pub const CRC16_A: Parameters<u16> = Parameters {
    name: "CRC-16/ISO-IEC-14443-3-A",
    poly: 0x1021,
    init: 0xC6C6,
    reflect: true,
    xor_out: 0x0000,
    check: 0xBF05,
};

/// `CRC-16/PROFIBUS`.
pub const CRC16_PROFIBUS: Parameters<u16> = Parameters {
    name: "CRC-16/PROFIBUS",
    poly: 0x1DCF,
    init: 0xFFFF,
    reflect: false,
    xor_out: 0xFFFF,
    check: 0xA819,
};

/// `CRC-16/OPENSAFETY-A`.
pub const CRC16_OPENSAFETY_A: Parameters<u16> = Parameters {
    name: "CRC-16/OPENSAFETY-A",
    poly: 0x5935,
    init: 0x0000,
    reflect: false,
    xor_out: 0x0000,
    check: 0x5D38,
};

/// `CRC-16/OPENSAFETY-B`.
pub const CRC16_OPENSAFETY_B: Parameters<u16> = Parameters {
    name: "CRC-16/OPENSAFETY-B",
    poly: 0x755B,
    init: 0x0000,
    reflect: false,
    xor_out: 0x0000,
    check: 0x20FE,
};

/// `CRC-16/M17`.
pub const CRC16_M17: Parameters<u16> = Parameters {
    name: "CRC-16/M17",
    poly: 0x5935,
    init: 0xFFFF,
    reflect: false,
    xor_out: 0x0000,
    check: 0x772B,
};

/// Every CRC-16 parameter set above.
pub const CRC16_ALL: &[&Parameters<u16>] = &[
    &CRC16,
    &CRC16_CCITT,
    &CRC16_AUG_CCITT,
    &CRC16_GENIBUS,
    &CRC16_XMODEM,
    &CRC16_KERMIT,
    &CRC16_MODBUS,
    &CRC16_USB,
    &CRC16_X25,
    &CRC16_BUYPASS,
    &CRC16_DDS110,
    &CRC16_DECT_R,
    &CRC16_DECT_X,
    &CRC16_DNP,
    &CRC16_EN13757,
    &CRC16_MAXIM,
    &CRC16_MCRF4XX,
    &CRC16_RIELLO,
    &CRC16_T10DIF,
    &CRC16_TELEDISK,
    &CRC16_TMS37157,
    &CRC16_A,
    &CRC16_PROFIBUS,
    &CRC16_OPENSAFETY_A,
    &CRC16_OPENSAFETY_B,
    &CRC16_M17,
];

// CRC-32

/// `CRC-32/ISO-HDLC`.
pub const CRC32: Parameters<u32> = Parameters {
    name: "CRC-32/ISO-HDLC",
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    reflect: true,
    xor_out: 0xFFFF_FFFF,
    check: 0xCBF4_3926,
};

/// `CRC-32/ISCSI`.
pub const CRC32_C: Parameters<u32> = Parameters {
    name: "CRC-32/ISCSI",
    poly: 0x1EDC_6F41,
    init: 0xFFFF_FFFF,
    reflect: true,
    xor_out: 0xFFFF_FFFF,
    check: 0xE306_9283,
};

/// `CRC-32/BZIP2`.
pub const CRC32_BZIP2: Parameters<u32> = Parameters {
    name: "CRC-32/BZIP2",
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    reflect: false,
    xor_out: 0xFFFF_FFFF,
    check: 0xFC89_1918,
};

/// `CRC-32/MPEG-2`.
pub const CRC32_MPEG2: Parameters<u32> = Parameters {
    name: "CRC-32/MPEG-2",
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    reflect: false,
    xor_out: 0x0000_0000,
    check: 0x0376_E6E7,
};

/// `CRC-32/CKSUM`.
pub const CRC32_POSIX: Parameters<u32> = Parameters {
    name: "CRC-32/CKSUM",
    poly: 0x04C1_1DB7,
    init: 0x0000_0000,
    reflect: false,
    xor_out: 0xFFFF_FFFF,
    check: 0x765E_7680,
};

/// `CRC-32/AIXM`.
pub const CRC32_Q: Parameters<u32> = Parameters {
    name: "CRC-32/AIXM",
    poly: 0x8141_41AB,
    init: 0x0000_0000,
    reflect: false,
    xor_out: 0x0000_0000,
    check: 0x3010_BF7F,
};

/// `CRC-32/JAMCRC`.
pub const CRC32_JAMCRC: Parameters<u32> = Parameters {
    name: "CRC-32/JAMCRC",
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    reflect: true,
    xor_out: 0x0000_0000,
    check: 0x340B_C6D9,
};

/// `CRC-32/XFER`.
pub const CRC32_XFER: Parameters<u32> = Parameters {
    name: "CRC-32/XFER",
    poly: 0x0000_00AF,
    init: 0x0000_0000,
    reflect: false,
    xor_out: 0x0000_0000,
    check: 0xBD0B_E338,
};

/// `CRC-32/BASE91-D`.
pub const CRC32_D: Parameters<u32> = Parameters {
    name: "CRC-32/BASE91-D",
    poly: 0xA833_982B,
    init: 0xFFFF_FFFF,
    reflect: true,
    xor_out: 0xFFFF_FFFF,
    check: 0x8731_5576,
};

/// Every CRC-32 parameter set above.
pub const CRC32_ALL: &[&Parameters<u32>] = &[
    &CRC32,
    &CRC32_C,
    &CRC32_BZIP2,
    &CRC32_MPEG2,
    &CRC32_POSIX,
    &CRC32_Q,
    &CRC32_JAMCRC,
    &CRC32_XFER,
    &CRC32_D,
];

// CRC-64

/// `CRC-64/ECMA-182`.
pub const CRC64_ECMA: Parameters<u64> = Parameters {
    name: "CRC-64/ECMA-182",
    poly: 0x42F0_E1EB_A9EA_3693,
    init: 0x0000_0000_0000_0000,
    reflect: false,
    xor_out: 0x0000_0000_0000_0000,
    check: 0x6C40_DF5F_0B49_7347,
};

/// `CRC-64/XZ`.
pub const CRC64_XZ: Parameters<u64> = Parameters {
    name: "CRC-64/XZ",
    poly: 0x42F0_E1EB_A9EA_3693,
    init: 0xFFFF_FFFF_FFFF_FFFF,
    reflect: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
    check: 0x995D_C9BB_DF19_39FA,
};

/// Every CRC-64 parameter set above.
pub const CRC64_ALL: &[&Parameters<u64>] = &[
    &CRC64_ECMA,
    &CRC64_XZ,
];
