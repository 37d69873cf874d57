//! Header codec.
//!
//! The header is written once, when the store is created, and tags the
//! buffer with a format version and the element bit width:
//!
//! | size | layout                                                        |
//! |------|---------------------------------------------------------------|
//! | 1    | `version << 5 \| width`, low 8 bits (fields may overlap)       |
//! | 2    | version (1 byte), width (1 byte)                              |
//! | 3    | version (2 bytes BE), width (1 byte)                          |
//! | 4    | version (3 bytes BE), width (1 byte)                          |
//! | 5    | version (4 bytes BE), width (1 byte)                          |
//! | n≥6  | version (n-1 bytes BE), width (1 byte)                        |
//!
//! A version wider than its field keeps only its low-order bytes.

use crate::frame::store_be;
use num_bigint::BigUint;

/// Bits reserved for the width in a single-byte header.
const COMPACT_WIDTH_BITS: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeaderLayout {
    /// One byte shared by version and width.
    Compact,
    /// Big-endian version field followed by a single width byte.
    Split { version_bytes: usize },
}

impl HeaderLayout {
    pub fn for_size(header_byte_size: usize) -> Self {
        match header_byte_size {
            0 | 1 => HeaderLayout::Compact,
            n => HeaderLayout::Split {
                version_bytes: n - 1,
            },
        }
    }
}

/// Encodes the header bytes for a store.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use packed_store::header::encode;
///
/// assert_eq!(encode(&BigUint::from(1u8), 1, 16), vec![0b0011_0000]);
/// assert_eq!(encode(&BigUint::from(255u8), 3, 8), vec![0x00, 0xFF, 0x08]);
/// ```
pub fn encode(version: &BigUint, header_byte_size: usize, data_bit_width: usize) -> Vec<u8> {
    let mut out = vec![0u8; header_byte_size];
    if out.is_empty() {
        return out;
    }

    match HeaderLayout::for_size(header_byte_size) {
        HeaderLayout::Compact => {
            let packed = (version << COMPACT_WIDTH_BITS) | BigUint::from(data_bit_width);
            store_be(&mut out, &packed);
        }
        HeaderLayout::Split { version_bytes } => {
            store_be(&mut out[..version_bytes], version);
            out[version_bytes] = (data_bit_width & 0xFF) as u8;
        }
    }
    out
}
