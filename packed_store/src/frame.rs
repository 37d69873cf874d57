//! Frame codec: locating, extracting and inserting one element's bits.
//!
//! Element `i` of width `w` covers bits `[i*w, (i+1)*w)` of the data region,
//! counted from the most significant bit of the first byte. The smallest
//! whole-byte span covering those bits is the element's frame; it is read and
//! written as a single big-endian integer.

use core::ops::Range;
use num_bigint::BigUint;
use num_traits::One;

/// Byte span and bit shift of one element inside the data region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrameSpan {
    pub start_byte: usize,
    pub end_byte: usize,
    /// Number of bits between the element's last bit and the end of the frame.
    pub shift: usize,
}

impl FrameSpan {
    /// Returns `None` if the element's bit offset does not fit in `usize`.
    pub fn locate(index: usize, width: usize) -> Option<Self> {
        let start_bit = index.checked_mul(width)?;
        let end_bit = start_bit.checked_add(width)?;
        let end_byte = end_bit.div_ceil(8);
        let shift = end_byte.checked_mul(8)? - end_bit;
        Some(Self {
            start_byte: start_bit / 8,
            end_byte,
            shift,
        })
    }

    #[inline]
    pub fn bytes(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }
}

/// `2^width - 1`
pub(crate) fn mask(width: usize) -> BigUint {
    (BigUint::one() << width) - BigUint::one()
}

pub(crate) fn extract(frame: &[u8], shift: usize, width: usize) -> BigUint {
    (BigUint::from_bytes_be(frame) >> shift) & mask(width)
}

/// Replaces the element's bits in `frame`, leaving neighbouring bits intact.
/// `value` must already fit in `width` bits.
pub(crate) fn insert(frame: &mut [u8], shift: usize, width: usize, value: &BigUint) {
    let current = BigUint::from_bytes_be(frame);
    let field = mask(width) << shift;
    let cleared = &current ^ (&current & &field);
    store_be(frame, &(cleared | (value << shift)));
}

/// Writes the low `dst.len()` bytes of `value` into `dst`, most significant
/// byte first, zero-padding on the left.
pub(crate) fn store_be(dst: &mut [u8], value: &BigUint) {
    let bytes = value.to_bytes_be();
    let n = bytes.len().min(dst.len());
    let pad = dst.len() - n;
    dst[..pad].fill(0);
    dst[pad..].copy_from_slice(&bytes[bytes.len() - n..]);
}
