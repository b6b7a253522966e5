//! Fixed-width integers, 1 to 7 bytes, little-endian.
//!
//! Only the magnitude is stored. The sign is carried by whoever picked the tag.

use crate::error::{XsonError, XsonResult};
use crate::serde::{ReadResult, WriteLen};

/// Largest integer an IEEE-754 double represents exactly, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

pub const MAX_INT_WIDTH: usize = 7;

/// Largest magnitude of each width below [`MAX_INT_WIDTH`].
const WIDTH_LIMITS: [u64; MAX_INT_WIDTH - 1] = [
    0xFF,
    0xFFFF,
    0xFF_FFFF,
    0xFFFF_FFFF,
    0xFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF,
];

/// Smallest width whose unsigned range covers `magnitude`.
pub fn bytes_of_int(magnitude: u64) -> usize {
    WIDTH_LIMITS
        .iter()
        .position(|&limit| magnitude <= limit)
        .map_or(MAX_INT_WIDTH, |i| i + 1)
}

pub fn write_int(magnitude: u64, buf: &mut [u8]) -> XsonResult<WriteLen> {
    if magnitude > MAX_SAFE_INTEGER {
        return Err(XsonError::ValueOutOfRange(format!(
            "integer magnitude {magnitude} exceeds {MAX_SAFE_INTEGER}"
        )));
    }
    let width = bytes_of_int(magnitude);
    Ok(write_uint_le(magnitude, width, buf))
}

pub fn read_int(buf: &[u8], width: usize) -> XsonResult<ReadResult<u64>> {
    let magnitude = read_uint_le(buf, width)?;
    Ok(ReadResult::new(width, magnitude))
}

/// Writes the low `width` bytes of `n`.
///
/// # Panics
///
/// If `buf` is shorter than `width`, or `width` exceeds 8.
pub(crate) fn write_uint_le(n: u64, width: usize, buf: &mut [u8]) -> WriteLen {
    buf[..width].copy_from_slice(&n.to_le_bytes()[..width]);
    WriteLen::new_manual(width)
}

pub(crate) fn read_uint_le(buf: &[u8], width: usize) -> XsonResult<u64> {
    debug_assert!(width <= 8);
    let src = buf.get(..width).ok_or(XsonError::DataCorrupted)?;
    let mut le = [0u8; 8];
    le[..width].copy_from_slice(src);
    Ok(u64::from_le_bytes(le))
}
