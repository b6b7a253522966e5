//! Variable-length quantity.
//!
//! Big-endian base-128. Every byte but the last has its high bit set.
//!
//! ```txt
//! 0bbbbbbb
//! 1bbbbbbb_0bbbbbbb
//! 1bbbbbbb_1bbbbbbb_0bbbbbbb
//! ...
//! ```

use crate::error::{XsonError, XsonResult};
use crate::serde::{ReadResult, WriteLen};

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7f;

/// Encoded length of `n`, in bytes.
pub fn bytes_of_vlq(n: u64) -> usize {
    let mut n = n >> 7;
    let mut count = 1;
    while n != 0 {
        n >>= 7;
        count += 1;
    }
    count
}

/// # Panics
///
/// If `buf` is shorter than [`bytes_of_vlq`].
pub fn write_vlq(n: u64, buf: &mut [u8]) -> WriteLen {
    let len = bytes_of_vlq(n);
    for (i, byte) in buf[..len].iter_mut().enumerate() {
        let shift = 7 * (len - 1 - i);
        *byte = ((n >> shift) as u8 & PAYLOAD) | CONTINUATION;
    }
    buf[len - 1] &= PAYLOAD;
    WriteLen::new_manual(len)
}

pub fn read_vlq(buf: &[u8]) -> XsonResult<ReadResult<u64>> {
    let mut value = 0u64;
    for (i, byte) in buf.iter().enumerate() {
        if value > u64::MAX >> 7 {
            return Err(XsonError::DataCorrupted);
        }
        value = (value << 7) | u64::from(byte & PAYLOAD);
        if byte & CONTINUATION == 0 {
            return Ok(ReadResult::new(i + 1, value));
        }
    }
    Err(XsonError::DataCorrupted)
}
