//! Leaf codecs.
//!
//! Writers take a destination slice that begins at the write position and
//! return the count of bytes written. Readers take a source slice that begins at
//! the read position and return the value with the count of bytes consumed.
//! A caller advances its own cursor by those counts.

pub mod date;
pub mod float;
pub mod int;
pub mod utf8;
pub mod vlq;

use crate::error::{XsonError, XsonResult};

/// Copies out the first `N` bytes, or fails if there are fewer.
pub(crate) fn take_arr<const N: usize>(buf: &[u8]) -> XsonResult<[u8; N]> {
    if N > buf.len() {
        return Err(XsonError::DataCorrupted);
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(&buf[..N]);
    Ok(arr)
}
