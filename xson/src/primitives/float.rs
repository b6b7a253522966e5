//! IEEE-754 floats, bit-cast to and from their little-endian bytes.

use crate::error::XsonResult;
use crate::primitives::take_arr;
use crate::serde::{ReadResult, WriteLen};
use std::mem;

pub const F32_LEN: usize = mem::size_of::<f32>();
pub const F64_LEN: usize = mem::size_of::<f64>();

pub fn read_f32(buf: &[u8]) -> XsonResult<ReadResult<f32>> {
    let arr = take_arr::<F32_LEN>(buf)?;
    Ok(ReadResult::new(F32_LEN, f32::from_le_bytes(arr)))
}

/// # Panics
///
/// If `buf` is shorter than [`F32_LEN`].
pub fn write_f32(f: f32, buf: &mut [u8]) -> WriteLen {
    buf[..F32_LEN].copy_from_slice(&f.to_le_bytes());
    WriteLen::new_manual(F32_LEN)
}

pub fn read_f64(buf: &[u8]) -> XsonResult<ReadResult<f64>> {
    let arr = take_arr::<F64_LEN>(buf)?;
    Ok(ReadResult::new(F64_LEN, f64::from_le_bytes(arr)))
}

/// # Panics
///
/// If `buf` is shorter than [`F64_LEN`].
pub fn write_f64(f: f64, buf: &mut [u8]) -> WriteLen {
    buf[..F64_LEN].copy_from_slice(&f.to_le_bytes());
    WriteLen::new_manual(F64_LEN)
}
