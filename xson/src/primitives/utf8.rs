//! UTF-8 text.
//!
//! Rust strings are already UTF-8, so the `str` forms are plain copies with
//! validation on read. The UTF-16 forms serve producers whose strings are
//! sequences of UTF-16 code units: a surrogate pair becomes one 4-byte sequence,
//! and an unpaired surrogate is written as its own 3-byte sequence so that it
//! survives a round trip.

use crate::error::{XsonError, XsonResult};
use crate::serde::WriteLen;
use std::str;

const NUL: u8 = 0x00;

/// Length of the string payload that starts `buf`, excluding its `0x00` terminator.
pub fn string_length(buf: &[u8]) -> XsonResult<usize> {
    buf.iter()
        .position(|&b| b == NUL)
        .ok_or(XsonError::UnterminatedString)
}

pub fn bytes_of_utf8(s: &str) -> usize {
    s.len()
}

/// # Panics
///
/// If `buf` is shorter than [`bytes_of_utf8`].
pub fn write_utf8(s: &str, buf: &mut [u8]) -> WriteLen {
    let bytes = s.as_bytes();
    buf[..bytes.len()].copy_from_slice(bytes);
    WriteLen::new_manual(bytes.len())
}

/// Decodes all of `buf`. The caller slices off the terminator.
pub fn read_utf8(buf: &[u8]) -> XsonResult<String> {
    let s = str::from_utf8(buf).map_err(|_| XsonError::InvalidUtf8)?;
    Ok(s.to_owned())
}

fn is_high_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}
fn is_low_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

pub fn bytes_of_utf16(units: &[u16]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while i < units.len() {
        let c = units[i];
        if c < 0x80 {
            len += 1;
        } else if c < 0x800 {
            len += 2;
        } else if is_high_surrogate(c) && units.get(i + 1).copied().is_some_and(is_low_surrogate)
        {
            i += 1;
            len += 4;
        } else {
            len += 3;
        }
        i += 1;
    }
    len
}

/// # Panics
///
/// If `buf` is shorter than [`bytes_of_utf16`].
pub fn write_utf16(units: &[u16], buf: &mut [u8]) -> WriteLen {
    let mut at = 0;
    let mut i = 0;
    while i < units.len() {
        let c = u32::from(units[i]);
        if c < 0x80 {
            buf[at] = c as u8;
            at += 1;
        } else if c < 0x800 {
            buf[at] = (c >> 6) as u8 | 0xC0;
            buf[at + 1] = (c & 0x3F) as u8 | 0x80;
            at += 2;
        } else if let Some(low) = units
            .get(i + 1)
            .copied()
            .filter(|&low| is_high_surrogate(units[i]) && is_low_surrogate(low))
        {
            let cp = 0x10000 + ((c & 0x03FF) << 10) + (u32::from(low) & 0x03FF);
            buf[at] = (cp >> 18) as u8 | 0xF0;
            buf[at + 1] = ((cp >> 12) & 0x3F) as u8 | 0x80;
            buf[at + 2] = ((cp >> 6) & 0x3F) as u8 | 0x80;
            buf[at + 3] = (cp & 0x3F) as u8 | 0x80;
            at += 4;
            i += 1;
        } else {
            buf[at] = (c >> 12) as u8 | 0xE0;
            buf[at + 1] = ((c >> 6) & 0x3F) as u8 | 0x80;
            buf[at + 2] = (c & 0x3F) as u8 | 0x80;
            at += 3;
        }
        i += 1;
    }
    WriteLen::new_manual(at)
}

/// Decodes all of `buf` into UTF-16 code units, accepting encoded lone surrogates.
pub fn read_utf16(buf: &[u8]) -> XsonResult<Vec<u16>> {
    let mut units = Vec::with_capacity(buf.len());
    let mut at = 0;
    while at < buf.len() {
        let lead = buf[at];
        let (len, init) = match lead {
            0x00..=0x7F => (1, u32::from(lead)),
            0xC0..=0xDF => (2, u32::from(lead & 0x1F)),
            0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
            0xF0..=0xF7 => (4, u32::from(lead & 0x07)),
            _ => return Err(XsonError::InvalidUtf8),
        };
        let tail = buf
            .get(at + 1..at + len)
            .ok_or(XsonError::InvalidUtf8)?;
        let mut cp = init;
        for &b in tail {
            if b & 0xC0 != 0x80 {
                return Err(XsonError::InvalidUtf8);
            }
            cp = (cp << 6) | u32::from(b & 0x3F);
        }
        if len == 4 {
            if !(0x10000..=0x10FFFF).contains(&cp) {
                return Err(XsonError::InvalidUtf8);
            }
            let off = cp - 0x10000;
            units.push(0xD800 + (off >> 10) as u16);
            units.push(0xDC00 + (off & 0x3FF) as u16);
        } else {
            units.push(cp as u16);
        }
        at += len;
    }
    Ok(units)
}
