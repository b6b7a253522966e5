use crate::error::{XsonError, XsonResult};
use crate::primitives::date::write_date;
use crate::primitives::float::write_f64;
use crate::primitives::int::{bytes_of_int, write_int};
use crate::primitives::utf8::write_utf8;
use crate::primitives::vlq::write_vlq;
use crate::serde::{bytes_of_serialized, Tag, TagInt, TAG_LEN};
use crate::value::{present_entries, Value};
use derive_more::Deref;
use log::trace;

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}

/// Encodes `value` into a newly allocated buffer of exactly the encoded size.
pub fn serialize(value: &Value) -> XsonResult<Vec<u8>> {
    let len = bytes_of_serialized(value);
    let mut buf = vec![0u8; len];
    let w_len = write_value(value, &mut buf)?;
    debug_assert_eq!(*w_len, len);
    trace!("serialized {} into {len} bytes", value.type_name());
    Ok(buf)
}

/// Appends the encoding of `value` to `out`, growing it once.
///
/// On error `out` is left as it was.
pub fn serialize_into(value: &Value, out: &mut Vec<u8>) -> XsonResult<WriteLen> {
    let start = out.len();
    out.resize(start + bytes_of_serialized(value), 0);
    match write_value(value, &mut out[start..]) {
        Ok(w_len) => Ok(w_len),
        Err(e) => {
            out.truncate(start);
            Err(e)
        }
    }
}

/// Writes `value` at the start of `buf`.
///
/// `buf` must hold at least [`bytes_of_serialized`] bytes; nothing past that is touched.
pub fn write_serialized(value: &Value, buf: &mut [u8]) -> XsonResult<WriteLen> {
    let needed = bytes_of_serialized(value);
    if buf.len() < needed {
        return Err(XsonError::BufferTooSmall {
            needed,
            available: buf.len(),
        });
    }
    write_value(value, buf)
}

/// Assumes `buf` was sized by [`bytes_of_serialized`].
fn write_value(value: &Value, buf: &mut [u8]) -> XsonResult<WriteLen> {
    let mut w_len = 0;

    match value {
        Value::Undefined | Value::Null => w_len += write_tag(Tag::Null, buf),
        Value::Bool(true) => w_len += write_tag(Tag::True, buf),
        Value::Bool(false) => w_len += write_tag(Tag::False, buf),
        Value::Integer(i) => {
            let magnitude = i.unsigned_abs();
            let tag = TagInt::int(bytes_of_int(magnitude), *i < 0);
            w_len += write_tag(tag, buf);
            w_len += *write_int(magnitude, &mut buf[w_len..])?;
        }
        Value::Float(f) if f.is_nan() => w_len += write_tag(Tag::Null, buf),
        Value::Float(f) if f.is_infinite() => {
            return Err(XsonError::ValueOutOfRange(format!("non-finite float {f}")));
        }
        Value::Float(f) => {
            w_len += write_tag(Tag::Float64, buf);
            w_len += *write_f64(*f, &mut buf[w_len..]);
        }
        Value::String(s) => {
            w_len += write_tag(Tag::String, buf);
            w_len += *write_cstr(s, &mut buf[w_len..])?;
        }
        Value::List(items) => {
            w_len += write_tag(Tag::List, buf);
            w_len += *write_vlq(items.len() as u64, &mut buf[w_len..]);
            for item in items {
                w_len += *write_value(item, &mut buf[w_len..])?;
            }
        }
        Value::Map(map) => {
            w_len += write_tag(Tag::Map, buf);
            let count = present_entries(map).count();
            w_len += *write_vlq(count as u64, &mut buf[w_len..]);
            for (key, val) in present_entries(map) {
                w_len += *write_cstr(key, &mut buf[w_len..])?;
                w_len += *write_value(val, &mut buf[w_len..])?;
            }
        }
        Value::Binary(b) => {
            w_len += write_tag(Tag::Binary, buf);
            w_len += *write_vlq(b.len() as u64, &mut buf[w_len..]);
            buf[w_len..w_len + b.len()].copy_from_slice(b);
            w_len += b.len();
        }
        Value::DateTime(dt) => {
            w_len += write_tag(TagInt::datetime(dt.is_negative()), buf);
            w_len += *write_date(*dt, &mut buf[w_len..])?;
        }
    }

    Ok(WriteLen(w_len))
}

fn write_tag(tag: impl Into<TagInt>, buf: &mut [u8]) -> usize {
    let tag: TagInt = tag.into();
    buf[0] = *tag;
    TAG_LEN
}

/// Writes a string or map key followed by its terminator.
fn write_cstr(s: &str, buf: &mut [u8]) -> XsonResult<WriteLen> {
    if s.as_bytes().contains(&0) {
        return Err(XsonError::EmbeddedNul);
    }
    let len = *write_utf8(s, buf);
    buf[len] = 0;
    Ok(WriteLen(len + 1))
}
