use crate::config::DecodeConfig;
use crate::error::{XsonError, XsonResult};
use crate::primitives::date::{read_date, DATE_WIDTH};
use crate::primitives::float::{read_f32, read_f64, F32_LEN, F64_LEN};
use crate::primitives::int::read_int;
use crate::primitives::utf8::{read_utf8, string_length};
use crate::primitives::vlq::read_vlq;
use crate::serde::{Tag, TagInt, TagKind, NUL_LEN, TAG_LEN};
use crate::value::{Map, Value};
use log::{debug, trace};

/// A decoded item and the count of bytes it took up.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ReadResult<T> {
    pub r_len: usize,
    pub value: T,
}
impl<T> ReadResult<T> {
    pub fn new(r_len: usize, value: T) -> Self {
        Self { r_len, value }
    }
}

/// Decodes the first value in `bytes`. Trailing bytes are ignored.
pub fn deserialize(bytes: &[u8]) -> XsonResult<Value> {
    deserialize_with(bytes, &DecodeConfig::default())
}

pub fn deserialize_with(bytes: &[u8], config: &DecodeConfig) -> XsonResult<Value> {
    let r = ValueReader { config }
        .read_value(bytes, 0)
        .map_err(|e| {
            debug!("failed to deserialize {} bytes: {e}", bytes.len());
            e
        })?;

    if config.reject_trailing && r.r_len < bytes.len() {
        return Err(XsonError::ExtraInput {
            consumed: r.r_len,
            total: bytes.len(),
        });
    }
    trace!("deserialized {} from {} bytes", r.value.type_name(), r.r_len);
    Ok(r.value)
}

/// Decodes the value at the start of `buf`, reporting how many bytes it spans.
pub fn read_serialized(buf: &[u8]) -> XsonResult<ReadResult<Value>> {
    ValueReader {
        config: &DecodeConfig::default(),
    }
    .read_value(buf, 0)
}

/// Byte length of the value at the start of `buf`, without building it.
pub fn skip_serialized(buf: &[u8]) -> XsonResult<usize> {
    let lead = *buf.first().ok_or(XsonError::DataCorrupted)?;
    let mut r_len = TAG_LEN;

    match TagInt::from(lead).classify() {
        TagKind::Fixed(tag) => match tag {
            Tag::Null | Tag::True | Tag::False => {}
            Tag::String => r_len += string_length(&buf[r_len..])? + NUL_LEN,
            Tag::List => {
                let count = read_count(&buf[r_len..], &mut r_len, 1)?;
                for _ in 0..count {
                    r_len += skip_serialized(&buf[r_len..])?;
                }
            }
            Tag::Map => {
                let count = read_count(&buf[r_len..], &mut r_len, NUL_LEN + TAG_LEN)?;
                for _ in 0..count {
                    r_len += string_length(&buf[r_len..])? + NUL_LEN;
                    r_len += skip_serialized(&buf[r_len..])?;
                }
            }
            Tag::Binary => {
                let len = read_count(&buf[r_len..], &mut r_len, 1)?;
                r_len += len;
            }
            Tag::Float32 => r_len += skip_fixed(&buf[r_len..], F32_LEN)?,
            Tag::Float64 => r_len += skip_fixed(&buf[r_len..], F64_LEN)?,
            Tag::Float128 => return Err(XsonError::UnsupportedType { tag: lead }),
            Tag::DateTime | Tag::NegDateTime => r_len += skip_fixed(&buf[r_len..], DATE_WIDTH)?,
        },
        TagKind::Int { width, .. } => r_len += skip_fixed(&buf[r_len..], width)?,
        TagKind::ReservedInt(tag) => return Err(XsonError::UnsupportedType { tag }),
        TagKind::Unknown(tag) => return Err(XsonError::UnrecognizedTag { tag }),
    }

    Ok(r_len)
}

struct ValueReader<'c> {
    config: &'c DecodeConfig,
}

impl<'c> ValueReader<'c> {
    /// `depth` is the count of containers enclosing the value at `buf`.
    fn read_value(&self, buf: &[u8], depth: usize) -> XsonResult<ReadResult<Value>> {
        /* tag */
        let lead = *buf.first().ok_or(XsonError::DataCorrupted)?;
        let mut r_len = TAG_LEN;

        /* payload */
        let value = match TagInt::from(lead).classify() {
            TagKind::Fixed(tag) => match tag {
                Tag::Null => Value::Null,
                Tag::True => Value::Bool(true),
                Tag::False => Value::Bool(false),
                Tag::String => {
                    let r = read_cstr(&buf[r_len..])?;
                    r_len += r.r_len;
                    Value::String(r.value)
                }
                Tag::List => {
                    self.check_depth(depth)?;
                    let count = read_count(&buf[r_len..], &mut r_len, 1)?;
                    let mut items = Vec::with_capacity(count);
                    for _ in 0..count {
                        let r = self.read_value(&buf[r_len..], depth + 1)?;
                        r_len += r.r_len;
                        items.push(r.value);
                    }
                    Value::List(items)
                }
                Tag::Map => {
                    self.check_depth(depth)?;
                    let count = read_count(&buf[r_len..], &mut r_len, NUL_LEN + TAG_LEN)?;
                    let mut map = Map::new();
                    for _ in 0..count {
                        let key = read_cstr(&buf[r_len..])?;
                        r_len += key.r_len;
                        let val = self.read_value(&buf[r_len..], depth + 1)?;
                        r_len += val.r_len;
                        // A repeated key keeps the last value.
                        map.insert(key.value, val.value);
                    }
                    Value::Map(map)
                }
                Tag::Binary => {
                    let len = read_count(&buf[r_len..], &mut r_len, 1)?;
                    let body = buf[r_len..r_len + len].to_vec();
                    r_len += len;
                    Value::Binary(body)
                }
                Tag::Float32 => {
                    let r = read_f32(&buf[r_len..])?;
                    r_len += r.r_len;
                    Value::Float(f64::from(r.value))
                }
                Tag::Float64 => {
                    let r = read_f64(&buf[r_len..])?;
                    r_len += r.r_len;
                    Value::Float(r.value)
                }
                Tag::Float128 => return Err(XsonError::UnsupportedType { tag: lead }),
                Tag::DateTime | Tag::NegDateTime => {
                    let r = read_date(&buf[r_len..], tag == Tag::NegDateTime)?;
                    r_len += r.r_len;
                    Value::DateTime(r.value)
                }
            },
            TagKind::Int { width, negative } => {
                let r = read_int(&buf[r_len..], width)?;
                r_len += r.r_len;
                let magnitude =
                    i64::try_from(r.value).map_err(|_| XsonError::UnsupportedType { tag: lead })?;
                Value::Integer(if negative { -magnitude } else { magnitude })
            }
            TagKind::ReservedInt(tag) => return Err(XsonError::UnsupportedType { tag }),
            TagKind::Unknown(tag) => return Err(XsonError::UnrecognizedTag { tag }),
        };

        Ok(ReadResult::new(r_len, value))
    }

    fn check_depth(&self, depth: usize) -> XsonResult<()> {
        match self.config.max_depth {
            Some(limit) if depth >= limit => Err(XsonError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

/// Reads a string or map key and its terminator.
fn read_cstr(buf: &[u8]) -> XsonResult<ReadResult<String>> {
    let len = string_length(buf)?;
    let s = read_utf8(&buf[..len])?;
    Ok(ReadResult::new(len + NUL_LEN, s))
}

/// Reads a container count, and checks that `count` items of at least
/// `min_item_len` bytes each fit in what remains of the input.
fn read_count(buf: &[u8], r_len: &mut usize, min_item_len: usize) -> XsonResult<usize> {
    let r = read_vlq(buf)?;
    let count = usize::try_from(r.value).map_err(|_| XsonError::DataCorrupted)?;
    let remaining = buf.len() - r.r_len;
    match count.checked_mul(min_item_len) {
        Some(needed) if needed <= remaining => {
            *r_len += r.r_len;
            Ok(count)
        }
        _ => Err(XsonError::DataCorrupted),
    }
}

fn skip_fixed(buf: &[u8], len: usize) -> XsonResult<usize> {
    if len > buf.len() {
        return Err(XsonError::DataCorrupted);
    }
    Ok(len)
}
