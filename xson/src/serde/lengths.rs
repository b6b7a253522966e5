use crate::primitives::date::DATE_WIDTH;
use crate::primitives::float::F64_LEN;
use crate::primitives::int::bytes_of_int;
use crate::primitives::utf8::bytes_of_utf8;
use crate::primitives::vlq::bytes_of_vlq;
use crate::serde::TAG_LEN;
use crate::value::{present_entries, Value};

/// Size of the `0x00` that ends strings and map keys.
pub const NUL_LEN: usize = 1;

/// Exact count of bytes that [`crate::serde::write_serialized`] produces for `value`.
///
/// Values without a defined encoding (see [`crate::XsonError::ValueOutOfRange`])
/// are measured as if they had one; writing them fails.
pub fn bytes_of_serialized(value: &Value) -> usize {
    TAG_LEN + bytes_of_body(value)
}

fn bytes_of_body(value: &Value) -> usize {
    match value {
        Value::Undefined | Value::Null | Value::Bool(_) => 0,
        Value::Integer(i) => bytes_of_int(i.unsigned_abs()),
        Value::Float(f) if f.is_nan() => 0,
        Value::Float(_) => F64_LEN,
        Value::String(s) => bytes_of_utf8(s) + NUL_LEN,
        Value::List(items) => {
            let items_len = items.iter().map(bytes_of_serialized).sum::<usize>();
            bytes_of_vlq(items.len() as u64) + items_len
        }
        Value::Map(map) => {
            let mut count = 0;
            let mut entries_len = 0;
            for (key, val) in present_entries(map) {
                count += 1;
                entries_len += bytes_of_utf8(key) + NUL_LEN + bytes_of_serialized(val);
            }
            bytes_of_vlq(count) + entries_len
        }
        Value::Binary(b) => bytes_of_vlq(b.len() as u64) + b.len(),
        Value::DateTime(_) => DATE_WIDTH,
    }
}
