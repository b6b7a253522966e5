//! Epoch-millisecond timestamps, as a 6-byte little-endian magnitude.

use crate::error::{XsonError, XsonResult};
use crate::primitives::int::{read_uint_le, write_uint_le};
use crate::serde::{ReadResult, WriteLen};
use crate::value::DateTime;

pub const DATE_WIDTH: usize = 6;

pub const MAX_DATE_MAGNITUDE: u64 = 0xFFFF_FFFF_FFFF;

/// Writes `|dt|`. The caller picks the tag from [`DateTime::is_negative`].
pub fn write_date(dt: DateTime, buf: &mut [u8]) -> XsonResult<WriteLen> {
    let magnitude = dt.magnitude();
    if magnitude > MAX_DATE_MAGNITUDE {
        return Err(XsonError::ValueOutOfRange(format!(
            "datetime {} ms does not fit in {DATE_WIDTH} bytes",
            dt.millis()
        )));
    }
    Ok(write_uint_le(magnitude, DATE_WIDTH, buf))
}

pub fn read_date(buf: &[u8], negative: bool) -> XsonResult<ReadResult<DateTime>> {
    let magnitude = read_uint_le(buf, DATE_WIDTH)? as i64;
    let millis = if negative { -magnitude } else { magnitude };
    Ok(ReadResult::new(DATE_WIDTH, DateTime::from_millis(millis)))
}
