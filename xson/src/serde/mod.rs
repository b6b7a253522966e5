//! # Serialization format
//!
//! Every value starts with a one-byte tag. Integers and datetimes fold their
//! sign (and for integers, their width) into the tag, so the payload carries
//! only a magnitude.
//!
//! Container counts and blob lengths are VLQs. Strings and map keys have no
//! length prefix; they run up to a `0x00` terminator.
//!
//! ```text
//! struct Null      { tag: 0x00 }
//! struct True      { tag: 0x05 }
//! struct False     { tag: 0x06 }
//!
//! struct String {
//!     tag:        0x01,
//!     utf8:       [u8; n],        // no 0x00 within
//!     terminator: 0x00,
//! }
//!
//! struct List {
//!     tag:        0x02,
//!     count:      vlq,
//!     items:      [Value; count],
//! }
//!
//! struct Map {
//!     tag:        0x03,
//!     count:      vlq,
//!     entries:    [{
//!         key:        [u8; n],    // utf8, ascending across entries
//!         terminator: 0x00,
//!         value:      Value,
//!     }; count],
//! }
//!
//! struct Binary {
//!     tag:        0x04,
//!     len:        vlq,
//!     body:       [u8; len],
//! }
//!
//! struct Float32   { tag: 0x07, body: [u8; 4] }   // decoded, never emitted
//! struct Float64   { tag: 0x08, body: [u8; 8] }
//!                  // 0x09 (float128) is reserved
//!
//! struct Integer {
//!     tag:        0x10 + (width - 1) * 2 + is_negative,   // 0x10..=0x1E
//!     magnitude:  [u8; width],                            // little-endian
//! }
//!                  // 0x1F..=0x2F (wider integers) are reserved
//!
//! struct DateTime {
//!     tag:        0x30 | 0x31,    // 0x31 when before the epoch
//!     magnitude:  [u8; 6],        // millis, little-endian
//! }
//! ```
//!
//! Encoding measures first ([`bytes_of_serialized`]) and then writes into a
//! single buffer of exactly that size.

mod deser;
mod lengths;
mod ser;
mod tag;

pub use deser::*;
pub use lengths::*;
pub use ser::*;
pub use tag::*;
