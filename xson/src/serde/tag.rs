use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Size of the lead byte.
pub const TAG_LEN: usize = 1;

pub const INT_TAG_FIRST: u8 = 0x10;
pub const INT_TAG_LAST: u8 = 0x1E;
/// End of the tags set aside for integers wider than 7 bytes.
pub const RESERVED_INT_TAG_LAST: u8 = 0x2F;

/// A raw lead byte, not yet classified.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct TagInt(u8);
impl From<Tag> for TagInt {
    fn from(tag: Tag) -> Self {
        Self(tag as u8)
    }
}

/// Tags whose value does not depend on the payload.
///
/// Integer tags are computed instead; see [`TagInt::int`].
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum Tag {
    Null = 0x00,
    String = 0x01,
    List = 0x02,
    Map = 0x03,
    Binary = 0x04,
    True = 0x05,
    False = 0x06,
    Float32 = 0x07,
    Float64 = 0x08,
    Float128 = 0x09,
    DateTime = 0x30,
    NegDateTime = 0x31,
}

/// What a lead byte says about the payload that follows it.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TagKind {
    Fixed(Tag),
    Int { width: usize, negative: bool },
    ReservedInt(u8),
    Unknown(u8),
}

impl TagInt {
    /// Tag of an integer with a magnitude of `width` bytes.
    pub fn int(width: usize, negative: bool) -> Self {
        debug_assert!((1..=7).contains(&width));
        Self(INT_TAG_FIRST + (width as u8 - 1) * 2 + u8::from(negative))
    }

    pub fn datetime(negative: bool) -> Self {
        Self::from(if negative {
            Tag::NegDateTime
        } else {
            Tag::DateTime
        })
    }

    pub fn classify(self) -> TagKind {
        match self.0 {
            t @ INT_TAG_FIRST..=INT_TAG_LAST => TagKind::Int {
                width: usize::from((t - INT_TAG_FIRST) / 2) + 1,
                negative: t & 0x01 == 0x01,
            },
            t @ 0x1F..=RESERVED_INT_TAG_LAST => TagKind::ReservedInt(t),
            t => match Tag::from_u8(t) {
                Some(tag) => TagKind::Fixed(tag),
                None => TagKind::Unknown(t),
            },
        }
    }
}
