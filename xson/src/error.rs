use thiserror::Error;

/// Errors from encoding or decoding xson bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum XsonError {
    /// A length prefix or fixed-width payload would read past the end of input.
    #[error("data corrupted")]
    DataCorrupted,

    /// No `0x00` terminator before the end of input.
    #[error("string is not terminated with null")]
    UnterminatedString,

    /// The tag is reserved for a type this codec does not implement.
    #[error("unsupported type (tag {tag:#04x})")]
    UnsupportedType { tag: u8 },

    #[error("unrecognized tag {tag:#04x}")]
    UnrecognizedTag { tag: u8 },

    /// The value has no defined encoding.
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),

    /// A string or map key contains U+0000, which would end it early on the wire.
    #[error("string contains an embedded null")]
    EmbeddedNul,

    #[error("string payload is not valid utf-8")]
    InvalidUtf8,

    #[error("buffer too small (needed {needed}, available {available})")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("nesting exceeds depth limit {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Input had bytes left over after the first complete value.
    #[error("extra input leftover (consumed {consumed} of {total})")]
    ExtraInput { consumed: usize, total: usize },
}

/// Wrapper result type.
pub type XsonResult<T> = Result<T, XsonError>;
