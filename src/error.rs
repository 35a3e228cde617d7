//! Error taxonomies for serialization and deserialization.

/// Errors that can occur while encoding a [`crate::value::Value`] against a
/// [`crate::format::Format`].
#[derive(Debug, thiserror::Error)]
pub enum SerError {
    /// Custom error with message
    #[error("{0}")]
    Message(String),

    /// The value being encoded does not inhabit the declared type
    #[error("value does not inhabit the declared type: {0}")]
    TypeMismatch(String),

    /// A length (sequence, map, bytes, string) exceeds the format's maximum
    #[error("length {len} exceeds the format maximum of {max}")]
    LengthExceedsMaximum {
        /// the offending length
        len: usize,
        /// the format's `MAX_LENGTH`
        max: u32,
    },

    /// The maximum container depth was exceeded while entering a composite
    #[error("maximum container depth exceeded")]
    DepthExceeded,

    /// The type description is malformed or names an unimplemented primitive
    #[error("unexpected or unimplemented type in type description")]
    UnexpectedType,
}

/// Errors that can occur while decoding a byte buffer against a
/// [`crate::format::Format`].
#[derive(Debug, thiserror::Error)]
pub enum DeError {
    /// Custom error with message
    #[error("{0}")]
    Message(String),

    /// The buffer ended before a requested read completed
    #[error("unexpected end of input")]
    ShortInput,

    /// A decoded string was not valid UTF-8
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,

    /// An option tag, variant index, or boolean byte had an unexpected value
    #[error("wrong tag: {0}")]
    WrongTag(String),

    /// A ULEB128 group had a high bit that should not have been set
    #[error("ULEB128 encoding is non-canonical")]
    NonCanonical,

    /// A ULEB128 value accumulated past 2^32-1
    #[error("ULEB128 value overflows 32 bits")]
    Overflow,

    /// A length exceeds the format's maximum
    #[error("length {len} exceeds the format maximum of {max}")]
    LengthExceedsMaximum {
        /// the offending length
        len: u64,
        /// the format's `MAX_LENGTH`
        max: u32,
    },

    /// BCS map keys were not in strictly increasing serialized-byte order
    #[error("map keys are not in strictly increasing serialized order")]
    UnorderedMapKeys,

    /// The maximum container depth was exceeded while entering a composite
    #[error("maximum container depth exceeded")]
    DepthExceeded,

    /// The type description is malformed or names an unimplemented primitive
    #[error("unexpected or unimplemented type in type description")]
    UnexpectedType,

    /// A char decoded outside the Unicode scalar value range, or a surrogate
    #[error("invalid char scalar value")]
    InvalidChar,
}

impl From<std::string::FromUtf8Error> for DeError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        DeError::InvalidUtf8
    }
}

impl From<std::str::Utf8Error> for DeError {
    fn from(_: std::str::Utf8Error) -> Self {
        DeError::InvalidUtf8
    }
}
