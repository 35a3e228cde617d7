//! Runtime values paired with a [`crate::format::Format`] at the codec
//! boundary.
//!
//! Every [`Format`](crate::format::Format) case has a matching [`Value`]
//! case, so the walker can check a value inhabits its declared type before
//! encoding, and construct a value of the declared shape while decoding.

/// A value the walker can encode against a matching
/// [`Format`](crate::format::Format), or produce while decoding one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// see [`crate::format::Format::Bool`]
    Bool(bool),
    /// see [`crate::format::Format::U8`]
    U8(u8),
    /// see [`crate::format::Format::U16`]
    U16(u16),
    /// see [`crate::format::Format::U32`]
    U32(u32),
    /// see [`crate::format::Format::U64`]
    U64(u64),
    /// see [`crate::format::Format::U128`]
    U128(u128),
    /// see [`crate::format::Format::I8`]
    I8(i8),
    /// see [`crate::format::Format::I16`]
    I16(i16),
    /// see [`crate::format::Format::I32`]
    I32(i32),
    /// see [`crate::format::Format::I64`]
    I64(i64),
    /// see [`crate::format::Format::I128`]
    I128(i128),
    /// see [`crate::format::Format::Unit`]
    Unit,
    /// see [`crate::format::Format::F32`]
    F32(f32),
    /// see [`crate::format::Format::F64`]
    F64(f64),
    /// see [`crate::format::Format::Char`]
    Char(char),
    /// see [`crate::format::Format::Bytes`]
    Bytes(Vec<u8>),
    /// see [`crate::format::Format::Str`]
    Str(String),
    /// see [`crate::format::Format::Seq`]
    Seq(Vec<Value>),
    /// see [`crate::format::Format::Tuple`]
    Tuple(Vec<Value>),
    /// see [`crate::format::Format::Option`]
    Option(Option<Box<Value>>),
    /// Entries in whatever order the caller built them; format-specific
    /// ordering is applied by the walker at encode time, see
    /// [`crate::format::Format::Map`]
    Map(Vec<(Value, Value)>),
    /// Field values in the order declared by the matching `Format::Struct`
    Struct(Vec<Value>),
    /// Arm index plus the chosen arm's field values, matching
    /// `Format::Variant`
    Variant(u32, Vec<Value>),
}

impl Value {
    /// A short name of this value's own shape, used in type-mismatch error
    /// messages. Does not imply anything about the `Format` it is checked
    /// against.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::U128(_) => "u128",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::I128(_) => "i128",
            Value::Unit => "unit",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Char(_) => "char",
            Value::Bytes(_) => "bytes",
            Value::Str(_) => "str",
            Value::Seq(_) => "seq",
            Value::Tuple(_) => "tuple",
            Value::Option(_) => "option",
            Value::Map(_) => "map",
            Value::Struct(_) => "struct",
            Value::Variant(..) => "variant",
        }
    }
}
