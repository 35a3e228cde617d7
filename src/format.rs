//! Runtime type descriptions.
//!
//! A [`Format`] is the closed sum of type shapes the walker knows how to
//! encode and decode. It is the schema the codec is handed at each call; the
//! mechanism by which a caller's own composite types get turned into a
//! `Format` (field lists, variant tables) lives outside this crate.

/// A type description the walker dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    /// `true` or `false`, one byte on the wire.
    Bool,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer, little-endian.
    U16,
    /// 32-bit unsigned integer, little-endian.
    U32,
    /// 64-bit unsigned integer, little-endian.
    U64,
    /// 128-bit unsigned integer, little-endian.
    U128,
    /// 8-bit two's-complement integer.
    I8,
    /// 16-bit two's-complement integer, little-endian.
    I16,
    /// 32-bit two's-complement integer, little-endian.
    I32,
    /// 64-bit two's-complement integer, little-endian.
    I64,
    /// 128-bit two's-complement integer, little-endian.
    I128,
    /// Zero-width value.
    Unit,
    /// IEEE-754 single precision float, little-endian.
    F32,
    /// IEEE-754 double precision float, little-endian.
    F64,
    /// 4-byte little-endian Unicode scalar value.
    Char,
    /// Length-prefixed raw bytes.
    Bytes,
    /// Length-prefixed UTF-8 bytes.
    Str,
    /// Length-prefixed homogeneous ordered list of `T`.
    Seq(Box<Format>),
    /// Fixed-arity heterogeneous concatenation, no framing.
    Tuple(Vec<Format>),
    /// One-byte presence tag followed by `T` if present.
    Option(Box<Format>),
    /// Length-prefixed sequence of `(K, V)` pairs; ordering policy is
    /// format-specific. `Map<K, Unit>` is the idiomatic set encoding.
    Map {
        /// key type
        key: Box<Format>,
        /// value type
        value: Box<Format>,
    },
    /// Named, ordered field list concatenated with no framing.
    Struct(StructFormat),
    /// A tagged sum: variant-index prefix, then the selected arm's struct.
    Variant(VariantFormat),
}

/// The field list of a [`Format::Struct`] or of one arm of a
/// [`Format::Variant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructFormat {
    /// the struct's name, used only for error messages
    pub name: String,
    /// fields in declaration order
    pub fields: Vec<(String, Format)>,
}

impl StructFormat {
    /// Construct a named struct description from its ordered fields.
    pub fn new(name: impl Into<String>, fields: Vec<(String, Format)>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// An indexable, possibly sparse table of variant arms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFormat {
    /// the variant type's name, used only for error messages
    pub name: String,
    /// arm table; `None` entries are gaps that no value may target
    pub arms: Vec<Option<StructFormat>>,
}

impl VariantFormat {
    /// Construct a variant description from an arm table. Use `None` entries
    /// for gaps in a sparse table.
    pub fn new(name: impl Into<String>, arms: Vec<Option<StructFormat>>) -> Self {
        Self {
            name: name.into(),
            arms,
        }
    }

    /// The arm at `index`, or `None` if out of range or a gap.
    pub fn arm(&self, index: u32) -> Option<&StructFormat> {
        self.arms.get(index as usize).and_then(|arm| arm.as_ref())
    }
}
