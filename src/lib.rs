#![deny(missing_docs, missing_debug_implementations)]

//! Canonical binary codecs over a shared type-directed serializer/
//! deserializer core.
//!
//! Two formats are provided:
//!
//! - [`bcs`]: ULEB128-framed lengths and variant indices, maps sorted by
//!   serialized key bytes, recursion bounded to [`bcs::MAX_CONTAINER_DEPTH`].
//! - [`bincode`]: 8-byte little-endian lengths, 4-byte little-endian
//!   variant indices, insertion-ordered maps, unbounded recursion.
//!
//! Both walk a runtime [`value::Value`] against a [`format::Format`] type
//! description — this crate does not derive a `Format` from a Rust type;
//! that conversion is a caller concern. What it guarantees is that for any
//! `Value` inhabiting a `Format`, `deserialize(serialize(v, t), t) == (v,
//! &[])`, and that every byte sequence a decoder accepts is one a matching
//! encoder could have produced (canonicity, enforced by BCS; BINCODE makes
//! no such claim).
//!
//! ```
//! use canon_codec::{bcs, format::Format, value::Value};
//!
//! let bytes = bcs::serialize(&Value::U16(0x0102), &Format::U16).unwrap();
//! assert_eq!(bytes, vec![0x02, 0x01]);
//!
//! let (value, rest) = bcs::deserialize(&bytes, &Format::U16).unwrap();
//! assert_eq!(value, Value::U16(0x0102));
//! assert!(rest.is_empty());
//! ```

pub mod bcs;
pub mod bincode;
pub mod error;
pub mod format;
pub mod value;

mod de;
mod depth;
mod framing;
mod primitives;
mod read;
mod ser;
mod uleb128;

pub use error::{DeError, SerError};
