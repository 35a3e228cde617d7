//! Fixed-width primitive codec table.
//!
//! Integers are little-endian and width-exact; out-of-range values are a
//! serialization error on encode, and a short buffer is a deserialization
//! error on decode. `bool` is one byte, `unit` is zero bytes. `f32`/`f64`
//! are IEEE-754 little-endian bit patterns and `char` is a 4-byte
//! little-endian Unicode scalar value (see `SPEC_FULL.md` §10.4 for why
//! this crate defines them rather than leaving them unimplemented).

use crate::error::DeError;
use crate::read::SliceReader;

macro_rules! int_codec {
    ($encode:ident, $decode:ident, $ty:ty) => {
        pub(crate) fn $encode(out: &mut Vec<u8>, value: $ty) {
            out.extend_from_slice(&value.to_le_bytes());
        }

        pub(crate) fn $decode(reader: &mut SliceReader<'_>) -> Result<$ty, DeError> {
            let bytes = reader.read_exact(std::mem::size_of::<$ty>())?;
            Ok(<$ty>::from_le_bytes(bytes.try_into().expect("width checked by read_exact")))
        }
    };
}

int_codec!(encode_u8, decode_u8, u8);
int_codec!(encode_u16, decode_u16, u16);
int_codec!(encode_u32, decode_u32, u32);
int_codec!(encode_u64, decode_u64, u64);
int_codec!(encode_u128, decode_u128, u128);
int_codec!(encode_i8, decode_i8, i8);
int_codec!(encode_i16, decode_i16, i16);
int_codec!(encode_i32, decode_i32, i32);
int_codec!(encode_i64, decode_i64, i64);
int_codec!(encode_i128, decode_i128, i128);
int_codec!(encode_f32_bits, decode_f32_bits, f32);
int_codec!(encode_f64_bits, decode_f64_bits, f64);

pub(crate) fn encode_bool(out: &mut Vec<u8>, value: bool) {
    out.push(if value { 0x01 } else { 0x00 });
}

pub(crate) fn decode_bool(reader: &mut SliceReader<'_>) -> Result<bool, DeError> {
    match reader.read_byte()? {
        0x00 => Ok(false),
        0x01 => Ok(true),
        other => Err(DeError::WrongTag(format!("bool byte 0x{other:02x}"))),
    }
}

pub(crate) fn encode_char(out: &mut Vec<u8>, value: char) {
    out.extend_from_slice(&(value as u32).to_le_bytes());
}

pub(crate) fn decode_char(reader: &mut SliceReader<'_>) -> Result<char, DeError> {
    let scalar = decode_u32(reader)?;
    char::from_u32(scalar).ok_or(DeError::InvalidChar)
}

pub(crate) fn encode_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(bytes);
}

pub(crate) fn decode_bytes<'de>(reader: &mut SliceReader<'de>, len: usize) -> Result<&'de [u8], DeError> {
    reader.read_exact(len)
}

pub(crate) fn encode_str(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(s.as_bytes());
}

pub(crate) fn decode_str(reader: &mut SliceReader<'_>, len: usize) -> Result<String, DeError> {
    let bytes = reader.read_exact(len)?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_little_endian() {
        let mut out = Vec::new();
        encode_u16(&mut out, 0x0102);
        assert_eq!(out, vec![0x02, 0x01]);
        let mut reader = SliceReader::new(&out);
        assert_eq!(decode_u16(&mut reader).unwrap(), 0x0102);
    }

    #[test]
    fn u32_little_endian() {
        let mut out = Vec::new();
        encode_u32(&mut out, 0x01020304);
        assert_eq!(out, vec![0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn bool_rejects_non_canonical_byte() {
        let buf = [0x02];
        let mut reader = SliceReader::new(&buf);
        assert!(decode_bool(&mut reader).is_err());
    }

    #[test]
    fn bool_rejects_empty_input() {
        let buf: [u8; 0] = [];
        let mut reader = SliceReader::new(&buf);
        assert!(matches!(decode_bool(&mut reader), Err(DeError::ShortInput)));
    }

    #[test]
    fn char_rejects_surrogate_range() {
        let mut out = Vec::new();
        encode_u32(&mut out, 0xD800);
        let mut reader = SliceReader::new(&out);
        assert!(matches!(decode_char(&mut reader), Err(DeError::InvalidChar)));
    }
}
