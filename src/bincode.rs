//! BINCODE: fixed-width-framed, unsorted, unbounded recursion.

use crate::depth::DepthBudget;
use crate::error::{DeError, SerError};
use crate::format::Format;
use crate::framing::Framing;
use crate::read::SliceReader;
use crate::value::Value;
use crate::{de, ser};

/// Lengths above this value are rejected in both directions.
pub const MAX_LENGTH: u32 = u32::MAX >> 1;

/// Zero-sized marker selecting the BINCODE [`Framing`] policy.
#[derive(Debug, Clone, Copy)]
pub struct Bincode;

impl Framing for Bincode {
    fn depth_budget() -> Option<u32> {
        None
    }

    fn encode_length(out: &mut Vec<u8>, len: usize) -> Result<(), SerError> {
        if len as u64 > MAX_LENGTH as u64 {
            return Err(SerError::LengthExceedsMaximum {
                len,
                max: MAX_LENGTH,
            });
        }
        out.extend_from_slice(&(len as u64).to_le_bytes());
        Ok(())
    }

    fn decode_length(reader: &mut SliceReader<'_>) -> Result<usize, DeError> {
        let bytes = reader.read_exact(8)?;
        let value = u64::from_le_bytes(bytes.try_into().expect("width checked by read_exact"));
        if value > MAX_LENGTH as u64 {
            return Err(DeError::LengthExceedsMaximum {
                len: value,
                max: MAX_LENGTH,
            });
        }
        Ok(value as usize)
    }

    fn encode_variant_index(out: &mut Vec<u8>, index: u32) -> Result<(), SerError> {
        out.extend_from_slice(&index.to_le_bytes());
        Ok(())
    }

    fn decode_variant_index(reader: &mut SliceReader<'_>) -> Result<u32, DeError> {
        let bytes = reader.read_exact(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().expect("width checked by read_exact")))
    }

    fn sort_map_entries(_out: &mut [u8], _entry_starts: &[usize], _key_ends: &[usize]) {
        // Insertion order is preserved on encode.
    }

    fn check_map_key_order(_previous: Option<&[u8]>, _current: &[u8]) -> Result<(), DeError> {
        // Any order is accepted on decode.
        Ok(())
    }
}

/// Encode `value` against `format` using BINCODE framing.
pub fn serialize(value: &Value, format: &Format) -> Result<Vec<u8>, SerError> {
    let mut out = Vec::new();
    let mut depth = DepthBudget::new(Bincode::depth_budget());
    ser::encode_value::<Bincode>(&mut out, &mut depth, value, format)?;
    Ok(out)
}

/// Decode a value matching `format` from the front of `bytes`, returning the
/// decoded value and whatever bytes were not consumed.
pub fn deserialize<'de>(bytes: &'de [u8], format: &Format) -> Result<(Value, &'de [u8]), DeError> {
    let mut reader = SliceReader::new(bytes);
    let mut depth = DepthBudget::new(Bincode::depth_budget());
    let value = de::decode_value::<Bincode>(&mut reader, &mut depth, format)?;
    Ok((value, reader.remaining()))
}
