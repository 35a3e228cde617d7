//! BCS: ULEB128-framed, lexicographically sorted maps, bounded recursion.

use crate::depth::DepthBudget;
use crate::error::{DeError, SerError};
use crate::format::Format;
use crate::framing::Framing;
use crate::read::SliceReader;
use crate::uleb128;
use crate::value::Value;
use crate::{de, ser};

/// Lengths and variant indices above this value are rejected in both
/// directions.
pub const MAX_LENGTH: u32 = u32::MAX >> 1;

/// Recursion-depth budget: struct, variant, sequence, map, and
/// option-present bodies count against this.
pub const MAX_CONTAINER_DEPTH: u32 = 500;

/// Zero-sized marker selecting the BCS [`Framing`] policy.
#[derive(Debug, Clone, Copy)]
pub struct Bcs;

impl Framing for Bcs {
    fn depth_budget() -> Option<u32> {
        Some(MAX_CONTAINER_DEPTH)
    }

    fn encode_length(out: &mut Vec<u8>, len: usize) -> Result<(), SerError> {
        if len as u64 > MAX_LENGTH as u64 {
            return Err(SerError::LengthExceedsMaximum {
                len,
                max: MAX_LENGTH,
            });
        }
        uleb128::encode(out, len as u32);
        Ok(())
    }

    fn decode_length(reader: &mut SliceReader<'_>) -> Result<usize, DeError> {
        let value = uleb128::decode(reader)?;
        if value > MAX_LENGTH {
            return Err(DeError::LengthExceedsMaximum {
                len: value as u64,
                max: MAX_LENGTH,
            });
        }
        Ok(value as usize)
    }

    fn encode_variant_index(out: &mut Vec<u8>, index: u32) -> Result<(), SerError> {
        uleb128::encode(out, index);
        Ok(())
    }

    fn decode_variant_index(reader: &mut SliceReader<'_>) -> Result<u32, DeError> {
        uleb128::decode(reader)
    }

    fn sort_map_entries(out: &mut [u8], entry_starts: &[usize], key_ends: &[usize]) {
        let count = entry_starts.len().saturating_sub(1);
        if count <= 1 {
            return;
        }
        let base = entry_starts[0];
        let end = entry_starts[count];
        let mut entries: Vec<(Vec<u8>, Vec<u8>)> = Vec::with_capacity(count);
        for i in 0..count {
            let whole = out[entry_starts[i]..entry_starts[i + 1]].to_vec();
            let key = out[entry_starts[i]..key_ends[i]].to_vec();
            entries.push((key, whole));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        let mut cursor = base;
        for (_, whole) in &entries {
            out[cursor..cursor + whole.len()].copy_from_slice(whole);
            cursor += whole.len();
        }
        debug_assert_eq!(cursor, end);
    }

    fn check_map_key_order(previous: Option<&[u8]>, current: &[u8]) -> Result<(), DeError> {
        if let Some(previous) = previous {
            if previous >= current {
                tracing::debug!("rejecting map with keys out of canonical order");
                return Err(DeError::UnorderedMapKeys);
            }
        }
        Ok(())
    }
}

/// Encode `value` against `format` using BCS framing.
pub fn serialize(value: &Value, format: &Format) -> Result<Vec<u8>, SerError> {
    let mut out = Vec::new();
    let mut depth = DepthBudget::new(Bcs::depth_budget());
    ser::encode_value::<Bcs>(&mut out, &mut depth, value, format)?;
    Ok(out)
}

/// Decode a value matching `format` from the front of `bytes`, returning the
/// decoded value and whatever bytes were not consumed.
pub fn deserialize<'de>(bytes: &'de [u8], format: &Format) -> Result<(Value, &'de [u8]), DeError> {
    let mut reader = SliceReader::new(bytes);
    let mut depth = DepthBudget::new(Bcs::depth_budget());
    let value = de::decode_value::<Bcs>(&mut reader, &mut depth, format)?;
    Ok((value, reader.remaining()))
}
