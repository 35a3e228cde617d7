//! The encode half of the type-directed walker. Shared by BCS and BINCODE;
//! everything format-specific is reached through `F: Framing`.

use crate::depth::DepthBudget;
use crate::error::SerError;
use crate::format::Format;
use crate::framing::Framing;
use crate::primitives;
use crate::value::Value;

fn mismatch(value: &Value, format: &Format) -> SerError {
    SerError::TypeMismatch(format!("{} does not inhabit {:?}", value.kind(), format))
}

/// Encode `value` against `format`, writing into `out`.
pub(crate) fn encode_value<F: Framing>(
    out: &mut Vec<u8>,
    depth: &mut DepthBudget,
    value: &Value,
    format: &Format,
) -> Result<(), SerError> {
    match (value, format) {
        (Value::Bool(v), Format::Bool) => {
            primitives::encode_bool(out, *v);
            Ok(())
        }
        (Value::U8(v), Format::U8) => {
            primitives::encode_u8(out, *v);
            Ok(())
        }
        (Value::U16(v), Format::U16) => {
            primitives::encode_u16(out, *v);
            Ok(())
        }
        (Value::U32(v), Format::U32) => {
            primitives::encode_u32(out, *v);
            Ok(())
        }
        (Value::U64(v), Format::U64) => {
            primitives::encode_u64(out, *v);
            Ok(())
        }
        (Value::U128(v), Format::U128) => {
            primitives::encode_u128(out, *v);
            Ok(())
        }
        (Value::I8(v), Format::I8) => {
            primitives::encode_i8(out, *v);
            Ok(())
        }
        (Value::I16(v), Format::I16) => {
            primitives::encode_i16(out, *v);
            Ok(())
        }
        (Value::I32(v), Format::I32) => {
            primitives::encode_i32(out, *v);
            Ok(())
        }
        (Value::I64(v), Format::I64) => {
            primitives::encode_i64(out, *v);
            Ok(())
        }
        (Value::I128(v), Format::I128) => {
            primitives::encode_i128(out, *v);
            Ok(())
        }
        (Value::Unit, Format::Unit) => Ok(()),
        (Value::F32(v), Format::F32) => {
            primitives::encode_f32_bits(out, *v);
            Ok(())
        }
        (Value::F64(v), Format::F64) => {
            primitives::encode_f64_bits(out, *v);
            Ok(())
        }
        (Value::Char(v), Format::Char) => {
            primitives::encode_char(out, *v);
            Ok(())
        }
        (Value::Bytes(bytes), Format::Bytes) => {
            F::encode_length(out, bytes.len())?;
            primitives::encode_bytes(out, bytes);
            Ok(())
        }
        (Value::Str(s), Format::Str) => {
            F::encode_length(out, s.len())?;
            primitives::encode_str(out, s);
            Ok(())
        }
        (Value::Seq(items), Format::Seq(element)) => {
            F::encode_length(out, items.len())?;
            let _guard = depth.enter()?;
            for item in items {
                encode_value::<F>(out, depth, item, element)?;
            }
            Ok(())
        }
        (Value::Tuple(items), Format::Tuple(elements)) => {
            if items.len() != elements.len() {
                return Err(mismatch(value, format));
            }
            for (item, element) in items.iter().zip(elements) {
                encode_value::<F>(out, depth, item, element)?;
            }
            Ok(())
        }
        (Value::Option(inner), Format::Option(element)) => match inner {
            None => {
                out.push(0x00);
                Ok(())
            }
            Some(inner) => {
                out.push(0x01);
                let _guard = depth.enter()?;
                encode_value::<F>(out, depth, inner, element)
            }
        },
        (Value::Map(entries), Format::Map { key, value: value_format }) => {
            encode_map::<F>(out, depth, entries, key, value_format)
        }
        (Value::Struct(fields), Format::Struct(struct_format)) => {
            if fields.len() != struct_format.fields.len() {
                return Err(mismatch(value, format));
            }
            let _guard = depth.enter()?;
            for (field_value, (_name, field_format)) in fields.iter().zip(&struct_format.fields) {
                encode_value::<F>(out, depth, field_value, field_format)?;
            }
            Ok(())
        }
        (Value::Variant(index, fields), Format::Variant(variant_format)) => {
            let arm = variant_format
                .arm(*index)
                .ok_or_else(|| mismatch(value, format))?;
            if fields.len() != arm.fields.len() {
                return Err(mismatch(value, format));
            }
            F::encode_variant_index(out, *index)?;
            let _guard = depth.enter()?;
            for (field_value, (_name, field_format)) in fields.iter().zip(&arm.fields) {
                encode_value::<F>(out, depth, field_value, field_format)?;
            }
            Ok(())
        }
        _ => Err(mismatch(value, format)),
    }
}

/// Encode a map's entries, then reorder the written bytes in place per the
/// format's policy. See `SPEC_FULL.md` §9 "Map entry sorting without
/// rebuffering".
fn encode_map<F: Framing>(
    out: &mut Vec<u8>,
    depth: &mut DepthBudget,
    entries: &[(Value, Value)],
    key_format: &Format,
    value_format: &Format,
) -> Result<(), SerError> {
    F::encode_length(out, entries.len())?;
    let _guard = depth.enter()?;

    let mut entry_starts = Vec::with_capacity(entries.len() + 1);
    let mut key_ends = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        entry_starts.push(out.len());
        encode_value::<F>(out, depth, key, key_format)?;
        key_ends.push(out.len());
        encode_value::<F>(out, depth, value, value_format)?;
    }
    entry_starts.push(out.len());

    F::sort_map_entries(out, &entry_starts, &key_ends);
    Ok(())
}
