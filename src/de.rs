//! The decode half of the type-directed walker. Shared by BCS and BINCODE;
//! everything format-specific is reached through `F: Framing`.

use crate::depth::DepthBudget;
use crate::error::DeError;
use crate::format::Format;
use crate::framing::Framing;
use crate::primitives;
use crate::read::SliceReader;
use crate::value::Value;

/// Decode a value matching `format` from `reader`.
pub(crate) fn decode_value<F: Framing>(
    reader: &mut SliceReader<'_>,
    depth: &mut DepthBudget,
    format: &Format,
) -> Result<Value, DeError> {
    match format {
        Format::Bool => Ok(Value::Bool(primitives::decode_bool(reader)?)),
        Format::U8 => Ok(Value::U8(primitives::decode_u8(reader)?)),
        Format::U16 => Ok(Value::U16(primitives::decode_u16(reader)?)),
        Format::U32 => Ok(Value::U32(primitives::decode_u32(reader)?)),
        Format::U64 => Ok(Value::U64(primitives::decode_u64(reader)?)),
        Format::U128 => Ok(Value::U128(primitives::decode_u128(reader)?)),
        Format::I8 => Ok(Value::I8(primitives::decode_i8(reader)?)),
        Format::I16 => Ok(Value::I16(primitives::decode_i16(reader)?)),
        Format::I32 => Ok(Value::I32(primitives::decode_i32(reader)?)),
        Format::I64 => Ok(Value::I64(primitives::decode_i64(reader)?)),
        Format::I128 => Ok(Value::I128(primitives::decode_i128(reader)?)),
        Format::Unit => Ok(Value::Unit),
        Format::F32 => Ok(Value::F32(primitives::decode_f32_bits(reader)?)),
        Format::F64 => Ok(Value::F64(primitives::decode_f64_bits(reader)?)),
        Format::Char => Ok(Value::Char(primitives::decode_char(reader)?)),
        Format::Bytes => {
            let len = F::decode_length(reader)?;
            Ok(Value::Bytes(primitives::decode_bytes(reader, len)?.to_vec()))
        }
        Format::Str => {
            let len = F::decode_length(reader)?;
            Ok(Value::Str(primitives::decode_str(reader, len)?))
        }
        Format::Seq(element) => {
            let len = F::decode_length(reader)?;
            let _guard = depth.enter()?;
            let mut items = Vec::with_capacity(len.min(1 << 16));
            for _ in 0..len {
                items.push(decode_value::<F>(reader, depth, element)?);
            }
            Ok(Value::Seq(items))
        }
        Format::Tuple(elements) => {
            let mut items = Vec::with_capacity(elements.len());
            for element in elements {
                items.push(decode_value::<F>(reader, depth, element)?);
            }
            Ok(Value::Tuple(items))
        }
        Format::Option(element) => match reader.read_byte()? {
            0x00 => Ok(Value::Option(None)),
            0x01 => {
                let _guard = depth.enter()?;
                let inner = decode_value::<F>(reader, depth, element)?;
                Ok(Value::Option(Some(Box::new(inner))))
            }
            other => Err(DeError::WrongTag(format!("option byte 0x{other:02x}"))),
        },
        Format::Map { key, value } => decode_map::<F>(reader, depth, key, value),
        Format::Struct(struct_format) => {
            let _guard = depth.enter()?;
            let mut fields = Vec::with_capacity(struct_format.fields.len());
            for (_name, field_format) in &struct_format.fields {
                fields.push(decode_value::<F>(reader, depth, field_format)?);
            }
            Ok(Value::Struct(fields))
        }
        Format::Variant(variant_format) => {
            let index = F::decode_variant_index(reader)?;
            let arm = variant_format
                .arm(index)
                .ok_or_else(|| DeError::WrongTag(format!("variant index {index}")))?;
            let _guard = depth.enter()?;
            let mut fields = Vec::with_capacity(arm.fields.len());
            for (_name, field_format) in &arm.fields {
                fields.push(decode_value::<F>(reader, depth, field_format)?);
            }
            Ok(Value::Variant(index, fields))
        }
    }
}

/// Decode a map's entries, verifying the format's key-ordering policy
/// against the **serialized key bytes**, not the decoded key values (two
/// distinct keys could otherwise collide semantically but differ in
/// encoding).
fn decode_map<F: Framing>(
    reader: &mut SliceReader<'_>,
    depth: &mut DepthBudget,
    key_format: &Format,
    value_format: &Format,
) -> Result<Value, DeError> {
    let len = F::decode_length(reader)?;
    let _guard = depth.enter()?;

    let mut entries = Vec::with_capacity(len.min(1 << 16));
    let mut previous_key_bytes: Option<Vec<u8>> = None;
    for _ in 0..len {
        let key_start = reader.pos();
        let key = decode_value::<F>(reader, depth, key_format)?;
        let key_bytes = reader.slice_since(key_start).to_vec();
        F::check_map_key_order(previous_key_bytes.as_deref(), &key_bytes)?;
        let value = decode_value::<F>(reader, depth, value_format)?;
        entries.push((key, value));
        previous_key_bytes = Some(key_bytes);
    }
    Ok(Value::Map(entries))
}
