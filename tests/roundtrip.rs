//! Round-trip coverage across both formats for every `Format` case.

use canon_codec::format::{Format, StructFormat, VariantFormat};
use canon_codec::value::Value;
use canon_codec::{bcs, bincode};

fn point_format() -> Format {
    Format::Struct(StructFormat::new(
        "Point",
        vec![("x".into(), Format::I32), ("y".into(), Format::I32)],
    ))
}

fn point_value(x: i32, y: i32) -> Value {
    Value::Struct(vec![Value::I32(x), Value::I32(y)])
}

fn shape_format() -> Format {
    Format::Variant(VariantFormat::new(
        "Shape",
        vec![
            Some(StructFormat::new(
                "Circle",
                vec![("radius".into(), Format::U32)],
            )),
            Some(StructFormat::new("Point", vec![("0".into(), point_format())])),
        ],
    ))
}

macro_rules! roundtrip_both {
    ($name:ident, $format:expr, $value:expr) => {
        #[test]
        fn $name() {
            let format = $format;
            let value = $value;

            let bytes = bcs::serialize(&value, &format).expect("bcs encode");
            let (decoded, rest) = bcs::deserialize(&bytes, &format).expect("bcs decode");
            assert_eq!(decoded, value);
            assert!(rest.is_empty());

            let bytes = bincode::serialize(&value, &format).expect("bincode encode");
            let (decoded, rest) = bincode::deserialize(&bytes, &format).expect("bincode decode");
            assert_eq!(decoded, value);
            assert!(rest.is_empty());
        }
    };
}

roundtrip_both!(bools, Format::Bool, Value::Bool(true));
roundtrip_both!(all_unsigned_widths, Format::Tuple(vec![Format::U8, Format::U16, Format::U32, Format::U64, Format::U128]),
    Value::Tuple(vec![Value::U8(250), Value::U16(60_000), Value::U32(4_000_000_000), Value::U64(u64::MAX), Value::U128(u128::MAX)]));
roundtrip_both!(all_signed_widths, Format::Tuple(vec![Format::I8, Format::I16, Format::I32, Format::I64, Format::I128]),
    Value::Tuple(vec![Value::I8(-120), Value::I16(-30_000), Value::I32(i32::MIN), Value::I64(i64::MIN), Value::I128(i128::MIN)]));
roundtrip_both!(unit, Format::Unit, Value::Unit);
roundtrip_both!(floats, Format::Tuple(vec![Format::F32, Format::F64]),
    Value::Tuple(vec![Value::F32(-3.5), Value::F64(2.0_f64.sqrt())]));
roundtrip_both!(char_value, Format::Char, Value::Char('\u{1F980}'));
roundtrip_both!(bytes_value, Format::Bytes, Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]));
roundtrip_both!(multi_byte_utf8_string, Format::Str, Value::Str("héllo, 世界 🦀".to_string()));
roundtrip_both!(empty_string, Format::Str, Value::Str(String::new()));
roundtrip_both!(sequence_of_struct, Format::Seq(Box::new(point_format())),
    Value::Seq(vec![point_value(1, -1), point_value(2, -2), point_value(3, -3)]));
roundtrip_both!(option_absent, Format::Option(Box::new(point_format())), Value::Option(None));
roundtrip_both!(option_present, Format::Option(Box::new(point_format())),
    Value::Option(Some(Box::new(point_value(7, 8)))));
// Listed in BCS's canonical order (sorted by serialized key bytes: the
// length-prefix byte 0x04 for "unit" sorts before 0x06 for "origin") so the
// same `Value` round-trips unchanged under both formats — BINCODE leaves
// insertion order alone, BCS normalizes to this order regardless.
roundtrip_both!(map_of_string_to_struct, Format::Map { key: Box::new(Format::Str), value: Box::new(point_format()) },
    Value::Map(vec![
        ("unit".to_string(), point_value(1, 1)),
        ("origin".to_string(), point_value(0, 0)),
    ].into_iter().map(|(k, v)| (Value::Str(k), v)).collect()));
roundtrip_both!(map_as_set, Format::Map { key: Box::new(Format::U32), value: Box::new(Format::Unit) },
    Value::Map(vec![(Value::U32(1), Value::Unit), (Value::U32(2), Value::Unit), (Value::U32(3), Value::Unit)]));
roundtrip_both!(empty_map, Format::Map { key: Box::new(Format::U8), value: Box::new(Format::U8) }, Value::Map(vec![]));
roundtrip_both!(empty_sequence, Format::Seq(Box::new(Format::U8)), Value::Seq(vec![]));
roundtrip_both!(struct_value, point_format(), point_value(-5, 5));
roundtrip_both!(variant_first_arm, shape_format(), Value::Variant(0, vec![Value::U32(3)]));
roundtrip_both!(variant_nested_struct_arm, shape_format(), Value::Variant(1, vec![point_value(9, 9)]));
