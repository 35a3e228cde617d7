//! The concrete end-to-end byte vectors from the specification, reproduced
//! byte-for-byte as integration tests (the unit tests alongside each module
//! cover the same ground from inside the crate; these exercise only the
//! public façade).

use canon_codec::format::Format;
use canon_codec::value::Value;
use canon_codec::{bcs, DeError};

#[test]
fn u16_and_u32_are_little_endian() {
    assert_eq!(bcs::serialize(&Value::U16(0x0102), &Format::U16).unwrap(), vec![0x02, 0x01]);
    assert_eq!(
        bcs::serialize(&Value::U32(0x01020304), &Format::U32).unwrap(),
        vec![0x04, 0x03, 0x02, 0x01]
    );
}

#[test]
fn map_of_u16_to_u8_sorts_by_serialized_key_bytes() {
    let format = Format::Map {
        key: Box::new(Format::U16),
        value: Box::new(Format::U8),
    };
    // Deliberately inserted out of order.
    let value = Value::Map(vec![
        (Value::U16(1), Value::U8(5)),
        (Value::U16(256), Value::U8(3)),
    ]);
    let bytes = bcs::serialize(&value, &format).unwrap();
    assert_eq!(bytes, vec![0x02, 0x00, 0x01, 0x03, 0x01, 0x00, 0x05]);

    let value_other_insertion_order = Value::Map(vec![
        (Value::U16(256), Value::U8(3)),
        (Value::U16(1), Value::U8(5)),
    ]);
    assert_eq!(
        bcs::serialize(&value_other_insertion_order, &format).unwrap(),
        bytes
    );
}

#[test]
fn map_decode_rejects_keys_that_are_not_strictly_increasing() {
    let format = Format::Map {
        key: Box::new(Format::U16),
        value: Box::new(Format::U8),
    };
    let bytes = [0x02, 0x01, 0x00, 0x05, 0x00, 0x01, 0x03];
    assert!(matches!(bcs::deserialize(&bytes, &format), Err(DeError::UnorderedMapKeys)));
}

#[test]
fn option_of_u16_vectors() {
    let format = Format::Option(Box::new(Format::U16));
    assert_eq!(bcs::serialize(&Value::Option(None), &format).unwrap(), vec![0x00]);
    assert_eq!(
        bcs::serialize(&Value::Option(Some(Box::new(Value::U16(6)))), &format).unwrap(),
        vec![0x01, 0x06, 0x00]
    );
    assert!(matches!(
        bcs::deserialize(&[0x02, 0x06, 0x00], &format),
        Err(DeError::WrongTag(_))
    ));
}

#[test]
fn bool_vectors() {
    assert_eq!(bcs::serialize(&Value::Bool(true), &Format::Bool).unwrap(), vec![0x01]);
    assert_eq!(bcs::serialize(&Value::Bool(false), &Format::Bool).unwrap(), vec![0x00]);
    assert!(matches!(bcs::deserialize(&[0x02], &Format::Bool), Err(DeError::WrongTag(_))));
    assert!(matches!(bcs::deserialize(&[], &Format::Bool), Err(DeError::ShortInput)));
}
