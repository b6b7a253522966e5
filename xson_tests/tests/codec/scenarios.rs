use crate::codec::helpers::{map_of, ser_deser};
use anyhow::Result;
use xson::primitives::date::read_date;
use xson::primitives::vlq::{bytes_of_vlq, read_vlq, write_vlq};
use xson::{DateTime, Value};

pub fn test_literal_scenarios() -> Result<()> {
    null_like()?;
    strings()?;
    lists()?;
    maps()?;
    binaries()?;
    integers()?;
    floats()?;
    datetimes()?;
    vlq()?;
    nested_document()?;
    Ok(())
}

fn null_like() -> Result<()> {
    for value in [Value::Undefined, Value::Null, Value::Float(f64::NAN)] {
        let (bytes, decoded) = ser_deser(&value)?;
        assert_eq!(bytes, vec![0x00]);
        assert_eq!(decoded, Value::Null);
    }
    assert_eq!(ser_deser(&Value::Bool(true))?.0, vec![0x05]);
    assert_eq!(ser_deser(&Value::Bool(false))?.0, vec![0x06]);
    Ok(())
}

fn strings() -> Result<()> {
    let (bytes, decoded) = ser_deser(&Value::from("0123"))?;
    assert_eq!(bytes, vec![0x01, 0x30, 0x31, 0x32, 0x33, 0x00]);
    assert_eq!(decoded, Value::from("0123"));

    let (bytes, _) = ser_deser(&Value::from(""))?;
    assert_eq!(bytes, vec![0x01, 0x00]);
    Ok(())
}

fn lists() -> Result<()> {
    assert_eq!(ser_deser(&Value::List(vec![]))?.0, vec![0x02, 0x00]);

    let (bytes, _) = ser_deser(&Value::List(vec![Value::from("0123")]))?;
    assert_eq!(bytes, vec![0x02, 0x01, 0x01, 0x30, 0x31, 0x32, 0x33, 0x00]);

    // Absent list items keep their slot as null.
    let list = Value::List(vec![Value::Undefined, Value::from("0123"), Value::Null]);
    let (bytes, decoded) = ser_deser(&list)?;
    assert_eq!(
        bytes,
        vec![0x02, 0x03, 0x00, 0x01, 0x30, 0x31, 0x32, 0x33, 0x00, 0x00]
    );
    assert_eq!(
        decoded,
        Value::List(vec![Value::Null, Value::from("0123"), Value::Null])
    );
    Ok(())
}

fn maps() -> Result<()> {
    assert_eq!(ser_deser(&map_of([]))?.0, vec![0x03, 0x00]);

    let (bytes, _) = ser_deser(&map_of([("A", Value::from("2"))]))?;
    assert_eq!(bytes, vec![0x03, 0x01, 65, 0x00, 0x01, 50, 0x00]);

    let (bytes, _) = ser_deser(&map_of([
        ("A", Value::from("2")),
        ("B", Value::Bool(true)),
        ("C", Value::Integer(3)),
    ]))?;
    assert_eq!(bytes.len(), 14);
    assert_eq!(bytes[0], 0x03);

    // Absent map values are dropped, count included.
    let (bytes, decoded) = ser_deser(&map_of([
        ("A", Value::from("2")),
        ("B", Value::Undefined),
        ("C", Value::Null),
    ]))?;
    assert_eq!(bytes, vec![0x03, 0x02, 65, 0x00, 0x01, 50, 0x00, 67, 0x00, 0x00]);
    assert_eq!(
        decoded,
        map_of([("A", Value::from("2")), ("C", Value::Null)])
    );
    Ok(())
}

fn binaries() -> Result<()> {
    let blob = Value::Binary(vec![223, 224, 225]);
    let (bytes, decoded) = ser_deser(&blob)?;
    assert_eq!(bytes, vec![0x04, 0x03, 223, 224, 225]);
    assert_eq!(decoded, blob);

    let blob = Value::Binary((0..128).collect());
    let (bytes, decoded) = ser_deser(&blob)?;
    assert_eq!(bytes.len(), 131);
    assert_eq!(&bytes[..5], &[0x04, 0x81, 0x00, 0x00, 0x01]);
    assert_eq!(bytes[130], 127);
    assert_eq!(decoded, blob);
    Ok(())
}

fn integers() -> Result<()> {
    assert_eq!(ser_deser(&Value::Integer(5))?.0, vec![0x10, 0x05]);
    assert_eq!(ser_deser(&Value::Integer(-5))?.0, vec![0x11, 0x05]);
    assert_eq!(ser_deser(&Value::Integer(0xFF))?.0, vec![0x10, 0xFF]);

    let boundaries: [(i64, u8); 6] = [
        (0xFF + 1, 0x12),
        (0xFFFF + 1, 0x14),
        (0xFF_FFFF + 1, 0x16),
        (0xFFFF_FFFF + 1, 0x18),
        (0xFF_FFFF_FFFF + 1, 0x1A),
        (0xFFFF_FFFF_FFFF + 1, 0x1C),
    ];
    for (width, (i, tag)) in (2..).zip(boundaries) {
        let (bytes, decoded) = ser_deser(&Value::Integer(i))?;
        assert_eq!(bytes.len(), 1 + width);
        assert_eq!(bytes[0], tag);
        assert!(bytes[1..width].iter().all(|&b| b == 0));
        assert_eq!(bytes[width], 1);
        assert_eq!(decoded, Value::Integer(i));

        let (bytes, decoded) = ser_deser(&Value::Integer(-i))?;
        assert_eq!(bytes[0], tag + 1);
        assert_eq!(decoded, Value::Integer(-i));
    }

    let max_safe = (1i64 << 53) - 1;
    assert_eq!(ser_deser(&Value::Integer(max_safe))?.1, Value::Integer(max_safe));
    assert_eq!(ser_deser(&Value::Integer(-max_safe))?.1, Value::Integer(-max_safe));
    Ok(())
}

fn floats() -> Result<()> {
    let (bytes, decoded) = ser_deser(&Value::Float(3.2))?;
    assert_eq!(bytes.len(), 9);
    assert_eq!(bytes[0], 0x08);
    assert_eq!(f64::from_le_bytes(bytes[1..].try_into()?), 3.2);
    assert_eq!(decoded, Value::Float(3.2));

    match ser_deser(&Value::Float(-0.0))?.1 {
        Value::Float(f) => assert!(f == 0.0 && f.is_sign_negative()),
        other => anyhow::bail!("-0.0 came back as {other:?}"),
    }

    assert_eq!(ser_deser(&Value::number(3.0))?.0, vec![0x10, 0x03]);
    Ok(())
}

fn datetimes() -> Result<()> {
    let now = DateTime::now();
    let (bytes, decoded) = ser_deser(&Value::DateTime(now))?;
    assert_eq!(bytes.len(), 7);
    assert_eq!(bytes[0], 0x30);
    assert_eq!(read_date(&bytes[1..], false)?.value, now);
    assert_eq!(decoded, Value::DateTime(now));

    // 1960-01-01T00:00:00Z
    let before_epoch = DateTime::from_millis(-315619200000);
    let (bytes, decoded) = ser_deser(&Value::DateTime(before_epoch))?;
    assert_eq!(bytes.len(), 7);
    assert_eq!(bytes[0], 0x31);
    assert_eq!(read_date(&bytes[1..], true)?.value, before_epoch);
    assert_eq!(decoded, Value::DateTime(before_epoch));
    Ok(())
}

fn vlq() -> Result<()> {
    let n = 61440;
    let len = bytes_of_vlq(n);
    assert_eq!(len, 3);
    let mut buf = vec![0u8; len];
    write_vlq(n, &mut buf);
    let r = read_vlq(&buf)?;
    assert_eq!(r.value, n);
    assert_eq!(r.r_len, len);
    Ok(())
}

fn nested_document() -> Result<()> {
    let document = map_of([
        ("null", Value::Null),
        ("string", Value::from("string")),
        (
            "array",
            Value::List(vec![Value::from("1"), Value::Integer(2)]),
        ),
        ("object", map_of([("o", Value::Integer(1))])),
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("float", Value::Float(3.5)),
        ("int1", Value::Integer(1)),
        ("int2", Value::Integer(1 + 0xFF)),
        ("int3", Value::Integer(1 + 0xFFFF)),
        ("int4", Value::Integer(1 + 0xFF_FFFF)),
        ("int5", Value::Integer(1 + 0xFFFF_FFFF)),
        ("int6", Value::Integer(1 + 0xFF_FFFF_FFFF)),
        ("int7", Value::Integer(1 + 0xFFFF_FFFF_FFFF)),
    ]);
    let (_, decoded) = ser_deser(&document)?;
    assert_eq!(decoded, document);
    Ok(())
}
