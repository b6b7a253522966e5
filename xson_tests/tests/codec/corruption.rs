use crate::codec::helpers::map_of;
use anyhow::Result;
use xson::serde::{read_serialized, skip_serialized};
use xson::{deserialize, deserialize_with, serialize, DecodeConfig, Value, XsonError};

pub fn test_corrupted_inputs() -> Result<()> {
    error_taxonomy();
    every_truncation_fails()?;
    config_limits()?;
    Ok(())
}

fn error_taxonomy() {
    assert_eq!(
        deserialize(&[0x02, 0x05, 0x00]),
        Err(XsonError::DataCorrupted)
    );
    assert_eq!(
        deserialize(&[0x03, 0x05, 0x41, 0x00]),
        Err(XsonError::DataCorrupted)
    );
    assert_eq!(
        deserialize(&[0x04, 0x04, 0x01]),
        Err(XsonError::DataCorrupted)
    );
    assert_eq!(
        deserialize(&[0x01, 0x41, 0x42]),
        Err(XsonError::UnterminatedString)
    );
    assert_eq!(
        deserialize(&[0x03, 0x01, 0x41, 0x42]),
        Err(XsonError::UnterminatedString)
    );
    assert_eq!(
        deserialize(&[0x09]),
        Err(XsonError::UnsupportedType { tag: 0x09 })
    );
    for tag in 0x1F..=0x2F {
        assert_eq!(deserialize(&[tag]), Err(XsonError::UnsupportedType { tag }));
    }
    for tag in (0x0A..=0x0F).chain(0x32..=0xFF) {
        assert_eq!(deserialize(&[tag]), Err(XsonError::UnrecognizedTag { tag }));
    }
}

/// Cutting a valid encoding anywhere short of its end is an error, never a panic.
fn every_truncation_fails() -> Result<()> {
    let document = map_of([
        ("list", Value::List(vec![Value::Integer(-70000), Value::Float(0.25)])),
        ("blob", Value::Binary(vec![1, 2, 3])),
        ("text", Value::from("h\u{e9}llo")),
        ("when", Value::DateTime(xson::DateTime::from_millis(1_600_000_000_000))),
    ]);
    let bytes = serialize(&document)?;
    assert_eq!(deserialize(&bytes)?, document);

    for end in 0..bytes.len() {
        let truncated = &bytes[..end];
        assert!(
            deserialize(truncated).is_err(),
            "decoded a prefix of {end} bytes"
        );
        assert!(skip_serialized(truncated).is_err());
    }
    Ok(())
}

fn config_limits() -> Result<()> {
    let nested = Value::List(vec![Value::List(vec![Value::List(vec![])])]);
    let bytes = serialize(&nested)?;

    let config = DecodeConfig::default().with_max_depth(3);
    assert_eq!(deserialize_with(&bytes, &config)?, nested);

    let config = DecodeConfig::default().with_max_depth(1);
    assert_eq!(
        deserialize_with(&bytes, &config),
        Err(XsonError::DepthLimitExceeded { limit: 1 })
    );

    let mut padded = bytes.clone();
    padded.push(0x00);
    assert_eq!(read_serialized(&padded)?.r_len, bytes.len());
    let config = DecodeConfig::default().with_reject_trailing(true);
    assert_eq!(
        deserialize_with(&padded, &config),
        Err(XsonError::ExtraInput {
            consumed: bytes.len(),
            total: padded.len()
        })
    );
    Ok(())
}
