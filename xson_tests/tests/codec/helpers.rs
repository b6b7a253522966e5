use anyhow::Result;
use xson::serde::bytes_of_serialized;
use xson::{deserialize, serialize, Map, Value};

pub fn map_of<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Map(
        entries
            .into_iter()
            .map(|(k, v)| (String::from(k), v))
            .collect::<Map>(),
    )
}

/// Serializes, checks the measured length, and returns the bytes along with what they decode to.
pub fn ser_deser(value: &Value) -> Result<(Vec<u8>, Value)> {
    let bytes = serialize(value)?;
    assert_eq!(bytes.len(), bytes_of_serialized(value));
    let decoded = deserialize(&bytes)?;
    Ok((bytes, decoded))
}
