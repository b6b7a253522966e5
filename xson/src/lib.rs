//! Self-describing binary encoding of dynamically typed tree values.
//!
//! ```
//! use xson::{deserialize, serialize, Map, Value};
//!
//! let mut map = Map::new();
//! map.insert(String::from("id"), Value::from(5));
//! map.insert(String::from("tags"), Value::from(vec![Value::from("a")]));
//!
//! let bytes = serialize(&Value::Map(map.clone())).unwrap();
//! assert_eq!(deserialize(&bytes).unwrap(), Value::Map(map));
//! ```

mod config;
mod error;
pub mod primitives;
pub mod serde;
mod value;

pub use config::DecodeConfig;
pub use error::{XsonError, XsonResult};
pub use serde::{deserialize, deserialize_with, serialize, serialize_into};
pub use value::{DateTime, Map, Value};
