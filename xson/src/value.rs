use crate::primitives::int::MAX_SAFE_INTEGER;
use derive_more::{Deref, From, Into};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Keyed entries of a [`Value::Map`].
///
/// Iteration is byte-wise ascending by key, which is the order entries are emitted in.
pub type Map = BTreeMap<String, Value>;

/// Milliseconds since the unix epoch. Negative values are before the epoch.
#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct DateTime(i64);
impl DateTime {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn now() -> Self {
        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_millis()).unwrap_or(i64::MAX),
            Err(e) => i64::try_from(e.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        };
        Self(millis)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value of the timestamp. The sign travels in the tag, not the payload.
    pub fn magnitude(&self) -> u64 {
        self.0.unsigned_abs()
    }
}

/// A dynamically typed tree value.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    /// An absent value.
    ///
    /// Encodes as null at the top level and inside lists, but is dropped entirely
    /// when it is the value of a map entry. Decoding never produces it.
    Undefined,
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
    Binary(Vec<u8>),
    DateTime(DateTime),
}

impl Value {
    /// Classifies a dynamically typed number.
    ///
    /// NaN becomes [`Value::Null`]; integral values that fit the safe integer
    /// range become [`Value::Integer`]; everything else stays a float.
    pub fn number(n: f64) -> Self {
        if n.is_nan() {
            Value::Null
        } else if n.is_finite() && n == n.floor() && n.abs() <= MAX_SAFE_INTEGER as f64 {
            Value::Integer(n as i64)
        } else {
            Value::Float(n)
        }
    }

    /// Whether this value takes up a slot in a map. Absent map values are skipped.
    pub fn is_present(&self) -> bool {
        !matches!(self, Value::Undefined)
    }

    /// Both `Undefined` and `Null` read as null, as does a NaN float.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
    /// Integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }
    pub fn as_datetime(&self) -> Option<DateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Binary(_) => "binary",
            Value::DateTime(_) => "datetime",
        }
    }
}

/// Map entries that are encoded, in emission order.
pub(crate) fn present_entries(map: &Map) -> impl Iterator<Item = (&String, &Value)> {
    map.iter().filter(|(_, v)| v.is_present())
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ( $( $ity:ty ),* ) => {
        $(
            impl From<$ity> for Value {
                fn from(i: $ity) -> Self {
                    Value::Integer(i64::from(i))
                }
            }
        )*
    };
}
impl_from_int!(i8, u8, i16, u16, i32, u32, i64);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}
impl From<DateTime> for Value {
    fn from(dt: DateTime) -> Self {
        Value::DateTime(dt)
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Value::Undefined,
            Some(t) => t.into(),
        }
    }
}
