//! Conversions between [`Value`] and JSON.
//!
//! JSON has no undefined, callables, symbols, or prototypes. Serialization is
//! lossy (undefined and callables become `null`, symbol keys are skipped,
//! prototypes are dropped); [`Value::to_json`] is the strict variant that
//! refuses anything it cannot represent.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::{TypeError, TypeResult};
use crate::key::Key;
use crate::record::Record;
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if !n.is_finite() {
                    serializer.serialize_none()
                } else if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(record) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in record {
                    if let Key::String(name) = key {
                        map.serialize_entry(name, value)?;
                    }
                }
                map.end()
            }
        }
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "any valid JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut record = Record::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            record.insert(key, value);
        }
        Ok(Value::Record(record))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Record(
                map.into_iter()
                    .map(|(key, value)| (Key::String(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Strict conversion to `serde_json::Value`.
    ///
    /// Fails on undefined, callables, symbol keys and non-finite numbers.
    /// Prototype identities are dropped.
    pub fn to_json(&self) -> TypeResult<serde_json::Value> {
        match self {
            Value::Undefined | Value::Function(_) => Err(TypeError::Unrepresentable(self.kind())),
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                Ok(serde_json::Value::from(*n as i64))
            }
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or_else(|| TypeError::NonFiniteNumber(n.to_string())),
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<TypeResult<Vec<_>>>()
                .map(serde_json::Value::Array),
            Value::Record(record) => {
                let mut map = serde_json::Map::new();
                for (key, value) in record {
                    match key {
                        Key::String(name) => {
                            map.insert(name.clone(), value.to_json()?);
                        }
                        Key::Symbol(sym) => return Err(TypeError::SymbolKey(sym.to_string())),
                    }
                }
                Ok(serde_json::Value::Object(map))
            }
        }
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> TypeResult<Value> {
        serde_json::from_str(s).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Serialize to a JSON string (lossy, see module docs).
    pub fn to_json_string(&self) -> TypeResult<String> {
        serde_json::to_string(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}
