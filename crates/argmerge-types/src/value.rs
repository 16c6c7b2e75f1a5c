use std::fmt;

use crate::callable::Callable;
use crate::record::Record;

/// A dynamic value: a scalar, or a composite (sequence or record).
///
/// `Undefined` is an explicit "absent" marker, distinct from `Null`. Missing
/// record keys and missing sequence positions read as `Undefined`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Function(Callable),
    Array(Vec<Value>),
    Record(Record),
}

/// Coarse category of a [`Value`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Function,
    Sequence,
    Record,
    Instance,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Function => "function",
            Self::Sequence => "sequence",
            Self::Record => "record",
            Self::Instance => "instance",
        };
        f.write_str(name)
    }
}

// ── Type checks ──────────────────────────────────────────────────────────────

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Function(_) => ValueKind::Function,
            Self::Array(_) => ValueKind::Sequence,
            Self::Record(r) if r.is_plain() => ValueKind::Record,
            Self::Record(_) => ValueKind::Instance,
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Sequences and records.
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Record(_))
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Any record, plain or tagged.
    #[inline]
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// A record with the base record prototype.
    #[inline]
    pub fn is_plain_record(&self) -> bool {
        matches!(self, Self::Record(r) if r.is_plain())
    }

    /// A record with a tagged prototype.
    #[inline]
    pub fn is_instance(&self) -> bool {
        matches!(self, Self::Record(r) if !r.is_plain())
    }

    /// A record whose prototype forbids descending into it.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Record(r) if r.is_opaque())
    }

    /// Truthiness: `undefined`, `null`, `false`, `0`, `NaN` and `""` are
    /// falsy; everything else, including empty composites, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Function(_) | Self::Array(_) | Self::Record(_) => true,
        }
    }
}

// ── Extraction ───────────────────────────────────────────────────────────────

impl Value {
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Own property of a record by string key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_record().and_then(|record| record.get_str(key))
    }

    /// Element of a sequence by position.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

impl Value {
    /// A fresh callable value.
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(Callable::new(name))
    }

    /// An empty plain record.
    pub fn empty_record() -> Self {
        Self::Record(Record::new())
    }
}

// ── From impls ───────────────────────────────────────────────────────────────

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Self::Function(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype::{Prototype, Shape};

    #[test]
    fn falsy_values() {
        for value in [
            Value::Undefined,
            Value::Null,
            Value::Bool(false),
            Value::Number(0.0),
            Value::Number(f64::NAN),
            Value::from(""),
        ] {
            assert!(!value.is_truthy(), "{value:?} should be falsy");
        }
    }

    #[test]
    fn truthy_values() {
        for value in [
            Value::Bool(true),
            Value::Number(-1.0),
            Value::from("0"),
            Value::Array(vec![]),
            Value::empty_record(),
            Value::function("f"),
        ] {
            assert!(value.is_truthy(), "{value:?} should be truthy");
        }
    }

    #[test]
    fn kind_distinguishes_instances() {
        let proto = Prototype::new(Shape::class("Options"));
        assert_eq!(Value::empty_record().kind(), ValueKind::Record);
        assert_eq!(Value::from(Record::instance_of(&proto)).kind(), ValueKind::Instance);
        assert_eq!(Value::Array(vec![]).kind(), ValueKind::Sequence);
        assert_eq!(ValueKind::Instance.to_string(), "instance");
    }

    #[test]
    fn composite_checks() {
        let proto = Prototype::new(Shape::class("Sealed").opaque());
        let opaque = Value::from(Record::instance_of(&proto));
        assert!(opaque.is_composite());
        assert!(opaque.is_instance());
        assert!(opaque.is_opaque());
        assert!(!opaque.is_plain_record());
        assert!(!Value::Null.is_composite());
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn accessors() {
        let value = Value::from(Record::new().with("list", vec![Value::from(1)]));
        assert_eq!(value.get("list").and_then(|l| l.get_index(0)), Some(&Value::from(1)));
        assert!(value.get("missing").is_none());
    }
}
