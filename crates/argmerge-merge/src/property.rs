//! Record-shaping helpers that work on own properties only.

use std::fmt;

use argmerge_types::{Key, Record, Symbol, Value};
use tracing::debug;

use crate::error::{MergeError, MergeResult};

/// A sequence of keys addressing a nested property.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyPath(Vec<Key>);

impl PropertyPath {
    pub fn new(keys: Vec<Key>) -> Self {
        Self(keys)
    }

    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn prefix(&self, len: usize) -> String {
        Self(self.0[..len].to_vec()).to_string()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl From<&str> for PropertyPath {
    fn from(key: &str) -> Self {
        Self(vec![Key::from(key)])
    }
}

impl From<String> for PropertyPath {
    fn from(key: String) -> Self {
        Self(vec![Key::from(key)])
    }
}

impl From<Key> for PropertyPath {
    fn from(key: Key) -> Self {
        Self(vec![key])
    }
}

impl From<Symbol> for PropertyPath {
    fn from(symbol: Symbol) -> Self {
        Self(vec![Key::Symbol(symbol)])
    }
}

impl From<Vec<Key>> for PropertyPath {
    fn from(keys: Vec<Key>) -> Self {
        Self(keys)
    }
}

impl From<Vec<&str>> for PropertyPath {
    fn from(keys: Vec<&str>) -> Self {
        Self(keys.into_iter().map(Key::from).collect())
    }
}

impl From<&[&str]> for PropertyPath {
    fn from(keys: &[&str]) -> Self {
        Self(keys.iter().copied().map(Key::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertyPath {
    fn from(keys: [&str; N]) -> Self {
        Self(keys.into_iter().map(Key::from).collect())
    }
}

/// Assign `value`'s own properties onto the record at `property_path` inside
/// `target`, creating empty records for missing path segments.
///
/// Fails with [`MergeError::MissingPropertyPath`] for an empty path and with
/// [`MergeError::NotARecord`] when an existing segment holds a non-record.
/// `target` is left untouched on error.
pub fn merge_own_nested_property<'a>(
    target: &'a mut Record,
    property_path: impl Into<PropertyPath>,
    value: &Record,
) -> MergeResult<&'a mut Record> {
    let path = property_path.into();
    if path.is_empty() {
        return Err(MergeError::MissingPropertyPath);
    }
    check_path(target, &path)?;
    debug!(path = %path, properties = value.len(), "merging nested property");

    let mut cursor: &mut Record = &mut *target;
    for (depth, key) in path.keys().iter().enumerate() {
        match cursor.get_or_insert_with(key.clone(), Value::empty_record) {
            Value::Record(next) => cursor = next,
            other => {
                return Err(MergeError::NotARecord {
                    path: path.prefix(depth + 1),
                    kind: other.kind(),
                })
            }
        }
    }
    for (key, incoming) in value {
        cursor.insert(key.clone(), incoming.clone());
    }
    Ok(target)
}

// Validate before creating any segment so a failed call leaves no partial path.
fn check_path(target: &Record, path: &PropertyPath) -> MergeResult<()> {
    let mut cursor = target;
    for (depth, key) in path.keys().iter().enumerate() {
        match cursor.get(key) {
            None => return Ok(()),
            Some(Value::Record(next)) => cursor = next,
            Some(other) => {
                return Err(MergeError::NotARecord {
                    path: path.prefix(depth + 1),
                    kind: other.kind(),
                })
            }
        }
    }
    Ok(())
}

/// Copy each own property of `default` whose key is not an own key of
/// `target`. Symbol keys are visited before string keys. Existing
/// properties are never overwritten, even when undefined.
///
/// Returns the number of properties copied.
pub fn merge_nonexistent_properties(target: &mut Record, default: &Record) -> usize {
    let mut copied = 0;
    for key in default.own_keys() {
        if target.contains_key(&key) {
            continue;
        }
        if let Some(value) = default.get(&key) {
            target.insert(key, value.clone());
            copied += 1;
        }
    }
    debug!(copied, "merged nonexistent properties");
    copied
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmerge_types::{Prototype, Shape, ValueKind};
    use serde_json::json;

    fn record(json: serde_json::Value) -> Record {
        match Value::from(json) {
            Value::Record(record) => record,
            other => panic!("expected a record, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // PropertyPath
    // -----------------------------------------------------------------------

    #[test]
    fn path_displays_dotted() {
        let sym = Symbol::new("meta");
        let path = PropertyPath::new(vec![Key::from("a"), Key::from(&sym), Key::from("b")]);
        assert_eq!(path.to_string(), "a.Symbol(meta).b");
        assert_eq!(PropertyPath::from("single").len(), 1);
    }

    // -----------------------------------------------------------------------
    // merge_own_nested_property
    // -----------------------------------------------------------------------

    #[test]
    fn creates_missing_segments() {
        let mut target = Record::new();
        merge_own_nested_property(&mut target, ["a", "b"], &record(json!({"x": 1}))).unwrap();
        assert_eq!(target, record(json!({"a": {"b": {"x": 1}}})));
    }

    #[test]
    fn assigns_onto_existing_record() {
        let mut target = record(json!({"a": {"keep": true, "x": 0}}));
        merge_own_nested_property(&mut target, "a", &record(json!({"x": 1, "y": 2}))).unwrap();
        assert_eq!(target, record(json!({"a": {"keep": true, "x": 1, "y": 2}})));
    }

    #[test]
    fn assignment_is_shallow() {
        let mut target = record(json!({"a": {"n": {"old": 1}}}));
        merge_own_nested_property(&mut target, "a", &record(json!({"n": {"new": 2}}))).unwrap();
        assert_eq!(target, record(json!({"a": {"n": {"new": 2}}})));
    }

    #[test]
    fn symbol_properties_are_assigned() {
        let sym = Symbol::new("tag");
        let mut target = Record::new();
        merge_own_nested_property(&mut target, sym.clone(), &Record::new().with(&sym, 1)).unwrap();
        let nested = target.get(&Key::from(&sym)).and_then(Value::as_record).unwrap();
        assert_eq!(nested.get(&Key::from(&sym)), Some(&Value::from(1)));
    }

    #[test]
    fn nested_instance_keeps_prototype() {
        let proto = Prototype::new(Shape::class("Options"));
        let mut target = Record::new().with("opts", Record::instance_of(&proto));
        merge_own_nested_property(&mut target, "opts", &record(json!({"v": 1}))).unwrap();
        let opts = target.get_str("opts").and_then(Value::as_record).unwrap();
        assert!(opts.prototype().same_identity(&proto));
        assert_eq!(opts.get_str("v"), Some(&Value::from(1)));
    }

    #[test]
    fn empty_path_is_rejected() {
        let mut target = Record::new();
        let err = merge_own_nested_property(&mut target, Vec::<Key>::new(), &Record::new()).unwrap_err();
        assert_eq!(err, MergeError::MissingPropertyPath);
        assert_eq!(err.to_string(), "`property_path` must be passed");
    }

    #[test]
    fn scalar_segment_is_rejected_without_side_effects() {
        let mut target = record(json!({"a": {"b": 3}}));
        let snapshot = target.clone();
        let err = merge_own_nested_property(&mut target, ["a", "b", "c"], &Record::new()).unwrap_err();
        assert_eq!(
            err,
            MergeError::NotARecord {
                path: "a.b".into(),
                kind: ValueKind::Number
            }
        );
        assert_eq!(target, snapshot);
    }

    // -----------------------------------------------------------------------
    // merge_nonexistent_properties
    // -----------------------------------------------------------------------

    #[test]
    fn copies_only_absent_keys() {
        let mut target = record(json!({"a": 1, "b": null}));
        let copied = merge_nonexistent_properties(&mut target, &record(json!({"a": 10, "b": 20, "c": 30})));
        assert_eq!(copied, 1);
        assert_eq!(target, record(json!({"a": 1, "b": null, "c": 30})));
    }

    #[test]
    fn undefined_own_property_is_not_overwritten() {
        let mut target = Record::new().with("a", Value::Undefined);
        merge_nonexistent_properties(&mut target, &Record::new().with("a", 1));
        assert_eq!(target.get_str("a"), Some(&Value::Undefined));
    }

    #[test]
    fn symbol_keys_are_copied_first() {
        let sym = Symbol::new("meta");
        let mut target = Record::new();
        let default = Record::new().with("a", 1).with(&sym, 2);
        assert_eq!(merge_nonexistent_properties(&mut target, &default), 2);
        let keys: Vec<&Key> = target.keys().collect();
        assert_eq!(keys, vec![&Key::from(&sym), &Key::from("a")]);
    }

    #[test]
    fn inherited_members_do_not_block_copy() {
        let proto = Prototype::new(Shape::delegate("prototype").with_member("label", "inherited"));
        let mut target = Record::instance_of(&proto);
        merge_nonexistent_properties(&mut target, &Record::new().with("label", "own"));
        assert_eq!(target.get_str("label"), Some(&Value::from("own")));
    }
}
