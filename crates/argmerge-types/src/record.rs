use indexmap::IndexMap;

use crate::key::{Key, Symbol};
use crate::prototype::Prototype;
use crate::value::Value;

/// A key/value mapping with a prototype identity.
///
/// Properties keep insertion order. Overwriting an existing key keeps its
/// original position; new keys are appended. Equality compares prototype
/// identity and the property set, ignoring order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    prototype: Prototype,
    properties: IndexMap<Key, Value>,
}

impl Record {
    /// Create an empty plain record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record delegating to `prototype`.
    pub fn instance_of(prototype: &Prototype) -> Self {
        Self {
            prototype: prototype.clone(),
            properties: IndexMap::new(),
        }
    }

    /// View a sequence as a record keyed by its indices.
    pub fn from_sequence(items: &[Value]) -> Self {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| (Key::index(index), item.clone()))
            .collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    /// Returns `true` if the record has the base record prototype.
    pub fn is_plain(&self) -> bool {
        self.prototype.is_plain()
    }

    /// Returns `true` if this record, as an override, replaces the default
    /// wholesale.
    pub fn is_opaque(&self) -> bool {
        self.prototype.is_opaque()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Own property lookup.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Own property lookup by string key.
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.properties.get(&Key::from(key))
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.properties.get_mut(key)
    }

    /// Property lookup that falls back to the prototype's members.
    pub fn lookup(&self, key: &Key) -> Option<&Value> {
        self.properties
            .get(key)
            .or_else(|| self.prototype.shape().and_then(|shape| shape.member(key)))
    }

    /// Own-property check; inherited members do not count.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.properties.contains_key(key)
    }

    /// Insert or overwrite an own property, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }

    /// Own property for `key`, inserting `default()` first if it is missing.
    pub fn get_or_insert_with(&mut self, key: Key, default: impl FnOnce() -> Value) -> &mut Value {
        self.properties.entry(key).or_insert_with(default)
    }

    /// Remove an own property, preserving the order of the others.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.properties.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.properties.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.properties.keys()
    }

    /// Own string keys in insertion order.
    pub fn string_keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().filter_map(Key::as_str)
    }

    /// Own symbol keys in insertion order.
    pub fn symbol_keys(&self) -> impl Iterator<Item = &Symbol> {
        self.properties.keys().filter_map(|key| match key {
            Key::Symbol(sym) => Some(sym),
            Key::String(_) => None,
        })
    }

    /// Every own key: symbols first, then strings, each in insertion order.
    pub fn own_keys(&self) -> Vec<Key> {
        self.symbol_keys()
            .cloned()
            .map(Key::Symbol)
            .chain(self.string_keys().map(Key::from))
            .collect()
    }

    /// A copy with the same prototype and no properties.
    pub fn empty_like(&self) -> Self {
        Self::instance_of(&self.prototype)
    }
}

impl FromIterator<(Key, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self {
            prototype: Prototype::plain(),
            properties: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
