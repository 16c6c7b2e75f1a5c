use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An opaque symbolic property identifier.
///
/// Every `Symbol` created with [`Symbol::new`] is unique, even when two
/// symbols share a description. Clones share the identity of the original.
#[derive(Clone)]
pub struct Symbol {
    id: uuid::Uuid,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a new unique symbol with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            description: Some(Arc::from(description.into())),
        }
    }

    /// Create a new unique symbol without a description.
    pub fn anonymous() -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            description: None,
        }
    }

    /// The description given at creation, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The underlying identity.
    pub fn id(&self) -> &uuid::Uuid {
        &self.id
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// A record property key: either a string or a [`Symbol`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    String(String),
    Symbol(Symbol),
}

impl Key {
    /// Returns `true` if this is a symbolic key.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    /// The string form of the key, if it is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Symbol(_) => None,
        }
    }

    /// The key addressing position `index` of a sequence viewed as a record.
    pub fn index(index: usize) -> Self {
        Self::String(index.to_string())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Symbol(sym) => write!(f, "{sym}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<Symbol> for Key {
    fn from(sym: Symbol) -> Self {
        Self::Symbol(sym)
    }
}

impl From<&Symbol> for Key {
    fn from(sym: &Symbol) -> Self {
        Self::Symbol(sym.clone())
    }
}
