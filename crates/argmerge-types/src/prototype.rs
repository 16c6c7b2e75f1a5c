use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::key::Key;
use crate::value::Value;

/// How a tagged record came to have its prototype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Instance produced by a constructor (`new Class(...)`).
    Class,
    /// Record created by delegating to another record.
    Delegate,
}

/// The prototype a tagged record delegates to.
///
/// A `Shape` is created once and shared through a [`Prototype`] handle.
/// Its identity is fixed at creation; `Shape` is intentionally not `Clone`
/// so two handles compare equal only when they point at the same shape.
#[derive(Debug)]
pub struct Shape {
    id: uuid::Uuid,
    name: String,
    kind: ShapeKind,
    descend: bool,
    members: IndexMap<Key, Value>,
}

impl Shape {
    /// A constructor-produced shape.
    pub fn class(name: impl Into<String>) -> Self {
        Self::with_kind(name, ShapeKind::Class)
    }

    /// A delegation shape (the record passed to `Object.create`).
    pub fn delegate(name: impl Into<String>) -> Self {
        Self::with_kind(name, ShapeKind::Delegate)
    }

    fn with_kind(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            name: name.into(),
            kind,
            descend: true,
            members: IndexMap::new(),
        }
    }

    /// Add a member reachable from every instance through the prototype.
    pub fn with_member(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.members.insert(key.into(), value.into());
        self
    }

    /// Flag instances of this shape as opaque: an overriding instance replaces
    /// the default wholesale instead of being merged into it. An opaque
    /// default is still merged with a record override like any other tagged
    /// default.
    pub fn opaque(mut self) -> Self {
        self.descend = false;
        self
    }

    /// The identity assigned at creation.
    pub fn id(&self) -> &uuid::Uuid {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns `false` for opaque shapes.
    pub fn descend(&self) -> bool {
        self.descend
    }

    pub fn member(&self, key: &Key) -> Option<&Value> {
        self.members.get(key)
    }

    pub fn members(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.members.iter()
    }
}

/// Prototype identity of a record.
///
/// `Prototype::plain()` is the base record prototype. Any other prototype is
/// a shared handle to a [`Shape`]; equality is identity of the shape, never
/// structural comparison.
#[derive(Clone, Default)]
pub struct Prototype(Option<Arc<Shape>>);

impl Prototype {
    /// The base record prototype.
    pub const fn plain() -> Self {
        Self(None)
    }

    /// A new prototype identity backed by `shape`.
    pub fn new(shape: Shape) -> Self {
        Self(Some(Arc::new(shape)))
    }

    /// Returns `true` for the base record prototype.
    pub fn is_plain(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` if overriding instances replace defaults wholesale.
    pub fn is_opaque(&self) -> bool {
        self.0.as_ref().is_some_and(|shape| !shape.descend)
    }

    /// The shape behind a tagged prototype.
    pub fn shape(&self) -> Option<&Shape> {
        self.0.as_deref()
    }

    /// Identity check: both plain, or both the very same shape.
    pub fn same_identity(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Shape> for Prototype {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}

impl PartialEq for Prototype {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl fmt::Debug for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape() {
            None => write!(f, "Prototype(plain)"),
            Some(shape) => write!(f, "Prototype({:?} {})", shape.kind, shape.name),
        }
    }
}
