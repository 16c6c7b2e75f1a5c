use std::fmt;
use std::sync::Arc;

/// An opaque reference to a function value.
///
/// Callables are scalars: they never merge, the later one always wins.
/// Equality is identity: two callables are equal only when one is a clone of
/// the other.
#[derive(Clone)]
pub struct Callable {
    id: uuid::Uuid,
    name: Arc<str>,
}

impl Callable {
    /// Create a new callable with a fresh identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            name: Arc::from(name.into()),
        }
    }

    /// The function's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying identity.
    pub fn id(&self) -> &uuid::Uuid {
        &self.id
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Callable {}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({})", self.name)
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_equality() {
        let f = Callable::new("handler");
        let g = Callable::new("handler");
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }

    #[test]
    fn display_includes_name() {
        assert_eq!(Callable::new("run").to_string(), "[Function: run]");
    }
}
