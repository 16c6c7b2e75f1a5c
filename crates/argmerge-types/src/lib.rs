//! Value model for argmerge.
//!
//! Records, sequences and scalars as the merge engine sees them, plus the
//! prototype identities that tagged records carry through a merge.
//!
//! - [`Value`]: scalar or composite value.
//! - [`Record`]: insertion-ordered properties with a [`Prototype`].
//! - [`Key`], [`Symbol`]: string and symbolic property keys.
//! - [`Prototype`], [`Shape`]: plain or tagged prototype identity.
//! - [`Callable`]: function leaf, compared by identity.

pub mod callable;
pub mod convert;
pub mod error;
pub mod key;
pub mod prototype;
pub mod record;
pub mod value;

pub use callable::Callable;
pub use error::{TypeError, TypeResult};
pub use key::{Key, Symbol};
pub use prototype::{Prototype, Shape, ShapeKind};
pub use record::Record;
pub use value::{Value, ValueKind};
