//! Embedding facade for argmerge.
//!
//! [`Merger`] carries one [`MergeConfig`] and exposes every merge operation
//! with it applied. Applications that do not need configuration can call the
//! free functions in [`argmerge_merge`] directly.

pub mod error;
pub mod merger;

pub use error::{SdkError, SdkResult};
pub use merger::Merger;

// Re-export key types
pub use argmerge_merge::{DefaultLayers, MergeConfig, PropertyPath, SequenceMerge};
pub use argmerge_types::{Callable, Key, Prototype, Record, Shape, ShapeKind, Symbol, Value, ValueKind};
