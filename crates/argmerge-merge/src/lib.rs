//! Merge engine for argmerge.
//!
//! Combines composite values (records and sequences) under deterministic,
//! recursive policies:
//!
//! - [`merge_deep`]: N-ary structural merge; sequences concatenate, records
//!   recurse, anything else is replaced by the later value.
//! - [`deep_merge_parameter`] / [`DefaultLayers`]: merge a call's argument
//!   list against ordered default argument lists, position by position,
//!   preserving the prototype identity of tagged instances.
//! - [`merge_default_parameter`]: one-level default seeding of an in-flight
//!   argument list, in place.
//! - [`merge_own_nested_property`] / [`merge_nonexistent_properties`]:
//!   record-shaping helpers that write into their target, as does
//!   [`shallow_merge_nonexisting_property_only`].
//!
//! Every other operation reads its inputs and returns a new value.
//!
//! # Precedence
//!
//! In argument-list merges the target list always wins, and among default
//! lists the earliest one wins. Defaults only seed fields nobody earlier set.

pub mod arguments;
pub mod config;
pub mod defaults;
pub mod element;
pub mod error;
pub mod property;
pub mod sequence;
pub mod structural;

pub use arguments::{
    deep_merge_parameter, deep_merge_parameter_with, merge_argument_list,
    merge_argument_list_with, DefaultLayers,
};
pub use config::{MergeConfig, SequenceMerge};
pub use defaults::{
    merge_default_parameter, remove_undefined_from_object, shallow_merge,
    shallow_merge_nonexisting_property_only,
};
pub use element::{merge_element, merge_element_with};
pub use error::{MergeError, MergeResult};
pub use property::{merge_nonexistent_properties, merge_own_nested_property, PropertyPath};
pub use sequence::{combine_sequences, combine_sequences_with, merge_positional};
pub use structural::{merge, merge_deep, merge_records};

use argmerge_types::Value;

/// Reads of missing positions and keys.
pub(crate) static UNDEFINED: Value = Value::Undefined;
