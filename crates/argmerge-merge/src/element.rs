//! Prototype-preserving element merge.
//!
//! Merges one slot of a default value with the value overriding it. Rules,
//! first match wins:
//!
//! 1. An undefined override keeps the default.
//! 2. Two plain records merge key by key, two sequences merge per
//!    [`SequenceMerge`](crate::SequenceMerge); children use these same rules.
//! 3. An opaque override is taken wholesale.
//! 4. A tagged default merged with a record override keeps the default's
//!    prototype, with the override's properties laid on top.
//! 5. Otherwise the override wins.

use argmerge_types::{Record, Value};
use tracing::trace;

use crate::config::{MergeConfig, SequenceMerge};
use crate::sequence::{combine_sequences_with, merge_positional};

/// Merge `overriding` on top of `default` with the default configuration.
pub fn merge_element(default: &Value, overriding: &Value) -> Value {
    merge_element_with(default, overriding, &MergeConfig::default())
}

/// Merge `overriding` on top of `default`. Neither input is modified.
pub fn merge_element_with(default: &Value, overriding: &Value, config: &MergeConfig) -> Value {
    match (default, overriding) {
        (_, Value::Undefined) => default.clone(),
        (Value::Record(base), Value::Record(top)) if base.is_plain() && top.is_plain() => {
            Value::Record(overlay(base, top, config))
        }
        (Value::Array(base), Value::Array(top)) => Value::Array(match config.nested_sequences {
            SequenceMerge::Positional => merge_positional(base, top, config),
            SequenceMerge::Combine => combine_sequences_with(base, top, config),
        }),
        (_, Value::Record(top)) if config.respect_opaque && top.is_opaque() => {
            trace!(prototype = ?top.prototype(), "opaque override taken wholesale");
            overriding.clone()
        }
        (Value::Record(base), Value::Record(top)) if !base.is_plain() => {
            trace!(prototype = ?base.prototype(), "default prototype preserved");
            Value::Record(overlay(base, top, config))
        }
        _ => overriding.clone(),
    }
}

/// Shallow clone of `base` (prototype included) with `top`'s own properties
/// merged on top.
fn overlay(base: &Record, top: &Record, config: &MergeConfig) -> Record {
    let mut merged = base.clone();
    for (key, incoming) in top {
        let value = match merged.get(key) {
            Some(existing) => merge_element_with(existing, incoming, config),
            None => incoming.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}
