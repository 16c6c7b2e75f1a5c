//! Structural deep merge.
//!
//! For each own key of the source: two sequences concatenate, two records
//! merge recursively, and in every other case the source value replaces the
//! destination value. Keys keep the destination's order; keys new to the
//! source are appended in source order.

use argmerge_types::{Record, Value};
use tracing::debug;

use crate::error::{MergeError, MergeResult};

/// Merge `source` into the accumulator `destination` and return it.
///
/// `source` is only read. Values present on one side only are carried over
/// as they are.
pub fn merge(mut destination: Record, source: &Record) -> Record {
    for (key, incoming) in source {
        if let Some(existing) = destination.get_mut(key) {
            combine(existing, incoming);
        } else {
            destination.insert(key.clone(), incoming.clone());
        }
    }
    destination
}

fn combine(existing: &mut Value, incoming: &Value) {
    match (existing, incoming) {
        (Value::Array(items), Value::Array(more)) => items.extend(more.iter().cloned()),
        (Value::Record(record), Value::Record(more)) => *record = merge_records(record, more),
        (slot, _) => *slot = incoming.clone(),
    }
}

/// Merge two records into a new plain record.
pub fn merge_records(earlier: &Record, later: &Record) -> Record {
    merge(merge(Record::new(), earlier), later)
}

/// Fold [`merge`] over `values` left to right, starting from a fresh empty
/// record.
///
/// Sequences are read as records keyed by their indices. Scalars are
/// rejected.
pub fn merge_deep(values: &[Value]) -> MergeResult<Value> {
    debug!(inputs = values.len(), "deep merge");
    values
        .iter()
        .enumerate()
        .try_fold(Record::new(), |accumulator, (position, value)| match value {
            Value::Record(record) => Ok(merge(accumulator, record)),
            Value::Array(items) => Ok(merge(accumulator, &Record::from_sequence(items))),
            other => Err(MergeError::NotComposite {
                position,
                kind: other.kind(),
            }),
        })
        .map(Value::Record)
}
