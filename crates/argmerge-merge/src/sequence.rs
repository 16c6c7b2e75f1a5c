//! Sequence merge policies used below the structural merge.
//!
//! Structural merge concatenates sequences. Argument lists instead align
//! their elements by position ([`merge_positional`]). [`combine_sequences`]
//! is a third, separate policy: it fills gaps, merges composite items in
//! place and appends scalars the default does not already hold.

use argmerge_types::Value;

use crate::config::MergeConfig;
use crate::element::merge_element_with;
use crate::UNDEFINED;

/// Element-wise merge of two sequences up to the longer length.
///
/// A position missing from `overriding` keeps the default element; a
/// position missing from `default` takes the overriding element unchanged.
pub fn merge_positional(default: &[Value], overriding: &[Value], config: &MergeConfig) -> Vec<Value> {
    let len = default.len().max(overriding.len());
    (0..len)
        .map(|index| {
            let base = default.get(index).unwrap_or(&UNDEFINED);
            let top = overriding.get(index).unwrap_or(&UNDEFINED);
            merge_element_with(base, top, config)
        })
        .collect()
}

/// Combine two sequences with the default configuration.
pub fn combine_sequences(default: &[Value], overriding: &[Value]) -> Vec<Value> {
    combine_sequences_with(default, overriding, &MergeConfig::default())
}

/// Combine `overriding` into a copy of `default`.
///
/// For each overriding item at `index`:
/// - the destination slot is missing or undefined: the item fills it;
/// - the item is composite: it is element-merged with `default[index]`;
/// - the item is a scalar not found anywhere in `default`: it is appended.
///
/// A scalar already present in `default` is dropped, so scalars at an
/// occupied position never replace the default.
pub fn combine_sequences_with(default: &[Value], overriding: &[Value], config: &MergeConfig) -> Vec<Value> {
    let mut destination = default.to_vec();
    for (index, item) in overriding.iter().enumerate() {
        match destination.get(index) {
            None | Some(Value::Undefined) => place(&mut destination, index, item.clone()),
            Some(_) if item.is_composite() => {
                let base = default.get(index).unwrap_or(&UNDEFINED);
                destination[index] = merge_element_with(base, item, config);
            }
            Some(_) => {
                if !default.contains(item) {
                    destination.push(item.clone());
                }
            }
        }
    }
    destination
}

fn place(destination: &mut Vec<Value>, index: usize, item: Value) {
    if index < destination.len() {
        destination[index] = item;
    } else {
        destination.resize(index, Value::Undefined);
        destination.push(item);
    }
}
