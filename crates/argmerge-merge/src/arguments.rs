//! Argument-list merge.
//!
//! An argument list is merged against a default list by position, never by
//! concatenation. Several default lists form an ordered stack of
//! [`DefaultLayers`]: the target always wins, and among the defaults the
//! earliest layer wins, because each layer is folded in as the *default*
//! side of the accumulated result.

use argmerge_types::Value;
use tracing::debug;

use crate::config::MergeConfig;
use crate::sequence::merge_positional;

/// Merge `overriding` on top of `defaults`, position by position.
pub fn merge_argument_list(overriding: &[Value], defaults: &[Value]) -> Vec<Value> {
    merge_argument_list_with(overriding, defaults, &MergeConfig::default())
}

/// Merge `overriding` on top of `defaults` with an explicit configuration.
///
/// The result is as long as the longer list. Each position is an element
/// merge of `defaults[i]` (base) and `overriding[i]` (winner).
pub fn merge_argument_list_with(
    overriding: &[Value],
    defaults: &[Value],
    config: &MergeConfig,
) -> Vec<Value> {
    merge_positional(defaults, overriding, config)
}

/// Ordered default argument lists, highest priority first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultLayers {
    layers: Vec<Vec<Value>>,
}

impl DefaultLayers {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a default list with lower priority than every list already
    /// pushed.
    pub fn push(&mut self, defaults: Vec<Value>) -> &mut Self {
        self.layers.push(defaults);
        self
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if no layers were pushed.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The layers, highest priority first.
    pub fn layers(&self) -> &[Vec<Value>] {
        &self.layers
    }

    /// Resolve `target` against every layer with the default configuration.
    pub fn apply(&self, target: &[Value]) -> Vec<Value> {
        self.apply_with(target, &MergeConfig::default())
    }

    /// Resolve `target` against every layer.
    ///
    /// Fields set by `target` are never replaced. A field left unset by the
    /// target and by every earlier layer is seeded from the first layer that
    /// defines it.
    pub fn apply_with(&self, target: &[Value], config: &MergeConfig) -> Vec<Value> {
        debug!(layers = self.layers.len(), arguments = target.len(), "merging argument defaults");
        self.layers
            .iter()
            .fold(target.to_vec(), |merged, defaults| {
                merge_argument_list_with(&merged, defaults, config)
            })
    }
}

impl FromIterator<Vec<Value>> for DefaultLayers {
    fn from_iter<I: IntoIterator<Item = Vec<Value>>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

/// Merge `target` against each default list in turn, earliest first.
pub fn deep_merge_parameter<L: AsRef<[Value]>>(target: &[Value], default_lists: &[L]) -> Vec<Value> {
    deep_merge_parameter_with(target, default_lists, &MergeConfig::default())
}

/// [`deep_merge_parameter`] with an explicit configuration.
pub fn deep_merge_parameter_with<L: AsRef<[Value]>>(
    target: &[Value],
    default_lists: &[L],
    config: &MergeConfig,
) -> Vec<Value> {
    default_lists
        .iter()
        .map(|list| list.as_ref().to_vec())
        .collect::<DefaultLayers>()
        .apply_with(target, config)
}
