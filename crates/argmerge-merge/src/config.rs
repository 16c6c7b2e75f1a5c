use serde::{Deserialize, Serialize};

/// How sequences nested inside argument lists are merged.
///
/// The top level of an argument list is always merged by position; this only
/// selects the policy for sequences found below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceMerge {
    /// Index-by-index element merge, extended to the longer length.
    #[default]
    Positional,
    /// Fill missing positions, merge composite items, append scalars the
    /// default sequence does not already contain.
    Combine,
}

/// Configuration for prototype-preserving element merges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Policy for sequences nested below the top level of an argument list.
    pub nested_sequences: SequenceMerge,
    /// When `true`, an overriding instance of an opaque shape replaces the
    /// default wholesale. When `false`, it is merged like any other record
    /// override. Opaque defaults are merged with record overrides either way.
    pub respect_opaque: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            nested_sequences: SequenceMerge::Positional,
            respect_opaque: true,
        }
    }
}

impl MergeConfig {
    /// Configuration using [`SequenceMerge::Combine`] for nested sequences.
    pub fn combine() -> Self {
        Self {
            nested_sequences: SequenceMerge::Combine,
            ..Default::default()
        }
    }
}
