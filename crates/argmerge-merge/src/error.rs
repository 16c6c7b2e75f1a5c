use argmerge_types::ValueKind;

/// Errors that can occur during merge operations.
///
/// Type mismatches between merged positions are never errors: the later (or
/// overriding) value wins. Only violated preconditions are reported.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    /// A property path was required but empty.
    #[error("`property_path` must be passed")]
    MissingPropertyPath,

    /// An input to an N-ary merge was a scalar.
    #[error("merge input {position} is a {kind}, expected a sequence or record")]
    NotComposite { position: usize, kind: ValueKind },

    /// A property path ran into a value that cannot hold properties.
    #[error("property path `{path}` reaches a {kind}, expected a record")]
    NotARecord { path: String, kind: ValueKind },
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
