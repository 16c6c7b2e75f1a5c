use thiserror::Error;

use crate::value::ValueKind;

/// Errors produced by value conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("{0} has no JSON representation")]
    Unrepresentable(ValueKind),

    #[error("symbol key {0} has no JSON representation")]
    SymbolKey(String),

    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for value conversions.
pub type TypeResult<T> = Result<T, TypeError>;
