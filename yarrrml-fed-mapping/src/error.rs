//! Mapping analysis error types

use thiserror::Error;

/// Errors raised while building a mapping descriptor
///
/// A malformed rule aborts the whole analysis; a partial descriptor would
/// silently corrupt downstream comparison and join inference.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A mapping rule declares no subject template
    #[error("mapping rule '{rule}' has no subject")]
    MissingSubject { rule: String },

    /// A mapping rule declares no predicate-object section
    #[error("mapping rule '{rule}' has no predicate-object list")]
    MissingPredicateObjects { rule: String },

    /// A predicate-object entry that fits neither accepted shape
    #[error("invalid predicate-object entry in rule '{rule}': {message}")]
    InvalidPredicateObject { rule: String, message: String },
}

/// Result type for mapping analysis operations
pub type MappingResult<T> = Result<T, MappingError>;
