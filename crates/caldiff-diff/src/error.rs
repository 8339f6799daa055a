//! Error types for the diff crate.

use caldiff_types::QualifiedName;

/// Errors that abort a diff call. No partial change list is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// Two elements of incompatible kinds were compared (a property against a
    /// component).
    #[error("structure mismatch: cannot compare {left} with {right}")]
    StructureMismatch { left: String, right: String },

    /// A leaf value or parameter could not be ordered.
    #[error("invalid leaf {name}: {reason}")]
    InvalidLeaf { name: QualifiedName, reason: String },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
