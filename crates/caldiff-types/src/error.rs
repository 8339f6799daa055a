use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid qualified name: {0:?}")]
    InvalidQualifiedName(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
