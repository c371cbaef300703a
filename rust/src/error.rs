//! Error handling and result types for BTree operations.
//!
//! Lookups and the lenient mutators never fail: a missing key is reported as
//! `None` or `false`. Errors are reserved for construction and for the strict
//! `try_*` mutators.

use thiserror::Error;

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BTreeError {
    /// Minimum degree below what the tree supports.
    #[error("Invalid degree: {degree} (minimum required: {min})")]
    InvalidDegree { degree: usize, min: usize },
    /// Minimum degree above what a single node can be sized for.
    #[error("Degree too large: {degree} (maximum allowed: {max})")]
    DegreeTooLarge { degree: usize, max: usize },
    /// Key not found in the tree.
    #[error("Key not found in tree")]
    KeyNotFound,
    /// Key already present in the tree.
    #[error("Key already present in tree")]
    DuplicateKey,
    /// Internal data structure integrity violation.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),
}

impl BTreeError {
    /// Create an InvalidDegree error for `degree`.
    pub fn invalid_degree(degree: usize, min: usize) -> Self {
        Self::InvalidDegree { degree, min }
    }

    /// Create a DegreeTooLarge error for `degree`.
    pub fn degree_too_large(degree: usize, max: usize) -> Self {
        Self::DegreeTooLarge { degree, max }
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error is a degree error
    pub fn is_degree_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDegree { .. } | Self::DegreeTooLarge { .. }
        )
    }
}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;
