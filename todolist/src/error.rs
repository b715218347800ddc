//! Error taxonomy for store operations.
//!
//! Expected, user-correctable rule violations ([`ValidationError`]) are kept
//! apart from unexpected faults ([`StoreError::Internal`]) so the transport
//! layer can report each its own way without losing the underlying cause.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("internal store error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            StoreError::Validation(err) => Some(err),
            StoreError::Internal(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("an item named '{name}' already exists in this list")]
    DuplicateItem { name: String },

    #[error("a list named '{name}' already exists")]
    DuplicateList { name: String },
}
