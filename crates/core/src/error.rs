//! Store error model.

use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Every variant is deterministic: validation happens before any mutation,
/// so a returned error always means the Document was left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input failed validation (empty required field, non-positive quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced product id does not exist in the Document.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// A sale would drive the product's stock below zero.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// An identifier string failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The persistence backend failed (IO or serialization).
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn product_not_found(id: impl ToString) -> Self {
        Self::ProductNotFound(id.to_string())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
