//! # Store Error Types
//!
//! Error types for repository operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (mmshop-core)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds NotFound / InvalidId / Conflict       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in server) ← Status code + JSON body                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mmshop_core::ValidationError;
use thiserror::Error;

/// Repository operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item has the requested id.
    #[error("Item could not be found: {id}")]
    NotFound { id: i64 },

    /// An id supplied as text (path segment or probe value) is not an integer.
    #[error("Item ID not valid: {raw}")]
    InvalidId { raw: String },

    /// `create` was given an id that is already taken.
    #[error("Item with id \"{id}\" exists already")]
    Conflict { id: i64 },

    /// No id is left above the current maximum `{max}`.
    #[error("No item ID left after {max}")]
    IdsExhausted { max: i64 },

    /// The candidate or merged update failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given id.
    pub fn not_found(id: i64) -> Self {
        StoreError::NotFound { id }
    }

    /// Creates an InvalidId error from the rejected text.
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        StoreError::InvalidId { raw: raw.into() }
    }

    /// Creates a Conflict error for a given id.
    pub fn conflict(id: i64) -> Self {
        StoreError::Conflict { id }
    }
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::not_found(99).to_string(), "Item could not be found: 99");
        assert_eq!(StoreError::invalid_id("abc").to_string(), "Item ID not valid: abc");
        assert_eq!(
            StoreError::conflict(0).to_string(),
            "Item with id \"0\" exists already"
        );
        assert_eq!(
            StoreError::IdsExhausted { max: i64::MAX }.to_string(),
            format!("No item ID left after {}", i64::MAX)
        );
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let err: StoreError = ValidationError::EmptyPatch.into();
        assert!(matches!(err, StoreError::Validation(ValidationError::EmptyPatch)));
    }
}
