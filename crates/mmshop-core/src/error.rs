//! # Error Types
//!
//! Domain-specific error types for mmshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mmshop-core errors (this file)                                        │
//! │  └── ValidationError  - Candidate validation failures                  │
//! │                                                                         │
//! │  mmshop-store errors (separate crate)                                  │
//! │  └── StoreError       - NotFound, InvalidId, Conflict, Validation      │
//! │                                                                         │
//! │  HTTP errors (in server)                                               │
//! │  └── ApiError         - Status code + JSON body                        │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → HTTP response         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the offending field
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Candidate validation errors.
///
/// Produced by [`crate::validation::validate`] and by the repository when a
/// patch is rejected before it is merged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent (or empty after coercion).
    #[error("{field} field in the entity must be defined")]
    MissingField { field: String },

    /// A field is present but cannot be coerced to its canonical type.
    #[error("{field} field in the entity must be {expected}")]
    InvalidType { field: String, expected: String },

    /// An update was submitted without any fields.
    #[error("update payload contains no fields")]
    EmptyPatch,
}

impl ValidationError {
    /// Creates a MissingField error for the given field.
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    /// Creates an InvalidType error for the given field and expected type.
    pub fn invalid(field: impl Into<String>, expected: impl Into<String>) -> Self {
        ValidationError::InvalidType {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Returns the offending field name, if the error carries one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::MissingField { field } | ValidationError::InvalidType { field, .. } => {
                Some(field)
            }
            ValidationError::EmptyPatch => None,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
