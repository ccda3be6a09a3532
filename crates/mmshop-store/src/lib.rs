//! # mmshop-store: Item Repository for the Mickey Mouse Shop
//!
//! This crate owns the process-local item collection. Items live for the
//! lifetime of the process; there is no persistence.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mickey Mouse Shop Data Flow                      │
//! │                                                                         │
//! │  HTTP handler (POST /item)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   mmshop-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐        ┌──────────────────────────┐   │   │
//! │  │   │  ItemRepository    │───────►│  mmshop-core validate()  │   │   │
//! │  │   │  Mutex<Vec<Item>>  │        │  (pure, no I/O)          │   │   │
//! │  │   └────────────────────┘        └──────────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust
//! use mmshop_store::{ItemRepository, StoreError};
//!
//! let repo = ItemRepository::seeded();
//! assert_eq!(repo.get(0).unwrap().name, "cheese");
//! assert_eq!(repo.get(99), Err(StoreError::NotFound { id: 99 }));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::item::{ItemRepository, Lookup};
