//! # mmshop-core: Pure Item Logic for the Mickey Mouse Shop
//!
//! This crate holds the item record, the validation engine and the
//! statistics aggregator as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Mickey Mouse Shop Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 mmshop-server (axum, HTTP/JSON)                 │   │
//! │  │      GET /item  ·  POST /item  ·  PUT /item/{id}  ·  /stats     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             mmshop-store (Mutex<Vec<Item>> repository)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ mmshop-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌──────────┐   │   │
//! │  │   │   types   │  │ validation │  │   stats   │  │ fixtures │   │   │
//! │  │   │   Item    │  │  validate  │  │ ItemStats │  │   seed   │   │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └──────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Item` record and candidate mapping
//! - [`validation`] - Coercion and checking of candidates
//! - [`stats`] - Count and value of a snapshot
//! - [`fixtures`] - Seed items
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use mmshop_core::{fixtures::seed_items, ItemStats};
//!
//! let stats = ItemStats::from_items(&seed_items());
//! assert_eq!(stats.items_count, 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixtures;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use stats::ItemStats;
pub use types::*;
