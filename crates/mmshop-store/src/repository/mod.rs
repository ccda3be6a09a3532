//! # Repository Module
//!
//! In-memory repository implementations for the Mickey Mouse shop.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  state.items.create(candidate)                                 │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── list_all(&self)                                                   │
//! │  ├── get(&self, id) / get_by_text(&self, raw)                          │
//! │  ├── lookup(&self, id) → Found | NotFound | Error                      │
//! │  ├── create(&self, candidate)                                          │
//! │  ├── update(&self, id, patch)                                          │
//! │  └── stats(&self)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Mutex<Vec<Item>>                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Item CRUD and statistics

pub mod item;
