//! # mmshop-server
//!
//! HTTP/JSON API for the Mickey Mouse shop, plus the demo client.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           mmshop-server                                 │
//! │                                                                         │
//! │   main.rs (mmshop)            bin/demo.rs (mmshop-demo)                 │
//! │        │                               │                                │
//! │        ▼                               ▼                                │
//! │   config ──► server ──► api       demo (reqwest)                        │
//! │                          │                                              │
//! │                          ▼                                              │
//! │              mmshop-store::ItemRepository                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod server;

pub use api::{create_router, AppState, SharedState};
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorCode, ServerError};
