//! Authentication Service Library
//!
//! Authentication front end for a single logged-in principal. On top of
//! plain credential checking it layers a runtime-adjustable artificial
//! latency injector per operation kind (used to simulate downstream
//! slowness) and prometheus observability for every operation.
//!
//! # Architecture
//!
//! The service follows the Handler -> Service -> Repository pattern:
//!
//! ```text
//! routes/mod.rs -> handlers/*.rs -> services/*.rs -> repositories/*.rs
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `models` - Data models
//! - `observability` - Metrics and log-privacy helpers
//! - `repositories` - In-memory client store
//! - `routes` - Axum router setup
//! - `services` - Session, timeout, credential, and gateway logic

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod routes;
pub mod services;
