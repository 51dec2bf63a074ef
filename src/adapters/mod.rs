//! Adapters - Implementations of port interfaces and the outer surfaces.
//!
//! - `postgres` - sqlx-backed implementations of the storage ports
//! - `http` - REST API (axum)
//! - `websocket` - live alert subscription endpoint and fan-out registry

pub mod http;
pub mod postgres;
pub mod websocket;
