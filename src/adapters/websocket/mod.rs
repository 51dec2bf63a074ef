//! WebSocket adapter - live alert subscription endpoint and fan-out registry.
//!
//! The connection registry is the one shared mutable resource in the core:
//! it owns every live subscriber channel and delivers each published alert
//! to all of them, best-effort per subscriber.

pub mod handler;
pub mod registry;

pub use handler::{websocket_routes, ws_handler, WsState};
pub use registry::{ConnectionRegistry, SubscriberId};
