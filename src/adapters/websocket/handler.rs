//! WebSocket upgrade handler for the live alert subscription endpoint.
//!
//! Per-connection lifecycle (CONNECTING → OPEN → CLOSED):
//! 1. Accept the upgrade and register with the connection registry
//! 2. Forward registry pushes to the peer while blocking on peer reads
//!    for liveness only (client payloads are ignored)
//! 3. Unregister on disconnect or error, then discard the handle

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};

use super::registry::ConnectionRegistry;

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WsState {
    /// Shared registry of live subscribers.
    pub registry: Arc<ConnectionRegistry>,
}

impl WsState {
    /// Creates a new WebSocket state.
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }
}

/// Handle WebSocket upgrade requests for alert subscriptions.
///
/// Route: `GET /ws/alerts`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<WsState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state.registry))
}

/// Handle an established subscriber connection.
///
/// Runs for the lifetime of the connection. The registry pushes alerts into
/// the subscriber's channel asynchronously; this task only forwards them to
/// the socket and watches the peer for disconnect.
async fn handle_socket(socket: WebSocket, registry: Arc<ConnectionRegistry>) {
    let (mut sender, mut receiver) = socket.split();

    let (subscriber_id, mut alerts_rx) = registry.register().await;
    tracing::debug!(subscriber_id = %subscriber_id, "alert subscriber connected");

    // Forward broadcast alerts to the peer.
    let send_id = subscriber_id.clone();
    let mut send_task = tokio::spawn(async move {
        while let Some(alert) = alerts_rx.recv().await {
            let json = match serde_json::to_string(&alert) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!(subscriber_id = %send_id, "alert serialization failed: {}", e);
                    continue;
                }
            };
            if let Err(e) = sender.send(Message::Text(json)).await {
                tracing::debug!(
                    subscriber_id = %send_id,
                    "send error, closing connection: {}",
                    e
                );
                break;
            }
        }
    });

    // Block on peer reads for liveness. Upstream payloads carry no meaning.
    let recv_id = subscriber_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Text(_)) | Ok(Message::Binary(_)) => {}
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
                Ok(Message::Close(_)) => {
                    tracing::debug!(subscriber_id = %recv_id, "peer sent close frame");
                    break;
                }
                Err(e) => {
                    tracing::debug!(subscriber_id = %recv_id, "receive error: {}", e);
                    break;
                }
            }
        }
    });

    // Either side finishing means the connection is done.
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    // Both exit paths deregister before the connection task ends.
    registry.unregister(&subscriber_id).await;
    tracing::debug!(subscriber_id = %subscriber_id, "alert subscriber disconnected");
}

/// Create the axum router for the subscription endpoint.
pub fn websocket_routes(state: WsState) -> Router {
    Router::new()
        .route("/ws/alerts", get(ws_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_state_shares_registry() {
        let registry = Arc::new(ConnectionRegistry::new());
        let state = WsState::new(registry.clone());
        assert!(Arc::ptr_eq(&state.registry, &registry));
    }

    #[test]
    fn websocket_routes_compiles() {
        let state = WsState::new(Arc::new(ConnectionRegistry::new()));
        let _router = websocket_routes(state);
    }
}
