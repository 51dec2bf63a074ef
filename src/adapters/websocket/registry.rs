//! Live subscriber registry for alert fan-out.
//!
//! Tracks every currently-open subscriber channel and pushes each published
//! alert to all of them. One instance is owned by the application and shared
//! via `Arc`; there is no ambient global.
//!
//! # Thread Safety
//!
//! The live set sits behind an `RwLock`. Broadcast snapshots the member list
//! under the read lock before sending, so concurrent register/unregister can
//! never invalidate the iteration. A send that fails means the subscriber's
//! receiving task is gone; the subscriber is pruned under the write lock
//! afterwards.

use std::collections::HashMap;

use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::domain::alert::NormalizedAlert;

/// Unique identifier for one subscriber connection.
///
/// Generated server-side when a client completes the subscription handshake.
/// Handles are never reused after removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberId(Uuid);

impl SubscriberId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry of live alert subscribers.
///
/// Delivery is best-effort and at-most-once per subscriber: there is no
/// persistence or replay for channels that join late or drop mid-broadcast,
/// and one subscriber's failure never blocks delivery to the rest.
pub struct ConnectionRegistry {
    subscribers: RwLock<HashMap<SubscriberId, mpsc::UnboundedSender<NormalizedAlert>>>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Adds a new subscriber to the live set.
    ///
    /// Returns the subscriber's handle plus the receiving end of its
    /// channel. The connection task owns the receiver; dropping it is what
    /// turns later sends into disconnect signals.
    pub async fn register(
        &self,
    ) -> (SubscriberId, mpsc::UnboundedReceiver<NormalizedAlert>) {
        let id = SubscriberId::new();
        let (tx, rx) = mpsc::unbounded_channel();

        self.subscribers.write().await.insert(id.clone(), tx);
        tracing::debug!(subscriber_id = %id, "subscriber registered");

        (id, rx)
    }

    /// Removes a subscriber from the live set.
    ///
    /// Idempotent: removing an already-absent subscriber is a no-op.
    pub async fn unregister(&self, id: &SubscriberId) {
        if self.subscribers.write().await.remove(id).is_some() {
            tracing::debug!(subscriber_id = %id, "subscriber unregistered");
        }
    }

    /// Delivers an alert to every subscriber currently in the live set.
    ///
    /// A failed send is treated as an implicit disconnect: the subscriber
    /// is removed and the failure is never surfaced to the publisher.
    pub async fn broadcast(&self, alert: &NormalizedAlert) {
        let snapshot: Vec<(SubscriberId, mpsc::UnboundedSender<NormalizedAlert>)> = {
            let subscribers = self.subscribers.read().await;
            subscribers
                .iter()
                .map(|(id, tx)| (id.clone(), tx.clone()))
                .collect()
        };

        let mut stale = Vec::new();
        for (id, tx) in snapshot {
            if tx.send(alert.clone()).is_err() {
                stale.push(id);
            }
        }

        if !stale.is_empty() {
            let mut subscribers = self.subscribers.write().await;
            for id in &stale {
                subscribers.remove(id);
            }
            tracing::debug!(
                pruned = stale.len(),
                "dropped disconnected subscribers during broadcast"
            );
        }
    }

    /// Number of subscribers currently in the live set.
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::{Location, StoredAlert};
    use crate::domain::foundation::AlertId;
    use std::sync::Arc;

    fn test_alert(note: &str) -> NormalizedAlert {
        NormalizedAlert::from_stored(StoredAlert {
            id: AlertId::new(),
            location: Some(Location::lat_lng(Some(19.4), Some(-99.1))),
            latitude: None,
            longitude: None,
            diagnosis_note: Some(note.to_string()),
            recorded_at: Some("2026-08-23T10:00:00+00:00".to_string()),
        })
    }

    #[tokio::test]
    async fn broadcast_reaches_every_registered_subscriber() {
        let registry = ConnectionRegistry::new();

        let (_id1, mut rx1) = registry.register().await;
        let (_id2, mut rx2) = registry.register().await;
        let (_id3, mut rx3) = registry.register().await;

        let alert = test_alert("cardiac arrest");
        registry.broadcast(&alert).await;

        assert_eq!(rx1.recv().await.unwrap(), alert);
        assert_eq!(rx2.recv().await.unwrap(), alert);
        assert_eq!(rx3.recv().await.unwrap(), alert);
    }

    #[tokio::test]
    async fn broadcast_delivers_exactly_once_per_subscriber() {
        let registry = ConnectionRegistry::new();
        let (_id, mut rx) = registry.register().await;

        registry.broadcast(&test_alert("one")).await;

        assert!(rx.recv().await.is_some());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn failed_send_removes_subscriber_without_blocking_others() {
        let registry = ConnectionRegistry::new();

        let (_broken, rx_broken) = registry.register().await;
        let (_healthy, mut rx_healthy) = registry.register().await;
        drop(rx_broken);

        let alert = test_alert("fracture");
        registry.broadcast(&alert).await;

        assert_eq!(rx_healthy.recv().await.unwrap(), alert);
        assert_eq!(registry.subscriber_count().await, 1);
    }

    #[tokio::test]
    async fn unregister_is_idempotent() {
        let registry = ConnectionRegistry::new();
        let (id, _rx) = registry.register().await;

        registry.unregister(&id).await;
        registry.unregister(&id).await;

        assert_eq!(registry.subscriber_count().await, 0);
    }

    #[tokio::test]
    async fn unregister_unknown_subscriber_is_noop() {
        let registry = ConnectionRegistry::new();
        let (id, _rx) = registry.register().await;
        drop(_rx);
        registry.unregister(&id).await;

        // Second removal of a long-gone handle must not error or panic.
        registry.unregister(&id).await;
    }

    #[tokio::test]
    async fn unregistered_subscriber_receives_nothing_further() {
        let registry = ConnectionRegistry::new();
        let (id, mut rx) = registry.register().await;

        registry.unregister(&id).await;
        registry.broadcast(&test_alert("missed")).await;

        // Sender side was dropped on unregister, so the channel is closed.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn broadcast_with_no_subscribers_is_noop() {
        let registry = ConnectionRegistry::new();
        registry.broadcast(&test_alert("nobody listening")).await;
        assert_eq!(registry.subscriber_count().await, 0);
    }

    #[tokio::test]
    async fn concurrent_registration_during_broadcasts_is_safe() {
        let registry = Arc::new(ConnectionRegistry::new());

        let broadcaster = {
            let registry = registry.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    registry.broadcast(&test_alert("burst")).await;
                }
            })
        };

        let mut receivers = Vec::new();
        for _ in 0..20 {
            let (_id, rx) = registry.register().await;
            receivers.push(rx);
        }

        broadcaster.await.unwrap();

        // A subscriber that joined mid-burst may have missed earlier
        // broadcasts, but must receive everything published after it.
        let (_late_id, mut late_rx) = registry.register().await;
        let final_alert = test_alert("after the burst");
        registry.broadcast(&final_alert).await;
        assert_eq!(late_rx.recv().await.unwrap(), final_alert);
    }
}
