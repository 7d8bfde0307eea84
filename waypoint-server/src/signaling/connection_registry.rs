use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tracing::{error, warn};
use waypoint_core::{ConnectionId, ServerMessage};

struct RegistryInner {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
    next_id: AtomicU64,
}

/// Live transport handles, keyed by connection identifier.
///
/// Rooms never hold these senders. They reference members by identifier and
/// go through [`SignalingOutput`], so a closed connection can never dangle
/// inside a room; at worst a send finds the entry already gone.
#[derive(Clone)]
pub struct ConnectionRegistry {
    inner: Arc<RegistryInner>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                connections: DashMap::new(),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Next connection identifier. Identifiers are never reused within a
    /// process.
    pub fn allocate_id(&self) -> ConnectionId {
        ConnectionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Store the outbound handle for `id`. Re-registering a live id would be
    /// a bug in the session layer; the old handle is silently replaced.
    pub fn register(&self, id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(id, tx);
    }

    /// Drop the handle for `id`. No-op if it is already gone.
    pub fn unregister(&self, id: &ConnectionId) {
        self.inner.connections.remove(id);
    }

    pub fn is_registered(&self, id: &ConnectionId) -> bool {
        self.inner.connections.contains_key(id)
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalingOutput for ConnectionRegistry {
    async fn send(&self, target: ConnectionId, message: ServerMessage) {
        let Some(conn) = self.inner.connections.get(&target) else {
            warn!("Attempted to send to disconnected connection {}", target);
            return;
        };

        match serde_json::to_string(&message) {
            Ok(json) => {
                if let Err(e) = conn.send(Message::Text(json.into())) {
                    error!("Failed to queue message for {}: {:?}", target, e);
                }
            }
            Err(e) => error!("Failed to serialize server message: {}", e),
        }
    }
}
