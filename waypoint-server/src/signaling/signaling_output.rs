use async_trait::async_trait;
use waypoint_core::{ConnectionId, ServerMessage};

/// Outbound half of the transport, as seen by the room store.
///
/// The production implementation is the connection registry; tests substitute
/// a capturing mock.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Push one message to one connection. Sending to a connection that is
    /// already gone is not an error; the caller treats silence as delivery.
    async fn send(&self, target: ConnectionId, message: ServerMessage);
}
