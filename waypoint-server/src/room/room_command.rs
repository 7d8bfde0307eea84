use serde_json::Value;
use waypoint_core::{ConnectionId, RoomId, SecretKey};

/// Commands entering the room store from the session layer.
///
/// One command per protocol message, plus `Disconnect` for transport close.
/// Optional fields stay optional here; the store decides what a missing
/// field means for each operation.
#[derive(Debug)]
pub enum RoomCommand {
    /// `create-room`: caller wants a fresh room and presents the admin
    /// credential.
    CreateRoom {
        requester: ConnectionId,
        admin_password: Option<String>,
    },

    /// `join-room`: caller presents a room id and its secret key.
    JoinRoom {
        connection: ConnectionId,
        room_id: Option<RoomId>,
        key: Option<SecretKey>,
    },

    /// `signal`: relay an opaque negotiation payload to one room member.
    Signal {
        from: ConnectionId,
        room_id: Option<RoomId>,
        target: Option<ConnectionId>,
        payload: Option<Value>,
    },

    /// `leave-room`: explicit departure.
    LeaveRoom {
        connection: ConnectionId,
        room_id: Option<RoomId>,
    },

    /// Transport closed: drop the connection from every room it is in.
    Disconnect { connection: ConnectionId },
}
