use crate::model::connection::ConnectionId;
use crate::model::room::{RoomId, SecretKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages a client may send over the socket.
///
/// Every payload field is optional: an absent field decodes to `None` and the
/// room store decides whether that is an error, so a sloppy client can never
/// make the decoder itself fail on a recognized type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    /// Request a fresh room. Requires the static admin credential.
    CreateRoom {
        #[serde(default)]
        admin_password: Option<String>,
    },

    /// Enter an existing room by id and secret key.
    JoinRoom {
        #[serde(default)]
        room_id: Option<RoomId>,
        #[serde(default)]
        key: Option<SecretKey>,
    },

    /// Relay an opaque negotiation payload to one member of the room.
    Signal {
        #[serde(default)]
        room_id: Option<RoomId>,
        #[serde(default)]
        target_id: Option<ConnectionId>,
        #[serde(default)]
        signal_data: Option<Value>,
    },

    /// Explicit departure from a room.
    LeaveRoom {
        #[serde(default)]
        room_id: Option<RoomId>,
    },
}

/// Messages the server pushes to clients.
///
/// Authorization and validation failures go out as a bare `{"error": ...}`
/// object with no type tag, so the union is untagged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ServerMessage {
    Event(ServerEvent),
    Error { error: String },
}

impl ServerMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self::Error { error: text.into() }
    }
}

impl From<ServerEvent> for ServerMessage {
    fn from(event: ServerEvent) -> Self {
        Self::Event(event)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// Reply to a successful `create-room`; `url` is a ready-to-share join
    /// link carrying the room id and key.
    RoomCreated {
        room_id: RoomId,
        secret_key: SecretKey,
        url: String,
    },

    /// A new member entered a room the recipient is in.
    NewPeer { peer_id: ConnectionId },

    /// Negotiation payload relayed verbatim from `peer_id`.
    Signal {
        peer_id: ConnectionId,
        signal_data: Value,
    },

    /// A member left a room the recipient is in.
    PeerLeft { peer_id: ConnectionId },
}
