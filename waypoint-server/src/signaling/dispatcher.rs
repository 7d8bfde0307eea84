use crate::error::SignalingError;
use crate::room::{RoomCommand, RoomStoreHandle};
use serde_json::Value;
use tracing::{error, warn};
use waypoint_core::{ClientMessage, ConnectionId};

const KNOWN_TYPES: [&str; 4] = ["create-room", "join-room", "signal", "leave-room"];

/// Stateless router from raw inbound text to exactly one room store command.
///
/// Malformed input and unrecognized types are logged and dropped; the sender
/// is never told. Validation failures inside recognized operations are the
/// room store's business.
#[derive(Clone)]
pub struct Dispatcher {
    store: RoomStoreHandle,
}

impl Dispatcher {
    pub fn new(store: RoomStoreHandle) -> Self {
        Self { store }
    }

    pub async fn dispatch(&self, from: ConnectionId, raw: &str) {
        match decode(raw) {
            Ok(message) => self.store.submit(command_for(from, message)).await,
            Err(e @ SignalingError::UnknownMessageType(_)) => {
                warn!(connection = %from, "{}", e);
            }
            Err(e) => {
                error!(connection = %from, "{}", e);
            }
        }
    }

    /// Transport close is not a wire message but flows through the same
    /// channel, so room removal is ordered after the connection's last
    /// dispatched message.
    pub async fn connection_closed(&self, connection: ConnectionId) {
        self.store.submit(RoomCommand::Disconnect { connection }).await;
    }
}

/// Two-phase decode keeps "no type field" apart from "unknown type" and from
/// field-shape errors on a recognized type.
fn decode(raw: &str) -> Result<ClientMessage, SignalingError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| SignalingError::MalformedMessage(e.to_string()))?;

    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SignalingError::MalformedMessage("message type is missing".into()))?;

    if !KNOWN_TYPES.contains(&kind) {
        return Err(SignalingError::UnknownMessageType(kind.to_string()));
    }

    serde_json::from_value(value).map_err(|e| SignalingError::MalformedMessage(e.to_string()))
}

fn command_for(from: ConnectionId, message: ClientMessage) -> RoomCommand {
    match message {
        ClientMessage::CreateRoom { admin_password } => RoomCommand::CreateRoom {
            requester: from,
            admin_password,
        },
        ClientMessage::JoinRoom { room_id, key } => RoomCommand::JoinRoom {
            connection: from,
            room_id,
            key,
        },
        ClientMessage::Signal {
            room_id,
            target_id,
            signal_data,
        } => RoomCommand::Signal {
            from,
            room_id,
            target: target_id,
            payload: signal_data,
        },
        ClientMessage::LeaveRoom { room_id } => RoomCommand::LeaveRoom {
            connection: from,
            room_id,
        },
    }
}
