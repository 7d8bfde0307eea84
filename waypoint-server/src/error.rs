use thiserror::Error;
use waypoint_core::ConnectionId;

/// Everything that can go wrong while handling one inbound message.
///
/// None of these are fatal; each is scoped to the offending message or
/// connection. The `Display` text of the reportable variants is exactly what
/// goes back to the client in an `{"error": ...}` reply.
#[derive(Debug, Error, PartialEq)]
pub enum SignalingError {
    /// Bad admin credential on `create-room`. Reported to the sender.
    #[error("Invalid admin password")]
    Unauthorized,

    /// `join-room` without a roomId or key. Reported to the sender.
    #[error("roomId and key are required")]
    MissingParameters,

    /// Reported to the sender.
    #[error("Room does not exist")]
    RoomNotFound,

    /// Reported to the sender.
    #[error("Invalid room key")]
    InvalidKey,

    /// `signal` missing its roomId, targetId or payload. Logged only.
    #[error("incomplete signaling data")]
    InvalidSignalingData,

    /// `signal` addressed to a connection that is not in the room. Logged only.
    #[error("target {0} is not a member of the room")]
    TargetNotFound(ConnectionId),

    /// Undecodable message or missing `type` field. Logged only.
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    /// Valid JSON with a `type` nobody handles. Logged only.
    #[error("unknown message type {0:?}")]
    UnknownMessageType(String),
}

impl SignalingError {
    /// Whether this failure is echoed back to the offending sender.
    /// Signaling and decode failures stay silent towards the client.
    pub fn reported_to_sender(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::MissingParameters | Self::RoomNotFound | Self::InvalidKey
        )
    }
}
