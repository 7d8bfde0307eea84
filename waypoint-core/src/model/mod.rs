mod connection;
mod message;
mod room;

pub use connection::ConnectionId;
pub use message::{ClientMessage, ServerEvent, ServerMessage};
pub use room::{RoomId, SecretKey};
