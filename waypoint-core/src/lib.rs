pub mod model;
pub mod token;

pub use model::{ClientMessage, ConnectionId, RoomId, SecretKey, ServerEvent, ServerMessage};
