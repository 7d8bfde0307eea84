pub mod config;
pub mod error;
pub mod room;
pub mod signaling;

pub use config::ServerConfig;
pub use error::SignalingError;
pub use room::{Room, RoomCommand, RoomStore, RoomStoreHandle};
pub use signaling::{AppState, ConnectionRegistry, Dispatcher, SignalingOutput, ws_handler};
