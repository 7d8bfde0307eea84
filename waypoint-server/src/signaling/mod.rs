mod connection_registry;
mod dispatcher;
mod signaling_output;
mod ws_handler;

pub use connection_registry::*;
pub use dispatcher::*;
pub use signaling_output::*;
pub use ws_handler::*;
