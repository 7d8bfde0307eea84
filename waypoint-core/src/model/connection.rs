use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier naming one live transport session.
///
/// Unique for the lifetime of the process, never reused while the connection
/// is open, and opaque to clients beyond addressing peers in `signal`
/// messages. On the wire it is a plain JSON number.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

impl From<u64> for ConnectionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
