use crate::token::random_hex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Short random token identifying a room.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct RoomId(pub String);

impl RoomId {
    /// Fresh identifier: 8 hex chars from the OS RNG. The space is large
    /// enough that practical collisions do not occur.
    pub fn generate() -> Self {
        Self(random_hex(4))
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Random token a client must present to enter a room.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct SecretKey(pub String);

impl SecretKey {
    /// Fresh key: 32 hex chars from the OS RNG.
    pub fn generate() -> Self {
        Self(random_hex(16))
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
