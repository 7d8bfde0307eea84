use std::collections::HashSet;
use waypoint_core::{ConnectionId, SecretKey};

/// One rendezvous group: the secret key gating entry plus the current
/// members.
///
/// Membership holds identifiers only, never transport handles, so an entry
/// here does not keep a connection alive and is pruned on close.
#[derive(Debug)]
pub struct Room {
    secret_key: SecretKey,
    members: HashSet<ConnectionId>,
}

impl Room {
    /// A room always starts with its creator as the sole member.
    pub fn new(secret_key: SecretKey, creator: ConnectionId) -> Self {
        let mut members = HashSet::new();
        members.insert(creator);
        Self {
            secret_key,
            members,
        }
    }

    pub fn key_matches(&self, supplied: &SecretKey) -> bool {
        &self.secret_key == supplied
    }

    /// Idempotent; returns false if the connection was already a member.
    pub fn insert_member(&mut self, id: ConnectionId) -> bool {
        self.members.insert(id)
    }

    /// Returns true if the connection was a member.
    pub fn remove_member(&mut self, id: &ConnectionId) -> bool {
        self.members.remove(id)
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.members.contains(id)
    }

    pub fn members(&self) -> impl Iterator<Item = &ConnectionId> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
