use crate::error::SignalingError;
use crate::room::room::Room;
use crate::room::room_command::RoomCommand;
use crate::signaling::SignalingOutput;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use waypoint_core::{ConnectionId, RoomId, SecretKey, ServerEvent, ServerMessage};

/// Cloneable handle to the room store actor. The only way other components
/// reach room state.
#[derive(Clone)]
pub struct RoomStoreHandle {
    tx: mpsc::Sender<RoomCommand>,
}

impl RoomStoreHandle {
    pub async fn submit(&self, cmd: RoomCommand) {
        if self.tx.send(cmd).await.is_err() {
            error!("Room store is gone; dropping command");
        }
    }
}

/// Sole owner of all room state.
///
/// Runs as a single-writer actor: commands are applied one at a time off an
/// mpsc channel, so no operation ever observes a partially-applied update
/// from another. Per-connection ordering holds because the session layer
/// submits a connection's messages in receive order.
pub struct RoomStore {
    rooms: HashMap<RoomId, Room>,
    output: Arc<dyn SignalingOutput>,
    admin_password: String,
    public_url: String,
    command_rx: mpsc::Receiver<RoomCommand>,
}

impl RoomStore {
    pub fn new(
        admin_password: String,
        public_url: String,
        output: Arc<dyn SignalingOutput>,
    ) -> (Self, RoomStoreHandle) {
        let (tx, command_rx) = mpsc::channel(256);

        let store = Self {
            rooms: HashMap::new(),
            output,
            admin_password,
            public_url,
            command_rx,
        };

        (store, RoomStoreHandle { tx })
    }

    pub async fn run(mut self) {
        info!("Room store event loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Room store event loop finished");
    }

    async fn handle_command(&mut self, cmd: RoomCommand) {
        match cmd {
            RoomCommand::CreateRoom {
                requester,
                admin_password,
            } => {
                if let Err(e) = self.create_room(requester, admin_password).await {
                    self.report(requester, e).await;
                }
            }

            RoomCommand::JoinRoom {
                connection,
                room_id,
                key,
            } => {
                if let Err(e) = self.join_room(connection, room_id, key).await {
                    self.report(connection, e).await;
                }
            }

            RoomCommand::Signal {
                from,
                room_id,
                target,
                payload,
            } => {
                // Signaling failures are silent towards the sender.
                if let Err(e) = self.send_signal(from, room_id, target, payload).await {
                    warn!(%from, "Dropping signal: {}", e);
                }
            }

            RoomCommand::LeaveRoom {
                connection,
                room_id,
            } => {
                self.leave_room(connection, room_id).await;
            }

            RoomCommand::Disconnect { connection } => {
                self.remove_connection_everywhere(connection).await;
            }
        }
    }

    async fn report(&self, target: ConnectionId, err: SignalingError) {
        error!(connection = %target, "{}", err);

        if err.reported_to_sender() {
            self.output
                .send(target, ServerMessage::error(err.to_string()))
                .await;
        }
    }

    async fn create_room(
        &mut self,
        requester: ConnectionId,
        admin_password: Option<String>,
    ) -> Result<(), SignalingError> {
        if admin_password.as_deref() != Some(self.admin_password.as_str()) {
            return Err(SignalingError::Unauthorized);
        }

        let room_id = RoomId::generate();
        let secret_key = SecretKey::generate();
        self.rooms
            .insert(room_id.clone(), Room::new(secret_key.clone(), requester));

        info!(connection = %requester, room = %room_id, "Room created");

        let url = format!("{}?roomId={}&key={}", self.public_url, room_id, secret_key);
        self.output
            .send(
                requester,
                ServerEvent::RoomCreated {
                    room_id,
                    secret_key,
                    url,
                }
                .into(),
            )
            .await;

        Ok(())
    }

    /// The joiner gets no explicit acknowledgment; absence of an error reply
    /// is the success signal.
    async fn join_room(
        &mut self,
        connection: ConnectionId,
        room_id: Option<RoomId>,
        key: Option<SecretKey>,
    ) -> Result<(), SignalingError> {
        let (room_id, key) = match (room_id, key) {
            (Some(room_id), Some(key)) => (room_id, key),
            _ => return Err(SignalingError::MissingParameters),
        };

        let room = self
            .rooms
            .get_mut(&room_id)
            .ok_or(SignalingError::RoomNotFound)?;

        if !room.key_matches(&key) {
            return Err(SignalingError::InvalidKey);
        }

        room.insert_member(connection);
        info!(connection = %connection, room = %room_id, "Connection joined room");

        let others: Vec<ConnectionId> = room
            .members()
            .filter(|m| **m != connection)
            .copied()
            .collect();
        for member in others {
            self.output
                .send(member, ServerEvent::NewPeer { peer_id: connection }.into())
                .await;
        }

        Ok(())
    }

    async fn send_signal(
        &mut self,
        from: ConnectionId,
        room_id: Option<RoomId>,
        target: Option<ConnectionId>,
        payload: Option<Value>,
    ) -> Result<(), SignalingError> {
        let (room_id, target, payload) = match (room_id, target, payload) {
            (Some(room_id), Some(target), Some(payload)) => (room_id, target, payload),
            _ => return Err(SignalingError::InvalidSignalingData),
        };

        let target_is_member = self
            .rooms
            .get(&room_id)
            .is_some_and(|room| room.contains(&target));
        if !target_is_member {
            return Err(SignalingError::TargetNotFound(target));
        }

        debug!(
            %from,
            to = %target,
            room = %room_id,
            signal_type = signal_kind(&payload),
            "Relaying signal"
        );

        self.output
            .send(
                target,
                ServerEvent::Signal {
                    peer_id: from,
                    signal_data: payload,
                }
                .into(),
            )
            .await;

        Ok(())
    }

    async fn leave_room(&mut self, connection: ConnectionId, room_id: Option<RoomId>) {
        let Some(room_id) = room_id else {
            warn!(connection = %connection, "Leave without a room id");
            return;
        };

        let removed = self
            .rooms
            .get_mut(&room_id)
            .is_some_and(|room| room.remove_member(&connection));
        if !removed {
            warn!(connection = %connection, room = %room_id, "Leave from a room the connection is not in");
            return;
        }

        self.notify_departure(&room_id, connection).await;
    }

    /// Invoked once per connection close. Idempotent: a connection that was
    /// never in any room produces no notifications.
    async fn remove_connection_everywhere(&mut self, connection: ConnectionId) {
        let affected: Vec<RoomId> = self
            .rooms
            .iter_mut()
            .filter_map(|(id, room)| room.remove_member(&connection).then(|| id.clone()))
            .collect();

        for room_id in affected {
            self.notify_departure(&room_id, connection).await;
        }
    }

    /// Tell every remaining member that `departed` is gone. The departing
    /// connection itself is never notified. Empty rooms are kept for the
    /// process lifetime, so the join URL stays valid.
    async fn notify_departure(&self, room_id: &RoomId, departed: ConnectionId) {
        info!(connection = %departed, room = %room_id, "Connection left room");

        let Some(room) = self.rooms.get(room_id) else {
            return;
        };

        if room.is_empty() {
            debug!(room = %room_id, "Room is now empty");
        }

        let remaining: Vec<ConnectionId> = room.members().copied().collect();
        for member in remaining {
            self.output
                .send(member, ServerEvent::PeerLeft { peer_id: departed }.into())
                .await;
        }
    }
}

/// Best-effort label for log lines; never authoritative. Anything without a
/// `type` field is assumed to be an ICE candidate.
fn signal_kind(payload: &Value) -> &str {
    payload
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("candidate")
}
