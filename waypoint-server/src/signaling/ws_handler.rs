use crate::signaling::{ConnectionRegistry, Dispatcher};
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Shared state for the WebSocket route.
#[derive(Clone)]
pub struct AppState {
    pub registry: ConnectionRegistry,
    pub dispatcher: Dispatcher,
}

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let connection_id = state.registry.allocate_id();
    info!(connection = %connection_id, "New connection opened");

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.registry.register(connection_id, tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let dispatcher = state.dispatcher.clone();

        async move {
            while let Some(frame) = receiver.next().await {
                match frame {
                    Ok(Message::Text(text)) => {
                        dispatcher.dispatch(connection_id, text.as_str()).await;
                    }
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        // Dropping the socket is the forced close; no retry.
                        error!(connection = %connection_id, "Connection error: {}", e);
                        break;
                    }
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Rooms first, registry second: peer-left notifications still need the
    // other members' handles, and the departing connection gets none.
    state.dispatcher.connection_closed(connection_id).await;
    state.registry.unregister(&connection_id);

    info!(connection = %connection_id, "Connection closed");
}
