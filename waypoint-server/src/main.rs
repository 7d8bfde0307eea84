use axum::{Router, routing::get};
use std::sync::Arc;
use tracing::{Level, info};

use waypoint_server::config::ServerConfig;
use waypoint_server::room::RoomStore;
use waypoint_server::signaling::{AppState, ConnectionRegistry, Dispatcher, ws_handler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ServerConfig::from_env()?;
    info!("Starting waypoint signaling server");

    let registry = ConnectionRegistry::new();

    let (store, store_handle) = RoomStore::new(
        config.admin_password.clone(),
        config.public_url.clone(),
        Arc::new(registry.clone()),
    );
    tokio::spawn(store.run());

    let state = AppState {
        registry,
        dispatcher: Dispatcher::new(store_handle),
    };

    let app = Router::new().route("/ws", get(ws_handler)).with_state(state);

    info!("Listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
