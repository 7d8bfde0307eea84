use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the WebSocket listener binds to.
    pub bind_addr: SocketAddr,
    /// Static credential required by `create-room`.
    pub admin_password: String,
    /// Base URL embedded in the join link of `room-created` replies.
    pub public_url: String,
}

impl ServerConfig {
    pub const DEFAULT_BIND: &'static str = "0.0.0.0:8080";
    pub const DEFAULT_PUBLIC_URL: &'static str = "http://localhost:8080/";

    pub fn from_env() -> Result<Self> {
        let bind = env::var("WAYPOINT_BIND").unwrap_or_else(|_| Self::DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("invalid WAYPOINT_BIND address {bind:?}"))?;

        let admin_password =
            env::var("WAYPOINT_ADMIN_PASSWORD").context("WAYPOINT_ADMIN_PASSWORD is not set")?;

        let public_url =
            env::var("WAYPOINT_PUBLIC_URL").unwrap_or_else(|_| Self::DEFAULT_PUBLIC_URL.to_string());

        Ok(Self {
            bind_addr,
            admin_password,
            public_url,
        })
    }
}
