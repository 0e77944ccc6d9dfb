// Process configuration read from the environment.
//
// Keys
// - EVENTS_BIND_ADDR: socket address to listen on (default 0.0.0.0:8080).
// - EVENTS_SEED_PATH: optional JSON file with the events to load at start-up.

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup("EVENTS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("EVENTS_BIND_ADDR is not a socket address: {raw_addr}"))?;
        let seed_path = lookup("EVENTS_SEED_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            bind_addr,
            seed_path,
        })
    }
}
