use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::modules::events::core::event::Event;

/// Reads the JSON array of events used to populate the in memory store.
pub fn load_seed(path: &Path) -> anyhow::Result<Vec<Event>> {
    let json_str = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&json_str)
        .with_context(|| format!("failed to parse seed file {}", path.display()))
}
