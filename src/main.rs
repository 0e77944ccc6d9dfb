use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use band_events::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use band_events::shell::config::AppConfig;
use band_events::shell::http::router;
use band_events::shell::seed::load_seed;
use band_events::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let events = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => Vec::new(),
    };
    tracing::info!(count = events.len(), "in-memory event store seeded");

    // In-memory store for now
    let event_store = Arc::new(InMemoryEventStore::with_events(events));
    let app = router(AppState::new(event_store)).layer(TraceLayer::new_for_http());

    tracing::info!("Events endpoint: http://{}/api/events/", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
