// Single-entry memo for an expensive read.
//
// Purpose
// - Serve repeated reads from memory until a writer invalidates the entry.
//
// Responsibilities
// - Hold at most one value.
// - Load while holding the lock, so an invalidation issued after a write always lands after any in-flight load.
// - Leave the slot empty when a load fails.

use std::future::Future;
use tokio::sync::Mutex;

pub struct ReadCache<T> {
    name: &'static str,
    slot: Mutex<Option<T>>,
}

impl<T> ReadCache<T>
where
    T: Clone + Send,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(None),
        }
    }

    pub async fn get_or_load<F, Fut, E>(&self, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            tracing::debug!(cache = self.name, "cache hit");
            return Ok(cached.clone());
        }
        tracing::debug!(cache = self.name, "cache miss, loading");
        let loaded = load().await?;
        *slot = Some(loaded.clone());
        Ok(loaded)
    }

    pub async fn invalidate(&self) {
        if self.slot.lock().await.take().is_some() {
            tracing::debug!(cache = self.name, "cache invalidated");
        }
    }

    #[cfg(test)]
    pub(crate) async fn is_populated(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}
