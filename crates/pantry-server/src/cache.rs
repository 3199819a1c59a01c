//! Time-bounded single-value cache

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Holds one value for at most `ttl`
pub struct TtlCache<T> {
    ttl: Duration,
    slot: RwLock<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Fresh cached value, if any
    pub async fn get(&self) -> Option<T> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    pub async fn put(&self, value: T) {
        *self.slot.write().await = Some((Instant::now(), value));
    }

    /// Return the cached value or load, store and return a new one.
    ///
    /// Concurrent misses may each call `load`; the last one stored wins.
    pub async fn get_or_load<F, Fut, E>(&self, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get().await {
            return Ok(value);
        }

        let value = load().await?;
        self.put(value.clone()).await;
        Ok(value)
    }
}
