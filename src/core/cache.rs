//! Memoizing in-memory cache with freshness windows and single-flight fetches
//!
//! Each key maps to a slot holding a `tokio::sync::OnceCell`. Concurrent
//! callers asking for the same key while a fetch is in flight wait on that
//! one fetch instead of issuing their own. A value older than the cache's
//! time-to-live is dropped on the next lookup and fetched again. A failed
//! fetch leaves the slot empty, so the next caller retries.
//!
//! Slots live in an LRU map so a long-running process holding many
//! gameweeks does not grow without bound.

use lru::LruCache;
use std::{
    future::Future,
    hash::Hash,
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};
use tokio::sync::OnceCell;

struct Slot<V> {
    cell: OnceCell<(Instant, V)>,
}

impl<V> Slot<V> {
    fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Only a filled slot can go stale; an empty one is in flight or retryable.
    fn is_stale(&self, ttl: Duration) -> bool {
        self.cell
            .get()
            .is_some_and(|(fetched_at, _)| fetched_at.elapsed() >= ttl)
    }
}

pub struct MemoCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    slots: Mutex<LruCache<K, Arc<Slot<V>>>>,
    capacity: usize,
    ttl: Duration,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` keys, each fresh for `ttl`.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            slots: Mutex::new(LruCache::new(capacity)),
            capacity: capacity.get(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, Arc<Slot<V>>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current slot for `key`, replacing it when its value has gone stale.
    fn slot(&self, key: &K) -> Arc<Slot<V>> {
        let mut slots = self.lock();
        if let Some(slot) = slots.get(key) {
            if !slot.is_stale(self.ttl) {
                return Arc::clone(slot);
            }
        }
        let slot = Arc::new(Slot::new());
        slots.put(key.clone(), Arc::clone(&slot));
        slot
    }

    /// Return the cached value for `key`, or run `fetch` to produce it.
    ///
    /// Only one `fetch` runs per key at a time; other callers await its result.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(&key);
        let (_, value) = slot
            .cell
            .get_or_try_init(|| async move { fetch().await.map(|v| (Instant::now(), v)) })
            .await?;
        Ok(value.clone())
    }

    /// Fresh cached value, without fetching.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut slots = self.lock();
        let slot = slots.get(key)?;
        if slot.is_stale(self.ttl) {
            return None;
        }
        slot.cell.get().map(|(_, v)| v.clone())
    }

    /// Drop a key so the next lookup fetches again.
    pub fn invalidate(&self, key: &K) {
        self.lock().pop(key);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// (slots in use, capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.lock().len(), self.capacity)
    }
}
