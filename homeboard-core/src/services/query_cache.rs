//! Keyed query cache with in-flight de-duplication
//!
//! At most one request per key is in flight. Callers arriving while it runs subscribe to the
//! same result instead of issuing their own. Successful results are served until they are older
//! than `stale_after`; failures are never cached.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;

use crate::error::CoreResult;

type SharedFetch<V> = Shared<BoxFuture<'static, CoreResult<V>>>;

enum Slot<V> {
    Ready { value: V, fetched_at: Instant },
    InFlight { generation: u64, fetch: SharedFetch<V> },
}

pub struct QueryCache<K, V> {
    entries: Mutex<HashMap<K, Slot<V>>>,
    stale_after: Duration,
    next_generation: AtomicU64,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Send,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            stale_after,
            next_generation: AtomicU64::new(0),
        }
    }

    /// Cached value for `key`, the running request's result, or the result of `fetch`.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> CoreResult<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = CoreResult<V>> + Send + 'static,
    {
        let (generation, shared) = {
            let mut entries = self.entries.lock().await;
            match entries.get(&key) {
                Some(Slot::Ready { value, fetched_at })
                    if fetched_at.elapsed() < self.stale_after =>
                {
                    return Ok(value.clone());
                }
                Some(Slot::InFlight { generation, fetch }) => (*generation, fetch.clone()),
                _ => {
                    let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
                    let shared = fetch().boxed().shared();
                    entries.insert(
                        key.clone(),
                        Slot::InFlight {
                            generation,
                            fetch: shared.clone(),
                        },
                    );
                    (generation, shared)
                }
            }
        };

        let result = shared.await;

        // 任一订阅者都可以落定结果；generation 不符说明期间被 invalidate 或已被替换
        let mut entries = self.entries.lock().await;
        if matches!(
            entries.get(&key),
            Some(Slot::InFlight { generation: current, .. }) if *current == generation
        ) {
            match &result {
                Ok(value) => {
                    entries.insert(
                        key,
                        Slot::Ready {
                            value: value.clone(),
                            fetched_at: Instant::now(),
                        },
                    );
                }
                Err(_) => {
                    entries.remove(&key);
                }
            }
        }

        result
    }

    /// Fresh cached value without fetching.
    #[cfg(test)]
    async fn peek(&self, key: &K) -> Option<V> {
        match self.entries.lock().await.get(key) {
            Some(Slot::Ready { value, fetched_at }) if fetched_at.elapsed() < self.stale_after => {
                Some(value.clone())
            }
            _ => None,
        }
    }

    /// Drop `key`; a request in flight for it finishes without being cached.
    pub async fn invalidate(&self, key: &K) {
        self.entries.lock().await.remove(key);
    }

    pub async fn invalidate_all(&self) {
        self.entries.lock().await.clear();
    }
}
