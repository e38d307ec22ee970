// src/cascade/cache.rs

//! Shared lookup cache with single-flight loading.
//!
//! Concurrent misses on the same key await one shared future instead of
//! issuing duplicate requests. Only successful loads are stored. The mutex
//! guards plain maps and is never held across an await.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use crate::error::Failure;

type Loaded<V> = Result<Arc<V>, Failure>;
type Pending<V> = Shared<BoxFuture<'static, Loaded<V>>>;

struct Entry<V> {
    value: Arc<V>,
    loaded_at: Instant,
}

struct State<K, V> {
    ready: HashMap<K, Entry<V>>,
    /// In-flight loads tagged with a load id. An invalidation removes the
    /// entry, so a load whose id is gone must not write its result back.
    pending: HashMap<K, (u64, Pending<V>)>,
    next_load: u64,
}

pub struct LookupCache<K, V> {
    ttl: Option<Duration>,
    state: Mutex<State<K, V>>,
}

impl<K, V> LookupCache<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Send + Sync + 'static,
{
    /// Create a cache. Without a TTL entries live until invalidated.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            state: Mutex::new(State {
                ready: HashMap::new(),
                pending: HashMap::new(),
                next_load: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<K, V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_fresh(&self, entry: &Entry<V>) -> bool {
        self.ttl.is_none_or(|ttl| entry.loaded_at.elapsed() < ttl)
    }

    /// Cached value for `key`, if present and not expired.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let state = self.lock();
        state
            .ready
            .get(key)
            .filter(|entry| self.is_fresh(entry))
            .map(|entry| entry.value.clone())
    }

    /// Return the cached value or run `load`, sharing one in-flight load
    /// among concurrent callers for the same key.
    pub async fn get_or_load<F, Fut>(&self, key: K, load: F) -> Loaded<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, Failure>> + Send + 'static,
    {
        let (load_id, pending) = {
            let mut state = self.lock();
            if let Some(entry) = state.ready.get(&key) {
                if self.is_fresh(entry) {
                    return Ok(entry.value.clone());
                }
            }
            match state.pending.get(&key) {
                Some((load_id, pending)) => (*load_id, pending.clone()),
                None => {
                    let load_id = state.next_load;
                    state.next_load += 1;
                    let pending = load().map(|result| result.map(Arc::new)).boxed().shared();
                    state.pending.insert(key.clone(), (load_id, pending.clone()));
                    (load_id, pending)
                }
            }
        };

        let result = pending.await;

        let mut state = self.lock();
        let still_current = state
            .pending
            .get(&key)
            .is_some_and(|(current, _)| *current == load_id);
        if still_current {
            state.pending.remove(&key);
            match &result {
                Ok(value) => {
                    state.ready.insert(
                        key,
                        Entry {
                            value: value.clone(),
                            loaded_at: Instant::now(),
                        },
                    );
                }
                Err(failure) => log::debug!("Lookup load failed, not cached: {failure}"),
            }
        }
        result
    }

    /// Drop one key, including any load in flight for it.
    pub fn invalidate(&self, key: &K) {
        let mut state = self.lock();
        state.ready.remove(key);
        state.pending.remove(key);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.ready.clear();
        state.pending.clear();
    }

    /// Drop every key matching `predicate`.
    pub fn invalidate_where(&self, predicate: impl Fn(&K) -> bool) {
        let mut state = self.lock();
        state.ready.retain(|key, _| !predicate(key));
        state.pending.retain(|key, _| !predicate(key));
    }

    pub fn len(&self) -> usize {
        self.lock().ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
