//! Lookup caches in front of the catalog.
//!
//! [`KvCache`] is a generic memoization map: values are fetched at most once per key and kept for
//! the rest of the run. Persistence is a separate concern handled by a [`CacheStore`], which the
//! caller uses to load the cache before a run and save it afterwards.

pub mod store;

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

pub use store::{CacheStore, JsonFileStore};

/// Generic key-value cache with internal HashMap storage
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "K: Serialize + Hash + Eq, V: Serialize",
        deserialize = "K: Deserialize<'de> + Hash + Eq, V: Deserialize<'de>"
    )
)]
pub struct KvCache<K, V> {
    cache: HashMap<K, V>,
}

impl<K, V> Default for KvCache<K, V> {
    fn default() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }
}

impl<K, V> KvCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Get a value from cache, fetching and storing it if missing
    ///
    /// `fetch_fn` is only invoked on a miss. A failed fetch stores nothing, so the next call for
    /// the same key tries again.
    pub async fn get_or_fetch<E, F, Fut>(&mut self, key: K, fetch_fn: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.cache.get(&key) {
            return Ok(value.clone());
        }

        let value = fetch_fn().await?;
        self.cache.insert(key, value.clone());

        Ok(value)
    }

    /// Get a value without fetching
    pub fn get(&self, key: &K) -> Option<&V> {
        self.cache.get(key)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.cache.insert(key, value);
    }

    /// Get cache size
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
