//! Generic memoization keyed by operation signature.
//!
//! Any coordinate query on [`crate::model::cube::Cube`] or
//! [`crate::geometry`] may consult a cache rather than recompute; the
//! [`CacheManagerNull`] variant turns every lookup into a guaranteed miss so
//! callers pay no hashing/locking cost when caching is disabled.

use std::collections::HashMap;
use std::hash::Hash;

/// A single operation-keyed cache: `(operation_name, args...)` → `V`.
///
/// `K` is whatever the caller uses to encode the full call signature (e.g.
/// `(&'static str, Vec<i64>)`); this type doesn't care how it's built, only
/// that it's hashable.
pub trait Cache<K, V> {
    fn get(&self, key: &K) -> Option<&V>;
    fn put(&mut self, key: K, value: V);
    fn clear(&mut self);
}

/// A real, unbounded memo table.
#[derive(Debug, Clone, Default)]
pub struct CacheManager<K, V> {
    slots: HashMap<K, V>,
}

impl<K, V> CacheManager<K, V> {
    pub fn new() -> Self {
        CacheManager { slots: HashMap::new() }
    }
}

impl<K: Eq + Hash, V> Cache<K, V> for CacheManager<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.slots.get(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.slots.insert(key, value);
    }

    fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Disables caching entirely: every `get` misses, every `put` is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheManagerNull;

impl<K, V> Cache<K, V> for CacheManagerNull {
    fn get(&self, _key: &K) -> Option<&V> {
        None
    }

    fn put(&mut self, _key: K, _value: V) {}

    fn clear(&mut self) {}
}

/// Either a live [`CacheManager`] or [`CacheManagerNull`], selected at
/// construction time by [`crate::config::Config::enable_cube_cache`] so call
/// sites don't need to be generic over the cache type.
pub enum CubeCache<K, V> {
    Live(CacheManager<K, V>),
    Disabled(CacheManagerNull),
}

impl<K, V> CubeCache<K, V> {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            CubeCache::Live(CacheManager::new())
        } else {
            CubeCache::Disabled(CacheManagerNull)
        }
    }
}

impl<K: Eq + Hash, V> Cache<K, V> for CubeCache<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        match self {
            CubeCache::Live(c) => c.get(key),
            CubeCache::Disabled(c) => Cache::<K, V>::get(c, key),
        }
    }

    fn put(&mut self, key: K, value: V) {
        match self {
            CubeCache::Live(c) => c.put(key, value),
            CubeCache::Disabled(c) => Cache::<K, V>::put(c, key, value),
        }
    }

    fn clear(&mut self) {
        match self {
            CubeCache::Live(c) => c.clear(),
            CubeCache::Disabled(c) => Cache::<K, V>::clear(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cache_round_trips() {
        let mut c: CacheManager<(&'static str, i64), i64> = CacheManager::new();
        assert_eq!(c.get(&("slice_index", 3)), None);
        c.put(("slice_index", 3), 42);
        assert_eq!(c.get(&("slice_index", 3)), Some(&42));
    }

    #[test]
    fn null_cache_never_hits() {
        let mut c = CacheManagerNull;
        c.put(("slice_index", 3), 42);
        assert_eq!(Cache::<(&str, i64), i64>::get(&c, &("slice_index", 3)), None);
    }

    #[test]
    fn cube_cache_respects_enabled_flag() {
        let mut enabled: CubeCache<&str, i64> = CubeCache::new(true);
        enabled.put("k", 1);
        assert_eq!(enabled.get(&"k"), Some(&1));

        let mut disabled: CubeCache<&str, i64> = CubeCache::new(false);
        disabled.put("k", 1);
        assert_eq!(disabled.get(&"k"), None);
    }
}
