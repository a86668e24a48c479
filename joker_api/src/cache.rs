//! In-memory HTTP response cache backed by `DashMap` for concurrent access.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Default capacity in bytes of response body held by the cache.
pub const DEFAULT_CACHE_BYTES: u64 = 1024 * 1024;

/// A single cached response body with its expiration time.
struct CacheEntry {
    body: String,
    expires_at: Instant,
    /// Insertion order, used to evict the oldest entry first.
    seq: u64,
}

/// Thread-safe response cache bounded by total body size.
///
/// Entries are keyed by request URL and expire after the lifetime the
/// server granted via `Cache-Control: max-age`. Expired entries are lazily
/// evicted on the next `get` for that key; when an insert pushes the total
/// over capacity, the oldest entries are evicted until it fits again.
pub struct ResponseCache {
    store: DashMap<String, CacheEntry>,
    capacity: u64,
    size: AtomicU64,
    next_seq: AtomicU64,
}

impl ResponseCache {
    /// Creates a cache holding at most `capacity` bytes of response bodies.
    pub fn new(capacity: u64) -> Self {
        Self {
            store: DashMap::new(),
            capacity,
            size: AtomicU64::new(0),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Total bytes of body currently held.
    pub fn size(&self) -> u64 {
        self.size.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the cached body for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<String> {
        let entry = self.store.get(key)?;
        if Instant::now() >= entry.expires_at {
            drop(entry);
            self.remove(key);
            return None;
        }
        Some(entry.body.clone())
    }

    /// Stores `body` under `key` for `ttl`.
    ///
    /// Bodies larger than the whole capacity are not stored, and a
    /// zero-capacity cache stores nothing.
    pub fn set(&self, key: String, body: String, ttl: Duration) {
        let len = body.len() as u64;
        if self.capacity == 0 || len > self.capacity {
            return;
        }
        let entry = CacheEntry {
            body,
            expires_at: Instant::now() + ttl,
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
        };
        // Count the bytes before the entry becomes visible so a concurrent
        // removal never subtracts more than was added.
        self.size.fetch_add(len, Ordering::AcqRel);
        if let Some(old) = self.store.insert(key, entry) {
            self.size.fetch_sub(old.body.len() as u64, Ordering::AcqRel);
        }
        self.evict_to_capacity();
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        let keys: Vec<String> = self.store.iter().map(|e| e.key().clone()).collect();
        for key in keys {
            self.remove(&key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some((_, old)) = self.store.remove(key) {
            self.size.fetch_sub(old.body.len() as u64, Ordering::AcqRel);
        }
    }

    fn evict_to_capacity(&self) {
        while self.size() > self.capacity {
            let oldest = self
                .store
                .iter()
                .min_by_key(|e| e.value().seq)
                .map(|e| e.key().clone());
            match oldest {
                Some(key) => {
                    tracing::debug!("Evicting cached response for {}", key);
                    self.remove(&key);
                }
                None => break,
            }
        }
    }
}

/// Lifetime a response may be cached for, from its `Cache-Control` header.
///
/// Only a positive `max-age` makes a response cacheable; `no-store` and
/// `no-cache` always win.
pub fn cache_lifetime(cache_control: Option<&str>) -> Option<Duration> {
    let mut max_age = None;
    for directive in cache_control?.split(',') {
        let directive = directive.trim().to_ascii_lowercase();
        if directive == "no-store" || directive.starts_with("no-cache") {
            return None;
        }
        if let Some(secs) = directive.strip_prefix("max-age=") {
            max_age = secs.trim_matches('"').parse::<u64>().ok();
        }
    }
    max_age.filter(|secs| *secs > 0).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn cache_set_and_get() {
        let cache = ResponseCache::new(DEFAULT_CACHE_BYTES);
        cache.set("key1".to_string(), "value1".to_string(), MINUTE);
        assert_eq!(cache.get("key1"), Some("value1".to_string()));
        assert_eq!(cache.size(), 6);
    }

    #[test]
    fn cache_miss() {
        let cache = ResponseCache::new(DEFAULT_CACHE_BYTES);
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn cache_expiration() {
        let cache = ResponseCache::new(DEFAULT_CACHE_BYTES);
        cache.set("key1".to_string(), "value1".to_string(), Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.size(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_overwrite_replaces_size() {
        let cache = ResponseCache::new(DEFAULT_CACHE_BYTES);
        cache.set("key1".to_string(), "old value".to_string(), MINUTE);
        cache.set("key1".to_string(), "new".to_string(), MINUTE);
        assert_eq!(cache.get("key1"), Some("new".to_string()));
        assert_eq!(cache.size(), 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn evicts_oldest_when_over_capacity() {
        let cache = ResponseCache::new(10);
        cache.set("a".to_string(), "1234".to_string(), MINUTE);
        cache.set("b".to_string(), "5678".to_string(), MINUTE);
        cache.set("c".to_string(), "90".to_string(), MINUTE);
        assert_eq!(cache.size(), 10);

        cache.set("d".to_string(), "x".to_string(), MINUTE);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some("5678".to_string()));
        assert_eq!(cache.get("d"), Some("x".to_string()));
        assert!(cache.size() <= cache.capacity());
    }

    #[test]
    fn oversized_body_not_stored() {
        let cache = ResponseCache::new(4);
        cache.set("a".to_string(), "12345".to_string(), MINUTE);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = ResponseCache::new(0);
        cache.set("a".to_string(), "1".to_string(), MINUTE);
        cache.set("b".to_string(), String::new(), MINUTE);
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_clear() {
        let cache = ResponseCache::new(DEFAULT_CACHE_BYTES);
        cache.set("a".to_string(), "1".to_string(), MINUTE);
        cache.set("b".to_string(), "2".to_string(), MINUTE);
        cache.clear();
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn lifetime_from_max_age() {
        assert_eq!(cache_lifetime(Some("max-age=60")), Some(MINUTE));
        assert_eq!(
            cache_lifetime(Some("public, Max-Age=120")),
            Some(Duration::from_secs(120))
        );
    }

    #[test]
    fn lifetime_absent_or_forbidden() {
        assert_eq!(cache_lifetime(None), None);
        assert_eq!(cache_lifetime(Some("public")), None);
        assert_eq!(cache_lifetime(Some("max-age=0")), None);
        assert_eq!(cache_lifetime(Some("max-age=abc")), None);
        assert_eq!(cache_lifetime(Some("no-store, max-age=60")), None);
        assert_eq!(cache_lifetime(Some("max-age=60, no-cache")), None);
    }
}
