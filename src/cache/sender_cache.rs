//! Time-based cache for the account's sender list.

use crate::domain::SenderOption;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry {
    senders: Vec<SenderOption>,
    inserted_at: Instant,
}

/// A thread-safe, single-entry cache with time-based expiration.
///
/// Clones share the same entry. A TTL of zero disables caching: every
/// `get` misses.
#[derive(Clone)]
pub struct SenderCache {
    entry: Arc<RwLock<Option<CacheEntry>>>,
    ttl: Duration,
}

impl SenderCache {
    /// Create a new SenderCache with the specified TTL in seconds.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            entry: Arc::new(RwLock::new(None)),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Replace the cached list.
    pub fn insert(&self, senders: Vec<SenderOption>) {
        if let Ok(mut entry) = self.entry.write() {
            *entry = Some(CacheEntry {
                senders,
                inserted_at: Instant::now(),
            });
        }
    }

    /// The cached list, unless it is missing or older than the TTL.
    pub fn get(&self) -> Option<Vec<SenderOption>> {
        let now = Instant::now();

        let entry = self.entry.read().ok()?;
        entry
            .as_ref()
            .filter(|e| now.duration_since(e.inserted_at) < self.ttl)
            .map(|e| e.senders.clone())
    }

    /// Drop the cached list.
    pub fn invalidate(&self) {
        if let Ok(mut entry) = self.entry.write() {
            *entry = None;
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for SenderCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self
            .entry
            .read()
            .map(|e| e.as_ref().map(|e| e.senders.len()))
            .unwrap_or(None);
        f.debug_struct("SenderCache")
            .field("ttl", &self.ttl)
            .field("cached_senders", &cached)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn senders() -> Vec<SenderOption> {
        vec![
            SenderOption::new("#SharedNum#", "Shared Number"),
            SenderOption::new("ACME", "ACME (Business)"),
        ]
    }

    #[test]
    fn test_insert_and_get() {
        let cache = SenderCache::new(60);
        assert!(cache.get().is_none());

        cache.insert(senders());
        assert_eq!(cache.get().unwrap().len(), 2);
    }

    #[test]
    fn test_expiration() {
        let cache = SenderCache::new(1);
        cache.insert(senders());
        assert!(cache.get().is_some());

        thread::sleep(Duration::from_millis(1100));
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let cache = SenderCache::new(0);
        cache.insert(senders());
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_invalidate() {
        let cache = SenderCache::new(60);
        cache.insert(senders());
        cache.invalidate();
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_clones_share_entry() {
        let cache = SenderCache::new(60);
        let other = cache.clone();
        other.insert(senders());
        assert_eq!(cache.get(), Some(senders()));
    }
}
