//! TTL cache for built synonym dictionaries.

use std::sync::Arc;

use ahash::AHashMap;
use chrono::{DateTime, Duration, Utc};
use log::debug;
use parking_lot::RwLock;

use crate::error::Result;
use crate::synonym::dictionary::SynonymDictionary;

/// Prefix for cache keys derived from language tags.
const CACHE_KEY_PREFIX: &str = "synonyms";

/// One cached dictionary snapshot and its wall-clock expiry.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Arc<SynonymDictionary>,
    expires_at: DateTime<Utc>,
}

/// A lazy-expiry TTL cache of dictionary snapshots.
///
/// Entries are checked against the wall clock on read; an expired or
/// missing entry is rebuilt by the caller-supplied closure and the new
/// snapshot atomically replaces the old one. Concurrent rebuilds of the
/// same key are tolerated (at-least-once, last write wins).
#[derive(Debug)]
pub struct SynonymCache {
    entries: RwLock<AHashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

impl SynonymCache {
    /// Create a cache with the default one-hour TTL.
    pub fn new() -> Self {
        SynonymCache {
            entries: RwLock::new(AHashMap::new()),
            default_ttl: Duration::hours(1),
        }
    }

    /// Set the TTL applied when `get_or_load` is called without one.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Get the default TTL.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Canonical cache key for a set of language tags.
    ///
    /// Tags are sorted before joining, so derivation is order-independent.
    /// Site and tenant identifiers are deliberately not part of the key:
    /// the synonym listing is shared across sites.
    pub fn cache_key(language_tags: &[String]) -> String {
        let mut tags: Vec<&str> = language_tags.iter().map(|tag| tag.as_str()).collect();
        tags.sort_unstable();
        format!("{CACHE_KEY_PREFIX}_{}", tags.join(","))
    }

    /// Get the cached dictionary for `key`, or build and store a fresh one.
    ///
    /// `ttl` falls back to the cache default when `None`. Errors from the
    /// load closure propagate and leave the cache unchanged.
    pub fn get_or_load<F>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        load: F,
    ) -> Result<Arc<SynonymDictionary>>
    where
        F: FnOnce() -> Result<SynonymDictionary>,
    {
        let now = Utc::now();
        {
            let entries = self.entries.read();
            if let Some(entry) = entries.get(key) {
                if now < entry.expires_at {
                    debug!("Synonym cache hit for {key} ({} keys)", entry.value.len());
                    return Ok(Arc::clone(&entry.value));
                }
            }
        }

        let value = Arc::new(load()?);
        let expires_at = now + ttl.unwrap_or(self.default_ttl);
        debug!(
            "Synonym cache rebuilt {key} ({} keys, expires {expires_at})",
            value.len()
        );
        self.entries.write().insert(
            key.to_string(),
            CacheEntry {
                value: Arc::clone(&value),
                expires_at,
            },
        );
        Ok(value)
    }

    /// Drop one cached entry.
    pub fn invalidate(&self, key: &str) {
        self.entries.write().remove(key);
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of cached entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for SynonymCache {
    fn default() -> Self {
        Self::new()
    }
}
