/*!
 * Translation caching functionality.
 *
 * This module provides the run-scoped cache that deduplicates translation
 * requests. A (language, text) pair that has been stored once never
 * triggers a second external call within the same run.
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use parking_lot::RwLock;
use log::debug;

/// Cache key combining target language and protected source text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    /// Target language code
    language: String,

    /// Protected source text
    source_text: String,
}

impl CacheKey {
    /// Create a new cache key
    fn new(language: &str, source_text: &str) -> Self {
        Self {
            language: language.to_string(),
            source_text: source_text.to_string(),
        }
    }
}

/// Run-scoped translation cache keyed by (language, text).
///
/// The cache is constructed fresh for each orchestrator run and shared
/// between worker tasks; the map is guarded by an `RwLock` so concurrent
/// readers and writers never corrupt it. There is no eviction - inputs
/// are bounded to one mod tree, so unbounded growth for the run's
/// duration is acceptable.
pub struct TranslationCache {
    /// Internal cache storage
    cache: Arc<RwLock<HashMap<CacheKey, String>>>,

    /// Cache hit counter
    hits: Arc<AtomicUsize>,

    /// Cache miss counter
    misses: Arc<AtomicUsize>,
}

impl TranslationCache {
    /// Create a new empty translation cache
    pub fn new() -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(AtomicUsize::new(0)),
            misses: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Look up a translation for a (language, text) pair
    pub fn lookup(&self, language: &str, source_text: &str) -> Option<String> {
        let key = CacheKey::new(language, source_text);
        let cache = self.cache.read();

        match cache.get(&key) {
            Some(translation) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for '{}' ({})", truncate_text(source_text, 30), language);
                Some(translation.clone())
            },
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a translation for a (language, text) pair
    pub fn store(&self, language: &str, source_text: &str, translation: &str) {
        let key = CacheKey::new(language, source_text);
        let mut cache = self.cache.write();

        cache.insert(key, translation.to_string());

        debug!("Cached translation for '{}' ({})", truncate_text(source_text, 30), language);
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache and its counters
    pub fn clear(&self) {
        self.cache.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);

        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TranslationCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
        }
    }
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_length).collect::<String>())
    }
}
