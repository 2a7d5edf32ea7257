/*!
 * Tests for translation cache functionality
 */

use modloc::translation::cache::TranslationCache;

#[test]
fn test_cache_lookup_withMissingKey_shouldReturnNone() {
    let cache = TranslationCache::new();
    assert!(cache.lookup("DE", "nonexistent").is_none());
}

#[test]
fn test_cache_store_thenLookup_shouldReturnStoredValue() {
    let cache = TranslationCache::new();
    cache.store("DE", "Hello", "Hallo");

    assert_eq!(cache.lookup("DE", "Hello"), Some("Hallo".to_string()));
}

#[test]
fn test_cache_lookup_withDifferentLanguage_shouldReturnNone() {
    let cache = TranslationCache::new();
    cache.store("DE", "Hello", "Hallo");

    // Same text, different target language - no cross-language bleed
    assert!(cache.lookup("FR", "Hello").is_none());
}

#[test]
fn test_cache_store_withMultipleEntries_shouldStoreAll() {
    let cache = TranslationCache::new();

    cache.store("DE", "Hello", "Hallo");
    cache.store("DE", "Goodbye", "Tschüss");
    cache.store("FR", "Hello", "Bonjour");

    assert_eq!(cache.lookup("DE", "Hello"), Some("Hallo".to_string()));
    assert_eq!(cache.lookup("DE", "Goodbye"), Some("Tschüss".to_string()));
    assert_eq!(cache.lookup("FR", "Hello"), Some("Bonjour".to_string()));
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_cache_store_withSameKey_shouldOverwrite() {
    let cache = TranslationCache::new();

    cache.store("DE", "Hello", "Hallo");
    cache.store("DE", "Hello", "Servus");

    assert_eq!(cache.lookup("DE", "Hello"), Some("Servus".to_string()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_stats_shouldCountHitsAndMisses() {
    let cache = TranslationCache::new();
    cache.store("DE", "Hello", "Hallo");

    let _ = cache.lookup("DE", "Hello"); // hit
    let _ = cache.lookup("DE", "Other"); // miss
    let _ = cache.lookup("DE", "Hello"); // hit

    let (hits, misses, hit_rate) = cache.stats();
    assert_eq!(hits, 2);
    assert_eq!(misses, 1);
    assert!((hit_rate - 2.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_cache_clear_shouldEmptyStorageAndCounters() {
    let cache = TranslationCache::new();
    cache.store("DE", "Hello", "Hallo");
    let _ = cache.lookup("DE", "Hello");

    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.stats(), (0, 0, 0.0));
}

#[test]
fn test_cache_clone_shouldShareStorage() {
    let cache1 = TranslationCache::new();
    let cache2 = cache1.clone();

    cache1.store("DE", "Hello", "Hallo");

    // cache2 should see the same data (shared storage)
    assert_eq!(cache2.lookup("DE", "Hello"), Some("Hallo".to_string()));
}

#[test]
fn test_cache_withUnicodeText_shouldHandleCorrectly() {
    let cache = TranslationCache::new();

    let source = "Огнетушитель";
    let translation = "消火器";

    cache.store("JP", source, translation);
    assert_eq!(cache.lookup("JP", source), Some(translation.to_string()));
}

#[tokio::test]
async fn test_cache_concurrentAccess_shouldBeThreadSafe() {
    use std::sync::Arc;
    use tokio::task::JoinSet;

    let cache = Arc::new(TranslationCache::new());
    let mut join_set = JoinSet::new();

    // Spawn tasks writing and reading from two language keys at once
    for i in 0..16 {
        let cache = cache.clone();
        let language = if i % 2 == 0 { "DE" } else { "FR" };
        let key = format!("key{}", i);
        let value = format!("value{}", i);
        join_set.spawn(async move {
            cache.store(language, &key, &value);
            cache.lookup(language, &key)
        });
    }

    // Wait for all tasks
    while join_set.join_next().await.is_some() {}

    // Verify all values are stored under the right language
    for i in 0..16 {
        let language = if i % 2 == 0 { "DE" } else { "FR" };
        let key = format!("key{}", i);
        let expected = format!("value{}", i);
        assert_eq!(cache.lookup(language, &key), Some(expected));
    }
}
