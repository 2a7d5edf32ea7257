/*!
 * Batch translation processing.
 *
 * This module contains the adapter between the pipeline and the external
 * translation service: it deduplicates the request, serves what it can
 * from the run cache, issues at most one external call for the rest, and
 * fails closed when the service answer does not line up with the request.
 */

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::app_config::LanguageDescriptor;
use crate::errors::TranslationError;
use super::cache::TranslationCache;
use super::core::TranslationService;

/// Batch translator bridging the run cache and the external service.
///
/// One instance lives for one orchestrator run; it owns the run cache and
/// a diagnostic counter of external calls actually issued.
pub struct BatchTranslator {
    /// The translation service to use
    service: TranslationService,

    /// Run-scoped cache keyed by (language, text)
    cache: TranslationCache,

    /// Number of external batch calls issued during this run
    external_calls: AtomicUsize,
}

impl BatchTranslator {
    /// Create a new batch translator for one run
    pub fn new(service: TranslationService, cache: TranslationCache) -> Self {
        Self {
            service,
            cache,
            external_calls: AtomicUsize::new(0),
        }
    }

    /// Translate a set of texts into one target language.
    ///
    /// Inputs are deduplicated preserving first-seen order. Already-cached
    /// texts are served from the cache; the remainder goes out as exactly
    /// one external call whose results must align positionally with the
    /// request. Any failure - provider error, empty response, or a length
    /// mismatch - fails the entire call and leaves the cache untouched.
    pub async fn translate_batch(
        &self,
        language: &LanguageDescriptor,
        texts: &[String],
    ) -> Result<HashMap<String, String>, TranslationError> {
        let mut seen = HashSet::new();
        let unique: Vec<&String> = texts.iter().filter(|text| seen.insert(text.as_str())).collect();

        let mut resolved = HashMap::with_capacity(unique.len());
        let mut pending: Vec<String> = Vec::new();

        for text in unique {
            match self.cache.lookup(&language.code, text) {
                Some(cached) => {
                    resolved.insert(text.clone(), cached);
                },
                None => pending.push(text.clone()),
            }
        }

        if pending.is_empty() {
            return Ok(resolved);
        }

        self.external_calls.fetch_add(1, Ordering::SeqCst);
        let translations = self
            .service
            .translate_batch(&language.service_code, &pending)
            .await
            .map_err(TranslationError::Provider)?;

        if translations.is_empty() {
            return Err(TranslationError::EmptyBatch {
                language: language.code.clone(),
            });
        }

        if translations.len() != pending.len() {
            return Err(TranslationError::LengthMismatch {
                language: language.code.clone(),
                requested: pending.len(),
                received: translations.len(),
            });
        }

        // Positional zip - the service contract is order alignment, not
        // any order-independent matching.
        for (source, translation) in pending.into_iter().zip(translations) {
            self.cache.store(&language.code, &source, &translation);
            resolved.insert(source, translation);
        }

        Ok(resolved)
    }

    /// Number of external batch calls issued so far
    pub fn external_calls(&self) -> usize {
        self.external_calls.load(Ordering::SeqCst)
    }

    /// The run cache backing this translator
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }
}
