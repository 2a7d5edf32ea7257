/*!
 * Provider implementations for the external translation service.
 *
 * This module contains client implementations for translation backends:
 * - Google: the public Google Translate web endpoint
 * - Mock: scripted behaviors for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// The external service is treated as an opaque black box behind this one
/// method: a batch of distinct strings goes in, a positionally aligned
/// sequence of translations comes out, or the whole call fails. Keeping
/// the boundary this narrow lets the core pipeline run against a fake
/// implementation in tests.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate a batch of texts into the language named by `service_code`
    ///
    /// # Arguments
    /// * `service_code` - The provider-side locale code (e.g. "de", "pt")
    /// * `texts` - The texts to translate
    ///
    /// # Returns
    /// * `Result<Vec<String>, ProviderError>` - Translations aligned with the
    ///   input order, or an error covering the entire batch
    async fn translate_batch(&self, service_code: &str, texts: &[String]) -> Result<Vec<String>, ProviderError>;

    /// Human-readable provider name for log lines
    fn name(&self) -> &'static str;
}

pub mod google;
pub mod mock;
