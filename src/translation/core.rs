/*!
 * Core translation service implementation.
 *
 * This module contains the TranslationService struct, the thin wrapper that
 * owns the configured provider and hands batches across the service
 * boundary.
 */

use anyhow::{Result, anyhow};
use std::sync::Arc;
use url::Url;

use crate::app_config::TranslationConfig;
use crate::errors::ProviderError;
use crate::providers::TranslationProvider;
use crate::providers::google::GoogleTranslator;

/// Translation service owning the provider the run talks to.
///
/// The provider is held behind the narrow `TranslationProvider` trait so
/// the pipeline can be exercised with a fake implementation in tests.
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// Provider implementation
    provider: Arc<dyn TranslationProvider>,

    /// Configuration for the translation service
    pub config: TranslationConfig,
}

impl TranslationService {
    /// Create a new translation service with the given configuration
    pub fn new(config: TranslationConfig) -> Result<Self> {
        let endpoint = validate_endpoint(&config.endpoint)?;

        let provider = Arc::new(GoogleTranslator::new_with_config(
            endpoint,
            config.service_source.clone(),
            config.retry_count,
            config.retry_backoff_ms,
            config.timeout_secs,
        ));

        Ok(Self { provider, config })
    }

    /// Create a translation service around an explicit provider
    pub fn with_provider(config: TranslationConfig, provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider, config }
    }

    /// Translate a batch of texts into the language named by `service_code`
    pub async fn translate_batch(&self, service_code: &str, texts: &[String]) -> Result<Vec<String>, ProviderError> {
        self.provider.translate_batch(service_code, texts).await
    }

    /// Name of the underlying provider, for log lines
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}

/// Validate an endpoint string and normalize it into a URL
fn validate_endpoint(endpoint: &str) -> Result<String> {
    if endpoint.is_empty() {
        return Err(anyhow!("Endpoint cannot be empty"));
    }

    let url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Url::parse(endpoint)?
    } else {
        Url::parse(&format!("https://{}", endpoint))?
    };

    url.host_str()
        .ok_or_else(|| anyhow!("Invalid host in endpoint: {}", endpoint))?;

    Ok(url.to_string().trim_end_matches('/').to_string())
}
