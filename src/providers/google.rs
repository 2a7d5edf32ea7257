use async_trait::async_trait;
use log::error;
use reqwest::Client;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Client for the public Google Translate web endpoint.
///
/// Each text is sent as one `translate_a/single` request; a batch is the
/// sequence of those requests issued back to back on a pooled connection.
/// Server and network errors are retried with exponential backoff, client
/// errors are not.
#[derive(Debug)]
pub struct GoogleTranslator {
    /// Base URL of the translate endpoint
    base_url: String,
    /// Source language service code (e.g. "en")
    source_code: String,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

impl GoogleTranslator {
    /// Create a new client with default retry settings
    pub fn new(base_url: impl Into<String>, source_code: impl Into<String>) -> Self {
        Self::new_with_config(base_url, source_code, 3, 1000, 60)
    }

    /// Create a new client with explicit retry and timeout configuration
    ///
    /// Uses connection pooling so the per-text requests of a batch reuse
    /// one connection.
    pub fn new_with_config(
        base_url: impl Into<String>,
        source_code: impl Into<String>,
        max_retries: u32,
        backoff_base_ms: u64,
        timeout_secs: u64,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            source_code: source_code.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .pool_idle_timeout(Duration::from_secs(90))
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            max_retries,
            backoff_base_ms,
        }
    }

    /// Translate a single text with retry logic
    async fn translate_one(&self, service_code: &str, text: &str) -> Result<String, ProviderError> {
        let url = format!("{}/translate_a/single", self.base_url);

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let response_result = self.client.get(&url)
                .query(&[
                    ("client", "gtx"),
                    ("dt", "t"),
                    ("sl", self.source_code.as_str()),
                    ("tl", service_code),
                    ("q", text),
                ])
                .send()
                .await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body: serde_json::Value = response.json().await
                            .map_err(|e| ProviderError::ParseError(e.to_string()))?;
                        return extract_translation(&body);
                    } else if status.is_server_error() {
                        // Server error - can retry
                        let message = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("Translate API error ({}): {} - attempt {}/{}", status, message, attempt + 1, self.max_retries + 1);
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message,
                        });
                    } else {
                        // Client error - don't retry
                        let message = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("Translate API error ({}): {}", status, message);
                        return Err(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message,
                        });
                    }
                },
                Err(e) => {
                    // Network error - can retry
                    error!("Translate API network error: {} - attempt {}/{}", e, attempt + 1, self.max_retries + 1);
                    last_error = Some(ProviderError::ConnectionError(e.to_string()));
                }
            }

            attempt += 1;

            // If we have more retries left, wait with exponential backoff
            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!("request failed after {} attempts", self.max_retries + 1))
        }))
    }
}

/// Pull the translated text out of a `translate_a/single` response.
///
/// The body is a nested array; element 0 holds chunk arrays whose first
/// entry is the translated piece of the corresponding source chunk.
fn extract_translation(body: &serde_json::Value) -> Result<String, ProviderError> {
    let chunks = body.get(0).and_then(|v| v.as_array())
        .ok_or_else(|| ProviderError::ParseError("missing translation array in response".to_string()))?;

    let mut translated = String::new();
    for chunk in chunks {
        if let Some(part) = chunk.get(0).and_then(|v| v.as_str()) {
            translated.push_str(part);
        }
    }

    if translated.is_empty() {
        return Err(ProviderError::ParseError("response contained no translated text".to_string()));
    }

    Ok(translated)
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    async fn translate_batch(&self, service_code: &str, texts: &[String]) -> Result<Vec<String>, ProviderError> {
        let mut translations = Vec::with_capacity(texts.len());
        for text in texts {
            translations.push(self.translate_one(service_code, text).await?);
        }
        Ok(translations)
    }

    fn name(&self) -> &'static str {
        "GoogleTranslate"
    }
}
