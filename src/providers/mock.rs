/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds with translated text
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::short_response()` - Returns one result fewer than requested
 * - `MockProvider::empty()` - Returns an empty result list
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a proper aligned translation list
    Working,
    /// Always fails with an error
    Failing,
    /// Returns a list one element shorter than the request
    ShortResponse,
    /// Returns an empty list regardless of the request
    Empty,
    /// Simulates slow responses (for concurrency testing)
    Slow {
        /// Delay before answering, in milliseconds
        delay_ms: u64
    },
}

/// Mock provider for testing batch translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of batch calls received
    call_count: Arc<AtomicUsize>,
    /// Every (service_code, texts) request received, in call order
    requests: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    /// Custom per-text response generator (optional)
    custom_response: Option<fn(&str, &str) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns one result fewer than requested
    pub fn short_response() -> Self {
        Self::new(MockBehavior::ShortResponse)
    }

    /// Create a mock that returns empty result lists
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom per-text response generator `(service_code, text) -> translation`
    pub fn with_custom_response(mut self, generator: fn(&str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of batch calls this provider has received
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The requests received so far, in call order
    pub fn requests(&self) -> Vec<(String, Vec<String>)> {
        self.requests.lock().clone()
    }

    fn translate_text(&self, service_code: &str, text: &str) -> String {
        if let Some(generator) = self.custom_response {
            generator(service_code, text)
        } else {
            format!("[{}] {}", service_code, text)
        }
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            call_count: Arc::clone(&self.call_count),
            requests: Arc::clone(&self.requests),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate_batch(&self, service_code: &str, texts: &[String]) -> Result<Vec<String>, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push((service_code.to_string(), texts.to_vec()));

        match self.behavior {
            MockBehavior::Working => Ok(texts
                .iter()
                .map(|text| self.translate_text(service_code, text))
                .collect()),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::ShortResponse => Ok(texts
                .iter()
                .take(texts.len().saturating_sub(1))
                .map(|text| self.translate_text(service_code, text))
                .collect()),

            MockBehavior::Empty => Ok(Vec::new()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(texts
                    .iter()
                    .map(|text| self.translate_text(service_code, text))
                    .collect())
            }
        }
    }

    fn name(&self) -> &'static str {
        "Mock"
    }
}
