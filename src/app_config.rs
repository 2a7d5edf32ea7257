use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::default::Default;
use std::path::Path;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings, plus the locale catalogs
/// that describe the target languages of a run.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code embedded in template filenames and headers
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Directory name that marks a localization root
    #[serde(default = "default_root_dir_name")]
    pub root_dir_name: String,

    /// Ancestor directory name used as the depth marker for catalog selection
    #[serde(default = "default_root_marker")]
    pub root_marker: String,

    /// Depth below the marker at which a root uses the legacy catalog
    #[serde(default = "default_legacy_depth")]
    pub legacy_depth: usize,

    /// Path of the primary locale catalog file
    #[serde(default = "default_primary_catalog")]
    pub primary_catalog: String,

    /// Path of the legacy locale catalog file
    #[serde(default = "default_legacy_catalog")]
    pub legacy_catalog: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_source_language() -> String {
    "EN".to_string()
}

fn default_root_dir_name() -> String {
    "Translate".to_string()
}

fn default_root_marker() -> String {
    "mods".to_string()
}

fn default_legacy_depth() -> usize {
    5
}

fn default_primary_catalog() -> String {
    "LanguagesInfo.json".to_string()
}

fn default_legacy_catalog() -> String {
    "LanguagesInfo_b41.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            root_dir_name: default_root_dir_name(),
            root_marker: default_root_marker(),
            legacy_depth: default_legacy_depth(),
            primary_catalog: default_primary_catalog(),
            legacy_catalog: default_legacy_catalog(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            return Err(anyhow!("Source language must not be empty"));
        }

        if self.root_dir_name.trim().is_empty() {
            return Err(anyhow!("Localization root directory name must not be empty"));
        }

        if self.legacy_depth == 0 {
            return Err(anyhow!("Legacy catalog depth must be at least 1"));
        }

        if self.translation.endpoint.trim().is_empty() {
            return Err(anyhow!("Translation endpoint must not be empty"));
        }

        if self.translation.concurrent_requests == 0 {
            return Err(anyhow!("Concurrent request count must be at least 1"));
        }

        Ok(())
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Service endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Source language code on the service side (e.g. "en")
    #[serde(default = "default_service_source")]
    pub service_source: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of retry attempts per request
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Base backoff in milliseconds for request retries
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Maximum number of concurrently processed work items
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,
}

fn default_endpoint() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_service_source() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

fn default_concurrent_requests() -> usize {
    4
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_source: default_service_source(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
            concurrent_requests: default_concurrent_requests(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Which of the two locale catalogs a root belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// Roots at the regular depth below the marker
    Primary,
    /// Roots at the legacy depth below the marker
    Legacy,
}

/// Target-language descriptor from a locale catalog entry
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LanguageDescriptor {
    /// Language code (the catalog map key, filled in at load time)
    #[serde(skip)]
    pub code: String,

    /// Display name from the catalog, if present
    #[serde(default)]
    pub text: Option<String>,

    /// Locale code used by the external translation service
    #[serde(rename = "tr_code")]
    pub service_code: String,

    /// Destination file character encoding
    #[serde(default = "default_charset")]
    pub charset: String,
}

fn default_charset() -> String {
    "UTF-8".to_string()
}

/// A locale catalog: the mapping from language code to service code and
/// destination charset. One of two catalogs governs each localization root,
/// selected by the root's depth below the marker directory.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    /// Name of the file the catalog was loaded from, for log lines
    file_name: String,

    /// Descriptors keyed by language code
    languages: BTreeMap<String, LanguageDescriptor>,
}

impl LocaleCatalog {
    /// Load a catalog from a JSON file of `code -> descriptor` entries
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let raw: BTreeMap<String, LanguageDescriptor> =
            serde_json::from_str(&content).map_err(|e| ConfigError::CatalogUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let languages = raw
            .into_iter()
            .map(|(code, mut descriptor)| {
                descriptor.code = code.clone();
                (code, descriptor)
            })
            .collect();

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { file_name, languages })
    }

    /// Build a catalog from descriptors directly (test construction)
    pub fn from_descriptors(file_name: impl Into<String>, descriptors: Vec<LanguageDescriptor>) -> Self {
        Self {
            file_name: file_name.into(),
            languages: descriptors
                .into_iter()
                .map(|descriptor| (descriptor.code.clone(), descriptor))
                .collect(),
        }
    }

    /// Name of the backing catalog file
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Look up the descriptor for a language code
    pub fn get(&self, code: &str) -> Option<&LanguageDescriptor> {
        self.languages.get(code)
    }

    /// The target languages of a run: every catalog language except the
    /// source, optionally restricted to an allow-list of codes.
    pub fn target_languages(&self, source_language: &str, allow_list: &[String]) -> Vec<LanguageDescriptor> {
        self.languages
            .values()
            .filter(|descriptor| !descriptor.code.eq_ignore_ascii_case(source_language))
            .filter(|descriptor| {
                allow_list.is_empty()
                    || allow_list.iter().any(|code| code.eq_ignore_ascii_case(&descriptor.code))
            })
            .cloned()
            .collect()
    }

    /// Number of languages in the catalog
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Check if the catalog has no languages
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
