/*!
 * Error types for the modloc application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to the external translation service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur while loading configuration and locale catalogs
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A locale catalog file could not be read or parsed
    #[error("Failed to load locale catalog {path}: {reason}")]
    CatalogUnreadable {
        /// Path of the catalog file
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A language code was requested that no catalog knows about
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    /// A configuration value failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur during batch translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The service returned no results for a non-empty request
    #[error("Translation service returned an empty batch for {language}")]
    EmptyBatch {
        /// Target language code
        language: String,
    },

    /// The returned sequence does not line up with the request
    #[error("Batch result length mismatch for {language}: requested {requested}, received {received}")]
    LengthMismatch {
        /// Target language code
        language: String,
        /// Number of texts sent
        requested: usize,
        /// Number of translations received
        received: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration or catalog loading
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
