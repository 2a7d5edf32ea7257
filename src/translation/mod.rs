/*!
 * Translation service for mod localization files.
 *
 * This module contains the core functionality for translating extracted
 * text using the external translation service. It is split into several
 * submodules:
 *
 * - `core`: Core translation service definition
 * - `batch`: Batch processing with caching and fail-closed alignment checks
 * - `cache`: Run-scoped caching keyed by (language, text)
 */

// Re-export main types for easier usage
pub use self::batch::BatchTranslator;
pub use self::cache::TranslationCache;
pub use self::core::TranslationService;

// Submodules
pub mod batch;
pub mod cache;
pub mod core;
