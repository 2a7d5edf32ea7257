/*!
 * # modloc - Mod Localization Translator
 *
 * A Rust library for batch-translating game mod localization files.
 *
 * ## Features
 *
 * - Discover localization roots inside a mod tree
 * - Extract quoted string literals from language template files
 * - Protect markup tags and format placeholders across translation
 * - Batch translation with run-scoped caching and one external call
 *   per (root, language)
 * - Rewrite destination files with renamed language headers and the
 *   catalog-declared character encoding
 * - Concurrent processing of roots, languages, and files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management and locale catalogs
 * - `extractor`: Quoted-segment extraction from template lines
 * - `tag_protector`: Reversible protection of markup/placeholder tokens
 * - `translation`: Batch translation services:
 *   - `translation::core`: Core translation service definition
 *   - `translation::batch`: Batch adapter with caching and alignment checks
 *   - `translation::cache`: Run-scoped (language, text) cache
 * - `rewriter`: Destination-file reconstruction
 * - `file_utils`: File system operations and encodings
 * - `app_controller`: Main application controller
 * - `language_utils`: Language code display helpers
 * - `providers`: Clients for the external translation service
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod extractor;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod rewriter;
pub mod tag_protector;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{Config, LanguageDescriptor, LocaleCatalog};
pub use app_controller::{Controller, RunOptions};
pub use rewriter::FileRewriter;
pub use tag_protector::TagProtector;
pub use translation::{BatchTranslator, TranslationCache, TranslationService};
pub use errors::{AppError, ConfigError, ProviderError, TranslationError};
