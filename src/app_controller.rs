use anyhow::{Result, anyhow};
use futures::stream::{self, StreamExt};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::app_config::{CatalogKind, Config, LanguageDescriptor, LocaleCatalog};
use crate::extractor;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::providers::TranslationProvider;
use crate::rewriter::FileRewriter;
use crate::tag_protector::TagProtector;
use crate::translation::{BatchTranslator, TranslationCache, TranslationService};

// @module: Run orchestrator for mod localization roots

/// Options selected on the command line for one run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Skip roots governed by the legacy catalog
    pub no_legacy: bool,

    /// Restrict processing to these language codes (empty means all)
    pub languages: Vec<String>,
}

/// One source template held in memory for the duration of a root.
///
/// Read once, then shared read-only across every target language.
struct SourceFile {
    /// Path relative to the source-language directory
    relative_path: PathBuf,

    /// Raw template content
    content: String,
}

/// Main application controller for localization runs
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Command-line run options
    options: RunOptions,

    // @field: Translation service boundary
    service: TranslationService,

    // @field: Token protection applied around every external call
    protector: TagProtector,

    // @field: Destination-file reconstruction
    rewriter: FileRewriter,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config, options: RunOptions) -> Result<Self> {
        let service = TranslationService::new(config.translation.clone())?;
        Ok(Self::assemble(config, options, service))
    }

    /// Create a controller around an explicit provider implementation
    pub fn with_provider(
        config: Config,
        options: RunOptions,
        provider: Arc<dyn TranslationProvider>,
    ) -> Self {
        let service = TranslationService::with_provider(config.translation.clone(), provider);
        Self::assemble(config, options, service)
    }

    fn assemble(config: Config, options: RunOptions, service: TranslationService) -> Self {
        let protector = TagProtector::with_default_tokens();
        let rewriter = FileRewriter::new(&config.source_language);
        Self {
            config,
            options,
            service,
            protector,
            rewriter,
        }
    }

    /// Run the full workflow over every localization root below a search path.
    ///
    /// Roots are processed concurrently with each other; a failure inside one
    /// root never aborts its siblings. Only an invalid search path is fatal.
    pub async fn run(&self, search_path: &Path) -> Result<()> {
        // Start timing the process
        let start_time = Instant::now();

        if !search_path.is_dir() {
            return Err(anyhow!("Invalid directory: {:?}", search_path));
        }

        // Load both locale catalogs once per run; a root that needs a
        // catalog that failed to load is skipped with an error later.
        let primary_catalog = self.load_catalog(&self.config.primary_catalog);
        let legacy_catalog = if self.options.no_legacy {
            None
        } else {
            self.load_catalog(&self.config.legacy_catalog)
        };

        let roots = FileManager::find_localization_roots(search_path, &self.config.root_dir_name)?;
        if roots.is_empty() {
            warn!(
                "No localization roots named '{}' found under {:?}",
                self.config.root_dir_name, search_path
            );
            return Ok(());
        }

        info!(
            "modloc: {} via {}",
            self.service.provider_name(),
            self.config.translation.endpoint
        );

        // Fresh cache and call counter for this run
        let translator = BatchTranslator::new(self.service.clone(), TranslationCache::new());

        let multi_progress = MultiProgress::new();
        let concurrency = self.config.translation.concurrent_requests;

        stream::iter(roots)
            .map(|root| {
                let translator = &translator;
                let primary = primary_catalog.as_ref();
                let legacy = legacy_catalog.as_ref();
                let multi_progress = &multi_progress;
                async move {
                    self.process_root(&root, primary, legacy, translator, multi_progress)
                        .await;
                }
            })
            .buffer_unordered(concurrency)
            .collect::<Vec<_>>()
            .await;

        let (hits, misses, hit_rate) = translator.cache().stats();
        debug!(
            "Cache: {} hits, {} misses ({:.0}% hit rate)",
            hits,
            misses,
            hit_rate * 100.0
        );

        info!(
            "Total processing time: {} ({} external calls)",
            Self::format_duration(start_time.elapsed()),
            translator.external_calls()
        );

        Ok(())
    }

    /// Load one catalog, downgrading failure to a logged None
    fn load_catalog(&self, path: &str) -> Option<LocaleCatalog> {
        match LocaleCatalog::load(Path::new(path)) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }

    /// Process one localization root: catalog selection, discovery,
    /// extraction, then per-language fan-out.
    async fn process_root(
        &self,
        root: &Path,
        primary: Option<&LocaleCatalog>,
        legacy: Option<&LocaleCatalog>,
        translator: &BatchTranslator,
        multi_progress: &MultiProgress,
    ) {
        let marker = &self.config.root_marker;
        let display = FileManager::display_path(root, marker);

        let kind = if FileManager::marker_depth(root, marker) == Some(self.config.legacy_depth) {
            CatalogKind::Legacy
        } else {
            CatalogKind::Primary
        };

        let catalog = match kind {
            CatalogKind::Legacy => {
                if self.options.no_legacy {
                    info!("Skipping: {} (--no-legacy)", display);
                    return;
                }
                match legacy {
                    Some(catalog) => catalog,
                    None => {
                        error!("Legacy catalog unavailable, skipping root: {}", display);
                        return;
                    }
                }
            }
            CatalogKind::Primary => match primary {
                Some(catalog) => catalog,
                None => {
                    error!("Primary catalog unavailable, skipping root: {}", display);
                    return;
                }
            },
        };

        let source_dir = root.join(&self.config.source_language);
        if !FileManager::dir_exists(&source_dir) {
            return;
        }

        let targets = catalog.target_languages(&self.config.source_language, &self.options.languages);
        if targets.is_empty() {
            debug!("No enabled target languages for root: {}", display);
            return;
        }

        let files = match FileManager::find_files(&source_dir, "txt") {
            Ok(files) => files,
            Err(e) => {
                error!("Failed to enumerate source files in {:?}: {}", source_dir, e);
                return;
            }
        };
        if files.is_empty() {
            return;
        }

        let root_start = Instant::now();
        info!("Processing: {} using {}", display, catalog.file_name());

        // Read every template once; unreadable files are logged and skipped
        let mut sources = Vec::with_capacity(files.len());
        for file in &files {
            match FileManager::read_to_string(file) {
                Ok(content) => {
                    let relative_path = file
                        .strip_prefix(&source_dir)
                        .map(|p| p.to_path_buf())
                        .unwrap_or_else(|_| {
                            file.file_name().map(PathBuf::from).unwrap_or_default()
                        });
                    sources.push(SourceFile {
                        relative_path,
                        content,
                    });
                }
                Err(e) => warn!("Skipping unreadable file {:?}: {}", file, e),
            }
        }
        if sources.is_empty() {
            return;
        }

        // Collect the distinct quoted segments across all templates, paired
        // with their protected form. Identity on the wire is the protected
        // form, so duplicates collapse before the external call.
        let mut seen = HashSet::new();
        let mut segments: Vec<(String, String)> = Vec::new();
        for source in &sources {
            for segment in extractor::extract_from_content(&source.content) {
                if seen.insert(segment.to_string()) {
                    segments.push((segment.to_string(), self.protector.protect(segment)));
                }
            }
        }

        let progress_bar = multi_progress.add(ProgressBar::new(targets.len() as u64));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} languages ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message(display.clone());

        let concurrency = self.config.translation.concurrent_requests;

        stream::iter(targets)
            .map(|language| {
                let display = &display;
                let sources = &sources;
                let segments = &segments;
                let progress_bar = &progress_bar;
                async move {
                    self.process_language(root, display, language, sources, segments, translator)
                        .await;
                    progress_bar.inc(1);
                }
            })
            .buffer_unordered(concurrency)
            .collect::<Vec<_>>()
            .await;

        progress_bar.finish_and_clear();

        info!(
            "Completed: {} in {}",
            display,
            Self::format_duration(root_start.elapsed())
        );
    }

    /// Translate and rewrite one root for one target language.
    ///
    /// A batch failure aborts only this language; sibling languages and
    /// roots keep running.
    async fn process_language(
        &self,
        root: &Path,
        display: &str,
        language: LanguageDescriptor,
        sources: &[SourceFile],
        segments: &[(String, String)],
        translator: &BatchTranslator,
    ) {
        let language_start = Instant::now();
        let label = language_utils::display_label(&language);

        let protected: Vec<String> = segments.iter().map(|(_, p)| p.clone()).collect();

        let translated = match translator.translate_batch(&language, &protected).await {
            Ok(map) => map,
            Err(e) => {
                error!("Translation failed for {} in {}: {}", label, display, e);
                return;
            }
        };

        // Map original segments to their final, unprotected form. A segment
        // the batch result does not cover is simply left out - the rewriter
        // falls back to the source text for it.
        let mut segment_map: HashMap<String, String> = HashMap::with_capacity(segments.len());
        for (original, protected) in segments {
            if let Some(result) = translated.get(protected) {
                segment_map.insert(original.clone(), self.protector.unprotect(result));
            }
        }

        let language_dir = root.join(&language.code);
        if let Err(e) = FileManager::ensure_dir(&language_dir) {
            error!("Failed to create language directory {:?}: {}", language_dir, e);
            return;
        }

        // Rewrite all templates for this language concurrently
        let written = stream::iter(sources)
            .map(|source| {
                let language = &language;
                let language_dir = &language_dir;
                let segment_map = &segment_map;
                async move { self.rewrite_file(source, language, language_dir, segment_map) }
            })
            .buffer_unordered(self.config.translation.concurrent_requests)
            .collect::<Vec<bool>>()
            .await;

        let written_count = written.into_iter().filter(|written| *written).count();

        info!(
            "{}: {} completed in {} ({} files)",
            display,
            label,
            Self::format_duration(language_start.elapsed()),
            written_count
        );
    }

    /// Rewrite one template into the destination directory.
    ///
    /// Returns whether a destination file was written. Empty templates,
    /// templates without translatable text, and unchanged rewrites produce
    /// no output; a write failure is logged and skipped.
    fn rewrite_file(
        &self,
        source: &SourceFile,
        language: &LanguageDescriptor,
        language_dir: &Path,
        segment_map: &HashMap<String, String>,
    ) -> bool {
        if source.content.trim().is_empty() {
            return false;
        }

        if extractor::extract_from_content(&source.content).is_empty() {
            debug!(
                "Skipping (no translatable text): {:?} ({})",
                source.relative_path, language.code
            );
            return false;
        }

        let rewritten = self
            .rewriter
            .rewrite_content(&source.content, &language.code, segment_map);

        if rewritten.trim() == source.content.trim() {
            debug!(
                "Skipping (no change): {:?} ({})",
                source.relative_path, language.code
            );
            return false;
        }

        let file_name = source
            .relative_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let destination_name = self
            .rewriter
            .destination_file_name(&file_name, &language.code);

        let destination = match source.relative_path.parent() {
            Some(parent) if parent != Path::new("") => {
                language_dir.join(parent).join(destination_name)
            }
            _ => language_dir.join(destination_name),
        };

        match FileManager::write_with_encoding(&destination, &rewritten, &language.charset) {
            Ok(()) => {
                debug!("Wrote {:?}", destination);
                true
            }
            Err(e) => {
                warn!("Skipping file {:?}: {}", destination, e);
                false
            }
        }
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
