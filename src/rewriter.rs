/*!
 * Destination-file reconstruction.
 *
 * Rebuilds a target-language file from a source template: structural
 * header lines get their language suffix renamed, quoted segments are
 * swapped for their translations, everything else passes through
 * byte for byte.
 */

use regex::Regex;
use std::collections::HashMap;

use crate::extractor;

/// Rewrites source templates into destination-language content.
///
/// A missing translation for an individual segment is not an error - the
/// segment stays in the source language and the rest of the file is still
/// produced.
#[derive(Debug)]
pub struct FileRewriter {
    /// Language suffix token of the source files, e.g. "_EN"
    source_suffix: String,

    /// Matches structural header lines: `<name>_<SOURCE> = {`
    header_regex: Regex,
}

impl FileRewriter {
    /// Create a rewriter for templates in the given source language
    pub fn new(source_language: impl Into<String>) -> Self {
        let source_language = source_language.into();
        let header_regex = Regex::new(&format!(
            r"^(\s*)([A-Za-z0-9_]+)_{}(\s*=\s*\{{.*)$",
            regex::escape(&source_language)
        ))
        .expect("valid header regex");

        Self {
            source_suffix: format!("_{}", source_language),
            header_regex,
        }
    }

    /// Rewrite a whole file's content for one target language.
    ///
    /// `translations` maps source segments to their final (unprotected)
    /// translated form.
    pub fn rewrite_content(
        &self,
        content: &str,
        target_language: &str,
        translations: &HashMap<String, String>,
    ) -> String {
        let mut rewritten: String = content
            .lines()
            .map(|line| self.rewrite_line(line, target_language, translations))
            .collect::<Vec<_>>()
            .join("\n");

        if content.ends_with('\n') {
            rewritten.push('\n');
        }

        rewritten
    }

    /// Rewrite one line for one target language
    pub fn rewrite_line(
        &self,
        line: &str,
        target_language: &str,
        translations: &HashMap<String, String>,
    ) -> String {
        // Comment lines carry no structure or translatable text
        if line.trim_start().starts_with(extractor::COMMENT_MARKER) {
            return line.to_string();
        }

        // Structural headers are renamed, never translated
        if let Some(caps) = self.header_regex.captures(line) {
            return format!(
                "{}{}_{}{}",
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map_or("", |m| m.as_str()),
                target_language,
                caps.get(3).map_or("", |m| m.as_str()),
            );
        }

        // Lines without quoted segments pass through exactly as they are
        if extractor::extract_segments(line).is_empty() {
            return line.to_string();
        }

        let substituted = extractor::rewrite_segments(line, |segment| {
            translations
                .get(segment)
                .cloned()
                .unwrap_or_else(|| segment.to_string())
        });

        // Per-entry keys on translatable lines also embed the source suffix
        substituted.replace(&self.source_suffix, &format!("_{}", target_language))
    }

    /// Derive the destination filename by renaming the language suffix
    pub fn destination_file_name(&self, source_name: &str, target_language: &str) -> String {
        source_name.replace(&self.source_suffix, &format!("_{}", target_language))
    }
}
