use isolang::Language;

use crate::app_config::LanguageDescriptor;

/// Language utilities for mod language code handling
///
/// Mod language codes are short uppercase tokens ("DE", "RU", "PTBR")
/// that mostly line up with ISO 639-1; where they do, isolang supplies a
/// readable name for log output.
/// Best-effort English display name for a mod language code
pub fn display_name(code: &str) -> Option<String> {
    let normalized = code.trim().to_lowercase();

    match normalized.len() {
        2 => Language::from_639_1(&normalized).map(|lang| lang.to_name().to_string()),
        3 => Language::from_639_3(&normalized).map(|lang| lang.to_name().to_string()),
        _ => None,
    }
}

/// Human-readable label for a catalog language, e.g. "DE (German)".
///
/// Prefers the display name the catalog itself carries, falls back to
/// the ISO name, then to the bare code.
pub fn display_label(descriptor: &LanguageDescriptor) -> String {
    if let Some(text) = &descriptor.text {
        format!("{} ({})", descriptor.code, text)
    } else if let Some(name) = display_name(&descriptor.code) {
        format!("{} ({})", descriptor.code, name)
    } else {
        descriptor.code.clone()
    }
}
