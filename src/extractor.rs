/*!
 * Quoted-segment extraction from localization file lines.
 *
 * Mod language files keep all translatable text inside double quotes;
 * everything else on a line is structure (keys, punctuation, markup).
 * This module locates those quoted segments and nothing else.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// Matches text inside quotes, non-greedy and non-overlapping. An embedded
// quote terminates the segment early - the format has no escape syntax.
static QUOTED_TEXT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("valid quoted text regex"));

/// Line prefix that marks a comment in mod language files
pub const COMMENT_MARKER: &str = "--";

/// Extract the ordered list of quoted segments from one line.
///
/// The quotes themselves are not included. Comment lines yield nothing.
pub fn extract_segments(line: &str) -> Vec<&str> {
    if is_comment(line) {
        return Vec::new();
    }
    QUOTED_TEXT_REGEX
        .captures_iter(line)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Extract quoted segments from every line of a file's content
pub fn extract_from_content(content: &str) -> Vec<&str> {
    content.lines().flat_map(extract_segments).collect()
}

/// Replace each quoted segment of a line using the given mapping function.
///
/// The surrounding quotes are preserved; lines without quoted segments are
/// returned unchanged. Comment lines are never rewritten.
pub fn rewrite_segments(line: &str, mut replace: impl FnMut(&str) -> String) -> String {
    if is_comment(line) {
        return line.to_string();
    }
    QUOTED_TEXT_REGEX
        .replace_all(line, |caps: &regex::Captures| {
            let segment = caps.get(1).map_or("", |m| m.as_str());
            format!("\"{}\"", replace(segment))
        })
        .into_owned()
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}
