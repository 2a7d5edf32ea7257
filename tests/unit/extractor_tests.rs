/*!
 * Tests for quoted-segment extraction
 */

use modloc::extractor;

/// Test that a line without quotes yields an empty list
#[test]
fn test_extract_segments_withNoQuotes_shouldReturnEmptyList() {
    assert!(extractor::extract_segments("ItemName_EN = {").is_empty());
    assert!(extractor::extract_segments("}").is_empty());
    assert!(extractor::extract_segments("").is_empty());
    assert!(extractor::extract_segments("    ").is_empty());
}

/// Test that quoted segments are extracted without their quotes, in order
#[test]
fn test_extract_segments_withMultipleQuotes_shouldReturnOrderedSegments() {
    let line = r#"    Recipe = "Open" .. "Canned Food","#;
    assert_eq!(extractor::extract_segments(line), vec!["Open", "Canned Food"]);
}

/// Test that comment lines yield nothing, even when they contain quotes
#[test]
fn test_extract_segments_withCommentLine_shouldReturnEmptyList() {
    assert!(extractor::extract_segments(r#"-- Tooltip = "Not translated""#).is_empty());
    assert!(extractor::extract_segments(r#"  -- "indented comment""#).is_empty());
}

/// Test that an embedded quote terminates a segment early
#[test]
fn test_extract_segments_withAdjacentQuotes_shouldNotOverlap() {
    // Four quotes make exactly two segments, never an overlapping span
    let line = r#"A = "one""two""#;
    assert_eq!(extractor::extract_segments(line), vec!["one", "two"]);
}

/// Test that empty quoted pairs are not treated as segments
#[test]
fn test_extract_segments_withEmptyQuotes_shouldSkipEmptyPair() {
    let line = r#"A = "" , B = "real""#;
    let segments = extractor::extract_segments(line);
    assert_eq!(segments, vec![" , B = "]);
}

/// Test that extraction is deterministic across repeated calls
#[test]
fn test_extract_segments_calledTwice_shouldReturnSameResult() {
    let line = r#"X = "alpha" Y = "beta""#;
    assert_eq!(extractor::extract_segments(line), extractor::extract_segments(line));
}

/// Test that whole-content extraction walks every line
#[test]
fn test_extract_from_content_withTemplate_shouldCollectAllSegments() {
    let content = "A_EN = {\n    B = \"one\",\n    -- C = \"skipped\",\n    D = \"two\",\n}\n";
    assert_eq!(extractor::extract_from_content(content), vec!["one", "two"]);
}

/// Test that rewriting a line without quotes returns it exactly
#[test]
fn test_rewrite_segments_withNoQuotes_shouldReturnInputExactly() {
    let line = "ItemName_EN = {";
    let rewritten = extractor::rewrite_segments(line, |_| "replaced".to_string());
    assert_eq!(rewritten, line);
}

/// Test that rewriting substitutes each segment and keeps the quotes
#[test]
fn test_rewrite_segments_withQuotes_shouldSubstituteInsideQuotes() {
    let line = r#"    A = "one", B = "two","#;
    let rewritten = extractor::rewrite_segments(line, |seg| seg.to_uppercase());
    assert_eq!(rewritten, r#"    A = "ONE", B = "TWO","#);
}
