/*!
 * Tests for file utility functions
 */

use std::fs;
use anyhow::Result;
use modloc::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.is_dir());

    Ok(())
}

/// Test that localization roots are found by directory name, recursively
#[test]
fn test_find_localization_roots_withNestedRoots_shouldFindAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root_a = temp_dir.path().join("mods").join("A").join("Translate");
    let root_b = temp_dir.path().join("mods").join("B").join("media").join("Translate");
    fs::create_dir_all(&root_a)?;
    fs::create_dir_all(&root_b)?;
    fs::create_dir_all(temp_dir.path().join("mods").join("C").join("Sounds"))?;

    let mut roots = FileManager::find_localization_roots(temp_dir.path(), "Translate")?;
    roots.sort();

    assert_eq!(roots, vec![root_a, root_b]);

    Ok(())
}

/// Test that find_files matches the extension case-insensitively and recursively
#[test]
fn test_find_files_withMixedContent_shouldReturnOnlyMatching() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.txt", "a")?;
    common::create_test_file(temp_dir.path(), "sub/b.TXT", "b")?;
    common::create_test_file(temp_dir.path(), "c.lua", "c")?;

    let files = FileManager::find_files(temp_dir.path(), "txt")?;

    assert_eq!(files.len(), 2);

    Ok(())
}

/// Test marker depth computation relative to the nearest marker ancestor
#[test]
fn test_marker_depth_withMarkerAncestor_shouldCountComponents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir
        .path()
        .join("mods")
        .join("MyMod")
        .join("media")
        .join("lua")
        .join("shared")
        .join("Translate");
    fs::create_dir_all(&root)?;

    assert_eq!(FileManager::marker_depth(&root, "mods"), Some(5));

    Ok(())
}

/// Test that marker depth is None without a marker ancestor
#[test]
fn test_marker_depth_withoutMarkerAncestor_shouldReturnNone() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().join("standalone").join("Translate");
    fs::create_dir_all(&root)?;

    assert_eq!(FileManager::marker_depth(&root, "mods"), None);

    Ok(())
}

/// Test that display_path drops everything up to the marker directory
#[test]
fn test_display_path_withMarker_shouldShortenPath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().join("mods").join("MyMod").join("Translate");
    fs::create_dir_all(&root)?;

    let display = FileManager::display_path(&root, "mods");
    assert_eq!(
        display,
        std::path::Path::new("MyMod").join("Translate").display().to_string()
    );

    Ok(())
}

/// Test that UTF-8 content survives an encoded write unchanged
#[test]
fn test_write_with_encoding_withUtf8_shouldRoundtrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out.txt");

    FileManager::write_with_encoding(&path, "Tschüss, Огонь", "UTF-8")?;

    assert_eq!(fs::read_to_string(&path)?, "Tschüss, Огонь");

    Ok(())
}

/// Test that a legacy charset write replaces unencodable characters
/// instead of failing
#[test]
fn test_write_with_encoding_withUnencodableChar_shouldReplaceNotFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out.txt");

    // Cyrillic text cannot be represented in windows-1252
    FileManager::write_with_encoding(&path, "Огонь", "Cp1252")?;

    let bytes = fs::read(&path)?;
    assert!(!bytes.is_empty());
    // Every byte is valid windows-1252 output, no error was raised
    let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
    assert!(!decoded.contains('О'));

    Ok(())
}

/// Test that an unknown charset label falls back to UTF-8
#[test]
fn test_write_with_encoding_withUnknownCharset_shouldFallBackToUtf8() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out.txt");

    FileManager::write_with_encoding(&path, "Fallback text", "no-such-charset")?;

    assert_eq!(fs::read_to_string(&path)?, "Fallback text");

    Ok(())
}
