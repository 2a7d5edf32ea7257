use anyhow::{Result, Context};
use encoding_rs::{Encoding, UTF_8};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Find every localization root below a search path: directories whose
    /// name matches the configured root directory name.
    pub fn find_localization_roots<P: AsRef<Path>>(search_path: P, root_dir_name: &str) -> Result<Vec<PathBuf>> {
        let mut roots = Vec::new();

        for entry in WalkDir::new(search_path.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            if entry.file_type().is_dir() && entry.file_name() == std::ffi::OsStr::new(root_dir_name) {
                roots.push(entry.path().to_path_buf());
            }
        }

        Ok(roots)
    }

    /// Find files with a specific extension in a directory (recursive)
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Write a string to a file in the given character encoding.
    ///
    /// Characters the encoding cannot represent are replaced rather than
    /// failing the write. An unrecognized charset label falls back to UTF-8.
    pub fn write_with_encoding<P: AsRef<Path>>(path: P, content: &str, charset: &str) -> Result<()> {
        let encoding = Encoding::for_label(charset.as_bytes()).unwrap_or_else(|| {
            warn!("Unknown charset label '{}', falling back to UTF-8", charset);
            UTF_8
        });

        let (bytes, _, _) = encoding.encode(content);

        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Depth of a path below its nearest ancestor directory named `marker`,
    /// in path components. None when no such ancestor exists.
    pub fn marker_depth(path: &Path, marker: &str) -> Option<usize> {
        let ancestor = Self::find_marker_ancestor(path, marker)?;
        path.strip_prefix(&ancestor)
            .ok()
            .map(|relative| relative.components().count())
    }

    /// Shorten a path for display by dropping everything up to and
    /// including the marker directory.
    pub fn display_path(path: &Path, marker: &str) -> String {
        match Self::find_marker_ancestor(path, marker) {
            Some(ancestor) => path
                .strip_prefix(&ancestor)
                .map(|relative| relative.display().to_string())
                .unwrap_or_else(|_| path.display().to_string()),
            None => path.display().to_string(),
        }
    }

    /// Find the nearest ancestor directory whose name matches `marker`
    fn find_marker_ancestor(path: &Path, marker: &str) -> Option<PathBuf> {
        path.ancestors()
            .skip(1)
            .find(|ancestor| {
                ancestor
                    .file_name()
                    .map(|name| name.to_string_lossy().eq_ignore_ascii_case(marker))
                    .unwrap_or(false)
            })
            .map(|ancestor| ancestor.to_path_buf())
    }
}
