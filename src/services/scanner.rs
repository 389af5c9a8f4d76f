use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MARKDOWN_EXT: &str = "md";

/// Discover markdown files under `root`, honoring the exclusion patterns.
///
/// A missing root is a legitimate outcome, not an error: callers report zero
/// matches. Exclusion is plain substring containment against the base
/// filename. The result is sorted so every consumer is deterministic.
pub fn scan(root: &Path, excluded_patterns: &[String]) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!("doc root {} does not exist; no files scanned", root.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext == MARKDOWN_EXT)
                .unwrap_or(false)
        })
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            !excluded_patterns.iter().any(|p| name.contains(p.as_str()))
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}
