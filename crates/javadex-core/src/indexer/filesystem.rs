//! Filesystem helpers for indexing passes: content hashing, line splitting
//! and deterministic discovery of Java sources under a directory.

use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};
use walkdir::{DirEntry, WalkDir};

use crate::config::CACHE_DIR_NAME;

const JAVA_EXTENSION: &str = "java";

/// Directories never descended into, hidden or not.
const IMPLICIT_IGNORED_DIRS: &[&str] = &[".git", CACHE_DIR_NAME];

/// SHA-1 hex digest of raw bytes.
pub fn compute_content_hash(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Split raw source into lines, decoding lossily. This is the single line
/// model shared by extraction and the range readers.
pub fn source_lines(source: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(source)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn is_java_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == JAVA_EXTENSION)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || IMPLICIT_IGNORED_DIRS.contains(&name.as_ref())
}

/// Lazily yield `.java` files under `root` in file-name order.
///
/// The iterator is lazy so callers that stop early never touch the rest of
/// the tree. Unreadable entries are skipped.
pub fn iter_java_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_java_file(entry.path()))
        .map(DirEntry::into_path)
}
