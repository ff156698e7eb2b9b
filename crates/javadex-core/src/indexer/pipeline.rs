//! Indexing pipeline: read, hash, consult the cache, extract, persist.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::CacheConfig;
use crate::indexer::filesystem::{compute_content_hash, source_lines};
use crate::indexer::parser::{collect_diagnostics, package_name, parse_java};
use crate::indexer::symbols::{build_classes, ParseContext};
use crate::models::{IndexOptions, IndexResult, ParseDiagnostic, LANGUAGE_JAVA};
use crate::store::cache::{options_fingerprint, CacheStore};

/// Extract the symbol model of one in-memory source buffer. No caching.
pub fn extract_source(file_path: &str, source: &[u8], options: &IndexOptions) -> IndexResult {
    extract_with_hash(file_path, source, compute_content_hash(source), options)
}

/// `content_hash` must be the SHA-1 of `source`.
fn extract_with_hash(
    file_path: &str,
    source: &[u8],
    content_hash: String,
    options: &IndexOptions,
) -> IndexResult {
    let lines = source_lines(source);
    let mut result = IndexResult {
        file_path: file_path.to_string(),
        language: LANGUAGE_JAVA.to_string(),
        hash: content_hash,
        line_count: lines.len(),
        classes: Vec::new(),
        errors: Vec::new(),
    };

    let tree = match parse_java(source) {
        Ok(tree) => tree,
        Err(e) => {
            warn!("Failed to parse {}: {}", file_path, e);
            result.errors.push(ParseDiagnostic::error(e.to_string(), None));
            return result;
        }
    };
    let root = tree.root_node();
    let package = package_name(root, source);
    let ctx = ParseContext {
        source,
        lines: &lines,
        package_name: &package,
        options,
    };
    result.classes = build_classes(root, &ctx);
    result.errors = collect_diagnostics(root);
    result
}

/// Per-file indexing entry point backed by a [`CacheStore`].
#[derive(Debug, Clone)]
pub struct Indexer {
    cache: CacheStore,
}

impl Indexer {
    pub fn new(cache: CacheStore) -> Self {
        Self { cache }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(CacheStore::new(config))
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Index one file. Never fails: an unreadable file becomes a result
    /// carrying a single diagnostic and an empty hash.
    pub fn index(&self, path: &Path, options: &IndexOptions) -> IndexResult {
        let file_path = path.to_string_lossy().into_owned();
        let source = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to read {}: {}", file_path, e);
                return IndexResult::unreadable(&file_path, format!("Failed to read file: {e}"));
            }
        };

        let content_hash = compute_content_hash(&source);
        let options_key = options_fingerprint(options);
        if let Some(cached) = self.cache.load(&file_path, &content_hash, &options_key) {
            return cached;
        }

        let started = Instant::now();
        let result = extract_with_hash(&file_path, &source, content_hash, options);
        debug!(
            "Indexed {} ({} classes, {} diagnostics) in {} ms",
            file_path,
            result.classes.len(),
            result.errors.len(),
            started.elapsed().as_millis(),
        );

        if let Err(e) = self.cache.save(&file_path, &options_key, &result) {
            warn!("Failed to write cache entry for {}: {}", file_path, e);
        }
        result
    }
}
