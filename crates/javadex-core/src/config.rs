//! Cache-root configuration.
//!
//! The cache location is the only process-wide setting. It is resolved once
//! into a `CacheConfig` value and handed to `CacheStore::new`, so nothing in
//! the indexer reads the environment on its own.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the cache base directory.
pub const CACHE_ROOT_ENV: &str = "MCP_JAVA_INDEX_CACHE_ROOT";

/// Name of the hidden directory created under the cache base directory.
pub const CACHE_DIR_NAME: &str = ".mcp-java-index-cache";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Base directory; entries are written to `<root>/.mcp-java-index-cache/`.
    pub root: PathBuf,
}

impl CacheConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the base directory from `MCP_JAVA_INDEX_CACHE_ROOT`, falling
    /// back to the current working directory.
    pub fn from_env() -> Self {
        let override_root = std::env::var_os(CACHE_ROOT_ENV).filter(|v| !v.is_empty());
        let root = match override_root {
            Some(value) => PathBuf::from(value),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };
        Self { root }
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join(CACHE_DIR_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
