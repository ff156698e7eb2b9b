//! Content-addressed cache of extraction results.
//!
//! One JSON file per (file path, options fingerprint) pair. An entry is only
//! served when its stored `hash` matches the current content hash; anything
//! else, including unreadable or corrupt entries, is a miss.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use tracing::debug;

use crate::config::CacheConfig;
use crate::errors::JavadexResult;
use crate::indexer::filesystem::compute_content_hash;
use crate::models::{IndexOptions, IndexResult};

/// SHA-1 over the canonical (key-sorted, compact) JSON form of `options`.
pub fn options_fingerprint(options: &IndexOptions) -> String {
    // serde_json's default map is key-ordered, so the text is canonical.
    let canonical = serde_json::to_value(options)
        .map(|value| value.to_string())
        .unwrap_or_default();
    compute_content_hash(canonical.as_bytes())
}

#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            dir: config.cache_dir(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the entry for `file_path` under `options_key`.
    pub fn entry_path(&self, file_path: &str, options_key: &str) -> PathBuf {
        let path_key = compute_content_hash(file_path.as_bytes());
        let name = if options_key.is_empty() {
            format!("{path_key}.json")
        } else {
            format!("{path_key}-{options_key}.json")
        };
        self.dir.join(name)
    }

    pub fn load(&self, file_path: &str, content_hash: &str, options_key: &str) -> Option<IndexResult> {
        let entry = self.entry_path(file_path, options_key);
        let bytes = match std::fs::read(&entry) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Cache miss for {}: {}", file_path, e);
                return None;
            }
        };
        let cached: IndexResult = match serde_json::from_slice(&bytes) {
            Ok(result) => result,
            Err(e) => {
                debug!("Ignoring corrupt cache entry {}: {}", entry.display(), e);
                return None;
            }
        };
        if cached.hash != content_hash {
            debug!("Stale cache entry for {}; content hash changed", file_path);
            return None;
        }
        debug!("Cache hit for {}", file_path);
        Some(cached)
    }

    /// Write `result`, replacing any existing entry.
    pub fn save(&self, file_path: &str, options_key: &str, result: &IndexResult) -> JavadexResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let payload = to_ascii_pretty_json(result)?;
        std::fs::write(self.entry_path(file_path, options_key), payload)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ASCII-escaped pretty printing
// ---------------------------------------------------------------------------

/// Two-space indented JSON with every non-ASCII character written as a
/// `\uXXXX` escape (surrogate pairs above the BMP).
pub fn to_ascii_pretty_json<T: Serialize>(value: &T) -> JavadexResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, AsciiFormatter::new());
    value.serialize(&mut ser)?;
    Ok(out)
}

struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassEntry, ClassKind, JavadocBlock};

    fn sample(hash: &str) -> IndexResult {
        IndexResult {
            file_path: "/src/Café.java".to_string(),
            language: "java".to_string(),
            hash: hash.to_string(),
            line_count: 1,
            classes: vec![ClassEntry {
                symbol_id: "Class#Café|start:1|end:1".to_string(),
                kind: ClassKind::Class,
                name: "Café".to_string(),
                qualified_name: "Café".to_string(),
                modifiers: vec![],
                annotations: vec![],
                extends: None,
                implements: vec![],
                start_line: 1,
                end_line: 1,
                javadoc: JavadocBlock::absent(),
                signature_text: "class Café".to_string(),
                fields: vec![],
                constructors: vec![],
                methods: vec![],
                inner_classes: vec![],
            }],
            errors: vec![],
        }
    }

    #[test]
    fn test_fingerprint_tracks_options() {
        let base = IndexOptions::default();
        let changed = IndexOptions {
            include_fields: false,
            ..IndexOptions::default()
        };
        assert_eq!(options_fingerprint(&base), options_fingerprint(&base.clone()));
        assert_ne!(options_fingerprint(&base), options_fingerprint(&changed));
        assert_eq!(options_fingerprint(&base).len(), 40);
    }

    #[test]
    fn test_json_is_ascii_and_indented() {
        let text = String::from_utf8(to_ascii_pretty_json(&sample("h")).unwrap()).unwrap();
        assert!(text.is_ascii());
        assert!(text.contains("Caf\\u00e9"));
        assert!(text.contains("\n  \"filePath\": "));
        let back: IndexResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample("h"));
    }

    #[test]
    fn test_astral_chars_use_surrogate_pairs() {
        let text = String::from_utf8(to_ascii_pretty_json(&"\u{1F600}").unwrap()).unwrap();
        assert_eq!(text, "\"\\ud83d\\ude00\"");
    }

    #[test]
    fn test_load_requires_matching_hash() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(&CacheConfig::new(dir.path()));
        let key = options_fingerprint(&IndexOptions::default());
        store.save("/src/A.java", &key, &sample("abc")).unwrap();

        assert_eq!(store.load("/src/A.java", "abc", &key), Some(sample("abc")));
        assert!(store.load("/src/A.java", "other", &key).is_none());
        assert!(store.load("/src/A.java", "abc", "different-options").is_none());
        assert!(store.load("/src/B.java", "abc", &key).is_none());
    }

    #[test]
    fn test_corrupt_entry_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(&CacheConfig::new(dir.path()));
        std::fs::create_dir_all(store.dir()).unwrap();
        std::fs::write(store.entry_path("/src/A.java", "k"), b"{not json").unwrap();
        assert!(store.load("/src/A.java", "abc", "k").is_none());
    }
}
