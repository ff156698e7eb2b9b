//! Cross-file symbol search.
//!
//! Walks a directory in a fixed order, indexes each Java file through the
//! regular pipeline (so the cache is warm for later point queries) and
//! filters the flattened symbols by name and kind.

use std::path::Path;

use tracing::debug;

use crate::indexer::filesystem::iter_java_files;
use crate::indexer::pipeline::Indexer;
use crate::indexer::symbols::{flatten_symbols, OwnedSymbol};
use crate::models::{FindOptions, FindResponse, IndexOptions, MatchKind, SymbolMatch};
use crate::query::guards::{clamp_limit, truncate_query, MAX_SEARCH_LIMIT};

struct NameMatcher {
    needle: String,
    case_sensitive: bool,
}

impl NameMatcher {
    fn new(query: &str, case_sensitive: bool) -> Self {
        let needle = if case_sensitive {
            query.to_string()
        } else {
            query.to_lowercase()
        };
        Self {
            needle,
            case_sensitive,
        }
    }

    fn matches(&self, name: &str) -> bool {
        if self.case_sensitive {
            name.contains(&self.needle)
        } else {
            name.to_lowercase().contains(&self.needle)
        }
    }
}

fn to_match(file_path: &str, owned: &OwnedSymbol) -> SymbolMatch {
    let (start_line, end_line) = owned.symbol.line_span();
    SymbolMatch {
        file_path: file_path.to_string(),
        symbol_id: owned.symbol.symbol_id().to_string(),
        kind: owned.symbol.kind().to_string(),
        qualified_name: owned.display_name(),
        start_line,
        end_line,
        signature_text: owned.symbol.signature_text().map(str::to_string),
    }
}

/// Find symbols under `root_dir` whose name contains `query`.
///
/// Stops as soon as `max_results` matches are collected; later files are
/// never opened.
pub fn find_symbol(indexer: &Indexer, root_dir: &Path, query: &str, options: &FindOptions) -> FindResponse {
    let query = truncate_query(query);
    let limit = clamp_limit(options.max_results, MAX_SEARCH_LIMIT);
    let matcher = NameMatcher::new(&query, options.case_sensitive);
    let index_options = IndexOptions::default();

    let mut results: Vec<SymbolMatch> = Vec::new();
    let mut files_scanned = 0usize;
    'files: for path in iter_java_files(root_dir) {
        files_scanned += 1;
        let indexed = indexer.index(&path, &index_options);
        for owned in flatten_symbols(&indexed) {
            if !accepts(options.match_kind, &matcher, &owned) {
                continue;
            }
            results.push(to_match(&indexed.file_path, &owned));
            if results.len() >= limit {
                break 'files;
            }
        }
    }

    debug!(
        "Symbol search for {:?} under {} matched {} symbols across {} files",
        query,
        root_dir.display(),
        results.len(),
        files_scanned,
    );

    FindResponse {
        root_dir: root_dir.to_string_lossy().into_owned(),
        query,
        results,
    }
}

fn accepts(kind: MatchKind, matcher: &NameMatcher, owned: &OwnedSymbol) -> bool {
    kind.accepts(owned.symbol.kind()) && matcher.matches(owned.symbol.name())
}
