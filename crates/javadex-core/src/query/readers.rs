//! Point readers: bounded line ranges and documentation-comment lookup.

use std::path::Path;

use crate::errors::{JavadexError, JavadexResult};
use crate::indexer::filesystem::source_lines;
use crate::indexer::pipeline::Indexer;
use crate::indexer::symbols::find_symbol_by_id;
use crate::models::{DocOptions, DocResponse, IndexOptions, RangeOptions, RangeResponse};

pub const TRUNCATION_MARKER: &str = "... [truncated]";

/// Render lines `start..=end` (1-based) of `lines` within a character
/// budget. Each emitted line costs its length plus one newline; the first
/// line that does not fit is replaced by the truncation marker.
fn render_range(lines: &[String], start: usize, end: usize, options: &RangeOptions) -> String {
    let mut out: Vec<String> = Vec::with_capacity(end + 1 - start);
    let mut used = 0usize;
    for (offset, text) in lines[start - 1..end].iter().enumerate() {
        let line = if options.include_line_numbers {
            format!("{}: {}", start + offset, text)
        } else {
            text.clone()
        };
        let cost = line.chars().count() + 1;
        if used + cost > options.max_chars {
            out.push(TRUNCATION_MARKER.to_string());
            break;
        }
        used += cost;
        out.push(line);
    }
    out.join("\n")
}

pub fn read_range(path: &Path, start: usize, end: usize, options: &RangeOptions) -> JavadexResult<RangeResponse> {
    let source = std::fs::read(path)?;
    let lines = source_lines(&source);
    if start < 1 || end < start || end > lines.len() {
        return Err(JavadexError::InvalidRange {
            start,
            end,
            line_count: lines.len(),
        });
    }
    Ok(RangeResponse {
        file_path: path.to_string_lossy().into_owned(),
        start_line: start,
        end_line: end,
        content: render_range(&lines, start, end, options),
    })
}

/// Documentation text of the symbol addressed by `symbol_id`.
///
/// The file is indexed with default options, so identifiers produced under
/// any other option set still resolve as long as their line span is intact.
pub fn read_doc(indexer: &Indexer, path: &Path, symbol_id: &str, options: &DocOptions) -> JavadexResult<DocResponse> {
    let file_path = path.to_string_lossy().into_owned();
    let indexed = indexer.index(path, &IndexOptions::default());
    let Some(symbol) = find_symbol_by_id(&indexed, symbol_id) else {
        return Ok(DocResponse::not_found(&file_path, symbol_id));
    };
    let doc = symbol.javadoc();
    let (Some(start), Some(end)) = (doc.start_line, doc.end_line) else {
        return Ok(DocResponse::not_found(&file_path, symbol_id));
    };

    let range_options = RangeOptions {
        include_line_numbers: options.include_line_numbers,
        max_chars: options.max_chars,
    };
    let range = read_range(path, start, end, &range_options)?;
    Ok(DocResponse {
        file_path,
        symbol_id: symbol_id.to_string(),
        found: true,
        start_line: Some(start),
        end_line: Some(end),
        line_count: end - start + 1,
        content: range.content,
    })
}
