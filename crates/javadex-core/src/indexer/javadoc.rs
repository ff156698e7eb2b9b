//! Documentation-comment association.
//!
//! A declaration is documented when the nearest non-blank line above its
//! anchor closes a block comment whose opener is `/**`. An ordinary `/*`
//! opener found first means the comment is not documentation.

use crate::models::JavadocBlock;

/// Locate a `/** ... */` block ending immediately above `anchor_line`
/// (1-based), skipping blank lines. Returns `(start_line, end_line)`.
pub fn find_javadoc<S: AsRef<str>>(lines: &[S], anchor_line: usize) -> Option<(usize, usize)> {
    if anchor_line <= 1 {
        return None;
    }
    // 0-based index of the line directly above the anchor.
    let mut idx = (anchor_line - 2).min(lines.len().checked_sub(1)?);
    while lines[idx].as_ref().trim().is_empty() {
        idx = idx.checked_sub(1)?;
    }
    if !lines[idx].as_ref().contains("*/") {
        return None;
    }

    let end_line = idx + 1;
    for j in (0..=idx).rev() {
        let line = lines[j].as_ref();
        if line.contains("/**") {
            return Some((j + 1, end_line));
        }
        if line.contains("/*") {
            return None;
        }
    }
    None
}

/// Wrap [`find_javadoc`] into a `JavadocBlock`. A zero `max_preview_chars`
/// skips preview computation.
pub fn build_doc_block<S: AsRef<str>>(
    lines: &[S],
    anchor_line: usize,
    max_preview_chars: usize,
) -> JavadocBlock {
    let Some((start_line, end_line)) = find_javadoc(lines, anchor_line) else {
        return JavadocBlock::absent();
    };
    let preview = (max_preview_chars > 0).then(|| {
        let raw = lines[start_line - 1..end_line]
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        raw.chars().take(max_preview_chars).collect()
    });
    JavadocBlock {
        present: true,
        start_line: Some(start_line),
        end_line: Some(end_line),
        line_count: end_line - start_line + 1,
        preview,
    }
}
