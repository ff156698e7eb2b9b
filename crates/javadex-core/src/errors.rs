//! Error types for the javadex core library.

/// Top-level error enum for the javadex core library.
///
/// Unreadable source files and malformed syntax never surface here when
/// indexing; they are folded into `IndexResult::errors` instead.
#[derive(Debug, thiserror::Error)]
pub enum JavadexError {
    #[error("Invalid line range {start}-{end} (file has {line_count} lines)")]
    InvalidRange {
        start: usize,
        end: usize,
        line_count: usize,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type JavadexResult<T> = Result<T, JavadexError>;
