//! Shared guardrails for query payload bounds.

pub const MAX_QUERY_LENGTH: usize = 512;
pub const MAX_SEARCH_LIMIT: usize = 1000;

pub fn clamp_int(value: usize, minimum: usize, maximum: usize) -> usize {
    value.max(minimum).min(maximum)
}

pub fn clamp_limit(value: usize, maximum: usize) -> usize {
    clamp_int(value, 1, maximum)
}

/// Trim and cut the query to at most `MAX_QUERY_LENGTH` characters.
pub fn truncate_query(query: &str) -> String {
    query.trim().chars().take(MAX_QUERY_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_bounds() {
        assert_eq!(clamp_limit(0, MAX_SEARCH_LIMIT), 1);
        assert_eq!(clamp_limit(50, MAX_SEARCH_LIMIT), 50);
        assert_eq!(clamp_limit(5000, MAX_SEARCH_LIMIT), MAX_SEARCH_LIMIT);
    }

    #[test]
    fn test_truncate_query_is_char_safe() {
        let long = "é".repeat(MAX_QUERY_LENGTH + 10);
        let cut = truncate_query(&long);
        assert_eq!(cut.chars().count(), MAX_QUERY_LENGTH);
        assert_eq!(truncate_query("  doWork "), "doWork");
    }
}
