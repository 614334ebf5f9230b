//! Shared limits for the search crate.

// ── Query ───────────────────────────────────────────────────────

/// Maximum matches returned per indexed field for one query.
pub const MAX_RESULTS_PER_FIELD: usize = 5;

/// Maximum suggestions rendered for one query, after de-duplication.
pub const MAX_SUGGESTIONS: usize = 5;

// ── Cache ───────────────────────────────────────────────────────

/// Number of distinct query strings whose results are kept.
pub const QUERY_CACHE_CAPACITY: usize = 100;
