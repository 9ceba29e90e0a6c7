//! Search query representation.

use serde::{Deserialize, Serialize};

/// Default number of results to return when none is requested.
pub const DEFAULT_LIMIT: usize = 10;

/// A search query with all parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search keyword. May be empty, in which case backends return an
    /// empty result set rather than failing.
    pub keyword: String,
    /// Maximum number of records to return.
    pub limit: usize,
    /// Enables per-page progress logging during pagination.
    pub debug: bool,
}

impl SearchQuery {
    /// Creates a new search query with the given keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            limit: DEFAULT_LIMIT,
            debug: false,
        }
    }

    /// Sets the maximum number of results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enables or disables pagination progress logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
