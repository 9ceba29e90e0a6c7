//! Search backend trait and configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{ResultRecord, SearchQuery};

/// Configuration for a search backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Display name of the backend.
    pub name: String,
    /// Short identifier used for registry lookup (e.g. "baidu").
    pub shortcut: String,
    /// Whole-call timeout in seconds a caller may enforce around `search`.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            shortcut: String::new(),
            timeout: 30,
        }
    }
}

/// Trait for implementing search backends.
///
/// A backend is constructed once at startup and reused for all queries; it
/// must hold no mutable state across calls, so concurrent `search` calls
/// are safe.
///
/// `search` never fails: network and parsing problems are caught inside
/// the backend, logged, and degraded to a partial or empty result. Callers
/// must treat an empty vector as a valid outcome. The only failures a
/// consumer ever sees are configuration errors raised while constructing
/// or selecting backends.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Returns the backend configuration.
    fn config(&self) -> &BackendConfig;

    /// Performs a search, returning at most `query.limit` records.
    async fn search(&self, query: &SearchQuery) -> Vec<ResultRecord>;

    /// Returns the backend name.
    fn name(&self) -> &str {
        &self.config().name
    }

    /// Returns the backend shortcut.
    fn shortcut(&self) -> &str {
        &self.config().shortcut
    }
}
