//! Call-logging wrapper for search backends.

use async_trait::async_trait;
use tracing::info;

use crate::backend::{BackendConfig, SearchBackend};
use crate::query::SearchQuery;
use crate::record::ResultRecord;

/// Wraps any backend to log each invocation and its result count.
///
/// Purely observational: queries and results pass through unchanged.
pub struct Logged<B> {
    inner: B,
}

impl<B: SearchBackend> Logged<B> {
    /// Wraps a backend.
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B: SearchBackend> SearchBackend for Logged<B> {
    fn config(&self) -> &BackendConfig {
        self.inner.config()
    }

    async fn search(&self, query: &SearchQuery) -> Vec<ResultRecord> {
        info!(
            engine = %self.inner.name(),
            keyword = %query.keyword,
            limit = query.limit,
            "running search"
        );
        let results = self.inner.search(query).await;
        info!(
            engine = %self.inner.name(),
            count = results.len(),
            "search finished"
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticBackend {
        config: BackendConfig,
        records: Vec<ResultRecord>,
    }

    #[async_trait]
    impl SearchBackend for StaticBackend {
        fn config(&self) -> &BackendConfig {
            &self.config
        }

        async fn search(&self, _query: &SearchQuery) -> Vec<ResultRecord> {
            self.records.clone()
        }
    }

    fn make_backend() -> StaticBackend {
        StaticBackend {
            config: BackendConfig {
                name: "Static".to_string(),
                shortcut: "static".to_string(),
                timeout: 30,
            },
            records: vec![ResultRecord::new(
                "title",
                "https://example.com/",
                "content",
            )],
        }
    }

    #[test]
    fn test_logged_exposes_inner_config() {
        let logged = Logged::new(make_backend());
        assert_eq!(logged.name(), "Static");
        assert_eq!(logged.shortcut(), "static");
    }

    #[tokio::test]
    async fn test_logged_passes_results_through_unchanged() {
        let inner = make_backend();
        let expected = inner.records.clone();
        let logged = Logged::new(inner);

        let results = logged.search(&SearchQuery::new("anything")).await;

        assert_eq!(results, expected);
    }

    #[tokio::test]
    async fn test_logged_empty_results_stay_empty() {
        let logged = Logged::new(StaticBackend {
            config: BackendConfig::default(),
            records: vec![],
        });
        let results = logged.search(&SearchQuery::new("x")).await;
        assert!(results.is_empty());
    }
}
