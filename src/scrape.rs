//! Scraping search backend: pagination driver over fetch + parse.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::backend::{BackendConfig, SearchBackend};
use crate::client::ScrapeClient;
use crate::fetcher::PageFetcher;
use crate::parser::PageParser;
use crate::profile::ScrapeProfile;
use crate::query::SearchQuery;
use crate::record::ResultRecord;
use crate::Result;

/// Hard ceiling on pages fetched per query. Guards against sources that
/// keep advertising a next page while yielding nothing countable.
pub const MAX_PAGES: usize = 20;

/// A search backend that scrapes an engine's server-rendered result pages.
///
/// Pages are fetched strictly one at a time: each next-page URL comes out
/// of the previous page's pagination controls. The backend holds no
/// mutable state, so concurrent queries against one instance are safe.
pub struct ScrapeBackend {
    config: BackendConfig,
    profile: ScrapeProfile,
    parser: PageParser,
    fetcher: Arc<dyn PageFetcher>,
}

impl ScrapeBackend {
    /// Creates a backend for the given engine profile with its own HTTP
    /// client.
    pub fn new(profile: ScrapeProfile) -> Result<Self> {
        let client = ScrapeClient::new(profile.host, profile.accept_language)?;
        Self::with_fetcher(profile, Arc::new(client))
    }

    /// Creates a backend using a custom page fetcher.
    pub fn with_fetcher(profile: ScrapeProfile, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let parser = PageParser::new(&profile)?;
        Ok(Self {
            config: BackendConfig {
                name: profile.name.to_string(),
                shortcut: profile.shortcut.to_string(),
                timeout: 30,
            },
            profile,
            parser,
            fetcher,
        })
    }
}

#[async_trait]
impl SearchBackend for ScrapeBackend {
    fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Fetches and parses result pages until `query.limit` records are
    /// accumulated or the source is exhausted.
    ///
    /// Any fetch failure ends pagination and returns what was gathered so
    /// far; partial results beat total failure.
    async fn search(&self, query: &SearchQuery) -> Vec<ResultRecord> {
        let keyword = query.keyword.trim();
        if keyword.is_empty() || query.limit == 0 {
            return Vec::new();
        }

        let mut accumulated: Vec<ResultRecord> = Vec::new();
        let mut next_url = Some(self.profile.search_url_for(keyword));
        let mut page = 0usize;

        while let Some(url) = next_url {
            if accumulated.len() >= query.limit {
                break;
            }
            if page >= MAX_PAGES {
                warn!(
                    engine = %self.config.name,
                    "page ceiling of {MAX_PAGES} reached, stopping pagination"
                );
                break;
            }
            page += 1;

            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!(
                        engine = %self.config.name,
                        page,
                        error = %e,
                        "page fetch failed, returning partial results"
                    );
                    break;
                }
            };

            let parsed = self.parser.parse(&html);
            if query.debug {
                debug!(
                    engine = %self.config.name,
                    page,
                    records = parsed.records.len(),
                    total = accumulated.len() + parsed.records.len(),
                    "parsed results page"
                );
            }

            accumulated.extend(parsed.records);
            next_url = parsed.next_page;
        }

        accumulated.truncate(query.limit);
        accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BlockMarker, StrategySpec};
    use crate::SearchError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PROFILE: ScrapeProfile = ScrapeProfile {
        name: "Test",
        shortcut: "test",
        host: "https://search.example.com",
        search_url: "https://search.example.com/s?q=",
        accept_language: "en-US,en;q=0.9",
        container: "#results",
        block_class: "result",
        strategies: &[StrategySpec {
            name: "default",
            marker: BlockMarker::Any,
            title: "h3",
            link: "h3 a",
            snippet: &["p"],
        }],
        next_page: "a.n",
        prev_markers: &["Previous"],
    };

    /// Serves canned pages by URL and counts fetches.
    struct FakeFetcher {
        pages: HashMap<String, String>,
        fetches: AtomicUsize,
    }

    impl FakeFetcher {
        fn new(pages: Vec<(&str, String)>) -> Self {
            Self {
                pages: pages
                    .into_iter()
                    .map(|(url, html)| (url.to_string(), html))
                    .collect(),
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PageFetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| SearchError::Parse(format!("no canned page for {url}")))
        }
    }

    /// Always serves the same page, whatever the URL.
    struct LoopFetcher {
        html: String,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl PageFetcher for LoopFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.html.clone())
        }
    }

    /// Builds a results page with `count` records starting at `start`,
    /// optionally linking to a next page.
    fn page_html(start: usize, count: usize, next_href: Option<&str>) -> String {
        let mut html = String::from(r#"<html><body><div id="results">"#);
        for i in start..start + count {
            html.push_str(&format!(
                r#"<div class="result"><h3><a href="https://example.com/{i}">Result {i}</a></h3><p>snippet {i}</p></div>"#
            ));
        }
        html.push_str("</div>");
        if let Some(href) = next_href {
            html.push_str(&format!(r#"<a class="n" href="{href}">Next</a>"#));
        }
        html.push_str("</body></html>");
        html
    }

    fn backend_with(fetcher: Arc<FakeFetcher>) -> ScrapeBackend {
        ScrapeBackend::with_fetcher(PROFILE, fetcher).unwrap()
    }

    #[test]
    fn test_backend_config_from_profile() {
        let fetcher = Arc::new(FakeFetcher::new(vec![]));
        let backend = backend_with(fetcher);
        assert_eq!(backend.name(), "Test");
        assert_eq!(backend.shortcut(), "test");
    }

    #[test]
    fn test_backend_rejects_broken_profile() {
        let profile = ScrapeProfile {
            container: "div[[",
            ..PROFILE
        };
        let fetcher = Arc::new(FakeFetcher::new(vec![]));
        assert!(ScrapeBackend::with_fetcher(profile, fetcher).is_err());
    }

    #[tokio::test]
    async fn test_search_single_page_truncates_to_limit() {
        // 10 results on page one, limit 5: exactly 5 back, one fetch.
        let fetcher = Arc::new(FakeFetcher::new(vec![(
            "https://search.example.com/s?q=python",
            page_html(0, 10, Some("/s?q=python&amp;pn=10")),
        )]));
        let backend = backend_with(fetcher.clone());

        let results = backend.search(&SearchQuery::new("python").with_limit(5)).await;

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].title, "Result 0");
        assert_eq!(results[4].title, "Result 4");
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_search_follows_pagination_until_exhausted() {
        // Pages of 10 then 3 with no further link; limit 15 yields 13.
        let fetcher = Arc::new(FakeFetcher::new(vec![
            (
                "https://search.example.com/s?q=python",
                page_html(0, 10, Some("/s?q=python&amp;pn=10")),
            ),
            (
                "https://search.example.com/s?q=python&pn=10",
                page_html(10, 3, None),
            ),
        ]));
        let backend = backend_with(fetcher.clone());

        let results = backend.search(&SearchQuery::new("python").with_limit(15)).await;

        assert_eq!(results.len(), 13);
        assert_eq!(results[12].title, "Result 12");
        assert_eq!(fetcher.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_search_stops_at_exact_limit_without_extra_fetch() {
        let fetcher = Arc::new(FakeFetcher::new(vec![(
            "https://search.example.com/s?q=rust",
            page_html(0, 10, Some("/s?q=rust&amp;pn=10")),
        )]));
        let backend = backend_with(fetcher.clone());

        let results = backend.search(&SearchQuery::new("rust").with_limit(10)).await;

        assert_eq!(results.len(), 10);
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_search_fetch_failure_returns_partial_results() {
        // Second page 404s; the first page's records still come back.
        let fetcher = Arc::new(FakeFetcher::new(vec![(
            "https://search.example.com/s?q=rust",
            page_html(0, 10, Some("/s?q=rust&amp;pn=10")),
        )]));
        let backend = backend_with(fetcher.clone());

        let results = backend.search(&SearchQuery::new("rust").with_limit(15)).await;

        assert_eq!(results.len(), 10);
        assert_eq!(fetcher.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_search_first_fetch_failure_returns_empty() {
        let fetcher = Arc::new(FakeFetcher::new(vec![]));
        let backend = backend_with(fetcher.clone());

        let results = backend.search(&SearchQuery::new("rust").with_limit(5)).await;

        assert!(results.is_empty());
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_search_empty_keyword_no_fetch() {
        let fetcher = Arc::new(FakeFetcher::new(vec![]));
        let backend = backend_with(fetcher.clone());

        let results = backend.search(&SearchQuery::new("").with_limit(5)).await;

        assert!(results.is_empty());
        assert_eq!(fetcher.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_search_whitespace_keyword_no_fetch() {
        let fetcher = Arc::new(FakeFetcher::new(vec![]));
        let backend = backend_with(fetcher.clone());

        let results = backend.search(&SearchQuery::new("  \t ").with_limit(5)).await;

        assert!(results.is_empty());
        assert_eq!(fetcher.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_search_zero_limit_no_fetch() {
        let fetcher = Arc::new(FakeFetcher::new(vec![]));
        let backend = backend_with(fetcher.clone());

        let results = backend.search(&SearchQuery::new("rust").with_limit(0)).await;

        assert!(results.is_empty());
        assert_eq!(fetcher.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_search_page_ceiling_bounds_pathological_source() {
        // Every page is empty but advertises a next page; pagination must
        // stop at the ceiling instead of looping forever.
        let fetcher = Arc::new(LoopFetcher {
            html: page_html(0, 0, Some("/s?q=rust&amp;pn=10")),
            fetches: AtomicUsize::new(0),
        });
        let backend = ScrapeBackend::with_fetcher(PROFILE, fetcher.clone()).unwrap();

        let results = backend.search(&SearchQuery::new("rust").with_limit(5)).await;

        assert!(results.is_empty());
        assert_eq!(fetcher.fetches.load(Ordering::SeqCst), MAX_PAGES);
    }

    #[tokio::test]
    async fn test_search_is_idempotent_against_stable_pages() {
        let fetcher = Arc::new(FakeFetcher::new(vec![(
            "https://search.example.com/s?q=rust",
            page_html(0, 6, None),
        )]));
        let backend = backend_with(fetcher);

        let query = SearchQuery::new("rust").with_limit(10);
        let first = backend.search(&query).await;
        let second = backend.search(&query).await;

        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[tokio::test]
    async fn test_search_records_are_valid() {
        let fetcher = Arc::new(FakeFetcher::new(vec![(
            "https://search.example.com/s?q=rust",
            page_html(0, 4, None),
        )]));
        let backend = backend_with(fetcher);

        let results = backend.search(&SearchQuery::new("rust").with_limit(10)).await;

        assert!(results.iter().all(ResultRecord::is_valid));
    }
}
