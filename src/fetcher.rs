//! Page fetcher abstraction for retrieving HTML content.

use async_trait::async_trait;

use crate::Result;

/// Trait for fetching the full HTML content of a URL.
///
/// All configuration (headers, timeouts) is set at construction time;
/// `fetch` is a simple URL-in, HTML-out interface. The pagination driver
/// treats a fetch error as "no further pages".
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the decoded HTML content of the given URL.
    async fn fetch(&self, url: &str) -> Result<String>;
}
