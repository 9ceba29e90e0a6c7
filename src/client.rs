//! HTTP client for scraping backends.

use std::time::Duration;

use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

use crate::fetcher::PageFetcher;
use crate::{Result, SearchError};

/// Per-request timeout. Bounds worst-case latency of a single page fetch;
/// the whole-call ceiling lives in `BackendConfig::timeout`.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8";

/// A page fetcher that issues plain GET requests with browser-like headers.
///
/// Search engines serve degraded or blocked pages to obvious bots, so the
/// client presents a common desktop browser: a Chrome user agent, an HTML
/// `Accept` header, the engine's own host as `Referer`, and the engine's
/// expected `Accept-Language`.
///
/// Response bodies are decoded from their declared charset; pages that
/// declare nothing (or lie) fall back to BOM and `<meta charset>`
/// detection before assuming UTF-8.
pub struct ScrapeClient {
    client: Client,
}

impl ScrapeClient {
    /// Creates a client presenting the given referer and language.
    pub fn new(referer: &str, accept_language: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            HeaderValue::from_str(accept_language)
                .map_err(|e| SearchError::Config(format!("invalid Accept-Language: {e}")))?,
        );
        headers.insert(
            reqwest::header::REFERER,
            HeaderValue::from_str(referer)
                .map_err(|e| SearchError::Config(format!("invalid Referer: {e}")))?,
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    /// Creates a `ScrapeClient` from a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for ScrapeClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;
        Ok(decode_body(&bytes, content_type.as_deref()))
    }
}

/// Decodes a response body: declared charset, then BOM, then `<meta>`
/// sniffing, then UTF-8.
fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| Encoding::for_bom(bytes).map(|(encoding, _)| encoding))
        .or_else(|| sniff_meta_charset(bytes))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Extracts the charset label from a Content-Type header value.
fn charset_label(content_type: &str) -> Option<String> {
    let lower = content_type.to_ascii_lowercase();
    let start = lower.find("charset=")? + "charset=".len();
    let label = lower[start..]
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(['"', '\''])
        .to_string();
    (!label.is_empty()).then_some(label)
}

/// Looks for a `charset=` declaration in the first kilobyte of the body.
fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(1024)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();
    let start = head.find("charset=")? + "charset=".len();
    let label: String = head[start..]
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    Encoding::for_label(label.as_bytes())
}
