//! # websearch
//!
//! A pluggable web search library normalizing several backends — HTML
//! scraping engines and an API-backed engine — into one uniform result
//! contract, selected at runtime by configuration.
//!
//! Scraping backends fetch server-rendered result pages with browser-like
//! headers, parse them with per-engine markup profiles, and follow "next
//! page" links until enough results are gathered or the source runs dry.
//! Failures degrade instead of propagating: a malformed result block is
//! skipped, a dead page ends pagination with partial results, and a
//! `search` call never fails for scraping-related reasons.
//!
//! ## Example
//!
//! ```rust,no_run
//! use websearch::{Registry, SearchConfig, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SearchConfig::from_env();
//!     let registry = Registry::from_config(&config)?;
//!     let backend = registry.select(&config.engine)?;
//!
//!     let query = SearchQuery::new("rust programming").with_limit(config.max_results);
//!     for record in backend.search(&query).await {
//!         println!("{}: {}", record.title, record.link);
//!     }
//!     Ok(())
//! }
//! ```

mod backend;
mod client;
mod config;
mod error;
mod fetcher;
mod logged;
mod parser;
mod profile;
mod query;
mod record;
mod registry;
mod scrape;

pub mod engines;

pub use backend::{BackendConfig, SearchBackend};
pub use client::ScrapeClient;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use fetcher::PageFetcher;
pub use logged::Logged;
pub use parser::{PageParser, ParseSkip};
pub use profile::{BlockMarker, ScrapeProfile, StrategySpec};
pub use query::{SearchQuery, DEFAULT_LIMIT};
pub use record::{PageResult, ResultRecord, CONTENT_MAX_LEN};
pub use registry::Registry;
pub use scrape::{ScrapeBackend, MAX_PAGES};
