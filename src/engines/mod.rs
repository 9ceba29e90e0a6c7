//! Concrete search engine implementations.
//!
//! Scraped engines are defined as markup profiles consumed by
//! [`crate::ScrapeBackend`]; API engines implement
//! [`crate::SearchBackend`] directly.

// Scraped engines
pub mod baidu;
pub mod bing;

// API engines
mod serper;

pub use serper::Serper;
