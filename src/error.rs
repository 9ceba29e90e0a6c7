//! Error types for the search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
///
/// Scraping backends catch `Http` and `Parse` internally and degrade to
/// partial or empty results; only configuration problems (`UnknownEngine`,
/// `Config`) are ever surfaced to callers.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a response or selector.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// No backend registered under the requested identifier.
    #[error("Unknown search engine: '{0}'")]
    UnknownEngine(String),

    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}
