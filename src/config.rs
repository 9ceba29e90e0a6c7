//! Process configuration for backend selection.

use serde::{Deserialize, Serialize};

use crate::query::DEFAULT_LIMIT;

/// Configuration the registry is built from.
///
/// Loaded explicitly at startup (deserialized or read from the
/// environment) and passed to [`crate::Registry::from_config`]; nothing
/// here is read from ambient global state after that. The Serper API key
/// is only ever sourced from configuration — never embedded in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Engine identifier to select (e.g. "baidu", "bing", "serper").
    #[serde(default = "default_engine")]
    pub engine: String,
    /// Default maximum number of results per query.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// API key for the Serper backend, if available.
    #[serde(default)]
    pub serper_api_key: Option<String>,
}

fn default_engine() -> String {
    "baidu".to_string()
}

fn default_max_results() -> usize {
    DEFAULT_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            max_results: default_max_results(),
            serper_api_key: None,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads configuration from `SEARCH_ENGINE`, `MAX_RESULTS` and
    /// `SERPER_API_KEY` environment variables; unset variables keep their
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(engine) = std::env::var("SEARCH_ENGINE") {
            if !engine.trim().is_empty() {
                config.engine = engine.trim().to_string();
            }
        }
        if let Ok(max_results) = std::env::var("MAX_RESULTS") {
            if let Ok(value) = max_results.trim().parse::<usize>() {
                config.max_results = value;
            }
        }
        if let Ok(key) = std::env::var("SERPER_API_KEY") {
            if !key.trim().is_empty() {
                config.serper_api_key = Some(key);
            }
        }
        config
    }

    /// Sets the engine identifier.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Sets the default result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the Serper API key.
    pub fn with_serper_api_key(mut self, key: impl Into<String>) -> Self {
        self.serper_api_key = Some(key.into());
        self
    }
}
