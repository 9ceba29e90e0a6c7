//! Backend registry: engine identifier to constructed backend.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::backend::SearchBackend;
use crate::config::SearchConfig;
use crate::engines;
use crate::logged::Logged;
use crate::scrape::ScrapeBackend;
use crate::{Result, SearchError};

/// Maps engine identifiers to constructed backends.
///
/// Built once at startup from an explicit [`SearchConfig`]; backends are
/// constructed eagerly so configuration mistakes surface here, before any
/// query runs. An unrecognized identifier is the one failure this crate
/// refuses to swallow — it means a deployment error, not a flaky source.
pub struct Registry {
    backends: HashMap<String, Arc<dyn SearchBackend>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Builds the registry of known backends from configuration.
    ///
    /// Every backend is wrapped in [`Logged`]. The Serper backend is only
    /// registered when an API key is configured; selecting it without one
    /// is a configuration error.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let mut registry = Self::new();

        registry.register(Logged::new(ScrapeBackend::new(engines::baidu::profile())?));
        registry.register(Logged::new(ScrapeBackend::new(engines::bing::profile())?));

        if let Some(key) = &config.serper_api_key {
            registry.register(Logged::new(engines::Serper::new(key.clone())?));
        } else if config.engine == "serper" {
            return Err(SearchError::Config(
                "engine 'serper' selected but no Serper API key is configured".to_string(),
            ));
        }

        debug!(engines = ?registry.engines(), "registry built");
        Ok(registry)
    }

    /// Registers a backend under its shortcut.
    pub fn register(&mut self, backend: impl SearchBackend + 'static) {
        let shortcut = backend.shortcut().to_string();
        self.backends.insert(shortcut, Arc::new(backend));
    }

    /// Returns the backend registered under the given identifier.
    pub fn select(&self, engine: &str) -> Result<Arc<dyn SearchBackend>> {
        self.backends
            .get(engine)
            .cloned()
            .ok_or_else(|| SearchError::UnknownEngine(engine.to_string()))
    }

    /// Returns the registered engine identifiers, sorted.
    pub fn engines(&self) -> Vec<&str> {
        let mut engines: Vec<&str> = self.backends.keys().map(String::as_str).collect();
        engines.sort_unstable();
        engines
    }

    /// Returns the number of registered backends.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
